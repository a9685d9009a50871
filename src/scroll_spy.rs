use crate::content::NavItem;

/// Finds the section the viewport is currently in.
///
/// The section list is read-only and ordered top to bottom. Offsets are looked
/// up on every call.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    sections: &'static [NavItem],
    offset: f64,
}

impl ScrollSpy {
    pub fn new(sections: &'static [NavItem], offset: f64) -> Self {
        Self { sections, offset }
    }

    pub fn sections(&self) -> &'static [NavItem] {
        self.sections
    }

    /// Returns the id of the last section whose top is at or above
    /// `scroll_y + offset`. `top_of` yields `None` for sections missing from the page.
    pub fn active_section<F>(&self, scroll_y: f64, top_of: F) -> Option<&'static str>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let position = scroll_y + self.offset;
        self.sections
            .iter()
            .rev()
            .find(|item| top_of(item.id).is_some_and(|top| top <= position))
            .map(|item| item.id)
    }
}
