use crate::scroll_spy::ScrollSpy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub active_section: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_section: "home".to_string(),
        }
    }
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }

    /// Asks `scroll_into_view` to bring section `id` on screen, then closes the
    /// mobile menu whether or not the section was found.
    pub fn scroll_to_section<F>(&mut self, id: &str, scroll_into_view: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        let found = scroll_into_view(id);
        if !found {
            log::debug!("no section with id {id}");
        }
        self.menu_open = false;
        found
    }

    /// Applies a scroll event. Returns true if the active section changed; an
    /// unmatched position leaves the previous section in place.
    pub fn apply_scroll<F>(&mut self, spy: &ScrollSpy, scroll_y: f64, top_of: F) -> bool
    where
        F: Fn(&str) -> Option<f64>,
    {
        match spy.active_section(scroll_y, top_of) {
            Some(id) if id != self.active_section => {
                log::debug!("active section: {id}");
                self.active_section = id.to_string();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    fn layout(id: &str) -> Option<f64> {
        NAV_ITEMS
            .iter()
            .position(|item| item.id == id)
            .map(|i| i as f64 * 1000.0)
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert!(!state.menu_open);
        assert!(state.is_active("home"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);

        let mut open = NavState {
            menu_open: true,
            ..NavState::default()
        };
        open.toggle_menu();
        open.toggle_menu();
        assert!(open.menu_open);
    }

    #[test]
    fn test_scroll_to_section_closes_menu() {
        let mut state = NavState {
            menu_open: true,
            ..NavState::default()
        };
        let mut requested = None;
        let found = state.scroll_to_section("projects", |id| {
            requested = Some(id.to_string());
            true
        });
        assert!(found);
        assert_eq!(requested.as_deref(), Some("projects"));
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_to_missing_section_still_closes_menu() {
        let mut state = NavState {
            menu_open: true,
            ..NavState::default()
        };
        assert!(!state.scroll_to_section("nowhere", |_| false));
        assert!(!state.menu_open);

        // already closed stays closed
        assert!(!state.scroll_to_section("projects", |_| false));
        assert!(!state.menu_open);
    }

    #[test]
    fn test_apply_scroll_updates_active() {
        let spy = ScrollSpy::new(NAV_ITEMS, 100.0);
        let mut state = NavState::default();

        assert!(state.apply_scroll(&spy, 2950.0, layout));
        assert!(state.is_active("projects"));

        // same section again is not a change
        assert!(!state.apply_scroll(&spy, 3000.0, layout));
        assert!(state.is_active("projects"));
    }

    #[test]
    fn test_apply_scroll_without_match_keeps_previous() {
        let spy = ScrollSpy::new(NAV_ITEMS, 100.0);
        let mut state = NavState::default();
        state.apply_scroll(&spy, 1000.0, layout);
        assert!(state.is_active("about"));

        assert!(!state.apply_scroll(&spy, 0.0, |_| None));
        assert!(state.is_active("about"));
    }
}
