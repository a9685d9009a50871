use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Offset of the section element from the top of the document.
pub fn section_top(id: &str) -> Option<f64> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| el.offset_top() as f64)
}

/// Smooth-scrolls to the element with `id`. False if there is no such element.
pub fn scroll_into_view(id: &str) -> bool {
    let Some(el) = document().get_element_by_id(id) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("couldn't open {url}: {e:?}");
    }
}
