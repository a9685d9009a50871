use leptos::prelude::*;

use crate::content::Icon;

/// Inline stroke icon; sized and colored through `class` and `currentColor`.
#[component]
pub fn IconSvg(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("inline-block {class}")
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}
