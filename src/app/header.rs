use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use crate::{
    config::SiteConfig,
    content::{Icon, NAV_ITEMS},
    nav::NavState,
    scroll_spy::ScrollSpy,
};

use super::{
    dom::{scroll_into_view, scroll_y, section_top},
    icon::IconSvg,
};

const DESKTOP_LINK: &str = "px-3 py-2 text-sm font-medium transition-smooth hover:text-primary";
const MOBILE_LINK: &str = "block w-full text-left px-3 py-2 text-base font-medium text-muted-foreground hover:text-primary transition-smooth";

/// Scrolls to section `id` and closes the mobile menu.
pub fn scroll_to_section(nav: RwSignal<NavState>, id: &str) {
    nav.update(|n| {
        n.scroll_to_section(id, scroll_into_view);
    });
}

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let nav = expect_context::<RwSignal<NavState>>();
    let spy = ScrollSpy::new(NAV_ITEMS, config.scroll_offset);

    // no-op during SSR; removed when the component is disposed
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        let y = scroll_y();
        nav.maybe_update(|n| n.apply_scroll(&spy, y, section_top));
    });

    let desktop_items = spy
        .sections()
        .iter()
        .map(|item| {
            let id = item.id;
            view! {
                <button
                    class=move || {
                        let color = if nav.with(|n| n.is_active(id)) {
                            "text-primary"
                        } else {
                            "text-muted-foreground"
                        };
                        format!("{DESKTOP_LINK} {color}")
                    }
                    on:click=move |_| scroll_to_section(nav, id)
                >
                    {item.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/95 backdrop-blur-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-xl font-bold text-gradient">{config.owner}</div>
                    <div class="hidden md:flex space-x-8">{desktop_items}</div>
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || {
                            let icon = if nav.with(|n| n.menu_open) {
                                Icon::Close
                            } else {
                                Icon::Menu
                            };
                            view! { <IconSvg icon class="w-6 h-6" /> }
                        }}
                    </button>
                </div>
                <Show when=move || nav.with(|n| n.menu_open)>
                    <div class="md:hidden py-4 border-t border-border">
                        {spy
                            .sections()
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class=MOBILE_LINK
                                        on:click=move |_| scroll_to_section(nav, id)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
