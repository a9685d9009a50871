use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::content::{stagger_delay, Icon, Project, ProjectAction, PROJECTS};

use super::{dom::open_in_new_tab, icon::IconSvg};

/// Image currently shown in the overlay: (src, alt).
type OverlayImage = Option<(&'static str, &'static str)>;

#[component]
pub fn Projects() -> impl IntoView {
    let overlay = RwSignal::<OverlayImage>::new(None);
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-16 text-gradient animate-fade-in">
                    "Featured Projects"
                </h2>
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index overlay /> })
                        .collect_view()}
                </div>
            </div>
            <ImageOverlay overlay />
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    overlay: RwSignal<OverlayImage>,
) -> impl IntoView {
    let action = project.action();
    let view_project = move |_: MouseEvent| match action {
        ProjectAction::OpenLink(url) => open_in_new_tab(url),
        ProjectAction::ShowImage { src, alt } => overlay.set(Some((src, alt))),
    };
    view! {
        <div
            class="card card-gradient shadow-elegant border-border/20 transition-smooth hover:shadow-glow hover:scale-105 animate-slide-up group"
            style=stagger_delay(index)
        >
            <div class="h-48 bg-gradient-to-br from-primary/20 to-accent/20 rounded-t-lg flex items-center justify-center">
                <div class="w-16 h-16 bg-primary/20 rounded-full flex items-center justify-center">
                    <IconSvg icon=Icon::Code class="w-8 h-8 text-primary" />
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
                <p class="text-muted-foreground mb-4 leading-relaxed">{project.description}</p>
                <p class="text-sm text-primary mb-4 font-medium">{project.tech}</p>
                <button
                    class="btn-outline w-full group-hover:bg-primary group-hover:text-primary-foreground transition-smooth"
                    on:click=view_project
                >
                    "View Project"
                    <IconSvg icon=Icon::ExternalLink class="ml-2 w-4 h-4" />
                </button>
            </div>
        </div>
    }
}

#[component]
fn ImageOverlay(overlay: RwSignal<OverlayImage>) -> impl IntoView {
    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && overlay.get_untracked().is_some() {
            overlay.set(None);
        }
    });

    move || {
        overlay.get().map(|(src, alt)| {
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/80"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| overlay.set(None)
                >
                    <div
                        class="relative max-w-6xl w-full max-h-[90vh] overflow-hidden p-2 rounded-lg bg-background"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            class="absolute top-2 right-2 p-2 opacity-70 hover:opacity-100"
                            aria-label="Close"
                            on:click=move |_| overlay.set(None)
                        >
                            <IconSvg icon=Icon::Close class="w-5 h-5" />
                        </button>
                        <div class="flex items-center justify-center">
                            <img
                                src=src
                                alt=alt
                                class="max-w-full max-h-full object-contain animate-scale-in rounded-lg"
                            />
                        </div>
                    </div>
                </div>
            }
        })
    }
}
