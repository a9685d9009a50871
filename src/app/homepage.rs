use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    config::SiteConfig,
    content::{stagger_delay, Icon, ABOUT_PARAGRAPHS, HIGHLIGHTS, SKILLS},
    nav::NavState,
};

use super::{
    contact::ContactSection, header::scroll_to_section, icon::IconSvg, projects::Projects,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let nav = expect_context::<RwSignal<NavState>>();
    view! {
        <section id="home" class="min-h-screen hero-gradient flex items-center justify-center px-4">
            <div class="max-w-4xl mx-auto text-center">
                <div class="animate-fade-in">
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight">
                        "I'm " <span class="text-gradient">{config.owner}</span> " —" <br />
                        {config.role}
                    </h1>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-8 leading-relaxed">
                        {config.tagline}
                    </p>
                    <button
                        class="btn-primary shadow-glow hover:shadow-glow transition-smooth text-lg px-8 py-6"
                        on:click=move |_| scroll_to_section(nav, "projects")
                    >
                        "See My Work"
                        <IconSvg icon=Icon::ChevronDown class="ml-2 w-5 h-5" />
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="animate-slide-up">
                        <h2 class="text-4xl font-bold mb-8 text-gradient">"About Me"</h2>
                        <div class="space-y-6 text-lg text-muted-foreground leading-relaxed">
                            {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                    </div>
                    <div class="flex justify-center animate-scale-in">
                        <div class="card card-gradient shadow-elegant border-border/20 max-w-md p-8">
                            <div class="space-y-4">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <div class="flex items-center gap-3">
                                                <IconSvg icon=h.icon class="w-5 h-5 text-primary" />
                                                <span>{h.text}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 bg-secondary/20">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-16 text-gradient animate-fade-in">
                    "Core Skills & Tools"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div
                                    class="card card-gradient shadow-elegant border-border/20 transition-smooth hover:shadow-glow hover:scale-105 animate-slide-up group p-8 text-center"
                                    style=stagger_delay(i)
                                >
                                    <div class="flex justify-center mb-4 text-primary group-hover:text-accent transition-smooth">
                                        <IconSvg icon=skill.icon class="w-8 h-8" />
                                    </div>
                                    <h3 class="text-xl font-semibold mb-3">{skill.title}</h3>
                                    <p class="text-muted-foreground">{skill.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
