mod contact;
mod dom;
mod header;
mod homepage;
mod icon;
mod projects;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, nav::NavState, toast::ToastQueue};

use header::NavBar;
use homepage::HomePage;
use toaster::Toaster;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    let owner = config.owner;
    provide_context(RwSignal::new(NavState::default()));
    provide_context(RwSignal::new(ToastQueue::with_limit(config.toast_limit)));
    provide_context(config);

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <div class="min-h-screen bg-background">
                <NavBar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
            <Toaster />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <footer class="py-8 px-4 border-t border-border">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-muted-foreground">{config.copyright()}</p>
            </div>
        </footer>
    }
}
