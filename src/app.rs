mod about;
mod contact;
mod experience;
mod home;
mod nav;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use home::HomePage;
use nav::NavBar;

use crate::content::NAME;
use crate::icons::Icon;
use crate::scroll::provide_active_section;
use crate::theme::{provide_theme, use_theme};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Both state cells live at the root so the nav and the sections read the
    // same instances.
    provide_theme();
    provide_active_section();

    let theme = use_theme();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />

        <Router>
            <div class=move || {
                format!(
                    "min-h-screen transition-colors duration-300 {}",
                    theme().page(),
                )
            }>
                <NavBar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Centered icon + headline pair shared by every content section.
#[component]
fn SectionHeading(
    icon: Icon,
    title: &'static str,
    #[prop(default = "mb-16")] space: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=format!("flex items-center justify-center gap-3 {space}")>
            <i class=move || format!("{} text-3xl {}", icon.class(), theme().muted())></i>
            <h2 class="text-4xl font-bold">{title}</h2>
        </div>
    }
}
