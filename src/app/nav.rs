use leptos::prelude::*;

use crate::content::{MONOGRAM, NAME, NAV_ITEMS};
use crate::icons::Icon;
use crate::scroll::{scroll_to, use_active_section, SectionId};
use crate::theme::use_theme;

/// Fixed top bar: monogram, nav buttons highlighting the active section, and
/// the theme toggle. Clicking an entry smooth-scrolls to its section.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = use_theme();
    let active = use_active_section();

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 w-full z-50 transition-all duration-300 backdrop-blur-md border-b {}",
                theme().nav(),
            )
        }>
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <div class="flex items-center gap-3">
                        <button
                            on:click=move |_| scroll_to(SectionId::Hero)
                            class=move || {
                                format!(
                                    "w-10 h-10 rounded-lg flex items-center justify-center {}",
                                    theme().mark(),
                                )
                            }
                        >
                            <span class="text-white font-bold text-sm">{MONOGRAM}</span>
                        </button>
                        <span class="text-lg font-semibold">{NAME}</span>
                    </div>

                    <div class="flex items-center gap-8">
                        <div class="hidden md:flex gap-8">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    let section = item.section;
                                    view! {
                                        <button
                                            on:click=move |_| scroll_to(section)
                                            class=move || {
                                                let t = theme();
                                                let tone = if active() == section {
                                                    t.link_active()
                                                } else {
                                                    t.link_idle()
                                                };
                                                format!(
                                                    "flex items-center gap-2 text-sm font-medium transition-colors {tone}",
                                                )
                                            }
                                        >
                                            <i class=item.icon.class()></i>
                                            {item.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            on:click=move |_| theme.update(|t| *t = t.toggled())
            aria-label="Toggle theme"
            class=move || format!("p-2 rounded-lg transition-colors {}", theme().toggle())
        >
            {move || {
                let icon = if theme().is_dark() { Icon::Sun } else { Icon::Moon };
                view! { <i class=icon.class()></i> }
            }}
        </button>
    }
}
