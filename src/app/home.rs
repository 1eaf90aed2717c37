use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::Title;

use super::about::{AboutSection, SkillsSection};
use super::contact::ContactSection;
use super::experience::{EducationSection, ExperienceSection};

use crate::content::{FIRST_NAME, LAST_NAME, MONOGRAM, NAME, TAGLINE};
use crate::icons::Icon;
use crate::scroll::{scroll_to, use_section_observer, SectionId};
use crate::theme::use_theme;

/// The whole page: six sections in tracker order, then the footer. Mounting
/// the page is what hooks the scroll observer up (and tears it down again
/// with the page).
#[component]
pub fn HomePage() -> impl IntoView {
    use_section_observer();

    view! {
        <Title text="Portfolio" />
        <Hero />
        <AboutSection />
        <SkillsSection />
        <ExperienceSection />
        <EducationSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center relative">
            <div class="text-center max-w-4xl mx-auto px-6">
                <div class="mb-8">
                    <div class=move || {
                        format!(
                            "w-32 h-32 rounded-2xl mx-auto mb-8 flex items-center justify-center shadow-xl {}",
                            theme().hero_mark(),
                        )
                    }>
                        <span class="text-white text-4xl font-bold">{MONOGRAM}</span>
                    </div>
                </div>

                <h1 class="text-6xl md:text-7xl font-bold mb-6 leading-tight">
                    {FIRST_NAME} <br /> <span class=move || theme().muted()>{LAST_NAME}</span>
                </h1>

                <p class=move || {
                    format!(
                        "text-xl md:text-2xl mb-8 max-w-3xl mx-auto leading-relaxed {}",
                        theme().muted(),
                    )
                }>{TAGLINE}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <button
                        on:click=move |_| scroll_to(SectionId::Contact)
                        class=move || {
                            format!(
                                "px-8 py-4 rounded-xl font-medium hover:shadow-lg transition-all duration-200 flex items-center justify-center gap-2 {}",
                                theme().btn_solid(),
                            )
                        }
                    >
                        <i class=Icon::Send.class()></i>
                        "Get In Touch"
                    </button>
                    <button
                        on:click=move |_| scroll_to(SectionId::About)
                        class=move || {
                            format!(
                                "px-8 py-4 border-2 rounded-xl font-medium transition-all duration-200 flex items-center justify-center gap-2 {}",
                                theme().btn_outline(),
                            )
                        }
                    >
                        <i class=Icon::User.class()></i>
                        "Learn More"
                    </button>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <i class=move || {
                    format!("{} text-2xl {}", Icon::ChevronDown.class(), theme().chevron())
                }></i>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let theme = use_theme();
    view! {
        <footer class=move || format!("py-8 border-t {}", theme().footer())>
            <div class="max-w-6xl mx-auto px-6 text-center">
                <p class=move || theme().muted()>
                    {format!("© {} {NAME}. Built with passion and precision.", build_year())}
                </p>
            </div>
        </footer>
    }
}

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}
