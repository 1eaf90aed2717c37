use leptos::prelude::*;

use super::SectionHeading;

use crate::content::{ABOUT_CARDS, SKILLS};
use crate::icons::Icon;
use crate::theme::use_theme;

#[component]
pub fn AboutSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="about" class=move || format!("py-20 px-6 {}", theme().band())>
            <div class="max-w-6xl mx-auto">
                <SectionHeading icon=Icon::User title="About Me" />

                <div class="grid md:grid-cols-2 gap-8">
                    {ABOUT_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-8 rounded-2xl hover:shadow-lg transition-all duration-300 {}",
                                        theme().card(),
                                    )
                                }>
                                    <div class="flex items-center gap-3 mb-4">
                                        <div class=move || {
                                            format!("p-3 rounded-lg {}", theme().chip())
                                        }>
                                            <i class=move || {
                                                format!("{} text-xl {}", card.icon.class(), theme().ink())
                                            }></i>
                                        </div>
                                        <h3 class="text-xl font-semibold">{card.title}</h3>
                                    </div>
                                    <p class=move || {
                                        format!("text-lg leading-relaxed {}", theme().body())
                                    }>{card.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="skills" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading icon=Icon::Gear title="Skills & Expertise" />

                <div class="grid md:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-8 rounded-2xl hover:shadow-lg transition-all duration-300 group {}",
                                        theme().card_raised(),
                                    )
                                }>
                                    <div class="flex items-center gap-4 mb-6">
                                        <div class=move || {
                                            format!("p-3 rounded-lg transition-colors {}", theme().chip_soft())
                                        }>
                                            <i class=move || {
                                                format!("{} text-xl {}", skill.icon.class(), theme().ink())
                                            }></i>
                                        </div>
                                        <div>
                                            <h3 class="text-xl font-semibold">{skill.name}</h3>
                                            <span class=move || {
                                                format!("text-sm {}", theme().caption())
                                            }>{format!("{}% Proficiency", skill.level)}</span>
                                        </div>
                                    </div>

                                    <div class=move || {
                                        format!("w-full h-2 rounded-full mb-6 {}", theme().meter_track())
                                    }>
                                        <div
                                            class=move || {
                                                format!(
                                                    "h-full rounded-full transition-all duration-1000 ease-out {}",
                                                    theme().meter_fill(),
                                                )
                                            }
                                            style=format!("width: {}%", skill.level)
                                        ></div>
                                    </div>

                                    <p class=move || {
                                        format!("leading-relaxed {}", theme().body())
                                    }>{skill.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
