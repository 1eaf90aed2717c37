use leptos::prelude::*;

use super::SectionHeading;

use crate::content::{DEGREES, EXPERIENCE, SECONDARY};
use crate::icons::Icon;
use crate::theme::use_theme;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="experience" class=move || format!("py-20 px-6 {}", theme().band())>
            <div class="max-w-6xl mx-auto">
                <SectionHeading icon=Icon::Briefcase title="Experience" />

                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <div class=move || {
                                format!(
                                    "p-8 rounded-2xl hover:shadow-lg transition-all duration-300 max-w-4xl mx-auto {}",
                                    theme().card(),
                                )
                            }>
                                <div class="flex items-start gap-6">
                                    <div class=move || {
                                        format!(
                                            "p-4 rounded-xl flex items-center justify-center {}",
                                            theme().chip(),
                                        )
                                    }>
                                        <i class=move || {
                                            format!("{} text-3xl {}", Icon::Building.class(), theme().ink())
                                        }></i>
                                    </div>

                                    <div class="flex-1">
                                        <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                            <h3 class="text-2xl font-bold">{job.company}</h3>
                                            <div class=move || {
                                                format!("flex items-center gap-2 {}", theme().caption())
                                            }>
                                                <i class=Icon::MapPin.class()></i>
                                                <span>{job.location}</span>
                                                <i class=format!("{} ml-2", Icon::Calendar.class())></i>
                                                <span>{job.span}</span>
                                            </div>
                                        </div>

                                        <div class="flex items-center gap-2 mb-4">
                                            <i class=move || {
                                                format!("{} {}", Icon::Award.class(), theme().muted())
                                            }></i>
                                            <p class="text-lg font-medium">{job.role}</p>
                                        </div>

                                        <p class=move || {
                                            format!("leading-relaxed {}", theme().body())
                                        }>{job.summary}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="education" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <SectionHeading icon=Icon::GraduationCap title="Education" />

                <div class="grid lg:grid-cols-2 gap-8 mb-8">
                    {DEGREES
                        .iter()
                        .map(|study| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "p-8 rounded-2xl hover:shadow-lg transition-all duration-300 {}",
                                        theme().card_raised(),
                                    )
                                }>
                                    <div class="flex items-center gap-3 mb-4">
                                        <i class=move || {
                                            format!("{} text-xl {}", study.icon.class(), theme().muted())
                                        }></i>
                                        <h3 class="text-xl font-bold">{study.program}</h3>
                                    </div>
                                    <p class=move || {
                                        format!("font-medium mb-2 {}", theme().caption())
                                    }>{study.school}</p>
                                    <p class=move || {
                                        format!("text-sm mb-4 {}", theme().faint())
                                    }>{study.span}</p>
                                    <p class=move || theme().body()>{study.note}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || {
                    format!(
                        "p-8 rounded-2xl hover:shadow-lg transition-all duration-300 max-w-4xl mx-auto {}",
                        theme().card_raised(),
                    )
                }>
                    <div class="flex items-center gap-3 mb-6">
                        <i class=move || {
                            format!("{} text-xl {}", Icon::GraduationCap.class(), theme().muted())
                        }></i>
                        <h3 class="text-xl font-bold">{SECONDARY.program}</h3>
                    </div>

                    <p class=move || {
                        format!("font-medium mb-6 {}", theme().caption())
                    }>{format!("{} • {}", SECONDARY.school, SECONDARY.span)}</p>

                    <div class="grid md:grid-cols-2 gap-6">
                        {SECONDARY
                            .highlights
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div class=move || format!("p-4 rounded-lg {}", theme().panel())>
                                        <h4 class="font-semibold mb-2 flex items-center gap-2">
                                            <i class=highlight.icon.class()></i>
                                            {highlight.heading}
                                        </h4>
                                        <p class=move || {
                                            format!("mb-2 {}", theme().body())
                                        }>{highlight.detail}</p>
                                        <p class=move || {
                                            format!("font-medium {}", theme().caption())
                                        }>{highlight.note}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
