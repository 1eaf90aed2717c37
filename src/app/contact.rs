use leptos::prelude::*;

use super::SectionHeading;

use crate::content::{CONTACT_LINKS, LOCATION};
use crate::icons::Icon;
use crate::theme::use_theme;

#[component]
pub fn ContactSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="contact" class=move || format!("py-20 px-6 {}", theme().band())>
            <div class="max-w-4xl mx-auto">
                <SectionHeading icon=Icon::Mail title="Get In Touch" space="mb-8" />

                <p class=move || format!("text-xl text-center mb-4 {}", theme().body())>
                    "Looking to start a project or need consultation? Feel free to reach out."
                </p>

                <div class="flex items-center justify-center gap-2 mb-12">
                    <i class=move || format!("{} {}", Icon::MapPin.class(), theme().muted())></i>
                    <p class=move || format!("text-lg {}", theme().caption())>{LOCATION}</p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-3xl mx-auto">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                    class=move || {
                                        format!(
                                            "flex flex-col items-center gap-4 p-6 rounded-2xl transition-all duration-300 hover:scale-105 hover:shadow-lg {}",
                                            theme().tile(),
                                        )
                                    }
                                >
                                    <i class=format!("{} text-3xl", link.icon.class())></i>
                                    <span class="font-medium text-center">{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
