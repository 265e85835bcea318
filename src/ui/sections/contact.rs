//! Contact: address rows and social links

use leptos::prelude::*;

use crate::core::animation::{ElementId, ViewSection};
use crate::core::choreography::{contact_reveal, ids, social_hover};
use crate::core::content::{CONTACT_DETAILS, CONTACT_SOCIALS};
use crate::core::navigation::NavDestination;
use crate::ui::animation::use_animation_context;
use crate::ui::icon::Icon;

#[component]
pub fn Contact() -> impl IntoView {
    let animations = use_animation_context();
    animations.bind_section(ViewSection::Contact, |ctx| {
        ctx.register_scroll_binding(ViewSection::Contact, contact_reveal(CONTACT_DETAILS.len()));
        for index in 0..CONTACT_SOCIALS.len() {
            let social = ElementId::indexed(ids::CONTACT_SOCIAL, index);
            let hover = social_hover(&social);
            ctx.register_hover_pair(ViewSection::Contact, social, hover);
        }
    });

    view! {
        <section id=NavDestination::Contact.anchor_id() class="py-24 px-4">
            <div id=ids::CONTACT_BODY class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-white mb-4">"Get in Touch"</h2>
                <p class="text-gray-400 mb-10">
                    "Have a project in mind or just want to say hello? My inbox is always open."
                </p>

                <ul class="space-y-4 mb-10 inline-block text-left">
                    {CONTACT_DETAILS
                        .into_iter()
                        .enumerate()
                        .map(|(index, detail)| {
                            view! {
                                <li
                                    id=ElementId::indexed(ids::CONTACT_ITEM, index).to_string()
                                    class="flex items-center gap-3 text-gray-300"
                                >
                                    <Icon name=detail.icon />
                                    {detail.text}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="flex justify-center gap-4">
                    {CONTACT_SOCIALS
                        .into_iter()
                        .enumerate()
                        .map(|(index, social)| {
                            view! {
                                <a
                                    id=ElementId::indexed(ids::CONTACT_SOCIAL, index).to_string()
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="w-12 h-12 rounded-full bg-white/5 border border-white/10 flex items-center justify-center"
                                    aria-label=social.label
                                >
                                    <Icon name=social.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
