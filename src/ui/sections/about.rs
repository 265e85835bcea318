//! About: bento grid of short facts

use leptos::prelude::*;

use crate::core::animation::{ElementId, ViewSection};
use crate::core::choreography::{about_reveal, ids};
use crate::core::content::{
    ABOUT_EXPERIENCE, ABOUT_EXPERIENCE_CAPTION, ABOUT_LINKS, ABOUT_STATS, ABOUT_TAGLINE,
    CORE_TECHNOLOGIES, OWNER_NAME, OWNER_TITLE,
};
use crate::core::navigation::NavDestination;
use crate::ui::animation::use_animation_context;
use crate::ui::icon::{Icon, icons};

/// Intro, experience, technologies, stats, links
const CARD_COUNT: usize = 5;

fn card_id(index: usize) -> String {
    ElementId::indexed(ids::ABOUT_CARD, index).to_string()
}

#[component]
pub fn About() -> impl IntoView {
    let animations = use_animation_context();
    animations.bind_section(ViewSection::About, |ctx| {
        ctx.register_scroll_binding(ViewSection::About, about_reveal(CARD_COUNT));
    });

    view! {
        <section id=NavDestination::About.anchor_id() class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-white mb-12 text-center">"About Me"</h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div id=card_id(0) class="md:col-span-2 bento-card">
                        <h3 class="text-2xl font-semibold text-white mb-1">{OWNER_NAME}</h3>
                        <p class="text-indigo-300 mb-4">{OWNER_TITLE}</p>
                        <p class="text-gray-400 leading-relaxed">{ABOUT_TAGLINE}</p>
                    </div>

                    <div id=card_id(1) class="bento-card flex flex-col justify-center">
                        <p class="text-4xl font-bold text-white">{ABOUT_EXPERIENCE}</p>
                        <p class="text-gray-400 mt-2">{ABOUT_EXPERIENCE_CAPTION}</p>
                    </div>

                    <div id=card_id(2) class="bento-card">
                        <h3 class="text-lg font-semibold text-white mb-4">"Core Technologies"</h3>
                        <ul class="space-y-2">
                            {CORE_TECHNOLOGIES
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <li class="flex items-center gap-2 text-gray-300">
                                            <Icon name=icons::CHECK class="w-4 h-4" />
                                            {tech}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div id=card_id(3) class="bento-card grid grid-cols-2 gap-4">
                        {ABOUT_STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div>
                                        <Icon name=stat.icon class="w-6 h-6 mb-2" />
                                        <p class="text-2xl font-bold text-white">{stat.value}</p>
                                        <p class="text-sm text-gray-400">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div id=card_id(4) class="bento-card space-y-3">
                        {ABOUT_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-3 p-2 rounded-lg hover:bg-white/5 transition-colors"
                                    >
                                        <Icon name=link.icon />
                                        <div>
                                            <p class="text-white font-medium">{link.label}</p>
                                            <p class="text-xs text-gray-500">{link.caption}</p>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
