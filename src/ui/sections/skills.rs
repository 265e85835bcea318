//! Skills: key metrics, expertise areas and what is being learned next

use leptos::prelude::*;

use crate::core::animation::{ElementId, ViewSection};
use crate::core::choreography::{ids, skills_reveal};
use crate::core::content::{CONTINUOUS_LEARNING, EXPERTISE, ExpertiseArea, KEY_METRICS, Metric};
use crate::core::navigation::NavDestination;
use crate::ui::animation::use_animation_context;
use crate::ui::icon::{Icon, icons};

/// Metric boxes come first, expertise boxes continue the numbering
const BOX_COUNT: usize = KEY_METRICS.len() + EXPERTISE.len();

fn box_id(index: usize) -> String {
    ElementId::indexed(ids::SKILL_BOX, index).to_string()
}

#[component]
pub fn Skills() -> impl IntoView {
    let animations = use_animation_context();
    animations.bind_section(ViewSection::Skills, |ctx| {
        ctx.register_scroll_binding(ViewSection::Skills, skills_reveal(BOX_COUNT));
    });

    view! {
        <section id=NavDestination::Skills.anchor_id() class="py-24 px-4 bg-gray-900/40">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-white mb-12 text-center">"Skills & Expertise"</h2>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-12">
                    {KEY_METRICS
                        .into_iter()
                        .enumerate()
                        .map(|(index, metric)| view! { <MetricBox metric=metric index=index /> })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                    {EXPERTISE
                        .into_iter()
                        .enumerate()
                        .map(|(offset, area)| {
                            view! { <ExpertiseBox area=area index=KEY_METRICS.len() + offset /> }
                        })
                        .collect_view()}
                </div>

                <div class="text-center">
                    <h3 class="flex items-center justify-center gap-2 text-lg font-semibold text-white mb-4">
                        <Icon name=icons::COMPASS />
                        "Continuous Learning"
                    </h3>
                    <ul class="flex flex-wrap justify-center gap-3">
                        {CONTINUOUS_LEARNING
                            .into_iter()
                            .map(|topic| {
                                view! {
                                    <li class="px-4 py-2 rounded-full border border-indigo-500/40 text-indigo-200 text-sm">
                                        {topic}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetricBox(metric: Metric, index: usize) -> impl IntoView {
    view! {
        <div id=box_id(index) class="rounded-2xl bg-gray-900 border border-white/10 p-6 text-center">
            <Icon name=metric.icon class="w-8 h-8 mx-auto mb-3" />
            <p class="text-3xl font-bold text-white">{metric.value}</p>
            <p class="text-sm text-gray-400 mt-1">{metric.label}</p>
        </div>
    }
}

#[component]
fn ExpertiseBox(area: ExpertiseArea, index: usize) -> impl IntoView {
    view! {
        <div id=box_id(index) class="rounded-2xl bg-gray-900 border border-white/10 p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <Icon name=area.icon class="w-6 h-6" />
                    <h3 class="text-xl font-semibold text-white">{area.title}</h3>
                </div>
                <span class="text-xs text-gray-500">{area.experience}</span>
            </div>

            <p class="text-gray-400">{area.description}</p>

            <ul class="flex flex-wrap gap-2">
                {area
                    .skills
                    .iter()
                    .map(|skill| view! { <li class="px-2 py-1 rounded bg-white/5 text-xs text-gray-300">{*skill}</li> })
                    .collect_view()}
            </ul>

            <div>
                <p class="text-xs uppercase tracking-wider text-gray-500 mb-1">"Key projects"</p>
                <p class="text-sm text-gray-300">{area.key_projects.join(", ")}</p>
            </div>

            <p class="flex items-start gap-2 text-sm text-indigo-200">
                <Icon name=icons::SPARKLES class="w-4 h-4 mt-0.5" />
                {area.highlight}
            </p>
        </div>
    }
}
