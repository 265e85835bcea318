//! Projects: filterable case studies under a pinned header
//!
//! Changing the filter re-renders the grid and plays a fresh card entrance;
//! the new entrance replaces the handle of the previous one.

use leptos::prelude::*;

use crate::core::animation::{AnimationHandle, ElementId, ViewSection};
use crate::core::choreography::{ids, project_cards, projects_header_pin};
use crate::core::content::{Project, ProjectCategory, filter_projects};
use crate::core::navigation::NavDestination;
use crate::ui::animation::use_animation_context;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Projects() -> impl IntoView {
    let animations = use_animation_context();
    let category = RwSignal::new(ProjectCategory::default());
    let entrance = StoredValue::new(AnimationHandle::noop());

    animations.bind_section(ViewSection::Projects, |ctx| {
        ctx.register_scroll_binding(ViewSection::Projects, projects_header_pin());
    });

    // Tracks the filter, so it also runs on every change
    Effect::new(move |_| {
        let shown = filter_projects(category.get()).len();
        let next = animations.register_on_mount(ViewSection::Projects, project_cards(shown));
        entrance.set_value(animations.replace(entrance.get_value(), next));
    });

    view! {
        <section id=NavDestination::Projects.anchor_id() class="relative py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <div id=ids::PROJECTS_HEADER class="relative z-10 bg-gray-950/90 backdrop-blur py-6 mb-8">
                    <h2 class="text-3xl sm:text-4xl font-bold text-white mb-6 text-center">"Featured Projects"</h2>
                    <div class="flex flex-wrap justify-center gap-2" role="tablist">
                        {ProjectCategory::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        role="tab"
                                        class="px-4 py-2 rounded-full text-sm font-medium transition-colors"
                                        class=(["bg-indigo-600", "text-white"], move || category.get() == option)
                                        class=(["bg-white/5", "text-gray-400", "hover:text-white"], move || category.get() != option)
                                        aria-selected=move || (category.get() == option).to_string()
                                        data-category=option.to_string()
                                        on:click=move |_| category.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {move || {
                        let shown = filter_projects(category.get());
                        let count = shown.len();
                        shown
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <ProjectCard project=project index=index shown=count /> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize, shown: usize) -> impl IntoView {
    let span = if project.spans_two_columns(shown) { "md:col-span-2" } else { "" };

    view! {
        <article
            id=ElementId::indexed(ids::PROJECT_CARD, index).to_string()
            class=format!("rounded-2xl overflow-hidden bg-gray-900 border border-white/10 {}", span)
        >
            <img src=project.image alt=project.title class="w-full h-56 object-cover" />

            <div class="p-6 space-y-5">
                <header>
                    <p class="text-xs uppercase tracking-wider text-indigo-300">{project.subtitle}</p>
                    <h3 class="text-2xl font-semibold text-white">{project.title}</h3>
                    <p class="text-gray-400 mt-2 leading-relaxed">{project.description}</p>
                </header>

                <div class="grid grid-cols-3 gap-4">
                    {project
                        .metrics
                        .into_iter()
                        .map(|metric| {
                            view! {
                                <div class="text-center">
                                    <Icon name=metric.icon class="w-5 h-5 mx-auto mb-1" />
                                    <p class="text-lg font-bold text-white">{metric.value}</p>
                                    <p class="text-xs text-gray-500">{metric.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <ul class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <li class="px-2 py-1 rounded bg-white/5 text-xs text-gray-300">{*tech}</li> })
                        .collect_view()}
                </ul>

                <ul class="space-y-1">
                    {project
                        .outcomes
                        .iter()
                        .map(|outcome| {
                            view! {
                                <li class="flex items-start gap-2 text-sm text-gray-300">
                                    <Icon name=icons::CHECK class="w-4 h-4 mt-0.5" />
                                    {*outcome}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                {project.testimonial.map(|testimonial| {
                    view! {
                        <blockquote class="border-l-2 border-indigo-500 pl-4">
                            <Icon name=icons::QUOTE class="w-4 h-4 mb-1" />
                            <p class="italic text-gray-300">{testimonial.quote}</p>
                            <footer class="text-xs text-gray-500 mt-2">
                                {testimonial.author}" · "{testimonial.role}
                            </footer>
                        </blockquote>
                    }
                })}

                <footer class="flex items-center justify-between text-xs text-gray-500 pt-4 border-t border-white/10">
                    <span>{project.client}</span>
                    <span>{project.duration}</span>
                </footer>
            </div>
        </article>
    }
}
