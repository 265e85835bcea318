//! Footer columns and copyright line

use leptos::prelude::*;

use crate::core::animation::{ElementId, ViewSection};
use crate::core::choreography::{footer_reveal, ids};
use crate::core::content::{FOOTER_COLUMNS, FooterColumn, copyright_line};
use crate::ui::animation::use_animation_context;

#[component]
pub fn Footer() -> impl IntoView {
    let animations = use_animation_context();
    animations.bind_section(ViewSection::Footer, |ctx| {
        ctx.register_scroll_binding(ViewSection::Footer, footer_reveal(FOOTER_COLUMNS.len()));
    });

    // Unknown during server rendering, filled in once hydrated
    let year = RwSignal::new(None::<i32>);
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| year.set(Some(crate::ui::animation::current_year())));

    view! {
        <footer id=ids::FOOTER class="border-t border-white/10 pt-16 pb-28 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 mb-12">
                    {FOOTER_COLUMNS
                        .into_iter()
                        .enumerate()
                        .map(|(index, column)| view! { <Column column=column index=index /> })
                        .collect_view()}
                </div>
                <p class="text-center text-sm text-gray-500">{move || copyright_line(year.get())}</p>
            </div>
        </footer>
    }
}

#[component]
fn Column(column: FooterColumn, index: usize) -> impl IntoView {
    let body = match column.blurb {
        Some(blurb) => view! { <p class="text-sm text-gray-400 leading-relaxed">{blurb}</p> }.into_any(),
        None => view! {
            <ul class="space-y-2">
                {column
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href="#" class="text-sm text-gray-400 hover:text-white transition-colors">{*link}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div id=ElementId::indexed(ids::FOOTER_COLUMN, index).to_string()>
            <h4 class="font-semibold text-white mb-4">{column.title}</h4>
            {body}
        </div>
    }
}
