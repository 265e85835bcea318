//! Top bar and bottom menu
//!
//! Menu entries scroll smoothly to their section, leaving the section top
//! just below the fixed top bar as it is rendered.

use leptos::prelude::*;

use crate::core::animation::{ElementId, ViewSection};
use crate::core::choreography::{ids, menu_item_hover, navbar_entrance};
use crate::core::content::BRAND;
use crate::core::navigation::NavDestination;
use crate::ui::animation::use_animation_context;
use crate::ui::icon::Icon;

fn scroll_to_destination(destination: NavDestination) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::navigation::destination_offset;
        use crate::ui::animation::{element_height, element_top, smooth_scroll_to};

        match element_top(destination.anchor_id()) {
            Some(top) => smooth_scroll_to(destination_offset(top, element_height(ids::NAVBAR))),
            None => tracing::debug!(%destination, "navigation target not mounted"),
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = destination;
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let animations = use_animation_context();

    animations.bind_section(ViewSection::Navbar, |ctx| {
        ctx.register_on_mount(ViewSection::Navbar, navbar_entrance(NavDestination::ALL.len()));
        for index in 0..NavDestination::ALL.len() {
            let item = ElementId::indexed(ids::MENU_ITEM, index);
            let hover = menu_item_hover(&item);
            ctx.register_hover_pair(ViewSection::Navbar, item, hover);
        }
    });

    view! {
        <header
            id=ids::NAVBAR
            class="fixed top-0 inset-x-0 z-50 h-16 bg-gray-950/80 backdrop-blur border-b border-white/10"
        >
            <div class="max-w-7xl mx-auto h-full px-4 flex items-center justify-between">
                <a
                    href=NavDestination::Home.href()
                    class="text-xl font-bold text-white tracking-tight"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_destination(NavDestination::Home);
                    }
                >
                    {BRAND}
                </a>
            </div>
        </header>

        <nav
            id=ids::BOTTOM_MENU
            class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-full
                   bg-gray-900/90 backdrop-blur border border-white/10 shadow-lg"
            aria-label="Sections"
        >
            <ul class="flex items-center gap-2">
                {NavDestination::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(index, destination)| {
                        view! {
                            <li id=ElementId::indexed(ids::MENU_ITEM, index).to_string()>
                                <a
                                    href=destination.href()
                                    class="flex flex-col items-center px-3 py-1 text-xs text-gray-400 hover:text-white transition-colors"
                                    aria-label=destination.to_string()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_destination(destination);
                                    }
                                >
                                    <Icon name=destination.icon() />
                                    <span class="hidden sm:block mt-1">{destination.to_string()}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
