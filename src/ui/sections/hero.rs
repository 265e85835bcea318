//! Hero: headline, typewriter line and floating tech chips over a parallax grid

use leptos::prelude::*;

use crate::core::animation::{ElementId, ViewSection};
use crate::core::choreography::{
    HERO_BACKGROUND_OPACITY, TYPEWRITER_PAUSE_MS, chip_hover, floating_chips, hero_entrance,
    hero_fade_up, hero_parallax, ids, typewriter_cycle,
};
use crate::core::content::{
    HERO_HEADLINE, HERO_SUMMARY, OWNER_NAME, OWNER_TITLE, TECH_STACK, TYPEWRITER_PLACEHOLDER,
    TechChip,
};
use crate::core::navigation::NavDestination;
use crate::ui::animation::{AnimationContext, use_animation_context};
use crate::ui::icon::{Icon, icons};

fn register_hero(ctx: AnimationContext) {
    ctx.register_on_mount(ViewSection::Hero, hero_fade_up());
    ctx.register_on_mount(ViewSection::Hero, hero_entrance());
    ctx.register_scroll_binding(ViewSection::Hero, hero_parallax());

    ctx.register_on_mount(ViewSection::Hero, floating_chips(TECH_STACK.len()));
    for index in 0..TECH_STACK.len() {
        let chip = ElementId::indexed(ids::TECH_CHIP, index);
        let hover = chip_hover(&chip);
        ctx.register_hover_pair(ViewSection::Hero, chip, hover);
    }

    match typewriter_cycle() {
        Ok(cycle) => {
            ctx.register_repeating_sequence(ViewSection::Hero, ids::HERO_TYPING, cycle, TYPEWRITER_PAUSE_MS);
        }
        Err(err) => tracing::warn!(error = %err, "typewriter disabled"),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let animations = use_animation_context();
    animations.bind_section(ViewSection::Hero, register_hero);

    view! {
        <section id=NavDestination::Home.anchor_id() class="relative min-h-screen overflow-hidden pt-16">
            // Parallax grid
            <div
                id=ids::HERO_BACKGROUND
                class="absolute inset-0 -z-10 hero-grid-bg"
                style=format!("opacity: {}", HERO_BACKGROUND_OPACITY)
                aria-hidden="true"
            ></div>

            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                {TECH_STACK
                    .into_iter()
                    .enumerate()
                    .map(|(index, chip)| view! { <FloatingChip chip=chip index=index /> })
                    .collect_view()}
            </div>

            <div id=ids::HERO class="relative max-w-4xl mx-auto px-4 min-h-[calc(100vh-4rem)] flex flex-col items-center justify-center text-center">
                <h1 id=ids::HERO_HEADLINE class="text-4xl sm:text-6xl font-bold text-white tracking-tight mb-6">
                    {HERO_HEADLINE}
                </h1>
                <p id=ids::HERO_NAME class="text-xl sm:text-2xl text-gray-300 mb-2">
                    {OWNER_NAME}
                    <span class="text-gray-500">" · "</span>
                    {OWNER_TITLE}
                </p>
                <p class="text-lg text-indigo-300 font-mono h-8 mb-6">
                    <span id=ids::HERO_TYPING>{TYPEWRITER_PLACEHOLDER}</span>
                    <span class="animate-pulse">"|"</span>
                </p>
                <p id=ids::HERO_SUMMARY class="text-gray-400 max-w-2xl leading-relaxed mb-10">
                    {HERO_SUMMARY}
                </p>
                <div id=ids::HERO_CTA class="flex flex-col sm:flex-row gap-4">
                    <a
                        href=NavDestination::Projects.href()
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white font-medium transition-colors"
                    >
                        "View Projects"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </a>
                    <a
                        href=NavDestination::Contact.href()
                        class="px-6 py-3 rounded-lg border border-white/20 text-white hover:bg-white/10 font-medium transition-colors"
                    >
                        "Get in Touch"
                    </a>
                </div>

                // Scroll indicator
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-gray-500" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FloatingChip(chip: TechChip, index: usize) -> impl IntoView {
    view! {
        <div
            id=ElementId::indexed(ids::TECH_CHIP, index).to_string()
            class="absolute w-14 h-14 rounded-2xl bg-gray-800/70 border border-white/10 p-3 shadow-lg pointer-events-auto"
            style=format!("left: {}%; top: {}%", chip.x_percent, chip.y_percent)
            title=chip.name
        >
            <img src=chip.image alt=chip.name class="w-full h-full object-contain" draggable=false />
        </div>
    }
}
