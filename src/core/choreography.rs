//! Timelines and hover pairs of every section
//!
//! Sections mount elements with the ids in [`ids`] and register what these
//! builders return. Offsets and durations are in milliseconds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::animation::{
    AnimatedProperty, AnimationDescriptor, AnimationError, Easing, ElementId, PhraseCycle, Position,
    PropertyTrack, Repeat, ScrollAnimation, ScrollWindow, Timeline,
};
use crate::core::content::{TYPEWRITER_PHRASES, TYPEWRITER_PREFIX};

use AnimatedProperty::{Opacity, Rotation, Scale, TranslateX, TranslateY};

/// DOM ids the sections render and the timelines target
pub mod ids {
    pub const NAVBAR: &str = "navbar";
    pub const BOTTOM_MENU: &str = "bottom-menu";
    pub const MENU_ITEM: &str = "menu-item";

    pub const HOME: &str = "home";
    pub const HERO: &str = "hero";
    pub const HERO_BACKGROUND: &str = "hero-background";
    pub const HERO_HEADLINE: &str = "hero-headline";
    pub const HERO_NAME: &str = "hero-name";
    pub const HERO_SUMMARY: &str = "hero-summary";
    pub const HERO_TYPING: &str = "hero-typing";
    pub const HERO_CTA: &str = "hero-cta";
    pub const TECH_CHIP: &str = "tech-chip";

    pub const ABOUT: &str = "about";
    pub const ABOUT_CARD: &str = "about-card";

    pub const PROJECTS: &str = "projects";
    pub const PROJECTS_HEADER: &str = "projects-header";
    pub const PROJECT_CARD: &str = "project-card";

    pub const SKILLS: &str = "skills";
    pub const SKILL_BOX: &str = "skill-box";

    pub const CONTACT: &str = "contact";
    pub const CONTACT_BODY: &str = "contact-body";
    pub const CONTACT_ITEM: &str = "contact-item";
    pub const CONTACT_SOCIAL: &str = "contact-social";

    pub const FOOTER: &str = "footer";
    pub const FOOTER_COLUMN: &str = "footer-column";
}

/// Pause after a phrase is fully typed
pub const TYPEWRITER_PAUSE_MS: f64 = 2000.0;
pub const TYPEWRITER_TYPING_MS: f64 = 2000.0;

/// Resting opacity of the hero grid pattern
pub const HERO_BACKGROUND_OPACITY: f64 = 0.1;

/// Smoothing of the hero parallax
pub const PARALLAX_LAG_MS: f64 = 1000.0;

const CHIP_SEED: u64 = 0x6a65_6d73;

/// Enter/leave descriptors for one hoverable element
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPair {
    pub enter: AnimationDescriptor,
    pub leave: AnimationDescriptor,
}

/// A scroll binding ready to register
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    pub trigger: ElementId,
    pub window: ScrollWindow,
    pub animation: ScrollAnimation,
}

fn indexed(prefix: &str, count: usize) -> Vec<ElementId> {
    (0..count).map(|i| ElementId::indexed(prefix, i)).collect()
}

fn fade_up(target: impl Into<ElementId>, y: f64, duration_ms: f64) -> AnimationDescriptor {
    AnimationDescriptor::new(target, duration_ms)
        .from_to(TranslateY, y, 0.0)
        .from_to(Opacity, 0.0, 1.0)
}

// ============================================================================
// Navbar
// ============================================================================

/// Top bar drops in, bottom menu rises, menu entries follow one by one
pub fn navbar_entrance(menu_items: usize) -> Timeline {
    Timeline::new()
        .with_default_easing(Easing::Power2Out)
        .add(fade_up(ids::NAVBAR, -100.0, 800.0), Position::At(0.0))
        .add(fade_up(ids::BOTTOM_MENU, 100.0, 800.0).delay(200.0), Position::At(0.0))
        .stagger(
            indexed(ids::MENU_ITEM, menu_items),
            fade_up(ids::MENU_ITEM, 20.0, 500.0).delay(400.0),
            100.0,
            Position::At(0.0),
        )
}

pub fn menu_item_hover(target: &ElementId) -> HoverPair {
    HoverPair {
        enter: AnimationDescriptor::new(target.clone(), 300.0)
            .to(TranslateY, -5.0)
            .to(Scale, 1.1)
            .ease(Easing::Power2Out),
        leave: AnimationDescriptor::new(target.clone(), 300.0)
            .to(TranslateY, 0.0)
            .to(Scale, 1.0)
            .ease(Easing::Power2In),
    }
}

// ============================================================================
// Hero
// ============================================================================

/// Headline, name, summary and call to action, each overlapping the previous
pub fn hero_entrance() -> Timeline {
    let reveal = |target: &str, y: f64, duration_ms: f64| {
        AnimationDescriptor::new(target, duration_ms)
            .from(TranslateY, y)
            .from(Opacity, 0.0)
    };

    Timeline::new()
        .with_default_easing(Easing::Power3Out)
        .then(reveal(ids::HERO_HEADLINE, 50.0, 1000.0))
        .overlapping(reveal(ids::HERO_NAME, 30.0, 1000.0), 500.0)
        .overlapping(reveal(ids::HERO_SUMMARY, 30.0, 1000.0), 700.0)
        .overlapping(reveal(ids::HERO_CTA, 20.0, 800.0), 500.0)
}

/// Whole hero section fades up once the navbar is in
pub fn hero_fade_up() -> Timeline {
    Timeline::new().then(
        AnimationDescriptor::new(ids::HERO, 1000.0)
            .from(TranslateY, 60.0)
            .from(Opacity, 0.0)
            .ease(Easing::Power3Out)
            .delay(500.0),
    )
}

/// Background grid drifts down and brightens while the hero scrolls away.
///
/// Triggered by the untransformed section so the entrance offset on
/// `#hero` does not shift the window.
pub fn hero_parallax() -> Result<ScrollBinding, AnimationError> {
    Ok(ScrollBinding {
        trigger: ElementId::from(ids::HOME),
        window: ScrollWindow::new("top top", "bottom top")?,
        animation: ScrollAnimation::Scrub {
            target: ElementId::from(ids::HERO_BACKGROUND),
            tracks: vec![
                PropertyTrack {
                    property: TranslateY,
                    from: None,
                    to: 100.0,
                },
                PropertyTrack {
                    property: Opacity,
                    from: Some(HERO_BACKGROUND_OPACITY),
                    to: 0.5,
                },
            ],
            easing: Easing::Linear,
            lag_ms: Some(PARALLAX_LAG_MS),
        },
    })
}

/// Endless float of each tech chip with a per-chip seeded wobble
pub fn floating_chips(count: usize) -> Timeline {
    (0..count).fold(Timeline::new(), |timeline, index| {
        let mut rng = SmallRng::seed_from_u64(CHIP_SEED + index as u64);
        let duration_ms = rng.gen_range(3000.0..5000.0);
        let delay_ms = rng.gen_range(0.0..2000.0);

        let float = AnimationDescriptor::new(ElementId::indexed(ids::TECH_CHIP, index), duration_ms)
            .to(TranslateY, rng.gen_range(-20.0..20.0))
            .to(TranslateX, rng.gen_range(-20.0..20.0))
            .to(Rotation, rng.gen_range(-15.0..15.0))
            .ease(Easing::SineInOut)
            .delay(delay_ms)
            .repeat(Repeat::yoyo_forever());
        timeline.add(float, Position::At(0.0))
    })
}

pub fn chip_hover(target: &ElementId) -> HoverPair {
    HoverPair {
        enter: AnimationDescriptor::new(target.clone(), 300.0)
            .to(Scale, 1.2)
            .ease(Easing::back_out()),
        leave: AnimationDescriptor::new(target.clone(), 300.0)
            .to(Scale, 1.0)
            .ease(Easing::back_out()),
    }
}

pub fn typewriter_cycle() -> Result<PhraseCycle, AnimationError> {
    Ok(PhraseCycle::new(TYPEWRITER_PREFIX, TYPEWRITER_PHRASES)?.with_typing_ms(TYPEWRITER_TYPING_MS))
}

// ============================================================================
// About / Projects / Skills
// ============================================================================

/// Bento cards fade in once the section comes into view
pub fn about_reveal(cards: usize) -> Result<ScrollBinding, AnimationError> {
    Ok(ScrollBinding {
        trigger: ElementId::from(ids::ABOUT),
        window: ScrollWindow::starting_at("top 90%")?,
        animation: ScrollAnimation::PlayOnEnter(
            Timeline::new().with_default_easing(Easing::Power2Out).stagger(
                indexed(ids::ABOUT_CARD, cards),
                fade_up(ids::ABOUT_CARD, 20.0, 600.0),
                100.0,
                Position::default(),
            ),
        ),
    })
}

/// Header stays put while the card grid scrolls beneath it
pub fn projects_header_pin() -> Result<ScrollBinding, AnimationError> {
    Ok(ScrollBinding {
        trigger: ElementId::from(ids::PROJECTS),
        window: ScrollWindow::new("top top", "bottom bottom")?,
        animation: ScrollAnimation::Pin {
            target: ElementId::from(ids::PROJECTS_HEADER),
        },
    })
}

/// Cards of the current filter fade in one after another
pub fn project_cards(count: usize) -> Timeline {
    Timeline::new().with_default_easing(Easing::Power2Out).stagger(
        indexed(ids::PROJECT_CARD, count),
        fade_up(ids::PROJECT_CARD, 30.0, 600.0),
        100.0,
        Position::default(),
    )
}

/// Metric and expertise boxes stagger in below the viewport centre
pub fn skills_reveal(boxes: usize) -> Result<ScrollBinding, AnimationError> {
    Ok(ScrollBinding {
        trigger: ElementId::from(ids::SKILLS),
        window: ScrollWindow::starting_at("top center+=100")?,
        animation: ScrollAnimation::PlayOnEnter(
            Timeline::new().with_default_easing(Easing::Power3Out).stagger(
                indexed(ids::SKILL_BOX, boxes),
                fade_up(ids::SKILL_BOX, 20.0, 600.0),
                100.0,
                Position::default(),
            ),
        ),
    })
}

// ============================================================================
// Contact / Footer
// ============================================================================

pub fn contact_reveal(items: usize) -> Result<ScrollBinding, AnimationError> {
    Ok(ScrollBinding {
        trigger: ElementId::from(ids::CONTACT_BODY),
        window: ScrollWindow::new("top 80%", "bottom 20%")?,
        animation: ScrollAnimation::PlayOnEnter(Timeline::new().stagger(
            indexed(ids::CONTACT_ITEM, items),
            fade_up(ids::CONTACT_ITEM, 50.0, 1000.0),
            200.0,
            Position::default(),
        )),
    })
}

pub fn social_hover(target: &ElementId) -> HoverPair {
    HoverPair {
        enter: AnimationDescriptor::new(target.clone(), 300.0)
            .to(Scale, 1.1)
            .ease(Easing::Power2Out),
        leave: AnimationDescriptor::new(target.clone(), 300.0)
            .to(Scale, 1.0)
            .ease(Easing::Power2Out),
    }
}

pub fn footer_reveal(columns: usize) -> Result<ScrollBinding, AnimationError> {
    Ok(ScrollBinding {
        trigger: ElementId::from(ids::FOOTER),
        window: ScrollWindow::starting_at("top 90%")?,
        animation: ScrollAnimation::PlayOnEnter(Timeline::new().stagger(
            indexed(ids::FOOTER_COLUMN, columns),
            fade_up(ids::FOOTER_COLUMN, 30.0, 800.0),
            200.0,
            Position::default(),
        )),
    })
}
