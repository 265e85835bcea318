//! Declarative descriptions of transitions.

use derive_more::{Display, From};

use super::easing::Easing;
use super::style::AnimatedProperty;

/// DOM id of an element the controller animates
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the `index`-th child in a family of generated elements, e.g. `menu-item-2`
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{}-{}", prefix, index))
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One property interpolated by a tween.
///
/// `from: None` starts from whatever value the element currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTrack {
    pub property: AnimatedProperty,
    pub from: Option<f64>,
    pub to: f64,
}

/// Repetition of a tween after its first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    /// Extra runs; `None` repeats forever
    pub count: Option<u32>,
    /// Alternate direction on every run
    pub yoyo: bool,
}

impl Repeat {
    pub fn forever() -> Self {
        Self {
            count: None,
            yoyo: false,
        }
    }

    pub fn yoyo_forever() -> Self {
        Self {
            count: None,
            yoyo: true,
        }
    }
}

/// Description of a single tween on one element
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDescriptor {
    pub target: ElementId,
    pub tracks: Vec<PropertyTrack>,
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// `None` falls back to the enclosing timeline's default
    pub easing: Option<Easing>,
    pub repeat: Option<Repeat>,
}

impl AnimationDescriptor {
    pub fn new(target: impl Into<ElementId>, duration_ms: f64) -> Self {
        Self {
            target: target.into(),
            tracks: Vec::new(),
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: None,
            repeat: None,
        }
    }

    /// Animate `property` from its current value to `to`
    pub fn to(mut self, property: AnimatedProperty, to: f64) -> Self {
        self.tracks.push(PropertyTrack {
            property,
            from: None,
            to,
        });
        self
    }

    /// Animate `property` from `from` back to its resting value
    pub fn from(mut self, property: AnimatedProperty, from: f64) -> Self {
        self.tracks.push(PropertyTrack {
            property,
            from: Some(from),
            to: property.resting_value(),
        });
        self
    }

    /// Animate `property` between two explicit values
    pub fn from_to(mut self, property: AnimatedProperty, from: f64, to: f64) -> Self {
        self.tracks.push(PropertyTrack {
            property,
            from: Some(from),
            to,
        });
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Same transition on a different element
    pub fn retarget(&self, target: impl Into<ElementId>) -> Self {
        Self {
            target: target.into(),
            ..self.clone()
        }
    }

    /// Whether any track renders an explicit start value
    pub fn has_explicit_from(&self) -> bool {
        self.tracks.iter().any(|t| t.from.is_some())
    }

    /// Offset from start at which the first run ends, ignoring repeats
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_targets_resting_value() {
        let desc = AnimationDescriptor::new("hero-headline", 1000.0)
            .from(AnimatedProperty::TranslateY, 50.0)
            .from(AnimatedProperty::Opacity, 0.0);

        assert_eq!(desc.tracks.len(), 2);
        assert_eq!(desc.tracks[0].from, Some(50.0));
        assert_eq!(desc.tracks[0].to, 0.0);
        assert_eq!(desc.tracks[1].to, 1.0);
        assert!(desc.has_explicit_from());
    }

    #[test]
    fn test_to_has_no_explicit_from() {
        let desc = AnimationDescriptor::new("menu-item-0", 300.0)
            .to(AnimatedProperty::Scale, 1.1)
            .ease(Easing::Power2Out);

        assert!(!desc.has_explicit_from());
        assert_eq!(desc.easing, Some(Easing::Power2Out));
    }

    #[test]
    fn test_negative_timing_is_clamped() {
        let desc = AnimationDescriptor::new("x", -10.0).delay(-5.0);
        assert_eq!(desc.duration_ms, 0.0);
        assert_eq!(desc.delay_ms, 0.0);
    }

    #[test]
    fn test_retarget_keeps_tracks() {
        let desc = AnimationDescriptor::new("a", 500.0)
            .from(AnimatedProperty::TranslateY, 20.0)
            .delay(400.0);
        let other = desc.retarget("b");

        assert_eq!(other.target, ElementId::from("b"));
        assert_eq!(other.tracks, desc.tracks);
        assert_eq!(other.end_ms(), 900.0);
    }

    #[test]
    fn test_indexed_element_id() {
        assert_eq!(ElementId::indexed("menu-item", 3).as_str(), "menu-item-3");
    }
}
