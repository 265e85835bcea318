//! Animated style state of a single element.

use derive_more::Display;

/// Properties the controller is allowed to animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum AnimatedProperty {
    #[display("x")]
    TranslateX,
    #[display("y")]
    TranslateY,
    #[display("opacity")]
    Opacity,
    #[display("scale")]
    Scale,
    #[display("rotation")]
    Rotation,
}

impl AnimatedProperty {
    /// Value the property has when nothing animates it
    pub fn resting_value(&self) -> f64 {
        match self {
            AnimatedProperty::Opacity | AnimatedProperty::Scale => 1.0,
            AnimatedProperty::TranslateX
            | AnimatedProperty::TranslateY
            | AnimatedProperty::Rotation => 0.0,
        }
    }
}

/// Current animated values of an element.
///
/// Translation is in pixels, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub translate_x: f64,
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            opacity: 1.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl StyleState {
    pub fn get(&self, property: AnimatedProperty) -> f64 {
        match property {
            AnimatedProperty::TranslateX => self.translate_x,
            AnimatedProperty::TranslateY => self.translate_y,
            AnimatedProperty::Opacity => self.opacity,
            AnimatedProperty::Scale => self.scale,
            AnimatedProperty::Rotation => self.rotation,
        }
    }

    pub fn set(&mut self, property: AnimatedProperty, value: f64) {
        match property {
            AnimatedProperty::TranslateX => self.translate_x = value,
            AnimatedProperty::TranslateY => self.translate_y = value,
            AnimatedProperty::Opacity => self.opacity = value.clamp(0.0, 1.0),
            AnimatedProperty::Scale => self.scale = value,
            AnimatedProperty::Rotation => self.rotation = value,
        }
    }

    /// Whether every property sits at its resting value
    pub fn is_resting(&self) -> bool {
        *self == StyleState::default()
    }

    /// CSS `transform` value
    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
            self.translate_x, self.translate_y, self.rotation, self.scale
        )
    }

    /// CSS `opacity` value
    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}
