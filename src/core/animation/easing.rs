//! Easing curves for tweens.
//!
//! Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0`; inputs outside `[0, 1]`
//! are clamped first so callers can pass raw elapsed ratios.

use std::f64::consts::PI;

/// Overshoot used by `back.out` when no explicit strength is given.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

/// Interpolation curve applied to a tween's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Gentle deceleration (the engine default)
    #[default]
    Power1Out,
    Power2In,
    Power2Out,
    Power3Out,
    SineInOut,
    /// Decelerates past the target and settles back; the value is the overshoot strength
    BackOut(f64),
}

impl Easing {
    /// `back.out` with the standard overshoot
    pub fn back_out() -> Self {
        Easing::BackOut(DEFAULT_BACK_OVERSHOOT)
    }

    /// Map linear progress to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power2In => t.powi(3),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}
