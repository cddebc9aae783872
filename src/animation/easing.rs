// SPDX-License-Identifier: MPL-2.0
//! Named easing curves.

use std::f32::consts::PI;

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    #[default]
    Power2Out,
    /// Cubic ease-out.
    Power3Out,
    /// Quadratic ease-in.
    Power2In,
    SineInOut,
}

impl Easing {
    /// Applies the curve. Input outside `[0, 1]` is clamped first.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(2),
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2In => t * t,
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
