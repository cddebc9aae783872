// SPDX-License-Identifier: MPL-2.0
//! Transition window domain type.
//!
//! One value bounds every timing gate of the carousel: how long navigation
//! stays locked after an accepted request, the minimum spacing of accepted
//! wheel/key events, and the duration of the slide animation.

use crate::config::{DEFAULT_TRANSITION_MS, MAX_TRANSITION_MS, MIN_TRANSITION_MS};
use std::time::Duration;

/// Length of one carousel transition.
///
/// # Example
///
/// ```
/// use iced_gallery::gallery::TransitionWindow;
///
/// let window = TransitionWindow::from_millis(800);
/// assert_eq!(window.as_duration().as_millis(), 800);
///
/// // Values outside range are clamped
/// let too_long = TransitionWindow::from_millis(60_000);
/// assert_eq!(too_long.as_duration().as_millis(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransitionWindow(u64);

impl TransitionWindow {
    /// Creates a transition window, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns the window scaled by `factor`, rounded to whole milliseconds.
    ///
    /// Used to derive secondary animation lengths from the same base value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled(self, factor: f32) -> Duration {
        let millis = (self.0 as f32 * factor.max(0.0)).round() as u64;
        Duration::from_millis(millis)
    }
}

impl Default for TransitionWindow {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_clamps_to_valid_range() {
        assert_eq!(TransitionWindow::from_millis(0).millis(), MIN_TRANSITION_MS);
        assert_eq!(
            TransitionWindow::from_millis(u64::MAX).millis(),
            MAX_TRANSITION_MS
        );
    }

    #[test]
    fn from_millis_accepts_valid_values() {
        assert_eq!(TransitionWindow::from_millis(250).millis(), 250);
        assert_eq!(TransitionWindow::from_millis(800).millis(), 800);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(TransitionWindow::default().millis(), 800);
    }

    #[test]
    fn scaled_derives_secondary_durations() {
        let window = TransitionWindow::from_millis(800);
        assert_eq!(window.scaled(1.5), Duration::from_millis(1200));
        assert_eq!(window.scaled(0.5), Duration::from_millis(400));
        assert_eq!(window.scaled(-1.0), Duration::ZERO);
    }
}
