// SPDX-License-Identifier: MPL-2.0
//! Property tweens keyed by an arbitrary property identifier.
//!
//! A [`Timeline`] is fire-and-forget for its callers: register a tween with
//! [`Timeline::animate`] and read the eased value back at render time with
//! [`Timeline::value`]. Time is always passed in explicitly so tests can
//! drive it without a real clock.

use super::easing::Easing;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn value_at(&self, now: Instant) -> f32 {
        if now <= self.start {
            return self.from;
        }
        let elapsed = now - self.start;
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let progress = self.easing.apply(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        self.from + (self.to - self.from) * progress
    }

    fn is_running(&self, now: Instant) -> bool {
        now < self.start + self.duration
    }
}

/// Set of independent tweens, one per property key.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    tweens: HashMap<K, Tween>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            tweens: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tweens `property` from `from` to `to`, starting at `now`.
    ///
    /// Replaces any tween already registered for the same property.
    pub fn animate(
        &mut self,
        property: K,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        self.animate_delayed(property, from, to, duration, easing, now, Duration::ZERO);
    }

    /// Like [`Timeline::animate`], but the tween holds `from` until `delay`
    /// has passed.
    #[allow(clippy::too_many_arguments)]
    pub fn animate_delayed(
        &mut self,
        property: K,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
        delay: Duration,
    ) {
        self.tweens.insert(
            property,
            Tween {
                from,
                to,
                start: now + delay,
                duration,
                easing,
            },
        );
    }

    /// Tweens `property` from wherever it currently is toward `to`.
    ///
    /// A property that was never animated starts from `fallback`. Nothing
    /// happens if the property is already heading to `to`.
    pub fn retarget(
        &mut self,
        property: K,
        fallback: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        if self
            .tweens
            .get(&property)
            .is_some_and(|tween| (tween.to - to).abs() <= f32::EPSILON)
        {
            return;
        }
        let from = self.value(property, now).unwrap_or(fallback);
        self.animate(property, from, to, duration, easing, now);
    }

    /// Snaps `property` to `value` with no animation.
    pub fn set(&mut self, property: K, value: f32, now: Instant) {
        self.animate(property, value, value, Duration::ZERO, Easing::Linear, now);
    }

    /// Current value of `property`, or `None` if it was never animated.
    pub fn value(&self, property: K, now: Instant) -> Option<f32> {
        self.tweens.get(&property).map(|tween| tween.value_at(now))
    }

    /// Current value of `property`, or `default` if it was never animated.
    pub fn value_or(&self, property: K, default: f32, now: Instant) -> f32 {
        self.value(property, now).unwrap_or(default)
    }

    /// Whether any tween (including a delayed one) is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tweens.values().any(|tween| tween.is_running(now))
    }
}
