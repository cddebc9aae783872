// SPDX-License-Identifier: MPL-2.0
//! Wheel and keyboard input arbitration.
//!
//! High-frequency channels (mouse wheel, arrow keys) go through an
//! [`InputDebounce`] before reaching the controller. Buttons and indicators
//! bypass it and rely on the controller's transition lock alone.

use super::controller::{NavigationController, Outcome};
use super::timing::TransitionWindow;
use iced::keyboard::{self, key::Named};
use iced::mouse::ScrollDelta;
use std::time::{Duration, Instant};

/// Direction requested by a wheel or key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Next,
    Prev,
}

impl NavRequest {
    /// Maps an arrow key to a direction.
    ///
    /// Down/Right advance, Up/Left go back; every other key is ignored.
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(Named::ArrowDown | Named::ArrowRight) => Some(Self::Next),
            keyboard::Key::Named(Named::ArrowUp | Named::ArrowLeft) => Some(Self::Prev),
            _ => None,
        }
    }

    /// Maps a wheel delta to a direction.
    ///
    /// Iced reports scrolling down as a negative `y`, which advances. A
    /// purely horizontal scroll is ignored.
    pub fn from_wheel(delta: ScrollDelta) -> Option<Self> {
        let y = match delta {
            ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
        };
        if y < 0.0 {
            Some(Self::Next)
        } else if y > 0.0 {
            Some(Self::Prev)
        } else {
            None
        }
    }
}

/// Minimum spacing between accepted wheel/key events.
///
/// Both channels share one clock, so a key press right after an accepted
/// wheel event is absorbed as well.
#[derive(Debug, Clone)]
pub struct InputDebounce {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl InputDebounce {
    pub fn new(window: TransitionWindow) -> Self {
        Self {
            window: window.as_duration(),
            last_accepted: None,
        }
    }

    /// Returns `true` and restarts the window if `now` is at least one
    /// window after the last accepted event.
    pub fn try_accept(&mut self, now: Instant) -> bool {
        let ready = self
            .last_accepted
            .map_or(true, |last| now.saturating_duration_since(last) >= self.window);
        if ready {
            self.last_accepted = Some(now);
        }
        ready
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Routes a wheel or key request to the controller.
///
/// Returns `None` when the event is dropped before reaching the controller:
/// while a transition runs (the debounce clock is left untouched) or inside
/// the debounce window.
pub fn route(
    controller: &mut NavigationController,
    debounce: &mut InputDebounce,
    request: NavRequest,
    now: Instant,
) -> Option<Outcome> {
    if controller.is_transitioning() {
        tracing::trace!(?request, "input dropped while transitioning");
        return None;
    }
    if !debounce.try_accept(now) {
        tracing::trace!(?request, "input debounced");
        return None;
    }
    Some(match request {
        NavRequest::Next => controller.go_next(),
        NavRequest::Prev => controller.go_prev(),
    })
}
