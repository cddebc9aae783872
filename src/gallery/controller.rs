// SPDX-License-Identifier: MPL-2.0
//! Navigation controller for the carousel.
//!
//! The controller owns the only mutable copy of the navigation state. Every
//! input channel (indicator click, previous/next buttons, wheel, arrow keys)
//! ends up in [`NavigationController::request_navigate`]. An accepted request
//! moves the active index immediately and locks navigation for one
//! [`TransitionWindow`]; the caller schedules the unlock and reports it back
//! through [`NavigationController::finish_transition`].
//!
//! Rejected requests never change state and are never surfaced to the user.

use super::timing::TransitionWindow;
use std::time::Duration;

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A previous transition is still in flight.
    Transitioning,
    /// The target is already the active item.
    AlreadyActive,
    /// The target lies outside the sequence.
    OutOfRange,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an accepted outcome carries the unlock deadline to schedule"]
pub enum Outcome {
    Accepted {
        from: usize,
        to: usize,
        /// Delay after which [`NavigationController::finish_transition`]
        /// must be called.
        unlock_after: Duration,
    },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Read-only snapshot handed to the presentation layer and the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationView {
    pub active_index: usize,
    pub transitioning: bool,
    pub len: usize,
}

impl NavigationView {
    /// Whether a "previous" request could currently be accepted.
    pub fn can_go_prev(&self) -> bool {
        !self.transitioning && self.active_index > 0
    }

    /// Whether a "next" request could currently be accepted.
    pub fn can_go_next(&self) -> bool {
        !self.transitioning && self.active_index + 1 < self.len
    }

    /// Whether `index` is the active item.
    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active_index
    }
}

/// Two-state machine: idle, or transitioning until the deadline fires.
#[derive(Debug, Clone)]
pub struct NavigationController {
    len: usize,
    active_index: usize,
    transitioning: bool,
    window: TransitionWindow,
}

impl NavigationController {
    /// Creates an idle controller positioned on the first item.
    pub fn new(len: usize, window: TransitionWindow) -> Self {
        Self {
            len,
            active_index: 0,
            transitioning: false,
            window,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn window(&self) -> TransitionWindow {
        self.window
    }

    pub fn view(&self) -> NavigationView {
        NavigationView {
            active_index: self.active_index,
            transitioning: self.transitioning,
            len: self.len,
        }
    }

    /// Requests that `target` become the active item.
    ///
    /// Checks run in a fixed order: the transition lock first, then the
    /// already-active case, then the range. Out-of-range targets are
    /// dropped, not clamped.
    pub fn request_navigate(&mut self, target: i64) -> Outcome {
        let outcome = self.evaluate(target);
        match outcome {
            Outcome::Accepted { from, to, .. } => {
                self.active_index = to;
                self.transitioning = true;
                tracing::debug!(from, to, lock_ms = self.window.millis(), "navigation accepted");
            }
            Outcome::Rejected(reason) => {
                tracing::trace!(target, ?reason, "navigation dropped");
            }
        }
        outcome
    }

    pub fn go_next(&mut self) -> Outcome {
        let target = i64::try_from(self.active_index).map_or(i64::MAX, |i| i.saturating_add(1));
        self.request_navigate(target)
    }

    pub fn go_prev(&mut self) -> Outcome {
        let target = i64::try_from(self.active_index).map_or(i64::MAX, |i| i - 1);
        self.request_navigate(target)
    }

    /// Releases the transition lock. Calling it while idle does nothing.
    pub fn finish_transition(&mut self) {
        if self.transitioning {
            self.transitioning = false;
            tracing::trace!(active = self.active_index, "transition finished");
        }
    }

    fn evaluate(&self, target: i64) -> Outcome {
        if self.transitioning {
            return Outcome::Rejected(Rejection::Transitioning);
        }
        if usize::try_from(target).is_ok_and(|t| t == self.active_index) && self.len > 0 {
            return Outcome::Rejected(Rejection::AlreadyActive);
        }
        match usize::try_from(target) {
            Ok(to) if to < self.len => Outcome::Accepted {
                from: self.active_index,
                to,
                unlock_after: self.window.as_duration(),
            },
            _ => Outcome::Rejected(Rejection::OutOfRange),
        }
    }
}
