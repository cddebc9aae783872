// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for timing and layout
//! defaults. In particular the transition window below is read by the
//! navigation lock, the wheel/key debounce and the slide animations alike.

use std::time::Duration;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default length of a carousel transition, in milliseconds.
///
/// Navigation stays locked for this long after an accepted request, and
/// wheel/key input is spaced by the same amount.
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Minimum accepted transition length (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 100;

/// Maximum accepted transition length (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// [`DEFAULT_TRANSITION_MS`] as a `Duration`.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(DEFAULT_TRANSITION_MS);

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Title shown on the landing view when none is configured.
pub const DEFAULT_TITLE: &str = "Jack Su Photo Gallery";

/// Subtitle shown under the title when none is configured.
pub const DEFAULT_SUBTITLE: &str = "Scroll to explore beautiful images in our collection";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Share of the window width given to the header column (percent).
pub const HEADER_WIDTH_PORTION: u16 = 35;

/// Share of the window width given to the carousel column (percent).
pub const GALLERY_WIDTH_PORTION: u16 = 65;
