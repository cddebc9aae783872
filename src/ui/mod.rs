// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed state and reports intent through its own
//! `Message` type, which the app maps into its top-level message.
//!
//! - [`header`] - Animated title panel with the neon grid
//! - [`carousel`] - Slide animation, indicators and navigation controls
//! - [`scene`] - Canvas drawing of the framed images
//! - [`photo_viewer`] - Fullscreen overlay for the active photo
//! - [`design_tokens`], [`theming`], [`styles`], [`icons`] - Visual primitives

pub mod carousel;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod photo_viewer;
pub mod scene;
pub mod styles;
pub mod theming;
