// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a scroll- and keyboard-driven image gallery built with
//! the Iced GUI framework.
//!
//! The heart of the crate is [`gallery::NavigationController`], a small state
//! machine that owns the active index and a transition lock. Everything on
//! screen (slides, floating frames, indicators, the fullscreen viewer)
//! renders from its read-only [`gallery::NavigationView`].

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
