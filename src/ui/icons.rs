// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Sources live in `assets/icons/` and are embedded at compile time. Handles
//! are created once and cached in a `OnceLock`. Icons are drawn white and
//! tinted at render time through [`tinted`].

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(chevron_left, "chevron-left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron-right.svg", "Chevron pointing right.");
define_icon!(close, "close.svg", "Diagonal cross.");
define_icon!(folder, "folder.svg", "Closed folder outline.");
define_icon!(image, "image.svg", "Picture frame with a mountain.");

/// Sets both dimensions of an icon.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
