// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn scheme_for(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}

/// Primary action (the empty-state "Open folder" button).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::NEON_MAGENTA
        },
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::NEON_MAGENTA,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Round translucent control: previous/next and the viewer's close button.
///
/// Disabled controls fade out instead of changing color.
pub fn round_control(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme_for(theme);
    let (background, alpha) = match status {
        button::Status::Hovered | button::Status::Pressed => (colors.control_hover, 1.0),
        button::Status::Disabled => (colors.control_background, opacity::DISABLED),
        button::Status::Active => (colors.control_background, 1.0),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: background.a * alpha,
            ..background
        })),
        text_color: Color {
            a: alpha,
            ..colors.text_primary
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Close button drawn over the image, always light on dark.
pub fn viewer_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Indicator pill. The active one is opaque, the others translucent.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = scheme_for(theme).text_primary;
        let alpha = match (active, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => opacity::OVERLAY_MEDIUM,
            (false, _) => opacity::INDICATOR_IDLE,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            text_color: base,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent button wrapping a clickable area (the active frame).
pub fn invisible(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
