// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Solid window background that follows the theme.
pub fn surface(theme: &Theme) -> container::Style {
    let colors = if matches!(theme, Theme::Light) {
        crate::ui::theming::ColorScheme::light()
    } else {
        crate::ui::theming::ColorScheme::dark()
    };

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Fullscreen viewer backdrop, faded by `alpha` during the intro.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * alpha.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Caption strip along the bottom of the fullscreen image.
pub fn caption_strip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION_STRIP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Warning banner shown when the config file could not be read.
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WARNING_500),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
