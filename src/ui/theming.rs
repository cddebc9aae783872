// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Window background behind both columns.
    pub surface_primary: Color,
    /// Carousel stage background.
    pub surface_stage: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Accent for glow and focus.
    pub brand_primary: Color,

    /// Round translucent controls (previous/next, close).
    pub control_background: Color,
    pub control_hover: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,

    pub warning: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_100,
            surface_stage: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::NEON_MAGENTA,

            control_background: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
            control_hover: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },

            overlay_background: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,

            warning: palette::WARNING_500,
        }
    }

    /// The gallery's native look: white text on black.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::BLACK,
            surface_stage: palette::BLACK,

            text_primary: palette::WHITE,
            text_secondary: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },

            brand_primary: palette::NEON_MAGENTA,

            control_background: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            control_hover: Color {
                a: 0.4,
                ..palette::WHITE
            },

            overlay_background: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,

            warning: palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// Matching built-in Iced theme.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.8);
    }

    #[test]
    fn dark_theme_is_black_with_white_text() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.05);
        assert_eq!(scheme.text_primary, palette::WHITE);
    }

    #[test]
    fn backdrop_is_translucent_in_both_themes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!((scheme.overlay_background.a - opacity::BACKDROP).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), iced::Theme::Dark);
        // System mode depends on the desktop, only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }
}
