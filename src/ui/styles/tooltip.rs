// SPDX-License-Identifier: MPL-2.0
//! Tooltips for icon-only controls.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted bubble: dark on light themes, light on dark ones.
pub fn bubble(theme: &Theme) -> container::Style {
    let (background, text_color) = if matches!(theme, Theme::Light) {
        (palette::GRAY_900, palette::WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.95,
            ..background
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, tip, position).gap(spacing::XS)
}
