// SPDX-License-Identifier: MPL-2.0
//! Vertical carousel: stage, indicator pills and navigation controls.
//!
//! The carousel never decides what is active. It reads a [`NavigationView`],
//! animates each item toward its slot and emits [`Message`]s that the app
//! forwards to the controller.

use crate::animation::{Easing, Timeline};
use crate::gallery::{presentation, NavigationView, Slot, SlotStyle, TransitionWindow};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::scene::{Stage, StageItem};
use crate::ui::{icons, styles};
use iced::widget::{button, canvas, container, text, tooltip, Column, Container, Row, Space, Stack};
use iced::{alignment, Color, Element, Length};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Indicator pill clicked.
    Jump(usize),
    Previous,
    Next,
    /// Active frame clicked.
    OpenViewer,
    /// Empty-state button.
    OpenFolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Channel {
    Opacity,
    Scale,
    Offset,
}

/// Slide animation state for every item.
#[derive(Debug, Clone)]
pub struct Animator {
    timeline: Timeline<(usize, Channel)>,
    window: TransitionWindow,
    len: usize,
}

impl Animator {
    /// Places every item at its slot without animating.
    pub fn new(view: &NavigationView, window: TransitionWindow, now: Instant) -> Self {
        let mut timeline = Timeline::new();
        for index in 0..view.len {
            let target = Slot::for_index(index, view).target();
            timeline.set((index, Channel::Opacity), target.opacity, now);
            timeline.set((index, Channel::Scale), target.scale, now);
            timeline.set((index, Channel::Offset), target.offset, now);
        }
        Self {
            timeline,
            window,
            len: view.len,
        }
    }

    /// Starts tweens toward the slots of `view`. Items already heading to
    /// their target keep their running tween.
    pub fn sync(&mut self, view: &NavigationView, now: Instant) {
        let duration = self.window.as_duration();
        for index in 0..self.len.min(view.len) {
            let target = Slot::for_index(index, view).target();
            for (channel, to) in [
                (Channel::Opacity, target.opacity),
                (Channel::Scale, target.scale),
                (Channel::Offset, target.offset),
            ] {
                self.timeline
                    .retarget((index, channel), to, to, duration, Easing::Power2Out, now);
            }
        }
    }

    pub fn style(&self, index: usize, now: Instant) -> SlotStyle {
        let rest = Slot::Upcoming.target();
        SlotStyle {
            opacity: self
                .timeline
                .value_or((index, Channel::Opacity), rest.opacity, now),
            scale: self.timeline.value_or((index, Channel::Scale), rest.scale, now),
            offset: self
                .timeline
                .value_or((index, Channel::Offset), rest.offset, now),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.timeline.is_animating(now)
    }
}

/// Everything the carousel needs for one render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: NavigationView,
    pub items: Vec<StageItem<'a>>,
    pub text_color: Color,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        navigation,
        items,
        text_color,
    } = ctx;

    let stage = canvas(Stage::new(items).on_open(Message::OpenViewer))
        .width(Length::Fill)
        .height(Length::Fill);

    let indicators = container(indicator_column(&navigation, i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    let controls = container(controls_bar(&navigation, i18n, text_color))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG);

    Stack::new()
        .push(stage)
        .push(indicators)
        .push(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn indicator_column<'a>(navigation: &NavigationView, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    for indicator in presentation::indicators(navigation) {
        let height = if indicator.active {
            sizing::INDICATOR_HEIGHT * sizing::INDICATOR_ACTIVE_STRETCH
        } else {
            sizing::INDICATOR_HEIGHT
        };
        let pill = button(Space::new())
            .width(Length::Fixed(sizing::INDICATOR_WIDTH))
            .height(Length::Fixed(height))
            .padding(0)
            .style(styles::button::indicator(indicator.active))
            .on_press_maybe(indicator.enabled.then_some(Message::Jump(indicator.index)));
        let position = (indicator.index + 1).to_string();
        let tip = i18n.tr_with_args("gallery-indicator", &[("position", position.as_str())]);
        column = column.push(styles::tooltip::styled(pill, tip, tooltip::Position::Left));
    }

    column.into()
}

fn controls_bar<'a>(
    navigation: &NavigationView,
    i18n: &I18n,
    text_color: Color,
) -> Element<'a, Message> {
    let nav_button = |icon: iced::widget::Svg<'static>, enabled: bool, message: Message| {
        button(
            container(icons::tinted(icons::sized(icon, sizing::ICON_MD), text_color))
                .center(Length::Fill),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .padding(0)
        .style(styles::button::round_control)
        .on_press_maybe(enabled.then_some(message))
    };

    let previous = nav_button(
        icons::chevron_left(),
        navigation.can_go_prev() && !navigation.transitioning,
        Message::Previous,
    );
    let next = nav_button(
        icons::chevron_right(),
        navigation.can_go_next() && !navigation.transitioning,
        Message::Next,
    );

    let counter = presentation::counter(navigation)
        .map(|(position, total)| {
            let position = position.to_string();
            let total = total.to_string();
            i18n.tr_with_args(
                "gallery-counter",
                &[("position", position.as_str()), ("total", total.as_str())],
            )
        })
        .unwrap_or_default();

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(styles::tooltip::styled(
            previous,
            i18n.tr("gallery-previous"),
            tooltip::Position::Top,
        ))
        .push(text(counter).size(typography::BODY_LG).color(text_color))
        .push(styles::tooltip::styled(
            next,
            i18n.tr("gallery-next"),
            tooltip::Position::Top,
        ));

    let hint = text(i18n.tr("gallery-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.6,
            ..text_color
        });

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(row)
        .push(hint)
        .into()
}

/// Shown instead of the carousel when there is nothing to browse.
pub fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::tinted(
        icons::sized(icons::image(), sizing::ICON_MD * 3.0),
        palette::GRAY_400,
    );

    let title = text(i18n.tr("empty-state-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = text(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let button_content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::folder(), sizing::ICON_MD),
            palette::WHITE,
        ))
        .push(text(i18n.tr("empty-state-button")));

    let open_button = button(button_content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFolder);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
