// SPDX-License-Identifier: MPL-2.0
//! Fullscreen photo viewer overlay.
//!
//! The viewer is a single open/closed flag plus an intro animation. It never
//! talks to the navigation controller: it always shows whatever item is
//! active when it renders.

use crate::animation::{Easing, Timeline};
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, image, mouse_area, text, tooltip, Column, Stack};
use iced::{alignment, Color, ContentFit, Element, Length};
use std::time::{Duration, Instant};

const BACKDROP_INTRO: Duration = Duration::from_millis(400);
const IMAGE_INTRO: Duration = Duration::from_millis(600);
const IMAGE_START_SCALE: f32 = 0.8;

/// Messages for the viewer sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the viewer on the active item.
    Show,
    /// Close via the button, a backdrop click or Escape.
    Close,
    /// Click on the image itself; swallowed so it does not close the viewer.
    ImagePressed,
}

/// Effects produced by viewer changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Prop {
    Backdrop,
    ImageScale,
    ImageOpacity,
}

/// Viewer sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    intro: Timeline<Prop>,
}

/// What the overlay needs to draw the active item.
pub struct Content<'a> {
    pub image: Option<&'a ImageData>,
    /// Localized placeholder text when the image is missing.
    pub placeholder: String,
    pub caption: String,
    pub close_label: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Handles a viewer message.
    ///
    /// `Show` takes effect only when the gallery has an item to show.
    pub fn handle(&mut self, message: Message, has_items: bool, now: Instant) -> Effect {
        match message {
            Message::Show if has_items => {
                if !self.open {
                    self.open = true;
                    self.start_intro(now);
                }
                Effect::Opened
            }
            Message::Show | Message::ImagePressed => Effect::None,
            Message::Close => {
                let was_open = std::mem::replace(&mut self.open, false);
                if was_open {
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
        }
    }

    fn start_intro(&mut self, now: Instant) {
        self.intro
            .animate(Prop::Backdrop, 0.0, 1.0, BACKDROP_INTRO, Easing::Power2Out, now);
        self.intro.animate(
            Prop::ImageScale,
            IMAGE_START_SCALE,
            1.0,
            IMAGE_INTRO,
            Easing::Power3Out,
            now,
        );
        self.intro
            .animate(Prop::ImageOpacity, 0.0, 1.0, IMAGE_INTRO, Easing::Power3Out, now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.open && self.intro.is_animating(now)
    }

    /// Backdrop alpha factor, image scale and image opacity at `now`.
    pub fn intro_values(&self, now: Instant) -> (f32, f32, f32) {
        (
            self.intro.value_or(Prop::Backdrop, 1.0, now),
            self.intro.value_or(Prop::ImageScale, 1.0, now),
            self.intro.value_or(Prop::ImageOpacity, 1.0, now),
        )
    }

    /// Renders the overlay, or `None` while closed.
    pub fn view<'a>(&self, content: Content<'a>, now: Instant) -> Option<Element<'a, Message>> {
        if !self.open {
            return None;
        }
        let (backdrop_alpha, scale, image_alpha) = self.intro_values(now);
        let width = sizing::VIEWER_MAX_WIDTH * scale;

        let picture: Element<'a, Message> = match content.image {
            Some(data) => image(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .opacity(image_alpha)
                .width(Length::Fill)
                .into(),
            None => container(text(content.placeholder).color(palette::GRAY_200))
                .width(Length::Fill)
                .height(Length::Fixed(width * 0.75))
                .center(Length::Fill)
                .into(),
        };

        let close = button(icons::tinted(
            icons::sized(icons::close(), sizing::ICON_MD),
            palette::WHITE,
        ))
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .padding(spacing::XS)
        .style(styles::button::viewer_close)
        .on_press(Message::Close);
        let close = styles::tooltip::styled(close, content.close_label, tooltip::Position::Left);

        let caption = container(
            text(content.caption)
                .size(typography::TITLE_MD)
                .color(Color {
                    a: image_alpha,
                    ..palette::WHITE
                }),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::caption_strip);

        let card = Stack::new()
            .push(Column::new().push(picture).push(caption))
            .push(
                container(close)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .padding(spacing::MD),
            );

        // The card swallows its own clicks; everything else closes.
        let card = mouse_area(container(card).max_width(width)).on_press(Message::ImagePressed);

        let overlay = container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .center(Length::Fill)
            .style(styles::container::backdrop(backdrop_alpha));

        Some(mouse_area(overlay).on_press(Message::Close).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_starts_closed() {
        let state = State::new();
        assert!(!state.is_open());
        let content = Content {
            image: None,
            placeholder: String::new(),
            caption: String::new(),
            close_label: String::new(),
        };
        assert!(state.view(content, Instant::now()).is_none());
    }

    #[test]
    fn show_requires_an_item() {
        let mut state = State::new();
        let now = Instant::now();
        assert_eq!(state.handle(Message::Show, false, now), Effect::None);
        assert!(!state.is_open());

        assert_eq!(state.handle(Message::Show, true, now), Effect::Opened);
        assert!(state.is_open());
    }

    #[test]
    fn close_is_last_write_wins() {
        let mut state = State::new();
        let now = Instant::now();
        let _ = state.handle(Message::Show, true, now);
        let _ = state.handle(Message::Show, true, now);
        assert_eq!(state.handle(Message::Close, true, now), Effect::Closed);
        assert_eq!(state.handle(Message::Close, true, now), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn repeated_show_keeps_the_running_intro() {
        let mut state = State::new();
        let opened = Instant::now();
        let _ = state.handle(Message::Show, true, opened);

        let done = opened + IMAGE_INTRO;
        assert_eq!(state.handle(Message::Show, true, done), Effect::Opened);
        assert!(state.is_open());
        assert!(!state.is_animating(done));
    }

    #[test]
    fn clicking_the_image_keeps_viewer_open() {
        let mut state = State::new();
        let now = Instant::now();
        let _ = state.handle(Message::Show, true, now);
        assert_eq!(state.handle(Message::ImagePressed, true, now), Effect::None);
        assert!(state.is_open());
    }

    #[test]
    fn intro_fades_backdrop_and_grows_image() {
        let mut state = State::new();
        let now = Instant::now();
        let _ = state.handle(Message::Show, true, now);

        assert_eq!(state.intro_values(now), (0.0, IMAGE_START_SCALE, 0.0));
        assert!(state.is_animating(now + Duration::from_millis(500)));

        let done = now + IMAGE_INTRO;
        assert_eq!(state.intro_values(done), (1.0, 1.0, 1.0));
        assert!(!state.is_animating(done));
    }
}
