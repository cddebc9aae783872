// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to top-level messages here: wheel and arrow keys
//! become navigation input, `Enter`/`Escape` drive the viewer and dropped
//! files replace the gallery.

use super::Message;
use crate::gallery::NavRequest;
use crate::ui::photo_viewer;
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Animation frame interval.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the event subscription plus the frame tick.
///
/// The header grid scrolls forever, so the tick never stops.
pub fn create() -> Subscription<Message> {
    Subscription::batch([
        event::listen_with(route_event),
        time::every(FRAME_INTERVAL).map(Message::Tick),
    ])
}

fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            NavRequest::from_wheel(delta).map(Message::Input)
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            route_key(&key)
        }
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

fn route_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(Named::Escape) => {
            Some(Message::Viewer(photo_viewer::Message::Close))
        }
        keyboard::Key::Named(Named::Enter) => Some(Message::Viewer(photo_viewer::Message::Show)),
        other => NavRequest::from_key(other).map(Message::Input),
    }
}
