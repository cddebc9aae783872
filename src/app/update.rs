// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::gallery::{self, Outcome};
use crate::ui::{carousel, photo_viewer};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        let at = match &message {
            Message::Tick(at) => *at,
            _ => Instant::now(),
        };
        self.now = self.now.max(at);

        match message {
            Message::Carousel(message) => self.handle_carousel(message),
            Message::Viewer(message) => {
                self.handle_viewer(message);
                Task::none()
            }
            Message::Input(request) => {
                match gallery::route(&mut self.controller, &mut self.debounce, request, self.now) {
                    Some(outcome) => self.after_navigation(outcome),
                    None => Task::none(),
                }
            }
            Message::SequenceLoaded { scan, result } => {
                if scan != self.scan_id {
                    tracing::debug!(scan, latest = self.scan_id, "dropping superseded scan");
                    return Task::none();
                }
                match result {
                    Ok(sequence) => self.install(sequence),
                    Err(error) => {
                        tracing::warn!(%error, "failed to scan gallery sources");
                        self.warning = Some("notification-folder-scan-error".to_string());
                        Task::none()
                    }
                }
            }
            Message::TransitionElapsed { generation } => {
                if generation == self.generation {
                    self.controller.finish_transition();
                }
                Task::none()
            }
            Message::ImageLoaded {
                generation,
                index,
                result,
            } => {
                if generation == self.generation {
                    if let Err(error) = &result {
                        let path = self
                            .sequence
                            .get(index)
                            .map(|item| item.path().display().to_string());
                        tracing::warn!(index, ?path, %error, "image failed to load, showing placeholder");
                    }
                    self.images.insert(index, result);
                }
                Task::none()
            }
            Message::FolderPicked(Some(directory)) => {
                self.warning = None;
                self.scan(vec![directory])
            }
            Message::FileDropped(path) => {
                self.warning = None;
                self.drop_path(path)
            }
            Message::FolderPicked(None) => Task::none(),
            Message::Tick(_) => {
                self.motion.tick(&self.controller.view(), self.now);
                Task::none()
            }
        }
    }

    fn handle_carousel(&mut self, message: carousel::Message) -> Task<Message> {
        let outcome = match message {
            carousel::Message::Jump(index) => self
                .controller
                .request_navigate(i64::try_from(index).unwrap_or(i64::MAX)),
            carousel::Message::Next => self.controller.go_next(),
            carousel::Message::Previous => self.controller.go_prev(),
            carousel::Message::OpenViewer => {
                self.handle_viewer(photo_viewer::Message::Show);
                return Task::none();
            }
            carousel::Message::OpenFolder => {
                return open_folder_dialog(self.i18n.tr("empty-state-button"));
            }
        };
        self.after_navigation(outcome)
    }

    fn handle_viewer(&mut self, message: photo_viewer::Message) {
        match self
            .viewer
            .handle(message, !self.sequence.is_empty(), self.now)
        {
            photo_viewer::Effect::Opened => {
                tracing::debug!(index = self.controller.active_index(), "viewer opened");
            }
            photo_viewer::Effect::Closed => tracing::debug!("viewer closed"),
            photo_viewer::Effect::None => {}
        }
    }

    /// Starts the slide animations and schedules the lock deadline.
    fn after_navigation(&mut self, outcome: Outcome) -> Task<Message> {
        match outcome {
            Outcome::Accepted { unlock_after, .. } => {
                self.slides.sync(&self.controller.view(), self.now);
                let generation = self.generation;
                Task::perform(
                    async move { tokio::time::sleep(unlock_after).await },
                    move |()| Message::TransitionElapsed { generation },
                )
            }
            Outcome::Rejected(_) => Task::none(),
        }
    }
}

fn open_folder_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |folder: Option<PathBuf>| Message::FolderPicked(folder),
    )
}
