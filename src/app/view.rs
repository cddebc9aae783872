// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: header on the left, carousel on the right and the
//! fullscreen viewer stacked above both.

use super::{App, Message};
use crate::config::{GALLERY_WIDTH_PORTION, HEADER_WIDTH_PORTION};
use crate::gallery::presentation;
use crate::ui::carousel::{self, ViewContext};
use crate::ui::photo_viewer::Content;
use crate::ui::scene::StageItem;
use crate::ui::styles;
use iced::widget::{container, Row, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let warning = self.warning.as_deref().map(|key| self.i18n.tr(key));
        let header = container(self.header.view(warning, self.now))
            .width(Length::FillPortion(HEADER_WIDTH_PORTION))
            .height(Length::Fill);

        let gallery = container(self.gallery_view())
            .width(Length::FillPortion(GALLERY_WIDTH_PORTION))
            .height(Length::Fill)
            .style(styles::container::surface);

        let layout = Row::new().push(header).push(gallery);

        let mut root = Stack::new()
            .push(layout)
            .width(Length::Fill)
            .height(Length::Fill);
        if let Some(overlay) = self.viewer.view(self.viewer_content(), self.now) {
            root = root.push(overlay.map(Message::Viewer));
        }
        root.into()
    }

    fn gallery_view(&self) -> Element<'_, Message> {
        if self.sequence.is_empty() {
            return carousel::empty_state(&self.i18n).map(Message::Carousel);
        }

        let navigation = self.controller.view();
        let items = self
            .sequence
            .iter()
            .map(|item| {
                let index = item.index();
                StageItem {
                    image: self.images.get(&index).and_then(|result| result.as_ref().ok()),
                    style: self.slides.style(index, self.now),
                    pose: self.motion.pose(index),
                    active: navigation.is_active(index),
                }
            })
            .collect();

        carousel::view(ViewContext {
            i18n: &self.i18n,
            navigation,
            items,
            text_color: self.colors.text_primary,
        })
        .map(Message::Carousel)
    }

    fn viewer_content(&self) -> Content<'_> {
        let navigation = self.controller.view();
        let index = navigation.active_index;
        let loaded = self.images.get(&index);

        let caption = presentation::counter(&navigation)
            .map(|(position, total)| {
                let position = position.to_string();
                let total = total.to_string();
                self.i18n.tr_with_args(
                    "viewer-caption",
                    &[("position", position.as_str()), ("total", total.as_str())],
                )
            })
            .unwrap_or_default();

        let placeholder = match loaded {
            Some(Err(error)) => self.i18n.tr(error.i18n_key()),
            _ => self.i18n.tr("viewer-loading"),
        };

        Content {
            image: loaded.and_then(|result| result.as_ref().ok()),
            placeholder,
            caption,
            close_label: self.i18n.tr("viewer-close"),
        }
    }
}
