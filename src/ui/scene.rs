// SPDX-License-Identifier: MPL-2.0
//! Framed-image scene drawn on a canvas.
//!
//! Each item is a white frame with the picture inset, projected as if seen
//! by a camera six units away. [`SceneMotion`] owns the per-frame floating
//! motion; [`Stage`] turns poses and slot styles into canvas geometry.

use crate::animation::{Easing, Timeline};
use crate::gallery::{NavigationView, SlotStyle, TransitionWindow};
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, radius, sizing};
use iced::advanced::image::Image;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Instant;

/// Distance from the camera to the frame plane, in scene units.
const CAMERA_DISTANCE: f32 = 6.0;

/// Vertical field of view of the camera, in degrees.
const CAMERA_FOV_DEG: f32 = 45.0;

/// Depth an item is pushed toward the camera when it becomes active.
const ACTIVE_DEPTH: f32 = 0.5;

/// Depth and roll tween lengths, relative to the transition window.
const DEPTH_TWEEN_FACTOR: f32 = 1.5;
const ROLL_TWEEN_FACTOR: f32 = 1.25;

/// Fraction of the remaining distance an inactive pose recovers each frame.
const SETTLE_FACTOR: f32 = 0.1;

/// Orientation and offset of one frame.
///
/// `tilt` turns the frame around its vertical axis and `roll` around the
/// view axis (both in radians). `lift` and `depth` are in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub tilt: f32,
    pub lift: f32,
    pub depth: f32,
    pub roll: f32,
}

impl Pose {
    /// Perspective scale for the current depth.
    pub fn depth_scale(&self) -> f32 {
        CAMERA_DISTANCE / (CAMERA_DISTANCE - self.depth).max(0.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Axis {
    Depth,
    Roll,
}

/// Procedural motion for every item of a gallery.
#[derive(Debug, Clone)]
pub struct SceneMotion {
    poses: Vec<Pose>,
    tweens: Timeline<(usize, Axis)>,
    epoch: Instant,
    active: Option<usize>,
    window: TransitionWindow,
}

impl SceneMotion {
    pub fn new(len: usize, window: TransitionWindow, epoch: Instant) -> Self {
        Self {
            poses: vec![Pose::default(); len],
            tweens: Timeline::new(),
            epoch,
            active: None,
            window,
        }
    }

    pub fn pose(&self, index: usize) -> Pose {
        self.poses.get(index).copied().unwrap_or_default()
    }

    /// Advances every pose to `now`.
    pub fn tick(&mut self, view: &NavigationView, now: Instant) {
        if view.len > 0 && self.active != Some(view.active_index) {
            self.on_activated(view.active_index, now);
        }

        let t = now.saturating_duration_since(self.epoch).as_secs_f32();
        for (index, pose) in self.poses.iter_mut().enumerate() {
            if view.is_active(index) {
                pose.tilt = (t * 0.3).sin() * 0.1;
                pose.lift = (t * 0.5).sin() * 0.1;
            } else {
                pose.tilt = lerp(pose.tilt, 0.0, SETTLE_FACTOR);
                pose.lift = lerp(pose.lift, 0.0, SETTLE_FACTOR);
            }
            pose.depth = self.tweens.value_or((index, Axis::Depth), pose.depth, now);
            pose.roll = self.tweens.value_or((index, Axis::Roll), pose.roll, now);
        }
    }

    fn on_activated(&mut self, index: usize, now: Instant) {
        if let Some(previous) = self.active {
            let depth = self.pose(previous).depth;
            self.tweens.animate(
                (previous, Axis::Depth),
                depth,
                0.0,
                self.window.as_duration(),
                Easing::Power2In,
                now,
            );
        }

        let pose = self.pose(index);
        self.tweens.animate(
            (index, Axis::Depth),
            pose.depth,
            ACTIVE_DEPTH,
            self.window.scaled(DEPTH_TWEEN_FACTOR),
            Easing::Power2Out,
            now,
        );
        self.tweens.animate(
            (index, Axis::Roll),
            pose.roll,
            0.0,
            self.window.scaled(ROLL_TWEEN_FACTOR),
            Easing::Power3Out,
            now,
        );
        self.active = Some(index);
    }
}

fn lerp(from: f32, to: f32, factor: f32) -> f32 {
    from + (to - from) * factor
}

/// Largest size with `aspect` (width / height) that fits in `area`.
pub fn fit_contain(aspect: f32, area: Size) -> Size {
    if aspect <= 0.0 || !aspect.is_finite() {
        return area;
    }
    if area.width / area.height > aspect {
        Size::new(area.height * aspect, area.height)
    } else {
        Size::new(area.width, area.width / aspect)
    }
}

/// Pixels per scene unit for a stage of the given size.
///
/// The frame area spans [`sizing::STAGE_HEIGHT_RATIO`] of the height; the
/// frame is never allowed to overflow the width.
pub fn pixels_per_unit(stage: Size) -> f32 {
    let visible_height = 2.0 * CAMERA_DISTANCE * (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
    let by_height = stage.height * sizing::STAGE_HEIGHT_RATIO / visible_height;
    let by_width = stage.width / (sizing::FRAME_WIDTH * 1.1);
    by_height.min(by_width).max(0.0)
}

/// One item as the stage should draw it.
#[derive(Debug, Clone, Copy)]
pub struct StageItem<'a> {
    pub image: Option<&'a ImageData>,
    pub style: SlotStyle,
    pub pose: Pose,
    pub active: bool,
}

/// Canvas program drawing all visible frames.
pub struct Stage<'a, Message> {
    items: Vec<StageItem<'a>>,
    on_open: Option<Message>,
}

impl<'a, Message> Stage<'a, Message> {
    pub fn new(items: Vec<StageItem<'a>>) -> Self {
        Self {
            items,
            on_open: None,
        }
    }

    /// Message published when the active frame is clicked.
    #[must_use]
    pub fn on_open(mut self, message: Message) -> Self {
        self.on_open = Some(message);
        self
    }

    fn active_frame_bounds(&self, bounds: Rectangle) -> Option<Rectangle> {
        let item = self.items.iter().find(|item| item.active)?;
        let ppu = pixels_per_unit(bounds.size());
        let scale = item.style.scale * item.pose.depth_scale();
        let width = sizing::FRAME_WIDTH * ppu * scale * item.pose.tilt.cos();
        let height = sizing::FRAME_HEIGHT * ppu * scale;
        let center = frame_center(bounds.size(), item, ppu);
        Some(Rectangle {
            x: bounds.x + center.x - width / 2.0,
            y: bounds.y + center.y - height / 2.0,
            width,
            height,
        })
    }
}

fn frame_center(stage: Size, item: &StageItem<'_>, ppu: f32) -> Point {
    Point::new(
        stage.width / 2.0,
        stage.height / 2.0 + item.style.offset * stage.height - item.pose.lift * ppu,
    )
}

fn draw_item(frame: &mut Frame, item: &StageItem<'_>, ppu: f32) {
    let opacity = item.style.opacity.clamp(0.0, 1.0);
    let center = frame_center(frame.size(), item, ppu);
    let scale = item.style.scale * item.pose.depth_scale();

    frame.with_save(|frame| {
        frame.translate(Vector::new(center.x, center.y));
        frame.rotate(item.pose.roll);
        frame.scale_nonuniform(Vector::new(scale * item.pose.tilt.cos(), scale));

        let frame_size = Size::new(sizing::FRAME_WIDTH * ppu, sizing::FRAME_HEIGHT * ppu);
        let border = Path::rounded_rectangle(
            Point::new(-frame_size.width / 2.0, -frame_size.height / 2.0),
            frame_size,
            radius::SM.into(),
        );
        frame.fill(
            &border,
            Color {
                a: opacity,
                ..palette::WHITE
            },
        );

        let picture_area = Size::new(sizing::PICTURE_WIDTH * ppu, sizing::PICTURE_HEIGHT * ppu);
        match item.image {
            Some(image) => {
                let fitted = fit_contain(image.aspect_ratio(), picture_area);
                let bounds = Rectangle::new(
                    Point::new(-fitted.width / 2.0, -fitted.height / 2.0),
                    fitted,
                );
                frame.draw_image(bounds, Image::new(image.handle.clone()).opacity(opacity));
            }
            None => {
                frame.fill_rectangle(
                    Point::new(-picture_area.width / 2.0, -picture_area.height / 2.0),
                    picture_area,
                    Color {
                        a: opacity,
                        ..palette::PLACEHOLDER
                    },
                );
            }
        }
    });
}

impl<Message: Clone> canvas::Program<Message> for Stage<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event else {
            return None;
        };
        let message = self.on_open.clone()?;
        let position = cursor.position()?;
        self.active_frame_bounds(bounds)
            .filter(|frame| frame.contains(position))
            .map(|_| Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let ppu = pixels_per_unit(bounds.size());

        // Active frame last so it sits on top.
        let visible = self.items.iter().filter(|item| item.style.is_visible());
        for item in visible.clone().filter(|item| !item.active) {
            draw_item(&mut frame, item, ppu);
        }
        for item in visible.filter(|item| item.active) {
            draw_item(&mut frame, item, ppu);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_active = cursor
            .position()
            .zip(self.active_frame_bounds(bounds))
            .is_some_and(|(position, frame)| frame.contains(position));
        if over_active && self.on_open.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
