// SPDX-License-Identifier: MPL-2.0
//! Landing header: retro-wave title, subtitle and the scrolling neon grid.

use crate::animation::{Easing, Timeline};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{container, text, Canvas, Column, Row, Space, Stack};
use iced::{font, mouse, Color, Element, Font, Length, Padding, Point, Rectangle, Renderer, Theme};
use std::time::{Duration, Instant};

/// Left margin reserved for the slide-in so padding never goes negative.
const SLIDE_MARGIN: f32 = 64.0;

const TITLE_SLIDE: f32 = -50.0;
const SUBTITLE_SLIDE: f32 = -30.0;
const TITLE_INTRO: Duration = Duration::from_millis(1000);
const SUBTITLE_INTRO: Duration = Duration::from_millis(800);
const SUBTITLE_DELAY: Duration = Duration::from_millis(500);

/// How strongly a fully glowing letter is tinted toward the accent.
const GLOW_TINT: f32 = 0.45;

/// The title split into its two styled halves.
///
/// The first two words get the retro style, anything after them the wave
/// style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLayout {
    pub retro: Vec<String>,
    pub wave: Option<String>,
}

impl TitleLayout {
    pub fn split(title: &str) -> Self {
        let words: Vec<&str> = title.split_whitespace().collect();
        let retro = words.iter().take(2).map(|w| (*w).to_string()).collect();
        let wave = (words.len() > 2).then(|| words[2..].join(" "));
        Self { retro, wave }
    }

    /// Number of glowing letters, counted across both halves.
    pub fn letter_count(&self) -> usize {
        self.retro.iter().map(|w| w.chars().count()).sum::<usize>()
            + self.wave.as_ref().map_or(0, |w| w.chars().count())
    }
}

/// Glow strength in `[0, 1]` of the letter at `index`, `elapsed` seconds in.
///
/// Each letter runs its own yoyo with a one-way duration of `1.5 + index·0.1`
/// seconds, so neighbours drift out of phase.
#[allow(clippy::cast_precision_loss)]
pub fn glow_intensity(index: usize, elapsed: f32) -> f32 {
    let half_period = 1.5 + index as f32 * 0.1;
    let phase = elapsed.max(0.0) / half_period;
    let fraction = phase.fract();
    let forward = (phase.floor() as u64) % 2 == 0;
    let progress = if forward { fraction } else { 1.0 - fraction };
    Easing::SineInOut.apply(progress)
}

/// Upward scroll of the grid in pixels, one cell per second.
pub fn grid_offset(elapsed: f32) -> f32 {
    elapsed.max(0.0).fract() * sizing::GRID_CELL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Prop {
    TitleOpacity,
    TitleX,
    SubtitleOpacity,
    SubtitleX,
}

/// Header contents and its intro timeline.
#[derive(Debug, Clone)]
pub struct Header {
    layout: TitleLayout,
    subtitle: Option<String>,
    intro: Timeline<Prop>,
    started: Instant,
}

impl Header {
    /// Builds the header and starts its intro at `now`.
    pub fn new(title: &str, subtitle: Option<String>, now: Instant) -> Self {
        let mut intro = Timeline::new();
        intro.animate(Prop::TitleOpacity, 0.0, 1.0, TITLE_INTRO, Easing::Power3Out, now);
        intro.animate(Prop::TitleX, TITLE_SLIDE, 0.0, TITLE_INTRO, Easing::Power3Out, now);
        if subtitle.is_some() {
            intro.animate_delayed(
                Prop::SubtitleOpacity,
                0.0,
                opacity::SUBTITLE,
                SUBTITLE_INTRO,
                Easing::Power2Out,
                now,
                SUBTITLE_DELAY,
            );
            intro.animate_delayed(
                Prop::SubtitleX,
                SUBTITLE_SLIDE,
                0.0,
                SUBTITLE_INTRO,
                Easing::Power2Out,
                now,
                SUBTITLE_DELAY,
            );
        }

        Self {
            layout: TitleLayout::split(title),
            subtitle: subtitle.filter(|s| !s.trim().is_empty()),
            intro,
            started: now,
        }
    }

    pub fn layout(&self) -> &TitleLayout {
        &self.layout
    }

    pub fn is_intro_running(&self, now: Instant) -> bool {
        self.intro.is_animating(now)
    }

    /// Title opacity and horizontal offset at `now`.
    pub fn title_motion(&self, now: Instant) -> (f32, f32) {
        (
            self.intro.value_or(Prop::TitleOpacity, 1.0, now),
            self.intro.value_or(Prop::TitleX, 0.0, now),
        )
    }

    /// Subtitle opacity and horizontal offset at `now`.
    pub fn subtitle_motion(&self, now: Instant) -> (f32, f32) {
        (
            self.intro
                .value_or(Prop::SubtitleOpacity, opacity::SUBTITLE, now),
            self.intro.value_or(Prop::SubtitleX, 0.0, now),
        )
    }

    pub fn view<'a, Message: 'a>(
        &'a self,
        warning: Option<String>,
        now: Instant,
    ) -> Element<'a, Message> {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let (title_alpha, title_x) = self.title_motion(now);

        let mut letter_index = 0;
        let mut title = Column::new().spacing(spacing::XS);

        let mut retro_row = Row::new().spacing(spacing::MD);
        for word in &self.layout.retro {
            retro_row = retro_row.push(letters(
                word,
                &mut letter_index,
                elapsed,
                palette::WHITE,
                title_alpha,
                Font {
                    weight: font::Weight::Black,
                    ..Font::MONOSPACE
                },
            ));
        }
        title = title.push(retro_row);

        if let Some(wave) = &self.layout.wave {
            title = title.push(letters(
                wave,
                &mut letter_index,
                elapsed,
                palette::WAVE_CYAN,
                title_alpha,
                Font {
                    style: font::Style::Italic,
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                },
            ));
        }

        let mut content = Column::new()
            .spacing(spacing::XXL)
            .push(container(title).padding(Padding::ZERO.left(SLIDE_MARGIN + title_x)));

        if let Some(subtitle) = &self.subtitle {
            let (alpha, offset) = self.subtitle_motion(now);
            content = content.push(
                container(
                    text(subtitle.as_str())
                        .size(typography::BODY_LG)
                        .font(Font {
                            family: font::Family::Serif,
                            ..Font::DEFAULT
                        })
                        .color(Color {
                            a: alpha,
                            ..palette::WHITE
                        }),
                )
                .max_width(typography::BODY_LG * 35.0 * 0.5)
                .padding(Padding::ZERO.left(SLIDE_MARGIN + offset)),
            );
        }

        if let Some(message) = warning {
            content = content.push(
                container(text(message).size(typography::CAPTION))
                    .padding(spacing::XS)
                    .style(styles::container::warning_banner),
            );
        }

        let foreground = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::ZERO.top(spacing::XXL * 2.0))
            .align_y(iced::alignment::Vertical::Top);

        Stack::new()
            .push(
                Canvas::new(NeonGrid { elapsed })
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(foreground)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn letters<'a, Message: 'a>(
    word: &str,
    next_index: &mut usize,
    elapsed: f32,
    base: Color,
    alpha: f32,
    font: Font,
) -> Element<'a, Message> {
    let mut row = Row::new();
    for ch in word.chars() {
        if ch == ' ' {
            row = row.push(Space::new().width(Length::Fixed(typography::DISPLAY * 0.3)));
        } else {
            let glow = glow_intensity(*next_index, elapsed) * GLOW_TINT;
            let color = Color {
                r: base.r + (palette::NEON_MAGENTA.r - base.r) * glow,
                g: base.g + (palette::NEON_MAGENTA.g - base.g) * glow,
                b: base.b + (palette::NEON_MAGENTA.b - base.b) * glow,
                a: alpha,
            };
            row = row.push(
                text(ch.to_string())
                    .size(typography::DISPLAY)
                    .font(font)
                    .color(color),
            );
        }
        *next_index += 1;
    }
    row.into()
}

/// Scrolling grid drawn behind the title.
struct NeonGrid {
    elapsed: f32,
}

impl<Message> canvas::Program<Message> for NeonGrid {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = frame.size();
        frame.fill_rectangle(Point::ORIGIN, size, palette::NIGHT);

        // Lines fade out toward the top to suggest a horizon.
        let horizon = size.height * 0.45;
        let cell = sizing::GRID_CELL;
        let offset = grid_offset(self.elapsed);

        let mut y = horizon - offset + cell;
        while y < size.height {
            let depth = ((y - horizon) / (size.height - horizon)).clamp(0.0, 1.0);
            let line = Path::line(Point::new(0.0, y), Point::new(size.width, y));
            frame.stroke(&line, grid_stroke(depth));
            y += cell;
        }

        let mut x = 0.0;
        while x < size.width {
            let line = Path::line(Point::new(x, horizon), Point::new(x, size.height));
            frame.stroke(&line, grid_stroke(0.7));
            x += cell;
        }

        // Dark wedge behind the title.
        let wedge = Path::new(|builder| {
            builder.move_to(Point::new(size.width * 0.15, size.height * 0.42));
            builder.line_to(Point::new(size.width * 0.95, size.height * 0.30));
            builder.line_to(Point::new(size.width * 0.70, size.height * 0.05));
            builder.close();
        });
        frame.fill(&wedge, palette::TITLE_WEDGE);

        vec![frame.into_geometry()]
    }
}

fn grid_stroke(depth: f32) -> Stroke<'static> {
    Stroke::default()
        .with_width(sizing::GRID_LINE)
        .with_color(Color {
            a: 0.15 + 0.85 * depth,
            ..palette::NEON_MAGENTA
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_puts_first_two_words_in_retro_half() {
        let layout = TitleLayout::split("Jack Su Photo Gallery");
        assert_eq!(layout.retro, ["Jack", "Su"]);
        assert_eq!(layout.wave.as_deref(), Some("Photo Gallery"));
        assert_eq!(layout.letter_count(), 4 + 2 + 13);
    }

    #[test]
    fn short_titles_have_no_wave_half() {
        let layout = TitleLayout::split("  Summer   2024 ");
        assert_eq!(layout.retro, ["Summer", "2024"]);
        assert_eq!(layout.wave, None);

        let single = TitleLayout::split("Archive");
        assert_eq!(single.retro, ["Archive"]);
        assert!(TitleLayout::split("").retro.is_empty());
    }

    #[test]
    fn glow_yoyos_with_per_letter_period() {
        assert_eq!(glow_intensity(0, 0.0), 0.0);
        assert!((glow_intensity(0, 1.5) - 1.0).abs() < 1e-4);
        assert!(glow_intensity(0, 3.0).abs() < 1e-4);

        // Letter 5 has a 2.0 s half period.
        assert!((glow_intensity(5, 2.0) - 1.0).abs() < 1e-4);
        assert!(glow_intensity(5, 1.5) < 1.0);
    }

    #[test]
    fn grid_scrolls_one_cell_per_second() {
        assert_eq!(grid_offset(0.0), 0.0);
        assert!((grid_offset(0.5) - sizing::GRID_CELL / 2.0).abs() < 1e-4);
        assert!(grid_offset(1.0).abs() < 1e-4);
    }

    #[test]
    fn intro_slides_title_then_subtitle() {
        let start = Instant::now();
        let header = Header::new("Jack Su Photo Gallery", Some("Scroll".into()), start);

        assert_eq!(header.title_motion(start), (0.0, TITLE_SLIDE));
        assert_eq!(header.subtitle_motion(start), (0.0, SUBTITLE_SLIDE));

        // Subtitle holds until its delay has passed.
        let before_subtitle = start + Duration::from_millis(400);
        assert_eq!(header.subtitle_motion(before_subtitle).0, 0.0);
        assert!(header.title_motion(before_subtitle).0 > 0.0);

        let done = start + SUBTITLE_DELAY + SUBTITLE_INTRO;
        assert_eq!(header.title_motion(done), (1.0, 0.0));
        assert_eq!(header.subtitle_motion(done), (opacity::SUBTITLE, 0.0));
        assert!(!header.is_intro_running(done));
    }

    #[test]
    fn header_without_subtitle_only_animates_title() {
        let start = Instant::now();
        let header = Header::new("Gallery", None, start);
        assert!(!header.is_intro_running(start + TITLE_INTRO));
        assert!(header.is_intro_running(start));
    }
}
