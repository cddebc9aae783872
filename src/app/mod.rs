// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery components.
//!
//! The `App` struct owns the navigation controller and every piece of state
//! that renders from it. Components only ever see a `NavigationView`; all
//! mutations happen in `update` and go through the controller.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::gallery::{GallerySequence, InputDebounce, NavigationController};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::carousel;
use crate::ui::header::Header;
use crate::ui::photo_viewer;
use crate::ui::scene::SceneMotion;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    sequence: GallerySequence,
    controller: NavigationController,
    debounce: InputDebounce,
    motion: SceneMotion,
    slides: carousel::Animator,
    header: Header,
    viewer: photo_viewer::State,
    /// Decoded images by sequence index. Missing entries are still loading.
    images: HashMap<usize, Result<ImageData, Error>>,
    /// Bumped whenever the sequence is replaced so stale task results are
    /// ignored.
    generation: u64,
    /// Id of the newest scan; older scan results are dropped.
    scan_id: u64,
    /// Paths dropped in the current drop gesture.
    drops: Vec<PathBuf>,
    last_drop: Option<Instant>,
    theme: Theme,
    colors: ColorScheme,
    /// i18n key of a warning shown under the header.
    warning: Option<String>,
    /// Time of the last processed message; every render reads it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.sequence.len())
            .field("navigation", &self.controller.view())
            .field("viewer_open", &self.viewer.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;

/// Drops closer together than this belong to one gesture and are merged
/// into a single gallery.
pub const DROP_GESTURE: Duration = Duration::from_millis(250);

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations, then kicks off the initial
    /// sequence scan.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags.lang.clone(), config, config_warning, &flags);

        let sources = if flags.paths.is_empty() {
            configured_sources(&app.config)
        } else {
            flags.paths
        };
        let task = app.scan(sources);
        (app, task)
    }

    fn with_config(
        lang: Option<String>,
        config: Config,
        warning: Option<String>,
        flags: &Flags,
    ) -> Self {
        let now = Instant::now();
        let i18n = I18n::new(lang, &config);
        let window = config.transition_window();
        let theme_mode: ThemeMode = config.general.theme_mode;

        let title = flags
            .title
            .clone()
            .or_else(|| config.header.title.clone())
            .unwrap_or_else(|| config::DEFAULT_TITLE.to_string());
        let subtitle = flags
            .subtitle
            .clone()
            .or_else(|| config.header.subtitle.clone())
            .or_else(|| Some(config::DEFAULT_SUBTITLE.to_string()));

        let controller = NavigationController::new(0, window);
        let view = controller.view();

        tracing::info!(
            locale = %i18n.current_locale(),
            transition_ms = window.millis(),
            "starting gallery"
        );

        Self {
            i18n,
            sequence: GallerySequence::default(),
            controller,
            debounce: InputDebounce::new(window),
            motion: SceneMotion::new(0, window, now),
            slides: carousel::Animator::new(&view, window, now),
            header: Header::new(&title, subtitle, now),
            viewer: photo_viewer::State::new(),
            images: HashMap::new(),
            generation: 0,
            scan_id: 0,
            drops: Vec::new(),
            last_drop: None,
            theme: theme_mode.iced_theme(),
            colors: theme_mode.colors(),
            warning,
            now,
            config,
        }
    }

    fn title(&self) -> String {
        let header = self.header.layout();
        let mut words = header.retro.clone();
        words.extend(header.wave.clone());
        self.i18n
            .tr_with_args("window-title", &[("title", words.join(" ").as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create()
    }

    /// Scans `sources` off the UI thread, superseding any scan still in
    /// flight.
    fn scan(&mut self, sources: Vec<PathBuf>) -> Task<Message> {
        self.scan_id += 1;
        let scan = self.scan_id;
        Task::perform(
            GallerySequence::load(sources, self.config.sort_order()),
            move |result| Message::SequenceLoaded { scan, result },
        )
    }

    /// Adds `path` to the current drop gesture and rescans everything in it.
    fn drop_path(&mut self, path: PathBuf) -> Task<Message> {
        let same_gesture = self
            .last_drop
            .is_some_and(|last| self.now.saturating_duration_since(last) < DROP_GESTURE);
        if !same_gesture {
            self.drops.clear();
        }
        self.drops.push(path);
        self.last_drop = Some(self.now);
        self.scan(self.drops.clone())
    }

    /// Replaces the sequence and resets everything derived from it.
    fn install(&mut self, sequence: GallerySequence) -> Task<Message> {
        self.generation += 1;
        let window = self.config.transition_window();
        self.controller = NavigationController::new(sequence.len(), window);
        self.debounce = InputDebounce::new(window);
        let view = self.controller.view();
        self.motion = SceneMotion::new(sequence.len(), window, self.now);
        self.slides = carousel::Animator::new(&view, window, self.now);
        self.images.clear();
        let _ = self
            .viewer
            .handle(photo_viewer::Message::Close, false, self.now);

        tracing::info!(items = sequence.len(), "gallery loaded");

        let generation = self.generation;
        let loads: Vec<_> = sequence
            .iter()
            .map(|item| {
                let index = item.index();
                Task::perform(
                    media::load_image_async(item.path().to_path_buf()),
                    move |result| Message::ImageLoaded {
                        generation,
                        index,
                        result,
                    },
                )
            })
            .collect();
        self.sequence = sequence;
        Task::batch(loads)
    }
}

/// Paths from `[gallery]`: the explicit image list, then the directory.
fn configured_sources(config: &Config) -> Vec<PathBuf> {
    let mut sources = config.gallery.images.clone();
    sources.extend(config.gallery.directory.clone());
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::NavRequest;
    use crate::ui::carousel::Message as CarouselMessage;

    fn app_with(len: usize) -> App {
        let mut app = App::with_config(
            Some("en-US".to_string()),
            Config::default(),
            None,
            &Flags::default(),
        );
        let paths: Vec<PathBuf> = (0..len).map(|i| PathBuf::from(format!("{i}.png"))).collect();
        let _ = app.install(GallerySequence::from_paths(paths));
        app
    }

    #[test]
    fn configured_sources_list_images_before_directory() {
        let mut config = Config::default();
        config.gallery.images = vec![PathBuf::from("a.png")];
        config.gallery.directory = Some(PathBuf::from("photos"));
        assert_eq!(
            configured_sources(&config),
            vec![PathBuf::from("a.png"), PathBuf::from("photos")]
        );
    }

    #[test]
    fn title_uses_header_text() {
        let app = App::with_config(
            Some("en-US".to_string()),
            Config::default(),
            None,
            &Flags {
                title: Some("Sea Views".to_string()),
                ..Flags::default()
            },
        );
        assert_eq!(app.title(), "Sea Views - Iced Gallery");
    }

    #[test]
    fn install_resets_navigation() {
        let mut app = app_with(6);
        let _ = app.update(Message::Carousel(CarouselMessage::Jump(3)));
        assert_eq!(app.controller.active_index(), 3);

        let _ = app.install(GallerySequence::from_paths(["x.png", "y.png"]));
        assert_eq!(app.controller.active_index(), 0);
        assert_eq!(app.controller.len(), 2);
        assert!(!app.controller.is_transitioning());
    }

    #[test]
    fn stale_deadline_does_not_unlock_new_gallery() {
        let mut app = app_with(6);
        let stale = app.generation;
        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        let _ = app.install(GallerySequence::from_paths(["a.png", "b.png", "c.png"]));
        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        assert!(app.controller.is_transitioning());

        let _ = app.update(Message::TransitionElapsed { generation: stale });
        assert!(app.controller.is_transitioning());

        let current = app.generation;
        let _ = app.update(Message::TransitionElapsed {
            generation: current,
        });
        assert!(!app.controller.is_transitioning());
    }

    #[test]
    fn buttons_bypass_debounce_but_not_lock() {
        let mut app = app_with(6);
        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        assert_eq!(app.controller.active_index(), 1);

        let generation = app.generation;
        let _ = app.update(Message::TransitionElapsed { generation });
        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        assert_eq!(app.controller.active_index(), 2);
    }

    #[test]
    fn wheel_and_keys_share_the_debounce() {
        let mut app = app_with(6);
        let _ = app.update(Message::Input(NavRequest::Next));
        assert_eq!(app.controller.active_index(), 1);

        let generation = app.generation;
        let _ = app.update(Message::TransitionElapsed { generation });
        // Unlocked, but still inside the debounce window.
        let _ = app.update(Message::Input(NavRequest::Next));
        assert_eq!(app.controller.active_index(), 1);
    }

    #[test]
    fn viewer_and_navigation_are_independent() {
        let mut app = app_with(6);
        let _ = app.update(Message::Carousel(CarouselMessage::Jump(2)));
        let generation = app.generation;
        let _ = app.update(Message::TransitionElapsed { generation });

        let _ = app.update(Message::Carousel(CarouselMessage::OpenViewer));
        let _ = app.update(Message::Carousel(CarouselMessage::Jump(3)));

        assert!(app.viewer.is_open());
        assert_eq!(app.controller.active_index(), 3);
        assert!(app.controller.is_transitioning());
    }

    #[test]
    fn viewer_stays_closed_on_empty_gallery() {
        let mut app = app_with(0);
        let _ = app.update(Message::Viewer(photo_viewer::Message::Show));
        assert!(!app.viewer.is_open());
    }

    #[test]
    fn stale_image_results_are_ignored() {
        let mut app = app_with(2);
        let stale = app.generation;
        let _ = app.install(GallerySequence::from_paths(["a.png", "b.png"]));

        let _ = app.update(Message::ImageLoaded {
            generation: stale,
            index: 0,
            result: Err(Error::Io("gone".into())),
        });
        assert!(app.images.is_empty());

        let generation = app.generation;
        let _ = app.update(Message::ImageLoaded {
            generation,
            index: 0,
            result: Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        assert!(matches!(app.images.get(&0), Some(Ok(_))));
    }

    fn loaded(scan: u64, names: &[&str]) -> Message {
        Message::SequenceLoaded {
            scan,
            result: Ok(GallerySequence::from_paths(names.iter().copied())),
        }
    }

    #[test]
    fn latest_drop_wins_over_an_earlier_slower_scan() {
        let mut app = app_with(2);
        let _ = app.update(Message::FileDropped(PathBuf::from("a")));
        let scan_a = app.scan_id;
        let later = app.now + Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
        let _ = app.update(Message::FileDropped(PathBuf::from("b")));
        let scan_b = app.scan_id;
        assert_ne!(scan_a, scan_b);
        assert_eq!(app.drops, vec![PathBuf::from("b")]);

        let _ = app.update(loaded(scan_a, &["a.png"]));
        assert_eq!(app.sequence.len(), 2);

        let _ = app.update(loaded(scan_b, &["b1.png", "b2.png", "b3.png"]));
        assert_eq!(app.sequence.len(), 3);
    }

    #[test]
    fn files_dropped_together_form_one_gallery() {
        let mut app = app_with(0);
        for name in ["x.png", "y.png", "z.png"] {
            let _ = app.update(Message::FileDropped(PathBuf::from(name)));
        }
        assert_eq!(
            app.drops,
            vec![
                PathBuf::from("x.png"),
                PathBuf::from("y.png"),
                PathBuf::from("z.png")
            ]
        );

        let first = app.scan_id - 2;
        let _ = app.update(loaded(first, &["x.png"]));
        assert!(app.sequence.is_empty());

        let latest = app.scan_id;
        let _ = app.update(loaded(latest, &["x.png", "y.png", "z.png"]));
        assert_eq!(app.sequence.len(), 3);
    }

    #[test]
    fn superseded_scan_keeps_current_lock_deadline() {
        let mut app = app_with(4);
        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        let generation = app.generation;
        let _ = app.update(Message::FileDropped(PathBuf::from("elsewhere")));

        let _ = app.update(Message::TransitionElapsed { generation });
        assert!(!app.controller.is_transitioning());
        assert_eq!(app.sequence.len(), 4);
    }

    #[test]
    fn failed_active_image_does_not_block_navigation() {
        let mut app = app_with(3);
        let generation = app.generation;
        let _ = app.update(Message::ImageLoaded {
            generation,
            index: 0,
            result: Err(Error::Io("unreadable".into())),
        });
        assert!(matches!(app.images.get(&0), Some(Err(_))));

        let _ = app.update(Message::Carousel(CarouselMessage::Next));
        assert_eq!(app.controller.active_index(), 1);
        assert!(app.controller.is_transitioning());
    }

    #[test]
    fn tick_advances_time_and_motion() {
        let mut app = app_with(3);
        let later = app.now + Duration::from_secs(2);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.now, later);
        assert!(app.motion.pose(0).lift.abs() > 0.0);
    }
}
