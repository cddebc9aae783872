// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{GallerySequence, NavRequest};
use crate::media::ImageData;
use crate::ui::{carousel, photo_viewer};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    Viewer(photo_viewer::Message),
    /// Wheel or arrow key, still subject to the debounce.
    Input(NavRequest),
    /// Background scan of the gallery sources finished. Only the result of
    /// the most recent `scan` is installed.
    SequenceLoaded {
        scan: u64,
        result: Result<GallerySequence, Error>,
    },
    /// The transition lock deadline for `generation` fired.
    TransitionElapsed { generation: u64 },
    /// Background decode finished for one item.
    ImageLoaded {
        generation: u64,
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Result from the "Open folder" dialog.
    FolderPicked(Option<PathBuf>),
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
    /// Animation frame.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image files and directories to browse, in order.
    pub paths: Vec<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Header title override.
    pub title: Option<String>,
    /// Header subtitle override.
    pub subtitle: Option<String>,
}
