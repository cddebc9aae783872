// SPDX-License-Identifier: MPL-2.0
//! Image decoding for gallery items.

pub mod image;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, load_image_async, ImageData};

/// Supported file extensions.
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Returns `true` if `path` has a supported image extension (case-insensitive).
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_match_case_insensitively() {
        assert!(is_supported_image("photo.JPG"));
        assert!(is_supported_image("vector.svg"));
        assert!(is_supported_image("/tmp/scan.TiF"));
    }

    #[test]
    fn unsupported_or_missing_extensions_are_rejected() {
        assert!(!is_supported_image("clip.mp4"));
        assert!(!is_supported_image("README"));
        assert!(!is_supported_image("archive.png.zip"));
    }
}
