// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Image(ImageError),
}

/// Reasons an image could not be turned into a displayable texture.
///
/// Each variant maps to a localized placeholder caption so a broken file
/// degrades to a labelled grey frame instead of an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Extension is not one of the supported raster/vector formats.
    UnsupportedFormat(String),

    /// Bytes were read but could not be decoded.
    DecodingFailed(String),

    /// Decoded image has zero width or height.
    EmptyDimensions,
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedFormat(_) => "error-image-unsupported-format",
            ImageError::DecodingFailed(_) => "error-image-decoding-failed",
            ImageError::EmptyDimensions => "error-image-empty",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat(ext) => write!(f, "Unsupported image format: {}", ext),
            ImageError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            ImageError::EmptyDimensions => write!(f, "Image has empty dimensions"),
        }
    }
}

impl Error {
    /// Returns the i18n key used when this error is shown as a placeholder caption.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-image-io",
            Error::Svg(_) => "error-image-svg",
            Error::Config(_) => "notification-config-load-error",
            Error::Image(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(ImageError::DecodingFailed(other.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_decode_error_maps_to_decoding_failed() {
        let decode = image_rs::ImageError::Unsupported(
            image_rs::error::UnsupportedError::from_format_and_kind(
                image_rs::error::ImageFormatHint::Unknown,
                image_rs::error::UnsupportedErrorKind::GenericFeature("x".into()),
            ),
        );
        let err: Error = decode.into();
        assert!(matches!(
            err,
            Error::Image(ImageError::DecodingFailed(_))
        ));
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let err: Error = image_rs::ImageError::IoError(std::io::Error::other("gone")).into();
        match err {
            Error::Io(message) => assert!(message.contains("gone")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn i18n_keys_are_stable() {
        assert_eq!(
            ImageError::UnsupportedFormat("xyz".into()).i18n_key(),
            "error-image-unsupported-format"
        );
        assert_eq!(ImageError::EmptyDimensions.i18n_key(), "error-image-empty");
        assert_eq!(Error::Io("x".into()).i18n_key(), "error-image-io");
        assert_eq!(Error::Svg("x".into()).i18n_key(), "error-image-svg");
    }

    #[test]
    fn image_error_display_includes_detail() {
        let err = ImageError::UnsupportedFormat("xcf".to_string());
        assert!(format!("{}", err).contains("xcf"));
    }
}
