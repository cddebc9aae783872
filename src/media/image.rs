// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use super::extensions;
use crate::error::{Error, ImageError, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::{Path, PathBuf};

/// Decoded image ready to hand to the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width divided by height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized with resvg at their intrinsic size.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The extension is not supported ([`ImageError::UnsupportedFormat`])
/// - The bytes cannot be decoded ([`ImageError::DecodingFailed`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == "svg" {
        return rasterize_svg(&fs::read(path)?);
    }
    if !extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ImageError::UnsupportedFormat(extension).into());
    }

    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::EmptyDimensions.into());
    }

    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Decodes `path` on the blocking thread pool.
///
/// Used from `Task::perform` so large files never stall the UI thread.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

fn rasterize_svg(svg_data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}
