// SPDX-License-Identifier: MPL-2.0
//! Ordered, fixed-length list of gallery items.
//!
//! A sequence is built once from command-line paths, a scanned directory or
//! the configured image list, and never changes for the lifetime of the
//! gallery. Items are addressed by their 0-based position.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// One displayable image, identified by its position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    index: usize,
    path: PathBuf,
    label: String,
}

impl GalleryItem {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human-readable name (the file stem).
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered collection of [`GalleryItem`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GallerySequence {
    items: Vec<GalleryItem>,
}

impl GallerySequence {
    /// Builds a sequence from paths, keeping their order.
    ///
    /// Paths without a supported image extension are skipped.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let items = paths
            .into_iter()
            .map(Into::into)
            .filter(|path: &PathBuf| media::is_supported_image(path))
            .enumerate()
            .map(|(index, path)| GalleryItem {
                index,
                label: label_for(&path),
                path,
            })
            .collect();
        Self { items }
    }

    /// Scans a directory (non-recursively) for supported images and sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut files = scan_images(directory)?;
        sort_image_files(&mut files, sort_order);
        Ok(Self::from_paths(files))
    }

    /// Resolves a mixed list of file and directory sources.
    ///
    /// Directories expand in place to their sorted contents; files are kept
    /// as given. Sources that do not exist are skipped with a warning, an
    /// unreadable directory is an error.
    pub fn from_sources(sources: &[PathBuf], sort_order: SortOrder) -> Result<Self> {
        let mut files = Vec::new();
        for source in sources {
            if source.is_dir() {
                let mut found = scan_images(source)?;
                sort_image_files(&mut found, sort_order);
                files.extend(found);
            } else if source.is_file() {
                files.push(source.clone());
            } else {
                tracing::warn!(path = %source.display(), "gallery source does not exist, skipping");
            }
        }
        Ok(Self::from_paths(files))
    }

    /// [`Self::from_sources`] on the blocking thread pool.
    pub async fn load(sources: Vec<PathBuf>, sort_order: SortOrder) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::from_sources(&sources, sort_order))
            .await
            .map_err(|e| Error::Io(e.to_string()))?
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

fn label_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(String::from)
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn scan_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .map_err(|e| Error::Io(format!("{}: {}", directory.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && media::is_supported_image(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn sort_image_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn from_paths_keeps_order_and_assigns_indices() {
        let sequence = GallerySequence::from_paths(["b.png", "a.jpg", "c.webp"]);

        assert_eq!(sequence.len(), 3);
        let labels: Vec<_> = sequence.iter().map(GalleryItem::label).collect();
        assert_eq!(labels, ["b", "a", "c"]);
        for (position, item) in sequence.iter().enumerate() {
            assert_eq!(item.index(), position);
        }
    }

    #[test]
    fn from_paths_skips_unsupported_extensions() {
        let sequence = GallerySequence::from_paths(["notes.txt", "photo.png", "clip.mp4"]);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.get(0).map(GalleryItem::label), Some("photo"));
        assert_eq!(sequence.get(0).map(GalleryItem::index), Some(0));
    }

    #[test]
    fn scan_directory_filters_and_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_file(temp_dir.path(), "c.jpg");
        let img_a = create_file(temp_dir.path(), "a.png");
        let img_b = create_file(temp_dir.path(), "b.svg");
        create_file(temp_dir.path(), "readme.txt");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("create dir");

        let sequence = GallerySequence::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        let paths: Vec<_> = sequence.iter().map(|item| item.path().to_path_buf()).collect();
        assert_eq!(paths, vec![img_a, img_b, img_c]);
    }

    #[test]
    fn scan_directory_returns_empty_for_no_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "document.pdf");

        let sequence = GallerySequence::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert!(sequence.is_empty());
        assert!(sequence.get(0).is_none());
    }

    #[test]
    fn scan_missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone");

        match GallerySequence::scan_directory(&missing, SortOrder::Alphabetical) {
            Err(Error::Io(message)) => assert!(message.contains("gone")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn from_sources_expands_directories_in_place() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let album = temp_dir.path().join("album");
        fs::create_dir(&album).expect("create album");
        let inner_b = create_file(&album, "b.png");
        let inner_a = create_file(&album, "a.png");
        let cover = create_file(temp_dir.path(), "cover.jpg");
        let missing = temp_dir.path().join("missing.png");

        let sequence = GallerySequence::from_sources(
            &[cover.clone(), album, missing],
            SortOrder::Alphabetical,
        )
        .expect("sources should resolve");

        let paths: Vec<_> = sequence.iter().map(|item| item.path().to_path_buf()).collect();
        assert_eq!(paths, vec![cover, inner_a, inner_b]);
    }
}
