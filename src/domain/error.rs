// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Typed errors raised by layout, loading and compositing.

use std::path::PathBuf;

use super::monitor::MonitorId;

/// Result type for domain operations.
pub type WallResult<T> = Result<T, WallpaperError>;

#[derive(Debug, thiserror::Error)]
pub enum WallpaperError {
    /// Monitor snapshot is empty or contains a degenerate rectangle.
    #[error("invalid monitor layout: {0}")]
    InvalidLayout(String),

    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("image has no pixels: {}", .0.display())]
    EmptyImage(PathBuf),

    #[error("image of {width}x{height} pixels cannot be cropped")]
    DegenerateImage { width: u32, height: u32 },

    /// Assembly was requested before any crop was committed.
    #[error("no images have been set")]
    NoImagesSet,

    #[error("unknown monitor: {0}")]
    UnknownMonitor(MonitorId),

    #[error("failed to write wallpaper {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
