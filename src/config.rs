// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Per-run configuration for the application. Nothing here is persisted.

use std::path::PathBuf;

use crate::app::document::file::OutputFormat;

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the assembled wallpaper is written to when none is given.
    pub default_output_dir: Option<PathBuf>,
    /// Width budget of the miniature layout map, in map pixels.
    pub map_width_budget: f64,
    /// Height budget of the miniature layout map, in map pixels.
    pub map_height_budget: f64,
    /// Multiplicative zoom step (e.g., 1.1 = 10% per wheel notch).
    pub zoom_step: f64,
    /// Crop preview is the monitor resolution divided by this.
    pub preview_divisor: f64,
    /// Fill for monitors without a crop in the composite (RGB).
    pub background: [u8; 3],
    /// Encoding of the assembled wallpaper.
    pub output_format: OutputFormat,
    /// Apply the saved wallpaper to the desktop after assembling.
    pub apply_wallpaper: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_dir: dirs::picture_dir().or_else(dirs::home_dir),
            map_width_budget: 800.0,
            map_height_budget: 600.0,
            zoom_step: 1.1,
            preview_divisor: 2.0,
            background: [0, 0, 0],
            output_format: OutputFormat::Jpeg { quality: 90 },
            apply_wallpaper: true,
        }
    }
}

impl AppConfig {
    /// Resolve the output directory, falling back to the working directory.
    pub fn output_dir(&self) -> PathBuf {
        self.default_output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
