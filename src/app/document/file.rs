// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/file.rs
//
// Output naming and encoding of the assembled wallpaper.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageFormat, RgbImage};

use crate::constant::{WALLPAPER_FILE_PREFIX, WALLPAPER_TIMESTAMP_FORMAT};
use crate::domain::error::{WallResult, WallpaperError};

/// Encoding of the saved wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Quality 1-100.
    Jpeg { quality: u8 },
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg { .. } => "jpg",
            Self::Png => "png",
        }
    }

    /// Same format with a different JPEG quality (ignored for PNG).
    pub fn with_quality(self, quality: u8) -> Self {
        match self {
            Self::Jpeg { .. } => Self::Jpeg {
                quality: quality.clamp(1, 100),
            },
            Self::Png => Self::Png,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg { quality: 90 }),
            "png" => Ok(Self::Png),
            other => Err(format!("unsupported output format '{other}' (expected jpeg or png)")),
        }
    }
}

/// `Full_Wallpaper_<DD-MM-YY_HH-MM-SS>.<ext>`
pub fn wallpaper_file_name(now: &NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "{WALLPAPER_FILE_PREFIX}_{}.{}",
        now.format(WALLPAPER_TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// Encode and write the wallpaper to `path`.
pub fn save_wallpaper(image: &RgbImage, path: &Path, format: OutputFormat) -> WallResult<()> {
    let encode_err = |source| WallpaperError::Encode {
        path: path.to_path_buf(),
        source,
    };

    match format {
        OutputFormat::Jpeg { quality } => {
            let file = File::create(path).map_err(|e| encode_err(ImageError::IoError(e)))?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
            image.write_with_encoder(encoder).map_err(encode_err)?;
            writer
                .flush()
                .map_err(|e| encode_err(ImageError::IoError(e)))?;
        }
        OutputFormat::Png => {
            image
                .save_with_format(path, ImageFormat::Png)
                .map_err(encode_err)?;
        }
    }

    log::info!("Wallpaper saved to {}", path.display());
    Ok(())
}
