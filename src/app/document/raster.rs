// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};

use crate::domain::error::{WallResult, WallpaperError};

/// A decoded source image (PNG, JPEG, WebP, ...), upright.
#[derive(Debug)]
pub struct RasterDocument {
    /// The decoded image document.
    document: DynamicImage,
}

impl RasterDocument {
    /// Load a raster document from disk.
    ///
    /// The format is guessed from the file contents. EXIF orientation is applied
    /// when the `exif` feature is enabled.
    pub fn open(path: &Path) -> WallResult<Self> {
        let load_err = |source| WallpaperError::ImageLoad {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| load_err(ImageError::IoError(e)))?;
        if reader.format().is_none() {
            return Err(WallpaperError::UnsupportedFormat(path.to_path_buf()));
        }

        let document = reader.decode().map_err(load_err)?;
        let (width, height) = document.dimensions();
        if width == 0 || height == 0 {
            return Err(WallpaperError::EmptyImage(path.to_path_buf()));
        }

        let document = apply_orientation(document, read_orientation(path));
        log::info!(
            "Loaded {} ({}x{})",
            path.display(),
            document.width(),
            document.height()
        );
        Ok(Self { document })
    }

    /// Returns the pixel dimensions (width, height) after orientation.
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    pub fn into_image(self) -> DynamicImage {
        self.document
    }
}

/// EXIF orientation tag (1..=8) of the file, if any.
#[cfg(feature = "exif")]
fn read_orientation(path: &Path) -> Option<u32> {
    let file = std::fs::File::open(path).ok()?;
    let mut reader = std::io::BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    field.value.get_uint(0)
}

#[cfg(not(feature = "exif"))]
fn read_orientation(_path: &Path) -> Option<u32> {
    None
}

/// Rotate/flip so the image displays upright.
fn apply_orientation(image: DynamicImage, orientation: Option<u32>) -> DynamicImage {
    let Some(orientation) = orientation.filter(|o| (2..=8).contains(o)) else {
        return image;
    };
    log::debug!("Applying EXIF orientation {orientation}");

    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("better-walls-raster-{}-{name}", std::process::id()))
    }

    #[test]
    fn opens_png_and_reports_dimensions() {
        let path = temp_path("ok.png");
        RgbImage::from_pixel(7, 3, Rgb([1, 2, 3])).save(&path).unwrap();

        let doc = RasterDocument::open(&path).unwrap();
        assert_eq!(doc.dimensions(), (7, 3));
        assert_eq!(doc.into_image().dimensions(), (7, 3));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = RasterDocument::open(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, WallpaperError::ImageLoad { .. }));
    }

    #[test]
    fn unknown_content_is_unsupported() {
        let path = temp_path("garbage.bin");
        std::fs::write(&path, b"this is not an image at all").unwrap();

        let err = RasterDocument::open(&path).unwrap_err();
        assert!(matches!(err, WallpaperError::UnsupportedFormat(_)));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn orientation_swaps_axes_for_quarter_turns() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 2));
        assert_eq!(apply_orientation(img.clone(), Some(6)).dimensions(), (2, 4));
        assert_eq!(apply_orientation(img.clone(), Some(3)).dimensions(), (4, 2));
        assert_eq!(apply_orientation(img.clone(), Some(5)).dimensions(), (2, 4));
        assert_eq!(apply_orientation(img, Some(42)).dimensions(), (4, 2));
    }
}
