// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/viewport.rs
//
// Pan/zoom crop viewport: maps between source-image, preview and display space.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use super::region::{CropRegion, ImageRect};
use crate::constant::{MIN_PIXEL_SIZE, OFFSET_EPSILON, ZOOM_EPSILON};
use crate::domain::error::{WallResult, WallpaperError};
use crate::domain::monitor::TargetResolution;

/// Background shown where the preview is not covered by the image.
const PREVIEW_BACKGROUND: Rgba<u8> = Rgba([0x1E, 0x1E, 0x1E, 0xFF]);

/// Default multiplicative zoom step per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Lifecycle of one crop session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportState {
    #[default]
    Empty,
    Loaded,
    Interacting,
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// On-screen size of the crop preview, in preview pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSize {
    pub width: f64,
    pub height: f64,
}

impl PreviewSize {
    /// Non-finite or sub-pixel sizes are raised to one pixel.
    pub fn new(width: f64, height: f64) -> Self {
        let min = f64::from(MIN_PIXEL_SIZE);
        let fix = |v: f64| if v.is_finite() { v.max(min) } else { min };
        Self {
            width: fix(width),
            height: fix(height),
        }
    }

    /// Preview of a target resolution shrunk by `divisor`.
    pub fn scaled_from(target: TargetResolution, divisor: f64) -> Self {
        let divisor = if divisor > 0.0 { divisor } else { 1.0 };
        Self::new(
            f64::from(target.width) / divisor,
            f64::from(target.height) / divisor,
        )
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width.round() as u32).max(MIN_PIXEL_SIZE),
            (self.height.round() as u32).max(MIN_PIXEL_SIZE),
        )
    }
}

/// Committed crop: where it came from and the resampled bitmap.
#[derive(Debug, Clone)]
pub struct CropResult {
    pub region: CropRegion,
    pub image: DynamicImage,
}

/// Interactive crop viewport for one target resolution.
///
/// The image's top-left sits at `offset` relative to the preview's top-left.
/// After every pan or zoom the scaled image covers the whole preview, unless
/// it is smaller than the preview in an axis, in which case it is centred.
#[derive(Debug, Clone)]
pub struct CropViewport {
    zoom_step: f64,
    state: ViewportState,
    image: Option<DynamicImage>,
    target: TargetResolution,
    preview: PreviewSize,
    scale_factor: f64,
    zoom_factor: f64,
    min_zoom_factor: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for CropViewport {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP)
    }
}

impl CropViewport {
    /// Empty viewport. Steps at or below 1.0 fall back to the default.
    pub fn new(zoom_step: f64) -> Self {
        let zoom_step = if zoom_step.is_finite() && zoom_step > 1.0 {
            zoom_step
        } else {
            log::warn!("Invalid zoom step {zoom_step}, using {DEFAULT_ZOOM_STEP}");
            DEFAULT_ZOOM_STEP
        };

        Self {
            zoom_step,
            state: ViewportState::Empty,
            image: None,
            target: TargetResolution::new(MIN_PIXEL_SIZE, MIN_PIXEL_SIZE),
            preview: PreviewSize::new(1.0, 1.0),
            scale_factor: 1.0,
            zoom_factor: 1.0,
            min_zoom_factor: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Load a source image for `target`, shown in a preview of `preview` size.
    ///
    /// On error the viewport is left unchanged.
    pub fn load(
        &mut self,
        image: DynamicImage,
        target: TargetResolution,
        preview: PreviewSize,
    ) -> WallResult<()> {
        let (img_w, img_h) = image.dimensions();
        if img_w == 0 || img_h == 0 {
            return Err(WallpaperError::DegenerateImage {
                width: img_w,
                height: img_h,
            });
        }

        // Public fields can bypass the constructors' one-pixel floor.
        let target = TargetResolution::new(target.width, target.height);
        let preview = PreviewSize::new(preview.width, preview.height);

        let scale_factor = (preview.width / f64::from(target.width))
            .min(preview.height / f64::from(target.height));
        let min_zoom_factor = cover_zoom(img_w, img_h, scale_factor, preview);

        // Images smaller than the target start at the same covering zoom and get upscaled.
        let zoom_factor = min_zoom_factor;

        self.image = Some(image);
        self.target = target;
        self.preview = preview;
        self.scale_factor = scale_factor;
        self.min_zoom_factor = min_zoom_factor;
        self.zoom_factor = zoom_factor;

        let (scaled_w, scaled_h) = self.scaled_size();
        self.offset_x = (preview.width - scaled_w) / 2.0;
        self.offset_y = (preview.height - scaled_h) / 2.0;
        self.clamp_offset();
        self.state = ViewportState::Loaded;

        log::debug!(
            "Viewport loaded {img_w}x{img_h} for {target}: scale={scale_factor:.4} min_zoom={min_zoom_factor:.4}"
        );
        Ok(())
    }

    /// Translate the image by a pointer delta since the previous sample.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if self.image.is_none() {
            return;
        }
        if dx.is_finite() {
            self.offset_x += dx;
        }
        if dy.is_finite() {
            self.offset_y += dy;
        }
        self.clamp_offset();
        self.state = ViewportState::Interacting;
    }

    /// Zoom one step about the preview centre. Never below the covering zoom.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        if self.image.is_none() {
            return;
        }
        self.state = ViewportState::Interacting;

        let factor = match direction {
            ZoomDirection::In => self.zoom_step,
            ZoomDirection::Out => self.zoom_step.recip(),
        };
        let new_zoom = (self.zoom_factor * factor).max(self.min_zoom_factor);
        if (new_zoom - self.zoom_factor).abs() < ZOOM_EPSILON {
            return;
        }

        // Image point under the preview centre stays put.
        let center_x = self.preview.width / 2.0;
        let center_y = self.preview.height / 2.0;
        let old_scale = self.scale_factor * self.zoom_factor;
        let anchor_x = (center_x - self.offset_x) / old_scale;
        let anchor_y = (center_y - self.offset_y) / old_scale;

        self.zoom_factor = new_zoom;
        let new_scale = self.scale_factor * self.zoom_factor;
        self.offset_x = center_x - anchor_x * new_scale;
        self.offset_y = center_y - anchor_y * new_scale;
        self.clamp_offset();
    }

    /// Resample the visible region to the target resolution.
    ///
    /// Returns `None` when no image is loaded.
    pub fn commit(&mut self) -> Option<CropResult> {
        let image = self.image.as_ref()?;
        let (img_w, img_h) = image.dimensions();
        let rect = self.visible_region()?;
        let region = CropRegion::from_image_rect(rect, img_w, img_h);

        let (x, y, w, h) = region.as_tuple();
        let resized = image
            .crop_imm(x, y, w, h)
            .resize_exact(self.target.width, self.target.height, FilterType::Lanczos3);

        self.state = ViewportState::Committed;
        log::info!(
            "Committed crop {w}x{h}+{x}+{y} resampled to {}",
            self.target
        );
        Some(CropResult {
            region,
            image: resized,
        })
    }

    /// Preview viewport mapped into source-image space, clamped to the image.
    pub fn visible_region(&self) -> Option<ImageRect> {
        let image = self.image.as_ref()?;
        let (img_w, img_h) = image.dimensions();
        let scale = self.scale_factor * self.zoom_factor;
        let rect = ImageRect {
            left: -self.offset_x / scale,
            top: -self.offset_y / scale,
            right: (self.preview.width - self.offset_x) / scale,
            bottom: (self.preview.height - self.offset_y) / scale,
        };
        if !rect.is_within(img_w, img_h) {
            log::trace!("Visible region {rect:?} drifted outside {img_w}x{img_h}, clamping");
        }
        Some(rect.clamp_to(img_w, img_h))
    }

    /// Render what the preview canvas currently shows.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_preview(&self) -> Option<RgbaImage> {
        let image = self.image.as_ref()?;
        let (img_w, img_h) = image.dimensions();
        let (view_w, view_h) = self.preview.pixels();
        let mut canvas = RgbaImage::from_pixel(view_w, view_h, PREVIEW_BACKGROUND);

        let rect = self.visible_region()?;
        let region = CropRegion::from_image_rect(rect, img_w, img_h);
        let scale = self.scale_factor * self.zoom_factor;
        let out_w = ((rect.width() * scale).round() as u32).clamp(MIN_PIXEL_SIZE, view_w);
        let out_h = ((rect.height() * scale).round() as u32).clamp(MIN_PIXEL_SIZE, view_h);

        let (x, y, w, h) = region.as_tuple();
        let visible = image
            .crop_imm(x, y, w, h)
            .resize_exact(out_w, out_h, FilterType::Triangle)
            .to_rgba8();
        let dest_x = self.offset_x.max(0.0).round() as i64;
        let dest_y = self.offset_y.max(0.0).round() as i64;
        imageops::replace(&mut canvas, &visible, dest_x, dest_y);
        Some(canvas)
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(GenericImageView::dimensions)
    }

    pub fn target(&self) -> TargetResolution {
        self.target
    }

    pub fn preview(&self) -> PreviewSize {
        self.preview
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn min_zoom_factor(&self) -> f64 {
        self.min_zoom_factor
    }

    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Image size in preview pixels at the current zoom.
    pub fn scaled_size(&self) -> (f64, f64) {
        let Some((img_w, img_h)) = self.image_dimensions() else {
            return (0.0, 0.0);
        };
        let scale = self.scale_factor * self.zoom_factor;
        (f64::from(img_w) * scale, f64::from(img_h) * scale)
    }

    fn clamp_offset(&mut self) {
        let (scaled_w, scaled_h) = self.scaled_size();
        self.offset_x = clamp_axis(self.offset_x, scaled_w, self.preview.width);
        self.offset_y = clamp_axis(self.offset_y, scaled_h, self.preview.height);
    }
}

/// Smallest zoom at which the scaled image covers the preview in both axes.
fn cover_zoom(img_w: u32, img_h: u32, scale_factor: f64, preview: PreviewSize) -> f64 {
    let width_zoom = preview.width / (f64::from(img_w) * scale_factor);
    let height_zoom = preview.height / (f64::from(img_h) * scale_factor);
    width_zoom.max(height_zoom)
}

fn clamp_axis(offset: f64, scaled: f64, view: f64) -> f64 {
    if scaled <= view + OFFSET_EPSILON {
        (view - scaled) / 2.0
    } else {
        offset.min(0.0).max(view - scaled)
    }
}
