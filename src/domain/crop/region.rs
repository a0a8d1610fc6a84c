// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Crop rectangles in source-image space.

/// Visible viewport mapped back into source-image space, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ImageRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Intersect with `[0, width] x [0, height]`.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        Self {
            left: self.left.clamp(0.0, w),
            top: self.top.clamp(0.0, h),
            right: self.right.clamp(0.0, w),
            bottom: self.bottom.clamp(0.0, h),
        }
    }

    /// True if the rectangle lies inside `[0, width] x [0, height]`.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right <= f64::from(width)
            && self.bottom <= f64::from(height)
            && self.left <= self.right
            && self.top <= self.bottom
    }
}

/// Crop region in pixel coordinates.
///
/// Always at least one pixel in each axis and inside the image it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Round a floating rectangle to whole pixels inside a `img_width` x `img_height` image.
    ///
    /// Both image dimensions must be non-zero.
    pub fn from_image_rect(rect: ImageRect, img_width: u32, img_height: u32) -> Self {
        let (x0, x1) = round_span(rect.left, rect.right, img_width);
        let (y0, y1) = round_span(rect.top, rect.bottom, img_height);
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let max = f64::from(limit);
    let lo = (start.round().clamp(0.0, max) as u32).min(limit.saturating_sub(1));
    let hi = (end.round().clamp(0.0, max) as u32).max(lo + 1);
    (lo, hi)
}
