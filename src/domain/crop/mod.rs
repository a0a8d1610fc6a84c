// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop session geometry: viewport state and crop regions.

mod region;
mod viewport;

pub use region::{CropRegion, ImageRect};
pub use viewport::{
    CropResult, CropViewport, DEFAULT_ZOOM_STEP, PreviewSize, ViewportState, ZoomDirection,
};
