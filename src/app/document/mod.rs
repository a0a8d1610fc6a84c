// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: loading source images, writing and applying wallpapers.

pub mod file;
pub mod raster;
pub mod utils;

pub use utils::set_as_wallpaper;
