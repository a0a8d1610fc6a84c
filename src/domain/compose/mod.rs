// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/compose/mod.rs
//
// Wallpaper compositing: crop store and assembly.

mod compositor;
mod store;

pub use compositor::assemble;
pub use store::CroppedImageStore;
