// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: session state, messages and OS-facing collaborators.

pub mod document;
pub mod message;
pub mod model;
pub mod monitors;
pub mod view;

pub use message::AppMessage;
pub use model::WallpaperSession;
