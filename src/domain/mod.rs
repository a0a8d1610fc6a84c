// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure geometry and compositing. No file or OS access in here.

pub mod compose;
pub mod crop;
pub mod error;
pub mod monitor;
