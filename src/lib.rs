// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Multi-monitor wallpaper composer: layout, crop viewport and compositing.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
