// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Offscreen renderings a UI shell (or the CLI) can display or save.

pub mod map;
