// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// File name prefix of every assembled wallpaper.
pub const WALLPAPER_FILE_PREFIX: &str = "Full_Wallpaper";

/// Timestamp appended to the wallpaper file name (chrono strftime syntax).
pub const WALLPAPER_TIMESTAMP_FORMAT: &str = "%d-%m-%y_%H-%M-%S";

/// Tolerance for zoom comparisons (float precision when clamping to the minimum zoom).
pub const ZOOM_EPSILON: f64 = 1e-9;

/// Tolerance for offset comparisons (float precision in pan clamping).
pub const OFFSET_EPSILON: f64 = 1e-6;

/// Smallest dimension any bitmap or viewport may have (prevents 0x0 images).
pub const MIN_PIXEL_SIZE: u32 = 1;

/// Fill colour of an empty monitor rectangle on the layout map.
pub const MAP_MONITOR_FILL: [u8; 4] = [173, 216, 230, 255];

/// Outline colour of monitor rectangles on the layout map.
pub const MAP_MONITOR_OUTLINE: [u8; 4] = [0, 0, 0, 255];

/// Background of the layout map outside any monitor.
pub const MAP_BACKGROUND: [u8; 4] = [240, 240, 240, 255];
