// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/monitor/mod.rs
//
// Monitor geometry in absolute desktop coordinates.

mod layout;

pub use layout::{MapRect, MonitorLayout, VirtualDesktopBounds};

use std::fmt;

/// Opaque monitor identity, stable for one enumeration snapshot.
///
/// Wraps whatever the platform hands out (a handle, an output index, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(pub u64);

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One physical display as a rectangle on the virtual desktop.
///
/// Coordinates may be negative for monitors left of or above the primary.
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorRect {
    pub id: MonitorId,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub is_primary: bool,
}

impl MonitorRect {
    pub fn new(id: MonitorId, left: i32, top: i32, right: i32, bottom: i32, is_primary: bool) -> Self {
        Self {
            id,
            left,
            top,
            right,
            bottom,
            is_primary,
        }
    }

    /// Width in pixels (may be non-positive for a degenerate rectangle).
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Native resolution, i.e. the crop target for this monitor.
    ///
    /// Degenerate rectangles clamp to 1x1 instead of wrapping around.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resolution(&self) -> TargetResolution {
        TargetResolution::new(self.width().max(0) as u32, self.height().max(0) as u32)
    }
}

/// Output size of one crop session, in pixels. Never zero in either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetResolution {
    pub width: u32,
    pub height: u32,
}

impl TargetResolution {
    pub fn new(width: u32, height: u32) -> Self {
        use crate::constant::MIN_PIXEL_SIZE;

        if width < MIN_PIXEL_SIZE || height < MIN_PIXEL_SIZE {
            log::warn!("Target resolution {width}x{height} clamped to at least {MIN_PIXEL_SIZE} pixel");
        }
        Self {
            width: width.max(MIN_PIXEL_SIZE),
            height: height.max(MIN_PIXEL_SIZE),
        }
    }
}

impl fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_matches_rect_extent() {
        let m = MonitorRect::new(MonitorId(1), -1280, -200, 0, 824, false);
        assert_eq!(m.width(), 1280);
        assert_eq!(m.height(), 1024);
        assert_eq!(m.resolution(), TargetResolution::new(1280, 1024));
    }

    #[test]
    fn degenerate_rect_is_detected_and_clamped() {
        let m = MonitorRect::new(MonitorId(2), 100, 0, 100, 50, false);
        assert!(m.is_degenerate());
        assert_eq!(m.resolution(), TargetResolution { width: 1, height: 50 });
    }

    #[test]
    fn zero_target_is_clamped() {
        let t = TargetResolution::new(0, 0);
        assert_eq!((t.width, t.height), (1, 1));
    }
}
