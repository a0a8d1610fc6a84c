// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/monitor/layout.rs
//
// Virtual desktop bounds and the miniature layout map projection.

use super::MonitorRect;
use crate::domain::error::{WallResult, WallpaperError};

/// Bounding box of all monitors, in absolute desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualDesktopBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl VirtualDesktopBounds {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn width(&self) -> u32 {
        (i64::from(self.max_x) - i64::from(self.min_x)).max(0) as u32
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn height(&self) -> u32 {
        (i64::from(self.max_y) - i64::from(self.min_y)).max(0) as u32
    }

    /// Position of a monitor relative to the top-left of the bounds.
    pub fn relative_origin(&self, monitor: &MonitorRect) -> (i64, i64) {
        (
            i64::from(monitor.left) - i64::from(self.min_x),
            i64::from(monitor.top) - i64::from(self.min_y),
        )
    }
}

/// A rectangle on the layout map, in map pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl MapRect {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Result of laying out one monitor snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorLayout {
    pub bounds: VirtualDesktopBounds,
    /// Uniform desktop-to-map scale.
    pub display_scale: f64,
}

impl MonitorLayout {
    /// Compute bounds and map scale for a monitor snapshot.
    ///
    /// `map_budget` is the (width, height) the miniature map must fit into.
    pub fn compute(monitors: &[MonitorRect], map_budget: (f64, f64)) -> WallResult<Self> {
        if monitors.is_empty() {
            return Err(WallpaperError::InvalidLayout("no monitors found".into()));
        }
        if let Some(bad) = monitors.iter().find(|m| m.is_degenerate()) {
            return Err(WallpaperError::InvalidLayout(format!(
                "monitor {} has degenerate rectangle ({}, {}, {}, {})",
                bad.id, bad.left, bad.top, bad.right, bad.bottom
            )));
        }

        let bounds = VirtualDesktopBounds {
            min_x: monitors.iter().map(|m| m.left).min().unwrap_or_default(),
            min_y: monitors.iter().map(|m| m.top).min().unwrap_or_default(),
            max_x: monitors.iter().map(|m| m.right).max().unwrap_or_default(),
            max_y: monitors.iter().map(|m| m.bottom).max().unwrap_or_default(),
        };

        let (budget_w, budget_h) = map_budget;
        let display_scale =
            (budget_w / f64::from(bounds.width())).min(budget_h / f64::from(bounds.height()));

        log::debug!(
            "Layout of {} monitor(s): bounds={:?} display_scale={display_scale:.4}",
            monitors.len(),
            bounds
        );

        Ok(Self {
            bounds,
            display_scale,
        })
    }

    /// Size of the miniature map canvas.
    pub fn map_size(&self) -> (f64, f64) {
        (
            f64::from(self.bounds.width()) * self.display_scale,
            f64::from(self.bounds.height()) * self.display_scale,
        )
    }

    /// Where a monitor is drawn on the miniature map.
    pub fn map_rect(&self, monitor: &MonitorRect) -> MapRect {
        let s = self.display_scale;
        let ox = f64::from(self.bounds.min_x);
        let oy = f64::from(self.bounds.min_y);
        MapRect {
            x1: (f64::from(monitor.left) - ox) * s,
            y1: (f64::from(monitor.top) - oy) * s,
            x2: (f64::from(monitor.right) - ox) * s,
            y2: (f64::from(monitor.bottom) - oy) * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::monitor::MonitorId;

    const BUDGET: (f64, f64) = (800.0, 600.0);

    fn rect(id: u64, l: i32, t: i32, r: i32, b: i32) -> MonitorRect {
        MonitorRect::new(MonitorId(id), l, t, r, b, id == 1)
    }

    #[test]
    fn side_by_side_bounds() {
        let monitors = [rect(1, 0, 0, 1920, 1080), rect(2, 1920, 0, 3840, 1080)];
        let layout = MonitorLayout::compute(&monitors, BUDGET).unwrap();

        assert_eq!(
            layout.bounds,
            VirtualDesktopBounds {
                min_x: 0,
                min_y: 0,
                max_x: 3840,
                max_y: 1080
            }
        );
        assert!((layout.display_scale - 800.0 / 3840.0).abs() < 1e-12);
    }

    #[test]
    fn negative_coordinates_shift_map() {
        let monitors = [rect(1, 0, 0, 1920, 1080), rect(2, -1280, -300, 0, 724)];
        let layout = MonitorLayout::compute(&monitors, BUDGET).unwrap();

        assert_eq!(layout.bounds.min_x, -1280);
        assert_eq!(layout.bounds.min_y, -300);
        assert_eq!(layout.bounds.width(), 3200);
        assert_eq!(layout.bounds.height(), 1380);

        let left = layout.map_rect(&monitors[1]);
        assert_eq!((left.x1, left.y1), (0.0, 0.0));
        let primary = layout.map_rect(&monitors[0]);
        assert!((primary.x1 - 1280.0 * layout.display_scale).abs() < 1e-9);
        assert!((primary.y1 - 300.0 * layout.display_scale).abs() < 1e-9);
        assert_eq!(layout.bounds.relative_origin(&monitors[0]), (1280, 300));
    }

    #[test]
    fn map_fits_budget_without_distortion() {
        let monitors = [rect(1, 0, 0, 1080, 1920), rect(2, 1080, 420, 3000, 1500)];
        let layout = MonitorLayout::compute(&monitors, BUDGET).unwrap();
        let (w, h) = layout.map_size();

        assert!(w <= 800.0 + 1e-9 && h <= 600.0 + 1e-9);
        assert!((w - 800.0).abs() < 1e-9 || (h - 600.0).abs() < 1e-9);
    }

    #[test]
    fn empty_snapshot_is_invalid() {
        let err = MonitorLayout::compute(&[], BUDGET).unwrap_err();
        assert!(matches!(err, WallpaperError::InvalidLayout(_)));
    }

    #[test]
    fn degenerate_rect_is_invalid() {
        let monitors = [rect(1, 0, 0, 1920, 1080), rect(2, 1920, 0, 1920, 1080)];
        let err = MonitorLayout::compute(&monitors, BUDGET).unwrap_err();
        assert!(matches!(err, WallpaperError::InvalidLayout(_)));
    }
}
