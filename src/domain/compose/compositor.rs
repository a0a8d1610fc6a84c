// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/compose/compositor.rs
//
// Stitch per-monitor crops into one virtual-desktop bitmap.

use image::{Rgb, RgbImage, imageops};

use super::store::CroppedImageStore;
use crate::domain::error::{WallResult, WallpaperError};
use crate::domain::monitor::{MonitorRect, VirtualDesktopBounds};

/// Paste every stored crop at its monitor's place on the virtual desktop.
///
/// Monitors without a crop keep `background`. Pixels are copied as-is.
pub fn assemble(
    bounds: &VirtualDesktopBounds,
    monitors: &[MonitorRect],
    crops: &CroppedImageStore,
    background: Rgb<u8>,
) -> WallResult<RgbImage> {
    if crops.is_empty() {
        return Err(WallpaperError::NoImagesSet);
    }

    let mut canvas = RgbImage::from_pixel(bounds.width(), bounds.height(), background);
    let mut pasted = 0usize;

    for monitor in monitors {
        let Some(image) = crops.get(monitor.id) else {
            log::debug!("Monitor {} has no crop, leaving background", monitor.id);
            continue;
        };
        let (x, y) = bounds.relative_origin(monitor);
        imageops::replace(&mut canvas, &image.to_rgb8(), x, y);
        pasted += 1;
    }

    log::info!(
        "Assembled {}x{} wallpaper from {pasted} of {} monitor(s)",
        canvas.width(),
        canvas.height(),
        monitors.len()
    );
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::monitor::{MonitorId, MonitorLayout};
    use image::DynamicImage;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn partial_assembly_fills_background() {
        let a = MonitorRect::new(MonitorId(1), 0, 0, 1920, 1080, true);
        let b = MonitorRect::new(MonitorId(2), 1920, 0, 3840, 1080, false);
        let monitors = [a, b];
        let layout = MonitorLayout::compute(&monitors, (800.0, 600.0)).unwrap();

        let mut crops = CroppedImageStore::new();
        crops.set(a.id, solid(1920, 1080, [200, 10, 10]));

        let out = assemble(&layout.bounds, &monitors, &crops, Rgb([0, 0, 0])).unwrap();
        assert_eq!(out.dimensions(), (3840, 1080));
        assert_eq!(out.get_pixel(0, 0), &Rgb([200, 10, 10]));
        assert_eq!(out.get_pixel(1919, 1079), &Rgb([200, 10, 10]));
        assert_eq!(out.get_pixel(1920, 0), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(3839, 1079), &Rgb([0, 0, 0]));
    }

    #[test]
    fn negative_origin_monitors_are_offset() {
        let primary = MonitorRect::new(MonitorId(1), 0, 0, 40, 30, true);
        let left = MonitorRect::new(MonitorId(2), -20, -10, 0, 20, false);
        let monitors = [primary, left];
        let layout = MonitorLayout::compute(&monitors, (800.0, 600.0)).unwrap();

        let mut crops = CroppedImageStore::new();
        crops.set(primary.id, solid(40, 30, [1, 2, 3]));
        crops.set(left.id, solid(20, 30, [9, 8, 7]));

        let out = assemble(&layout.bounds, &monitors, &crops, Rgb([50, 50, 50])).unwrap();
        assert_eq!(out.dimensions(), (60, 40));
        assert_eq!(out.get_pixel(0, 0), &Rgb([9, 8, 7]));
        assert_eq!(out.get_pixel(19, 29), &Rgb([9, 8, 7]));
        assert_eq!(out.get_pixel(20, 10), &Rgb([1, 2, 3]));
        assert_eq!(out.get_pixel(59, 39), &Rgb([1, 2, 3]));
        // Below the left monitor, above the primary: uncovered desktop.
        assert_eq!(out.get_pixel(5, 35), &Rgb([50, 50, 50]));
        assert_eq!(out.get_pixel(30, 5), &Rgb([50, 50, 50]));
    }

    #[test]
    fn empty_store_is_an_error() {
        let a = MonitorRect::new(MonitorId(1), 0, 0, 10, 10, true);
        let layout = MonitorLayout::compute(&[a], (800.0, 600.0)).unwrap();
        let err = assemble(&layout.bounds, &[a], &CroppedImageStore::new(), Rgb([0, 0, 0]))
            .unwrap_err();
        assert!(matches!(err, WallpaperError::NoImagesSet));
    }
}
