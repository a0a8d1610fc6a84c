// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/map.rs
//
// Render the miniature monitor layout map with crop thumbnails.

use std::collections::HashMap;

use image::{DynamicImage, Rgba, RgbaImage, imageops};

use crate::constant::{MAP_BACKGROUND, MAP_MONITOR_FILL, MAP_MONITOR_OUTLINE, MIN_PIXEL_SIZE};
use crate::domain::monitor::{MapRect, MonitorId, MonitorLayout, MonitorRect};

/// Shrink a committed crop so it fits inside its monitor's map rectangle.
///
/// Crops that already fit are never enlarged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn thumbnail(image: &DynamicImage, rect: &MapRect) -> RgbaImage {
    let w = (rect.width().floor() as u32).max(MIN_PIXEL_SIZE);
    let h = (rect.height().floor() as u32).max(MIN_PIXEL_SIZE);
    if image.width() <= w && image.height() <= h {
        return image.to_rgba8();
    }
    image.thumbnail(w, h).to_rgba8()
}

/// Draw every monitor rectangle, with its thumbnail centred on it if present.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render(
    layout: &MonitorLayout,
    monitors: &[MonitorRect],
    thumbnails: &HashMap<MonitorId, RgbaImage>,
) -> RgbaImage {
    let (map_w, map_h) = layout.map_size();
    let width = (map_w.ceil() as u32).max(MIN_PIXEL_SIZE);
    let height = (map_h.ceil() as u32).max(MIN_PIXEL_SIZE);
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(MAP_BACKGROUND));

    for monitor in monitors {
        let rect = layout.map_rect(monitor);
        fill_rect(&mut canvas, &rect);

        if let Some(thumb) = thumbnails.get(&monitor.id) {
            let (cx, cy) = rect.center();
            let x = (cx - f64::from(thumb.width()) / 2.0).round() as i64;
            let y = (cy - f64::from(thumb.height()) / 2.0).round() as i64;
            imageops::replace(&mut canvas, thumb, x, y);
        }
    }
    canvas
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fill_rect(canvas: &mut RgbaImage, rect: &MapRect) {
    let x0 = rect.x1.round().max(0.0) as u32;
    let y0 = rect.y1.round().max(0.0) as u32;
    let x1 = (rect.x2.round().max(0.0) as u32).min(canvas.width());
    let y1 = (rect.y2.round().max(0.0) as u32).min(canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let edge = x == x0 || y == y0 || x + 1 == x1 || y + 1 == y1;
            let color = if edge { MAP_MONITOR_OUTLINE } else { MAP_MONITOR_FILL };
            canvas.put_pixel(x, y, Rgba(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn map_has_budgeted_size_and_filled_monitors() {
        let monitors = [
            MonitorRect::new(MonitorId(1), 0, 0, 1920, 1080, true),
            MonitorRect::new(MonitorId(2), 1920, 0, 3840, 1080, false),
        ];
        let layout = MonitorLayout::compute(&monitors, (800.0, 600.0)).unwrap();
        let map = render(&layout, &monitors, &HashMap::new());

        assert_eq!(map.dimensions(), (800, 225));
        assert_eq!(map.get_pixel(100, 100), &Rgba(MAP_MONITOR_FILL));
        assert_eq!(map.get_pixel(0, 0), &Rgba(MAP_MONITOR_OUTLINE));
    }

    #[test]
    fn thumbnail_is_centred_on_its_monitor() {
        let monitors = [MonitorRect::new(MonitorId(7), 0, 0, 1600, 1200, true)];
        let layout = MonitorLayout::compute(&monitors, (800.0, 600.0)).unwrap();
        let rect = layout.map_rect(&monitors[0]);

        let crop = DynamicImage::ImageRgb8(RgbImage::from_pixel(1600, 1200, image::Rgb([9, 9, 9])));
        let thumb = thumbnail(&crop, &rect);
        assert!(thumb.width() <= 800 && thumb.height() <= 600);

        let thumbs = HashMap::from([(MonitorId(7), thumb)]);
        let map = render(&layout, &monitors, &thumbs);
        assert_eq!(map.get_pixel(400, 300), &Rgba([9, 9, 9, 255]));
    }
}
