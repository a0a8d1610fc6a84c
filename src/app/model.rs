// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state: one wallpaper composing session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{Rgb, RgbImage, RgbaImage};

use crate::app::document::file::{save_wallpaper, wallpaper_file_name};
use crate::app::document::raster::RasterDocument;
use crate::app::document::set_as_wallpaper;
use crate::app::message::AppMessage;
use crate::app::monitors::MonitorSource;
use crate::app::view::map;
use crate::config::AppConfig;
use crate::domain::compose::{self, CroppedImageStore};
use crate::domain::crop::{CropViewport, PreviewSize, ZoomDirection};
use crate::domain::error::{WallResult, WallpaperError};
use crate::domain::monitor::{MonitorId, MonitorLayout, MonitorRect};

// =============================================================================
// Crop session
// =============================================================================

/// The cropper currently open for one monitor.
#[derive(Debug)]
pub struct CropSession {
    pub monitor: MonitorId,
    pub source: PathBuf,
    pub viewport: CropViewport,
}

// =============================================================================
// Model
// =============================================================================

pub struct WallpaperSession {
    config: AppConfig,

    // Monitor snapshot, fixed for the session.
    monitors: Vec<MonitorRect>,
    layout: MonitorLayout,

    // Crops.
    store: CroppedImageStore,
    thumbnails: HashMap<MonitorId, RgbaImage>,
    cropper: Option<CropSession>,

    // UI state.
    pub can_assemble: bool,
    pub can_start_over: bool,
    pub last_output: Option<PathBuf>,
    pub error: Option<String>,
}

impl WallpaperSession {
    /// Take the monitor snapshot and lay it out.
    pub fn new(source: &dyn MonitorSource, config: AppConfig) -> anyhow::Result<Self> {
        let monitors = source.monitors().context("failed to enumerate monitors")?;
        Ok(Self::from_monitors(monitors, config)?)
    }

    pub fn from_monitors(monitors: Vec<MonitorRect>, config: AppConfig) -> WallResult<Self> {
        let layout = MonitorLayout::compute(
            &monitors,
            (config.map_width_budget, config.map_height_budget),
        )?;

        Ok(Self {
            config,
            monitors,
            layout,
            store: CroppedImageStore::new(),
            thumbnails: HashMap::new(),
            cropper: None,
            can_assemble: true,
            can_start_over: false,
            last_output: None,
            error: None,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn monitors(&self) -> &[MonitorRect] {
        &self.monitors
    }

    pub fn layout(&self) -> &MonitorLayout {
        &self.layout
    }

    pub fn store(&self) -> &CroppedImageStore {
        &self.store
    }

    pub fn thumbnails(&self) -> &HashMap<MonitorId, RgbaImage> {
        &self.thumbnails
    }

    pub fn cropper(&self) -> Option<&CropSession> {
        self.cropper.as_ref()
    }

    pub fn monitor(&self, id: MonitorId) -> Option<&MonitorRect> {
        self.monitors.iter().find(|m| m.id == id)
    }

    /// Monitor by its 1-based position in the snapshot ("Monitor N").
    pub fn monitor_at(&self, number: usize) -> Option<&MonitorRect> {
        number.checked_sub(1).and_then(|i| self.monitors.get(i))
    }

    pub fn label(&self, id: MonitorId) -> String {
        match self.monitors.iter().position(|m| m.id == id) {
            Some(index) => format!("Monitor {}", index + 1),
            None => format!("Monitor {id}"),
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // -------------------------------------------------------------------------
    // Crop session
    // -------------------------------------------------------------------------

    /// Load `path` into a fresh cropper for `monitor`.
    ///
    /// On failure any open cropper is kept as it was.
    pub fn open_cropper(&mut self, monitor: MonitorId, path: &Path) -> WallResult<()> {
        let target = self
            .monitor(monitor)
            .ok_or(WallpaperError::UnknownMonitor(monitor))?
            .resolution();
        let preview = PreviewSize::scaled_from(target, self.config.preview_divisor);

        let document = RasterDocument::open(path)?;
        let (width, height) = document.dimensions();
        let mut viewport = CropViewport::new(self.config.zoom_step);
        viewport.load(document.into_image(), target, preview)?;

        log::info!(
            "Cropping {} ({width}x{height}) for {} ({target})",
            path.display(),
            self.label(monitor)
        );
        self.cropper = Some(CropSession {
            monitor,
            source: path.to_path_buf(),
            viewport,
        });
        Ok(())
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        if let Some(session) = self.cropper.as_mut() {
            session.viewport.pan(dx, dy);
        }
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        if let Some(session) = self.cropper.as_mut() {
            session.viewport.zoom(direction);
        }
    }

    /// Commit the open cropper into the store and close it.
    ///
    /// Returns the monitor that received a crop, or `None` if nothing was open.
    pub fn commit_crop(&mut self) -> Option<MonitorId> {
        let mut session = self.cropper.take()?;
        let result = session.viewport.commit()?;
        let id = session.monitor;
        log::info!(
            "{} set from {}",
            self.label(id),
            session.source.display()
        );

        if let Some(monitor) = self.monitor(id) {
            let rect = self.layout.map_rect(monitor);
            self.thumbnails
                .insert(id, map::thumbnail(&result.image, &rect));
        }
        self.store.set(id, result.image);
        Some(id)
    }

    pub fn cancel_crop(&mut self) {
        if let Some(session) = self.cropper.take() {
            log::debug!("Crop for {} cancelled", self.label(session.monitor));
        }
    }

    // -------------------------------------------------------------------------
    // Wallpaper
    // -------------------------------------------------------------------------

    /// Compose all committed crops into one virtual-desktop bitmap.
    pub fn assemble(&self) -> WallResult<RgbImage> {
        compose::assemble(
            &self.layout.bounds,
            &self.monitors,
            &self.store,
            Rgb(self.config.background),
        )
    }

    /// Assemble, save with a timestamped name in `output_dir` and apply it.
    ///
    /// Applying is best-effort: a failure is recorded on the model, the saved
    /// file is still returned.
    pub fn assemble_and_save(&mut self, output_dir: &Path) -> anyhow::Result<PathBuf> {
        let wallpaper = self.assemble()?;

        let format = self.config.output_format;
        let name = wallpaper_file_name(&chrono::Local::now().naive_local(), format);
        let path = output_dir.join(name);
        save_wallpaper(&wallpaper, &path, format)?;

        self.last_output = Some(path.clone());
        self.can_assemble = false;
        self.can_start_over = true;

        if self.config.apply_wallpaper {
            if let Err(e) = set_as_wallpaper(&path) {
                log::error!("Failed to apply wallpaper: {e:#}");
                self.set_error(format!("Wallpaper saved but could not be applied: {e}"));
            }
        }
        Ok(path)
    }

    /// Drop every crop and thumbnail and re-enable assembling.
    pub fn start_over(&mut self) {
        self.store.clear();
        self.thumbnails.clear();
        self.cropper = None;
        self.last_output = None;
        self.can_assemble = true;
        self.can_start_over = false;
        log::info!("Starting over");
    }

    /// Render the layout map with the current thumbnails.
    pub fn render_map(&self) -> RgbaImage {
        map::render(&self.layout, &self.monitors, &self.thumbnails)
    }

    // -------------------------------------------------------------------------
    // Message dispatch
    // -------------------------------------------------------------------------

    /// Apply one message. Failures are recorded in `error`, never propagated.
    pub fn update(&mut self, message: AppMessage) {
        match message {
            AppMessage::OpenCropper { monitor, path } => {
                if let Err(e) = self.open_cropper(monitor, &path) {
                    log::error!("{e}");
                    self.set_error(e.to_string());
                }
            }
            AppMessage::Pan { dx, dy } => self.pan(dx, dy),
            AppMessage::Zoom(direction) => self.zoom(direction),
            AppMessage::CommitCrop => {
                if self.commit_crop().is_none() {
                    log::debug!("Commit ignored: no image loaded");
                }
            }
            AppMessage::CancelCrop => self.cancel_crop(),
            AppMessage::Assemble { output_dir } => {
                if !self.can_assemble {
                    log::debug!("Assemble ignored: start over first");
                    return;
                }
                if let Err(e) = self.assemble_and_save(&output_dir) {
                    log::warn!("{e:#}");
                    self.set_error(e.to_string());
                }
            }
            AppMessage::StartOver => self.start_over(),
            AppMessage::ClearError => self.clear_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::monitors::{MonitorSpec, StaticMonitors};
    use crate::domain::crop::ViewportState;
    use image::GenericImageView;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "better-walls-model-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn test_config() -> AppConfig {
        AppConfig {
            default_output_dir: None,
            output_format: crate::app::document::file::OutputFormat::Png,
            apply_wallpaper: false,
            ..AppConfig::default()
        }
    }

    fn session() -> WallpaperSession {
        let source = StaticMonitors::new(vec![
            "0,0,64,36,primary".parse::<MonitorSpec>().unwrap(),
            "64,0,128,36".parse::<MonitorSpec>().unwrap(),
        ]);
        WallpaperSession::new(&source, test_config()).unwrap()
    }

    fn write_source(dir: &Path) -> PathBuf {
        let path = dir.join("source.png");
        RgbImage::from_fn(160, 90, |x, y| Rgb([x as u8, y as u8, 128]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn empty_snapshot_fails_session_start() {
        let source = StaticMonitors::new(Vec::new());
        assert!(WallpaperSession::new(&source, test_config()).is_err());
    }

    #[test]
    fn crop_commit_fills_store_and_thumbnail() {
        let dir = temp_dir("commit");
        let source = write_source(&dir);
        let mut s = session();

        s.update(AppMessage::OpenCropper {
            monitor: MonitorId(1),
            path: source.clone(),
        });
        assert!(s.error.is_none());
        assert_eq!(s.cropper().map(|c| c.source.as_path()), Some(source.as_path()));
        let viewport = &s.cropper().unwrap().viewport;
        assert_eq!(viewport.state(), ViewportState::Loaded);
        assert_eq!(viewport.preview(), PreviewSize::new(32.0, 18.0));

        s.update(AppMessage::Zoom(ZoomDirection::In));
        s.update(AppMessage::Pan { dx: -3.0, dy: 1.0 });
        s.update(AppMessage::CommitCrop);

        assert!(s.cropper().is_none());
        assert_eq!(
            s.store().get(MonitorId(1)).map(|i| i.dimensions()),
            Some((64, 36))
        );
        assert!(s.thumbnails().contains_key(&MonitorId(1)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_load_keeps_previous_cropper() {
        let dir = temp_dir("failed-load");
        let source = write_source(&dir);
        let mut s = session();

        s.open_cropper(MonitorId(2), &source).unwrap();
        s.update(AppMessage::OpenCropper {
            monitor: MonitorId(1),
            path: dir.join("missing.png"),
        });

        assert!(s.error.is_some());
        assert_eq!(s.cropper().map(|c| c.monitor), Some(MonitorId(2)));

        let err = s.open_cropper(MonitorId(99), &source).unwrap_err();
        assert!(matches!(err, WallpaperError::UnknownMonitor(MonitorId(99))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn commit_without_cropper_is_noop() {
        let mut s = session();
        assert!(s.commit_crop().is_none());
        s.update(AppMessage::CommitCrop);
        assert!(s.store().is_empty());
        assert!(s.error.is_none());
    }

    #[test]
    fn assemble_without_crops_writes_nothing() {
        let dir = temp_dir("no-images");
        let mut s = session();

        s.update(AppMessage::Assemble {
            output_dir: dir.clone(),
        });

        assert!(s.error.as_deref().is_some_and(|e| e.contains("no images")));
        assert!(s.can_assemble);
        assert!(s.last_output.is_none());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn assemble_then_start_over() {
        let dir = temp_dir("assemble");
        let source = write_source(&dir);
        let out_dir = dir.join("out");
        std::fs::create_dir_all(&out_dir).unwrap();
        let mut s = session();

        s.open_cropper(MonitorId(2), &source).unwrap();
        s.commit_crop().unwrap();
        s.update(AppMessage::Assemble {
            output_dir: out_dir.clone(),
        });

        assert!(s.error.is_none(), "{:?}", s.error);
        let saved = s.last_output.clone().unwrap();
        let name = saved.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Full_Wallpaper_") && name.ends_with(".png"));

        let wallpaper = image::open(&saved).unwrap().to_rgb8();
        assert_eq!(wallpaper.dimensions(), (128, 36));
        assert_eq!(wallpaper.get_pixel(10, 10), &Rgb([0, 0, 0]));
        assert!(!s.can_assemble && s.can_start_over);

        // A second assemble is disabled until starting over.
        s.update(AppMessage::Assemble {
            output_dir: out_dir.clone(),
        });
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 1);

        s.update(AppMessage::StartOver);
        assert!(s.store().is_empty() && s.thumbnails().is_empty());
        assert!(s.can_assemble && !s.can_start_over);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn labels_follow_snapshot_order() {
        let s = session();
        assert_eq!(s.label(MonitorId(2)), "Monitor 2");
        assert_eq!(s.monitor_at(1).map(|m| m.id), Some(MonitorId(1)));
        assert!(s.monitor_at(0).is_none());
        assert!(s.monitor_at(3).is_none());
    }

    #[test]
    fn map_reflects_layout() {
        let s = session();
        let map = s.render_map();
        assert_eq!(map.dimensions(), (800, 225));
    }
}
