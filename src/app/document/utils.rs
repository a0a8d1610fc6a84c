// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/utils.rs
//
// Desktop integration helpers.

use std::path::Path;

use anyhow::{Context, anyhow};

/// Set an image file as desktop wallpaper, spanned across all monitors.
///
/// The file must already exist on disk.
pub fn set_as_wallpaper(path: &Path) -> anyhow::Result<()> {
    let absolute = std::fs::canonicalize(path)
        .with_context(|| format!("wallpaper file not found: {}", path.display()))?;
    let path_str = absolute
        .to_str()
        .ok_or_else(|| anyhow!("wallpaper path is not valid UTF-8: {}", absolute.display()))?;

    // One composite image covers the whole virtual desktop.
    if let Err(e) = wallpaper::set_mode(wallpaper::Mode::Span) {
        log::warn!("Could not switch wallpaper mode to span: {e}");
    }

    wallpaper::set_from_path(path_str).map_err(|e| anyhow!("failed to set wallpaper: {e}"))?;
    log::info!("Wallpaper set to {path_str}");
    Ok(())
}
