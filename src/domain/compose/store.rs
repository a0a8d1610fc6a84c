// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/compose/store.rs
//
// Committed crops keyed by monitor.

use std::collections::HashMap;

use image::DynamicImage;

use crate::domain::monitor::MonitorId;

/// Committed crop bitmaps, one per monitor at most.
///
/// Entries are replaced on re-commit and only ever removed all at once.
#[derive(Debug, Clone, Default)]
pub struct CroppedImageStore {
    images: HashMap<MonitorId, DynamicImage>,
}

impl CroppedImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) the crop for `id`.
    pub fn set(&mut self, id: MonitorId, image: DynamicImage) {
        if self.images.insert(id, image).is_some() {
            log::debug!("Replaced crop for monitor {id}");
        }
    }

    pub fn get(&self, id: MonitorId) -> Option<&DynamicImage> {
        self.images.get(&id)
    }

    pub fn contains(&self, id: MonitorId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}
