// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: user gestures and actions on the session.

use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::crop::ZoomDirection;
use crate::domain::monitor::MonitorId;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // Crop session.
    OpenCropper { monitor: MonitorId, path: PathBuf },
    Pan { dx: f64, dy: f64 },
    Zoom(ZoomDirection),
    CommitCrop,
    CancelCrop,

    // Wallpaper.
    Assemble { output_dir: PathBuf },
    StartOver,

    // Errors.
    ClearError,
}

impl AppMessage {
    /// Map a scroll wheel delta to a zoom message (positive = in).
    pub fn wheel(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Zoom(ZoomDirection::In)
        } else {
            Self::Zoom(ZoomDirection::Out)
        }
    }
}

/// A single scripted crop gesture: `in`, `out` or `pan:DX:DY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropGesture {
    Pan { dx: f64, dy: f64 },
    Zoom(ZoomDirection),
}

impl CropGesture {
    /// Parse a comma separated list such as `in,in,pan:-20:5`.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, String> {
        s.split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for CropGesture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.split(':').collect::<Vec<_>>().as_slice() {
            ["in"] => Ok(Self::Zoom(ZoomDirection::In)),
            ["out"] => Ok(Self::Zoom(ZoomDirection::Out)),
            ["pan", dx, dy] => {
                let parse = |v: &str| {
                    v.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| format!("invalid pan delta '{v}' in '{s}'"))
                };
                Ok(Self::Pan {
                    dx: parse(dx)?,
                    dy: parse(dy)?,
                })
            }
            _ => Err(format!("unknown gesture '{s}' (expected in, out or pan:DX:DY)")),
        }
    }
}

impl From<CropGesture> for AppMessage {
    fn from(gesture: CropGesture) -> Self {
        match gesture {
            CropGesture::Pan { dx, dy } => Self::Pan { dx, dy },
            CropGesture::Zoom(direction) => Self::Zoom(direction),
        }
    }
}
