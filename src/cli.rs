// SPDX-License-Identifier: GPL-3.0-or-later
// src/cli.rs
//
// Command line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use better_walls::app::document::file::OutputFormat;
use better_walls::app::message::CropGesture;
use better_walls::app::monitors::MonitorSpec;

/// Compose one wallpaper across monitors of different resolution and position.
#[derive(Parser, Debug)]
#[command(name = "better-walls", version, about)]
pub struct Args {
    /// Monitor rectangle in desktop pixels; repeat once per monitor.
    #[arg(
        short,
        long = "monitor",
        value_name = "LEFT,TOP,RIGHT,BOTTOM[,primary]",
        global = true,
        allow_hyphen_values = true
    )]
    pub monitors: Vec<MonitorSpec>,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print monitors, virtual desktop bounds and map scale.
    Layout {
        /// Also write the miniature layout map to this file.
        #[arg(long)]
        map: Option<PathBuf>,
    },

    /// Crop one image for one monitor and save the result.
    Crop {
        /// Monitor number, as printed by `layout`.
        #[arg(short = 'n', long = "monitor-index")]
        monitor: usize,

        /// Source image.
        #[arg(short, long)]
        image: PathBuf,

        /// Gesture applied before committing: in, out or pan:DX:DY.
        #[arg(short, long = "gesture", allow_hyphen_values = true)]
        gestures: Vec<CropGesture>,

        /// Where the cropped image is written.
        #[arg(short, long)]
        out: PathBuf,

        /// Also write what the crop preview shows before committing.
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Crop an image per monitor, assemble, save and apply the wallpaper.
    Assemble {
        /// Image for a monitor number.
        #[arg(long = "set", value_name = "N=PATH", required = true)]
        sets: Vec<Assignment>,

        /// Gestures for a monitor number, applied before its crop is committed.
        #[arg(long = "gestures", value_name = "N=G,G,...", allow_hyphen_values = true)]
        gestures: Vec<GestureList>,

        /// Directory the wallpaper is saved in (default: pictures directory).
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// jpeg or png.
        #[arg(long)]
        format: Option<OutputFormat>,

        /// JPEG quality 1-100.
        #[arg(long)]
        quality: Option<u8>,

        /// Fill for monitors without an image, as RRGGBB.
        #[arg(long, value_parser = parse_hex_color)]
        background: Option<[u8; 3]>,

        /// Save only, do not set the desktop background.
        #[arg(long)]
        no_apply: bool,

        /// Also write the layout map with thumbnails to this file.
        #[arg(long)]
        map: Option<PathBuf>,
    },
}

/// `N=PATH`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub monitor: usize,
    pub path: PathBuf,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected N=PATH, got '{s}'"))?;
        let monitor = parse_monitor_number(number)?;
        if path.is_empty() {
            return Err(format!("missing path in '{s}'"));
        }
        Ok(Self {
            monitor,
            path: PathBuf::from(path),
        })
    }
}

/// `N=G,G,...`
#[derive(Debug, Clone, PartialEq)]
pub struct GestureList {
    pub monitor: usize,
    pub gestures: Vec<CropGesture>,
}

impl FromStr for GestureList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, list) = s
            .split_once('=')
            .ok_or_else(|| format!("expected N=GESTURES, got '{s}'"))?;
        Ok(Self {
            monitor: parse_monitor_number(number)?,
            gestures: CropGesture::parse_list(list)?,
        })
    }
}

fn parse_monitor_number(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("invalid monitor number '{s}' (monitors start at 1)")),
        Ok(n) => Ok(n),
    }
}

/// `RRGGBB` or `#RRGGBB`.
pub fn parse_hex_color(s: &str) -> Result<[u8; 3], String> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected RRGGBB, got '{s}'"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex colour '{s}'"))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}
