// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: parse arguments, set up logging, run one command.

mod cli;

use std::path::Path;

use anyhow::{Context, anyhow, bail};
use clap::Parser;

use better_walls::app::monitors::StaticMonitors;
use better_walls::app::{AppMessage, WallpaperSession};
use better_walls::config::AppConfig;
use better_walls::domain::monitor::MonitorId;

use crate::cli::{Args, Assignment, Command, GestureList};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let source = StaticMonitors::new(args.monitors);
    let mut config = AppConfig::default();

    match args.command {
        Command::Layout { map } => {
            let session = WallpaperSession::new(&source, config)?;
            print_layout(&session);
            if let Some(path) = map {
                write_map(&session, &path)?;
            }
        }

        Command::Crop {
            monitor,
            image,
            gestures,
            out,
            preview,
        } => {
            let mut session = WallpaperSession::new(&source, config)?;
            let id = resolve_monitor(&session, monitor)?;
            session.open_cropper(id, &image)?;
            for gesture in gestures {
                session.update(gesture.into());
            }

            if let Some(path) = preview {
                let rendered = session
                    .cropper()
                    .and_then(|c| c.viewport.render_preview())
                    .ok_or_else(|| anyhow!("no image loaded"))?;
                rendered
                    .save(&path)
                    .with_context(|| format!("failed to write preview {}", path.display()))?;
            }

            session.commit_crop().ok_or_else(|| anyhow!("no image loaded"))?;
            let cropped = session
                .store()
                .get(id)
                .ok_or_else(|| anyhow!("crop for {} was not stored", session.label(id)))?;
            cropped
                .save(&out)
                .with_context(|| format!("failed to write crop {}", out.display()))?;
            println!("{}: {}", session.label(id), out.display());
        }

        Command::Assemble {
            sets,
            gestures,
            output_dir,
            format,
            quality,
            background,
            no_apply,
            map,
        } => {
            if let Some(format) = format {
                config.output_format = format;
            }
            if let Some(quality) = quality {
                config.output_format = config.output_format.with_quality(quality);
            }
            if let Some(background) = background {
                config.background = background;
            }
            config.apply_wallpaper = !no_apply;
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir());

            let mut session = WallpaperSession::new(&source, config)?;
            for assignment in &sets {
                crop_assignment(&mut session, assignment, &gestures)?;
            }
            if let Some(path) = map {
                write_map(&session, &path)?;
            }

            let saved = session.assemble_and_save(&output_dir)?;
            println!("Assembled wallpaper saved to: {}", saved.display());
            if let Some(warning) = session.error.take() {
                eprintln!("warning: {warning}");
            }
        }
    }
    Ok(())
}

/// Run one crop session for an `N=PATH` assignment and commit it.
fn crop_assignment(
    session: &mut WallpaperSession,
    assignment: &Assignment,
    gestures: &[GestureList],
) -> anyhow::Result<()> {
    let id = resolve_monitor(session, assignment.monitor)?;
    session.open_cropper(id, &assignment.path)?;

    let script = gestures
        .iter()
        .filter(|g| g.monitor == assignment.monitor)
        .flat_map(|g| g.gestures.iter().copied());
    for gesture in script {
        session.update(AppMessage::from(gesture));
    }

    if session.commit_crop().is_none() {
        bail!("nothing to commit for {}", session.label(id));
    }
    Ok(())
}

fn resolve_monitor(session: &WallpaperSession, number: usize) -> anyhow::Result<MonitorId> {
    session.monitor_at(number).map(|m| m.id).ok_or_else(|| {
        anyhow!(
            "no monitor {number}; {} monitor(s) configured",
            session.monitors().len()
        )
    })
}

fn print_layout(session: &WallpaperSession) {
    let layout = session.layout();
    for monitor in session.monitors() {
        let rect = layout.map_rect(monitor);
        println!(
            "{}: {} at ({}, {}) to ({}, {}){} map=({:.1}, {:.1}, {:.1}, {:.1})",
            session.label(monitor.id),
            monitor.resolution(),
            monitor.left,
            monitor.top,
            monitor.right,
            monitor.bottom,
            if monitor.is_primary { " primary" } else { "" },
            rect.x1,
            rect.y1,
            rect.x2,
            rect.y2
        );
    }
    let b = layout.bounds;
    println!(
        "Virtual desktop: ({}, {}) to ({}, {}), {}x{}",
        b.min_x,
        b.min_y,
        b.max_x,
        b.max_y,
        b.width(),
        b.height()
    );
    println!("Map scale: {:.4}", layout.display_scale);
}

fn write_map(session: &WallpaperSession, path: &Path) -> anyhow::Result<()> {
    session
        .render_map()
        .save(path)
        .with_context(|| format!("failed to write layout map {}", path.display()))
}
