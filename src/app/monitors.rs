// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/monitors.rs
//
// Monitor snapshot collaborators.

use std::str::FromStr;

use crate::domain::monitor::{MonitorId, MonitorRect};

/// Anything that can hand out a one-shot monitor snapshot.
pub trait MonitorSource {
    fn monitors(&self) -> anyhow::Result<Vec<MonitorRect>>;
}

/// One monitor as written on the command line: `LEFT,TOP,RIGHT,BOTTOM[,primary]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSpec {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub is_primary: bool,
}

impl FromStr for MonitorSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let (coords, is_primary) = match parts.as_slice() {
            [l, t, r, b] => ([*l, *t, *r, *b], false),
            [l, t, r, b, flag] if flag.eq_ignore_ascii_case("primary") => ([*l, *t, *r, *b], true),
            _ => {
                return Err(format!(
                    "expected LEFT,TOP,RIGHT,BOTTOM[,primary], got '{s}'"
                ));
            }
        };

        let mut values = [0i32; 4];
        for (value, raw) in values.iter_mut().zip(coords) {
            *value = raw
                .parse()
                .map_err(|e| format!("invalid coordinate '{raw}' in '{s}': {e}"))?;
        }
        let [left, top, right, bottom] = values;

        Ok(Self {
            left,
            top,
            right,
            bottom,
            is_primary,
        })
    }
}

/// Fixed snapshot, typically from `--monitor` flags. Ids are 1-based positions.
#[derive(Debug, Clone, Default)]
pub struct StaticMonitors {
    specs: Vec<MonitorSpec>,
}

impl StaticMonitors {
    pub fn new(specs: Vec<MonitorSpec>) -> Self {
        Self { specs }
    }
}

impl MonitorSource for StaticMonitors {
    fn monitors(&self) -> anyhow::Result<Vec<MonitorRect>> {
        let monitors: Vec<MonitorRect> = self
            .specs
            .iter()
            .zip(1u64..)
            .map(|(spec, id)| {
                MonitorRect::new(
                    MonitorId(id),
                    spec.left,
                    spec.top,
                    spec.right,
                    spec.bottom,
                    spec.is_primary,
                )
            })
            .collect();

        for (index, m) in monitors.iter().enumerate() {
            log::info!(
                "Monitor {}: {}x{} at ({}, {}){}",
                index + 1,
                m.width(),
                m.height(),
                m.left,
                m.top,
                if m.is_primary { " [primary]" } else { "" }
            );
        }
        Ok(monitors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_primary_specs() {
        let plain: MonitorSpec = "1920,0,3840,1080".parse().unwrap();
        assert_eq!((plain.left, plain.top, plain.right, plain.bottom), (1920, 0, 3840, 1080));
        assert!(!plain.is_primary);

        let primary: MonitorSpec = "-1280, -200, 0, 824, Primary".parse().unwrap();
        assert_eq!(primary.left, -1280);
        assert!(primary.is_primary);
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!("1,2,3".parse::<MonitorSpec>().is_err());
        assert!("1,2,3,x".parse::<MonitorSpec>().is_err());
        assert!("1,2,3,4,secondary".parse::<MonitorSpec>().is_err());
    }

    #[test]
    fn static_source_numbers_monitors() {
        let source = StaticMonitors::new(vec![
            "0,0,1920,1080,primary".parse().unwrap(),
            "1920,0,3840,1080".parse().unwrap(),
        ]);
        let monitors = source.monitors().unwrap();
        assert_eq!(monitors.len(), 2);
        assert_eq!(monitors[0].id, MonitorId(1));
        assert!(monitors[0].is_primary);
        assert_eq!(monitors[1].id, MonitorId(2));
        assert_eq!(monitors[1].left, 1920);
    }
}
