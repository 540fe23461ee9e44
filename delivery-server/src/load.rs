//! Bulk loading of a network from a text map.
//!
//! The format is a block of point names, one per line, then a blank line,
//! then a block of routes written `from,to,cost,time`:
//!
//! ```text
//! A
//! B
//! C
//!
//! A,C,20,1
//! C,B,12,1
//! ```
//!
//! Loading replaces the whole network in one step: concurrent readers and
//! loads see either the old network or the new one.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::service::{DeliveryError, DeliveryService};

/// The built-in map: nine points and eleven routes.
pub const DEFAULT_MAP: &str = include_str!("../data/default-map.txt");

/// Errors from loading a map.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The map file could not be read
    #[error("failed to read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A route line is not `from,to,cost,time`
    #[error("line {line}: malformed route {text:?}: {reason}")]
    Malformed {
        line: usize,
        text: String,
        reason: &'static str,
    },

    /// The network rejected a point or route
    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: DeliveryError,
    },
    /// The assembled network could not be swapped in
    #[error("failed to apply map: {0}")]
    Apply(#[source] DeliveryError),
}

/// Counts of what a load added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub points: usize,
    pub routes: usize,
}

/// A route line before it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteLine<'a> {
    line: usize,
    from: &'a str,
    to: &'a str,
    cost: u32,
    time: u32,
}

/// A parsed map, with 1-based line numbers for error reporting.
#[derive(Debug, Default)]
struct MapText<'a> {
    points: Vec<(usize, &'a str)>,
    routes: Vec<RouteLine<'a>>,
}

fn parse_route(line: usize, text: &str) -> Result<RouteLine<'_>, LoadError> {
    let malformed = |reason| LoadError::Malformed {
        line,
        text: text.to_string(),
        reason,
    };

    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let [from, to, cost, time] = fields[..] else {
        return Err(malformed("expected 4 comma-separated fields"));
    };

    let cost: u32 = cost
        .parse()
        .map_err(|_| malformed("cost is not a non-negative integer"))?;
    let time: u32 = time
        .parse()
        .map_err(|_| malformed("time is not a non-negative integer"))?;

    Ok(RouteLine {
        line,
        from,
        to,
        cost,
        time,
    })
}

fn parse(text: &str) -> Result<MapText<'_>, LoadError> {
    let mut map = MapText::default();
    let mut reading_points = true;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            // Blank lines ahead of the first point are padding
            if !map.points.is_empty() {
                reading_points = false;
            }
            continue;
        }

        if reading_points {
            map.points.push((line, trimmed));
        } else {
            map.routes.push(parse_route(line, trimmed)?);
        }
    }

    Ok(map)
}

/// Replace the network with the contents of a map.
///
/// Points and routes are added in order to a private staging network, which
/// is then swapped in whole. Any malformed line or rejected entry fails the
/// load and leaves the current network untouched.
pub fn load_map(service: &DeliveryService, text: &str) -> Result<LoadSummary, LoadError> {
    let map = parse(text)?;
    let staging = DeliveryService::in_memory();

    for (line, name) in &map.points {
        staging
            .add_point(name)
            .map_err(|source| LoadError::Rejected {
                line: *line,
                source,
            })?;
    }

    for route in &map.routes {
        staging
            .add_route(route.from, route.to, route.time, route.cost)
            .map_err(|source| LoadError::Rejected {
                line: route.line,
                source,
            })?;
    }

    service
        .replace(staging.snapshot())
        .map_err(LoadError::Apply)?;

    let summary = LoadSummary {
        points: map.points.len(),
        routes: map.routes.len(),
    };
    info!(points = summary.points, routes = summary.routes, "map loaded");
    Ok(summary)
}

/// Replace the network with the contents of a map file.
pub fn load_map_file(
    service: &DeliveryService,
    path: impl AsRef<Path>,
) -> Result<LoadSummary, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_map(service, &text)
}

/// Replace the network with the built-in map.
pub fn load_default_map(service: &DeliveryService) -> Result<LoadSummary, LoadError> {
    load_map(service, DEFAULT_MAP)
}
