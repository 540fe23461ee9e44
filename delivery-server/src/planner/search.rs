//! Trip query pipeline.
//!
//! snapshot -> graph -> simple paths -> trips. Everything here works on
//! private copies; the store lock is never held during a search.

use tracing::debug;

use crate::domain::{Point, Trip};
use crate::store::MapSnapshot;

use super::config::PlannerConfig;
use super::graph::Graph;
use super::paths::all_simple_paths;
use super::select::select_trips;

/// Trip planner over network snapshots.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Find every multi-hop trip from `from` to `to` in the snapshot.
    ///
    /// Both points are expected to be in the snapshot; if either is missing
    /// the result is simply empty. Callers that need to distinguish unknown
    /// points must check beforehand.
    pub fn search(&self, snapshot: &MapSnapshot, from: &Point, to: &Point) -> Vec<Trip> {
        let graph = Graph::build(snapshot);
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );

        let paths = all_simple_paths(&graph, from, to, self.config);
        let trips = select_trips(from, to, paths);

        debug!(%from, %to, trips = trips.len(), "trip search complete");
        trips
    }
}
