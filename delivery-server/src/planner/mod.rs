//! Trip planner using exhaustive depth-first search.
//!
//! This module implements the query side of the network: given two points,
//! find every multi-hop trip between them and pick out the fastest and the
//! cheapest.
//!
//! Each query builds a fresh graph from a store snapshot, enumerates all
//! simple paths, and turns them into trips. Nothing is cached between
//! queries.

mod config;
mod graph;
mod paths;
mod search;
mod select;

pub use config::PlannerConfig;
pub use graph::{Edge, Graph, VertexId};
pub use paths::all_simple_paths;
pub use search::Planner;
pub use select::select_trips;
