//! Directed graph built from a store snapshot.
//!
//! The graph is disposable: it is built for one query and dropped with it.
//! Vertices are indexed in name order and each adjacency list is sorted by
//! target name, so traversal order depends only on the network contents.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Point, Route};
use crate::store::MapSnapshot;

/// Index of a vertex in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(pub usize);

/// An outgoing edge: the route and the index of its target vertex.
#[derive(Debug, Clone)]
pub struct Edge {
    pub target: VertexId,
    pub route: Route,
}

/// Directed graph of points (vertices) and routes (edges).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Point>,
    index: HashMap<Point, VertexId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build a graph from a snapshot.
    ///
    /// Routes whose endpoints are not in the snapshot's point set are
    /// skipped; a snapshot taken from the store never has any.
    pub fn build(snapshot: &MapSnapshot) -> Self {
        let mut vertices: Vec<Point> = snapshot.points.iter().cloned().collect();
        vertices.sort();

        let index: HashMap<Point, VertexId> = vertices
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), VertexId(i)))
            .collect();

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); vertices.len()];

        for route in snapshot.routes.values() {
            let (Some(&source), Some(&target)) = (index.get(route.from()), index.get(route.to()))
            else {
                trace!(route = %route, "skipping route with unknown endpoint");
                continue;
            };
            adjacency[source.0].push(Edge {
                target,
                route: route.clone(),
            });
        }

        for edges in &mut adjacency {
            edges.sort_by(|a, b| a.route.to().cmp(b.route.to()));
        }

        Self {
            vertices,
            index,
            adjacency,
        }
    }

    /// Look up the vertex for a point.
    pub fn vertex(&self, point: &Point) -> Option<VertexId> {
        self.index.get(point).copied()
    }

    /// The point at a vertex.
    pub fn point(&self, vertex: VertexId) -> &Point {
        &self.vertices[vertex.0]
    }

    /// Outgoing edges of a vertex, sorted by target name.
    pub fn edges_from(&self, vertex: VertexId) -> &[Edge] {
        &self.adjacency[vertex.0]
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteKey;

    fn point(s: &str) -> Point {
        Point::parse(s).unwrap()
    }

    fn snapshot(points: &[&str], routes: &[(&str, &str, u32, u32)]) -> MapSnapshot {
        let mut snapshot = MapSnapshot::default();
        for p in points {
            snapshot.points.insert(point(p));
        }
        for (from, to, time, cost) in routes {
            let route = Route::new(point(from), point(to), *time, *cost);
            snapshot.routes.insert(route.key().clone(), route);
        }
        snapshot
    }

    #[test]
    fn empty_snapshot() {
        let graph = Graph::build(&MapSnapshot::default());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.vertex(&point("A")).is_none());
    }

    #[test]
    fn vertices_and_edges() {
        let graph = Graph::build(&snapshot(
            &["A", "B", "C", "D"],
            &[("A", "C", 1, 20), ("C", "B", 1, 12), ("A", "B", 5, 5)],
        ));

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let a = graph.vertex(&point("A")).unwrap();
        assert_eq!(graph.point(a), &point("A"));

        let d = graph.vertex(&point("D")).unwrap();
        assert!(graph.edges_from(d).is_empty());
    }

    #[test]
    fn adjacency_sorted_by_target() {
        let graph = Graph::build(&snapshot(
            &["A", "B", "C", "H"],
            &[("A", "H", 10, 1), ("A", "C", 1, 20), ("A", "B", 1, 1)],
        ));

        let a = graph.vertex(&point("A")).unwrap();
        let targets: Vec<&str> = graph
            .edges_from(a)
            .iter()
            .map(|e| graph.point(e.target).as_str())
            .collect();
        assert_eq!(targets, vec!["B", "C", "H"]);
    }

    #[test]
    fn edges_are_directed() {
        let graph = Graph::build(&snapshot(&["A", "B"], &[("A", "B", 1, 1)]));

        let a = graph.vertex(&point("A")).unwrap();
        let b = graph.vertex(&point("B")).unwrap();
        assert_eq!(graph.edges_from(a).len(), 1);
        assert!(graph.edges_from(b).is_empty());
    }

    #[test]
    fn skips_routes_with_unknown_endpoints() {
        let mut snap = snapshot(&["A", "B"], &[("A", "B", 1, 1)]);
        let dangling = Route::new(point("A"), point("Z"), 1, 1);
        snap.routes
            .insert(RouteKey::new(point("A"), point("Z")), dangling);

        let graph = Graph::build(&snap);
        assert_eq!(graph.edge_count(), 1);
    }
}
