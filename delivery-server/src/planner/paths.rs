//! All-simple-paths enumeration.
//!
//! Depth-first search from the source, following every outgoing edge whose
//! target is not already on the current path. Each time the destination is
//! reached the edge sequence is recorded and the search backtracks to try the
//! remaining branches. The on-path marks belong to the current branch only:
//! a point left behind on backtrack can appear again in a later path.
//!
//! The number of simple paths grows exponentially with branching, so this is
//! only suitable for small networks. [`PlannerConfig`] can cap path length
//! and result count.

use tracing::debug;

use super::config::PlannerConfig;
use super::graph::{Graph, VertexId};
use crate::domain::{MIN_TRIP_ROUTES, Point, Route};

/// One DFS level: a vertex on the current path and the next edge to try.
struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

/// Enumerate every simple directed path from `source` to `destination`
/// with at least [`MIN_TRIP_ROUTES`] routes.
///
/// Paths are returned in discovery order. A direct single-route connection
/// is never returned. Returns no paths if either point is not in the graph
/// or if `source == destination`.
pub fn all_simple_paths(
    graph: &Graph,
    source: &Point,
    destination: &Point,
    config: &PlannerConfig,
) -> Vec<Vec<Route>> {
    let mut paths: Vec<Vec<Route>> = Vec::new();

    let (Some(source), Some(destination)) = (graph.vertex(source), graph.vertex(destination))
    else {
        return paths;
    };

    let mut on_path = vec![false; graph.vertex_count()];
    let mut path: Vec<&Route> = Vec::new();
    let mut stack = vec![Frame {
        vertex: source,
        next_edge: 0,
    }];
    on_path[source.0] = true;

    let mut edges_explored = 0usize;

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        let edge_index = frame.next_edge;
        frame.next_edge += 1;

        let Some(edge) = graph.edges_from(vertex).get(edge_index) else {
            // All branches from this vertex are done
            on_path[vertex.0] = false;
            stack.pop();
            path.pop();
            continue;
        };
        edges_explored += 1;

        if on_path[edge.target.0] {
            continue;
        }

        let hops = path.len() + 1;

        if edge.target == destination {
            if hops >= MIN_TRIP_ROUTES && config.allows_hops(hops) {
                let mut found: Vec<Route> = path.iter().map(|r| (*r).clone()).collect();
                found.push(edge.route.clone());
                paths.push(found);

                if config.results_full(paths.len()) {
                    break;
                }
            }
            continue;
        }

        // Going deeper only pays off if a path through this edge can still
        // reach the destination within the hop limit.
        if !config.allows_hops(hops + 1) {
            continue;
        }

        on_path[edge.target.0] = true;
        path.push(&edge.route);
        stack.push(Frame {
            vertex: edge.target,
            next_edge: 0,
        });
    }

    debug!(
        source = %graph.point(source),
        destination = %graph.point(destination),
        paths = paths.len(),
        edges_explored,
        "path enumeration complete"
    );

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MapSnapshot;

    fn point(s: &str) -> Point {
        Point::parse(s).unwrap()
    }

    fn graph(routes: &[(&str, &str, u32, u32)]) -> Graph {
        let mut snapshot = MapSnapshot::default();
        for (from, to, time, cost) in routes {
            snapshot.points.insert(point(from));
            snapshot.points.insert(point(to));
            let route = Route::new(point(from), point(to), *time, *cost);
            snapshot.routes.insert(route.key().clone(), route);
        }
        Graph::build(&snapshot)
    }

    /// The nine-point network used throughout the tests.
    fn network() -> Graph {
        graph(&[
            ("A", "C", 1, 20),
            ("A", "H", 10, 1),
            ("A", "E", 30, 5),
            ("C", "B", 1, 12),
            ("D", "F", 4, 50),
            ("E", "D", 3, 5),
            ("F", "I", 45, 50),
            ("F", "G", 40, 50),
            ("G", "B", 64, 73),
            ("H", "E", 30, 1),
            ("I", "B", 65, 5),
        ])
    }

    fn names(path: &[Route]) -> String {
        let mut out = path[0].from().to_string();
        for route in path {
            out.push_str("->");
            out.push_str(route.to().as_str());
        }
        out
    }

    fn enumerate(g: &Graph, from: &str, to: &str) -> Vec<String> {
        all_simple_paths(g, &point(from), &point(to), &PlannerConfig::default())
            .iter()
            .map(|p| names(p))
            .collect()
    }

    #[test]
    fn all_paths_a_to_b_in_discovery_order() {
        let paths = enumerate(&network(), "A", "B");

        assert_eq!(
            paths,
            vec![
                "A->C->B",
                "A->E->D->F->G->B",
                "A->E->D->F->I->B",
                "A->H->E->D->F->G->B",
                "A->H->E->D->F->I->B",
            ]
        );
    }

    #[test]
    fn direct_route_excluded() {
        let paths = enumerate(&network(), "A", "E");
        assert_eq!(paths, vec!["A->H->E"]);
    }

    #[test]
    fn only_direct_route_yields_nothing() {
        let g = graph(&[("A", "B", 1, 1)]);
        assert!(enumerate(&g, "A", "B").is_empty());
    }

    #[test]
    fn disconnected_yields_nothing() {
        // B has no outgoing routes
        assert!(enumerate(&network(), "B", "A").is_empty());
    }

    #[test]
    fn unknown_point_yields_nothing() {
        assert!(enumerate(&network(), "A", "Z").is_empty());
    }

    #[test]
    fn same_source_and_destination_yields_nothing() {
        let g = graph(&[("A", "B", 1, 1), ("B", "A", 1, 1)]);
        assert!(enumerate(&g, "A", "A").is_empty());
    }

    #[test]
    fn cycles_terminate() {
        // A <-> C <-> D, with C -> B and D -> B
        let g = graph(&[
            ("A", "C", 1, 1),
            ("C", "A", 1, 1),
            ("C", "D", 1, 1),
            ("D", "C", 1, 1),
            ("C", "B", 1, 1),
            ("D", "B", 1, 1),
        ]);

        assert_eq!(enumerate(&g, "A", "B"), vec!["A->C->B", "A->C->D->B"]);
    }

    #[test]
    fn same_point_on_different_branches() {
        // X is reachable through both C and D; each branch may use it
        let g = graph(&[
            ("A", "C", 1, 1),
            ("A", "D", 1, 1),
            ("C", "X", 1, 1),
            ("D", "X", 1, 1),
            ("X", "B", 1, 1),
        ]);

        assert_eq!(enumerate(&g, "A", "B"), vec!["A->C->X->B", "A->D->X->B"]);
    }

    #[test]
    fn paths_with_equal_weights_are_distinct() {
        let g = graph(&[
            ("A", "C", 1, 1),
            ("A", "D", 1, 1),
            ("C", "B", 1, 1),
            ("D", "B", 1, 1),
        ]);

        assert_eq!(enumerate(&g, "A", "B").len(), 2);
    }

    #[test]
    fn max_hops_prunes_long_paths() {
        let config = PlannerConfig::unbounded().with_max_hops(5);
        let paths = all_simple_paths(&network(), &point("A"), &point("B"), &config);

        let found: Vec<String> = paths.iter().map(|p| names(p)).collect();
        assert_eq!(
            found,
            vec!["A->C->B", "A->E->D->F->G->B", "A->E->D->F->I->B"]
        );
    }

    #[test]
    fn max_hops_below_minimum_finds_nothing() {
        let config = PlannerConfig::unbounded().with_max_hops(1);
        let paths = all_simple_paths(&network(), &point("A"), &point("B"), &config);
        assert!(paths.is_empty());
    }

    #[test]
    fn max_results_stops_early() {
        let config = PlannerConfig::unbounded().with_max_results(2);
        let paths = all_simple_paths(&network(), &point("A"), &point("B"), &config);

        let found: Vec<String> = paths.iter().map(|p| names(p)).collect();
        assert_eq!(found, vec!["A->C->B", "A->E->D->F->G->B"]);
    }
}
