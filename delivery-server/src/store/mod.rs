//! In-memory repository of points and routes.
//!
//! The store is the single source of truth for the network. One mutex guards
//! both tables; every mutation and every snapshot takes it, and critical
//! sections never do more than a map operation or a copy.

mod error;

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::domain::{Point, Route, RouteKey};

pub use error::StoreError;

/// A point-in-time copy of the whole network.
///
/// Points and routes are copied under a single lock acquisition, so the two
/// halves are always consistent with each other.
#[derive(Debug, Clone, Default)]
pub struct MapSnapshot {
    /// All points
    pub points: HashSet<Point>,
    /// All routes, by key
    pub routes: HashMap<RouteKey, Route>,
}

impl MapSnapshot {
    /// Look up a point by name. Surrounding whitespace is ignored, as in
    /// [`Point::parse`].
    pub fn point(&self, name: &str) -> Option<&Point> {
        self.points.get(name.trim())
    }
}

#[derive(Debug, Default)]
struct Tables {
    points: HashMap<String, Point>,
    routes: HashMap<RouteKey, Route>,
}

/// Thread-safe store of points and directed routes.
///
/// Share it behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct PointRouteStore {
    tables: Mutex<Tables>,
}

impl PointRouteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single map operation, so the tables are consistent
    // even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a point.
    ///
    /// Returns `true` if the point was added, `false` if a point with the
    /// same name already exists.
    pub fn add_point(&self, point: Point) -> bool {
        let mut tables = self.lock();
        if tables.points.contains_key(point.as_str()) {
            return false;
        }
        trace!(point = %point, "adding point");
        tables.points.insert(point.as_str().to_string(), point);
        true
    }

    /// Look up a point by name.
    pub fn get_point(&self, name: &str) -> Option<Point> {
        self.lock().points.get(name).cloned()
    }

    /// Check whether a point with this name exists.
    pub fn point_exists(&self, name: &str) -> bool {
        self.lock().points.contains_key(name)
    }

    /// Insert a route.
    ///
    /// Returns `Ok(true)` if the route was added and `Ok(false)` if a route
    /// with the same key already exists (the existing route is untouched).
    ///
    /// # Errors
    ///
    /// - [`StoreError::PointNotFound`] if either endpoint is not stored
    /// - [`StoreError::InvalidRoute`] if both endpoints are the same point
    pub fn add_route(&self, route: Route) -> Result<bool, StoreError> {
        let mut tables = self.lock();

        for endpoint in [route.from(), route.to()] {
            if !tables.points.contains_key(endpoint.as_str()) {
                return Err(StoreError::PointNotFound(endpoint.clone()));
            }
        }

        if route.is_self_loop() {
            return Err(StoreError::InvalidRoute(route.from().clone()));
        }

        if tables.routes.contains_key(route.key()) {
            return Ok(false);
        }

        trace!(route = %route, "adding route");
        tables.routes.insert(route.key().clone(), route);
        Ok(true)
    }

    /// Overwrite the time and cost of an existing route.
    ///
    /// Returns `false` if no route exists for the key.
    pub fn update_route(&self, route: Route) -> bool {
        let mut tables = self.lock();
        match tables.routes.get_mut(route.key()) {
            Some(existing) => {
                existing.time = route.time;
                existing.cost = route.cost;
                true
            }
            None => false,
        }
    }

    /// Remove the route from `from` to `to`.
    ///
    /// Returns `true` if a route existed and was removed.
    pub fn delete_route(&self, from: &Point, to: &Point) -> bool {
        let key = RouteKey::new(from.clone(), to.clone());
        self.lock().routes.remove(&key).is_some()
    }

    /// Check whether a route from `from` to `to` exists.
    pub fn route_exists(&self, from: &Point, to: &Point) -> bool {
        let key = RouteKey::new(from.clone(), to.clone());
        self.lock().routes.contains_key(&key)
    }

    /// Look up the route from `from` to `to`.
    pub fn get_route(&self, from: &Point, to: &Point) -> Option<Route> {
        let key = RouteKey::new(from.clone(), to.clone());
        self.lock().routes.get(&key).cloned()
    }

    /// Copy of all points.
    pub fn snapshot_points(&self) -> HashSet<Point> {
        self.lock().points.values().cloned().collect()
    }

    /// Copy of all routes.
    pub fn snapshot_routes(&self) -> HashMap<RouteKey, Route> {
        self.lock().routes.clone()
    }

    /// Copy of points and routes taken together.
    pub fn snapshot(&self) -> MapSnapshot {
        let tables = self.lock();
        MapSnapshot {
            points: tables.points.values().cloned().collect(),
            routes: tables.routes.clone(),
        }
    }

    /// Number of stored points.
    pub fn point_count(&self) -> usize {
        self.lock().points.len()
    }

    /// Number of stored routes.
    pub fn route_count(&self) -> usize {
        self.lock().routes.len()
    }

    /// Swap in a whole new network under one lock acquisition.
    ///
    /// The snapshot is checked first; on error the store is unchanged.
    ///
    /// # Errors
    ///
    /// - [`StoreError::PointNotFound`] if a route endpoint is not in the snapshot
    /// - [`StoreError::InvalidRoute`] if a route starts and ends at the same point
    pub fn replace(&self, snapshot: MapSnapshot) -> Result<(), StoreError> {
        for route in snapshot.routes.values() {
            for endpoint in [route.from(), route.to()] {
                if !snapshot.points.contains(endpoint) {
                    return Err(StoreError::PointNotFound(endpoint.clone()));
                }
            }
            if route.is_self_loop() {
                return Err(StoreError::InvalidRoute(route.from().clone()));
            }
        }

        let tables = Tables {
            points: snapshot
                .points
                .into_iter()
                .map(|p| (p.as_str().to_string(), p))
                .collect(),
            routes: snapshot
                .routes
                .into_values()
                .map(|r| (r.key().clone(), r))
                .collect(),
        };

        *self.lock() = tables;
        trace!("tables replaced");
        Ok(())
    }

    /// Remove all points and routes.
    pub fn clear(&self) {
        let mut tables = self.lock();
        tables.points.clear();
        tables.routes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn point(s: &str) -> Point {
        Point::parse(s).unwrap()
    }

    fn route(from: &str, to: &str, time: u32, cost: u32) -> Route {
        Route::new(point(from), point(to), time, cost)
    }

    fn store_with(points: &[&str]) -> PointRouteStore {
        let store = PointRouteStore::new();
        for p in points {
            assert!(store.add_point(point(p)));
        }
        store
    }

    #[test]
    fn add_point_once() {
        let store = PointRouteStore::new();
        assert!(store.add_point(point("A")));
        assert!(!store.add_point(point("A")));
        assert_eq!(store.point_count(), 1);
        assert!(store.point_exists("A"));
        assert_eq!(store.get_point("A"), Some(point("A")));
        assert_eq!(store.get_point("B"), None);
    }

    #[test]
    fn add_route_requires_points() {
        let store = store_with(&["A"]);

        let err = store.add_route(route("A", "B", 1, 1)).unwrap_err();
        assert_eq!(err, StoreError::PointNotFound(point("B")));

        let err = store.add_route(route("X", "A", 1, 1)).unwrap_err();
        assert_eq!(err, StoreError::PointNotFound(point("X")));

        assert_eq!(store.route_count(), 0);
    }

    #[test]
    fn add_route_rejects_self_loop() {
        let store = store_with(&["A"]);

        let err = store.add_route(route("A", "A", 1, 1)).unwrap_err();
        assert_eq!(err, StoreError::InvalidRoute(point("A")));
        assert_eq!(err.to_string(), "the route (A -> A) is not permitted");
        assert_eq!(store.route_count(), 0);
    }

    #[test]
    fn duplicate_route_keeps_original() {
        let store = store_with(&["A", "B"]);

        assert_eq!(store.add_route(route("A", "B", 1, 2)), Ok(true));
        assert_eq!(store.add_route(route("A", "B", 10, 20)), Ok(false));

        let stored = store.get_route(&point("A"), &point("B")).unwrap();
        assert_eq!(stored.time, 1);
        assert_eq!(stored.cost, 2);
    }

    #[test]
    fn reverse_direction_is_a_different_route() {
        let store = store_with(&["A", "B"]);

        assert_eq!(store.add_route(route("A", "B", 1, 2)), Ok(true));
        assert_eq!(store.add_route(route("B", "A", 3, 4)), Ok(true));
        assert_eq!(store.route_count(), 2);
        assert!(store.route_exists(&point("B"), &point("A")));
    }

    #[test]
    fn update_route_in_place() {
        let store = store_with(&["A", "B"]);
        store.add_route(route("A", "B", 1, 2)).unwrap();

        assert!(store.update_route(route("A", "B", 7, 8)));
        let stored = store.get_route(&point("A"), &point("B")).unwrap();
        assert_eq!((stored.time, stored.cost), (7, 8));

        assert!(!store.update_route(route("B", "A", 7, 8)));
        assert_eq!(store.route_count(), 1);
    }

    #[test]
    fn delete_route() {
        let store = store_with(&["A", "B"]);
        store.add_route(route("A", "B", 1, 2)).unwrap();

        assert!(store.delete_route(&point("A"), &point("B")));
        assert!(!store.delete_route(&point("A"), &point("B")));
        assert!(!store.route_exists(&point("A"), &point("B")));
        // Points stay
        assert_eq!(store.point_count(), 2);
    }

    #[test]
    fn clear_empties_both_tables() {
        let store = store_with(&["A", "B"]);
        store.add_route(route("A", "B", 1, 2)).unwrap();

        store.clear();

        assert_eq!(store.point_count(), 0);
        assert_eq!(store.route_count(), 0);
        assert!(!store.point_exists("A"));
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let store = store_with(&["A", "B"]);
        store.add_route(route("A", "B", 1, 2)).unwrap();

        let mut points = store.snapshot_points();
        let mut routes = store.snapshot_routes();
        points.insert(point("Z"));
        routes.clear();

        // Mutating the copies does not touch the store
        assert!(!store.point_exists("Z"));
        assert_eq!(store.route_count(), 1);

        // Later store mutations don't show up in an earlier copy
        let snapshot = store.snapshot();
        store.add_point(point("C"));
        store.update_route(route("A", "B", 9, 9));

        assert_eq!(snapshot.points.len(), 2);
        assert!(snapshot.point("C").is_none());
        let copied = &snapshot.routes[&RouteKey::new(point("A"), point("B"))];
        assert_eq!(copied.time, 1);
    }

    #[test]
    fn replace_swaps_whole_network() {
        let store = store_with(&["Old"]);

        let mut snapshot = MapSnapshot::default();
        snapshot.points.insert(point("A"));
        snapshot.points.insert(point("B"));
        let ab = route("A", "B", 1, 2);
        snapshot.routes.insert(ab.key().clone(), ab);

        store.replace(snapshot).unwrap();

        assert!(!store.point_exists("Old"));
        assert_eq!(store.point_count(), 2);
        assert!(store.route_exists(&point("A"), &point("B")));
    }

    #[test]
    fn replace_rejects_invalid_network_and_keeps_old() {
        let store = store_with(&["Old"]);

        let mut dangling = MapSnapshot::default();
        dangling.points.insert(point("A"));
        let az = route("A", "Z", 1, 1);
        dangling.routes.insert(az.key().clone(), az);
        assert_eq!(
            store.replace(dangling),
            Err(StoreError::PointNotFound(point("Z")))
        );

        let mut looped = MapSnapshot::default();
        looped.points.insert(point("A"));
        let aa = route("A", "A", 1, 1);
        looped.routes.insert(aa.key().clone(), aa);
        assert_eq!(
            store.replace(looped),
            Err(StoreError::InvalidRoute(point("A")))
        );

        assert!(store.point_exists("Old"));
        assert_eq!(store.point_count(), 1);
    }

    #[test]
    fn snapshot_lookup_ignores_whitespace() {
        let snapshot = store_with(&["A"]).snapshot();
        assert_eq!(snapshot.point(" A "), Some(&point("A")));
        assert_eq!(snapshot.point(""), None);
        assert_eq!(snapshot.point("A/B"), None);
    }

    #[test]
    fn concurrent_adds_are_serialized() {
        let store = Arc::new(PointRouteStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .filter(|i| store.add_point(point(&format!("P{i}"))))
                        .count()
                })
            })
            .collect();

        let added: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        // Each name is added exactly once across all threads
        assert_eq!(added, 50);
        assert_eq!(store.point_count(), 50);
    }
}
