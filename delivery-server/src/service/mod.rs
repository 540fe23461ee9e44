//! Network management and trip queries.
//!
//! [`DeliveryService`] is the entry point for every operation on the network.
//! It resolves point names, turns the store's `bool` results into typed
//! errors where the caller expects uniqueness or existence, and runs the
//! trip planner on a snapshot.

mod error;

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Point, Route, Trip};
use crate::planner::{Planner, PlannerConfig};
use crate::store::{MapSnapshot, PointRouteStore};

pub use error::DeliveryError;

/// Operations on a shared point/route store.
#[derive(Debug, Clone)]
pub struct DeliveryService {
    store: Arc<PointRouteStore>,
    config: PlannerConfig,
}

impl DeliveryService {
    /// Create a service over an existing store.
    pub fn new(store: Arc<PointRouteStore>, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    /// Create a service over a fresh, empty store with no search limits.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(PointRouteStore::new()), PlannerConfig::default())
    }

    /// Add a point to the network.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::InvalidPoint`] if the name is not a valid point name
    /// - [`DeliveryError::ExistingPoint`] if the point already exists
    pub fn add_point(&self, name: &str) -> Result<Point, DeliveryError> {
        let point = Point::parse(name)?;
        if !self.store.add_point(point.clone()) {
            return Err(DeliveryError::ExistingPoint(point));
        }
        debug!(%point, "point added");
        Ok(point)
    }

    /// Add a route from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::PointNotFound`] if either point is absent
    /// - [`DeliveryError::InvalidRoute`] if `from` and `to` are the same
    /// - [`DeliveryError::ExistingRoute`] if the route already exists
    pub fn add_route(
        &self,
        from: &str,
        to: &str,
        time: u32,
        cost: u32,
    ) -> Result<Route, DeliveryError> {
        let route = Route::new(Point::parse(from)?, Point::parse(to)?, time, cost);

        if !self.store.add_route(route.clone())? {
            return Err(DeliveryError::ExistingRoute {
                from: route.from().clone(),
                to: route.to().clone(),
            });
        }
        debug!(%route, "route added");
        Ok(route)
    }

    /// Change the time and cost of an existing route.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::RouteNotFound`] if no route exists from `from` to `to`.
    pub fn update_route(
        &self,
        from: &str,
        to: &str,
        time: u32,
        cost: u32,
    ) -> Result<Route, DeliveryError> {
        let route = Route::new(Point::parse(from)?, Point::parse(to)?, time, cost);

        if !self.store.update_route(route.clone()) {
            return Err(DeliveryError::RouteNotFound {
                from: route.from().clone(),
                to: route.to().clone(),
            });
        }
        debug!(%route, "route updated");
        Ok(route)
    }

    /// Remove the route from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::RouteNotFound`] if no such route exists.
    pub fn delete_route(&self, from: &str, to: &str) -> Result<(), DeliveryError> {
        let from = Point::parse(from)?;
        let to = Point::parse(to)?;

        if !self.store.delete_route(&from, &to) {
            return Err(DeliveryError::RouteNotFound { from, to });
        }
        debug!(%from, %to, "route deleted");
        Ok(())
    }

    /// Look up a point by name. Invalid names never match.
    pub fn get_point(&self, name: &str) -> Option<Point> {
        let point = Point::parse(name).ok()?;
        self.store.get_point(point.as_str())
    }

    /// All points, sorted by name.
    pub fn list_points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.store.snapshot_points().into_iter().collect();
        points.sort();
        points
    }

    /// Look up the route from `from` to `to`.
    ///
    /// Returns `Ok(None)` if both points exist but no route links them.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::PointNotFound`] if either point is absent.
    pub fn get_route(&self, from: &str, to: &str) -> Result<Option<Route>, DeliveryError> {
        let from = self.require_point(from)?;
        let to = self.require_point(to)?;
        Ok(self.store.get_route(&from, &to))
    }

    /// A consistent copy of the whole network.
    pub fn snapshot(&self) -> MapSnapshot {
        self.store.snapshot()
    }

    /// All points and all routes, sorted, read together from one snapshot.
    pub fn map(&self) -> (Vec<Point>, Vec<Route>) {
        let snapshot = self.snapshot();

        let mut points: Vec<Point> = snapshot.points.into_iter().collect();
        points.sort();
        let mut routes: Vec<Route> = snapshot.routes.into_values().collect();
        routes.sort_by(|a, b| a.key().cmp(b.key()));

        (points, routes)
    }

    /// Replace the whole network in one step.
    ///
    /// Readers see either the old network or the new one, never a mix.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::PointNotFound`] if a route endpoint is not in `snapshot`
    /// - [`DeliveryError::InvalidRoute`] if a route starts and ends at the same point
    pub fn replace(&self, snapshot: MapSnapshot) -> Result<(), DeliveryError> {
        let (points, routes) = (snapshot.points.len(), snapshot.routes.len());
        self.store.replace(snapshot)?;
        info!(points, routes, "network replaced");
        Ok(())
    }

    /// All routes, sorted by start then end point.
    pub fn list_routes(&self) -> Vec<Route> {
        let mut routes: Vec<Route> = self.store.snapshot_routes().into_values().collect();
        routes.sort_by(|a, b| a.key().cmp(b.key()));
        routes
    }

    /// Every multi-hop trip from `from` to `to`, with the fastest and
    /// cheapest marked.
    ///
    /// A direct route between the two points is never a trip on its own.
    /// An empty result means the points exist but no trip connects them.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::PointNotFound`] if either point is absent.
    pub fn all_trips(&self, from: &str, to: &str) -> Result<Vec<Trip>, DeliveryError> {
        let snapshot = self.store.snapshot();

        let from = known_point(snapshot.point(from).cloned(), from)?;
        let to = known_point(snapshot.point(to).cloned(), to)?;

        Ok(Planner::new(&self.config).search(&snapshot, &from, &to))
    }

    /// The fastest trip from `from` to `to`, if any trip exists.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::PointNotFound`] if either point is absent.
    pub fn fastest_trip(&self, from: &str, to: &str) -> Result<Option<Trip>, DeliveryError> {
        Ok(self
            .all_trips(from, to)?
            .into_iter()
            .find(Trip::is_fastest))
    }

    /// The cheapest trip from `from` to `to`, if any trip exists.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::PointNotFound`] if either point is absent.
    pub fn cheapest_trip(&self, from: &str, to: &str) -> Result<Option<Trip>, DeliveryError> {
        Ok(self
            .all_trips(from, to)?
            .into_iter()
            .find(Trip::is_cheapest))
    }

    /// Remove every point and route.
    pub fn clear(&self) {
        self.store.clear();
        info!("network cleared");
    }

    fn require_point(&self, name: &str) -> Result<Point, DeliveryError> {
        known_point(self.get_point(name), name)
    }
}

// A name that fails validation cannot name a stored point, so lookups report
// it as not found.
fn known_point(found: Option<Point>, name: &str) -> Result<Point, DeliveryError> {
    found.ok_or_else(|| DeliveryError::PointNotFound(name.trim().to_string()))
}
