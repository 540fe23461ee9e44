//! Routes and route keys.

use std::fmt;

use super::Point;

/// The storage identity of a route: the ordered pair of its endpoints.
///
/// Order matters: `A -> B` and `B -> A` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    from: Point,
    to: Point,
}

impl RouteKey {
    /// Creates a key for the directed pair `from -> to`.
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Returns the start point.
    pub fn from(&self) -> &Point {
        &self.from
    }

    /// Returns the end point.
    pub fn to(&self) -> &Point {
        &self.to
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A directed, weighted link between two points.
///
/// The endpoints are fixed at construction. Time and cost may be changed by
/// an update; changing endpoints means deleting and inserting a new route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    key: RouteKey,
    /// Time taken to travel the route
    pub time: u32,
    /// Cost of travelling the route
    pub cost: u32,
}

impl Route {
    /// Creates a route from `from` to `to`.
    pub fn new(from: Point, to: Point, time: u32, cost: u32) -> Self {
        Self {
            key: RouteKey::new(from, to),
            time,
            cost,
        }
    }

    /// Returns the start point.
    pub fn from(&self) -> &Point {
        self.key.from()
    }

    /// Returns the end point.
    pub fn to(&self) -> &Point {
        self.key.to()
    }

    /// Returns the storage key of this route.
    pub fn key(&self) -> &RouteKey {
        &self.key
    }

    /// Returns true if both endpoints are the same point.
    pub fn is_self_loop(&self) -> bool {
        self.key.from == self.key.to
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (time={}, cost={})", self.key, self.time, self.cost)
    }
}
