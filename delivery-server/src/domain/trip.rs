//! Trip types.
//!
//! A `Trip` is a multi-hop path between two points together with its
//! aggregated time and cost. Trips only exist as query results.

use super::{DomainError, Point, Route};

/// Minimum number of routes in a trip. A direct connection is not a trip.
pub const MIN_TRIP_ROUTES: usize = 2;

/// A connected sequence of routes from one point to another.
///
/// # Invariants
///
/// - At least [`MIN_TRIP_ROUTES`] routes
/// - The first route starts at `from`, the last ends at `to`
/// - Consecutive routes connect (end of one = start of next)
///
/// The fastest/cheapest flags are scoped to the query that produced the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    from: Point,
    to: Point,
    routes: Vec<Route>,
    total_time: u64,
    total_cost: u64,
    fastest: bool,
    cheapest: bool,
}

impl Trip {
    /// Constructs a trip, summing time and cost in route order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the routes are too few, don't connect, or don't
    /// start at `from` and end at `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_server::domain::{Point, Route, Trip};
    ///
    /// let a = Point::parse("A").unwrap();
    /// let b = Point::parse("B").unwrap();
    /// let c = Point::parse("C").unwrap();
    ///
    /// let trip = Trip::new(
    ///     a.clone(),
    ///     b.clone(),
    ///     vec![
    ///         Route::new(a.clone(), c.clone(), 1, 20),
    ///         Route::new(c, b.clone(), 1, 12),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(trip.total_time(), 2);
    /// assert_eq!(trip.total_cost(), 32);
    ///
    /// // A single route is not a trip
    /// assert!(Trip::new(a.clone(), b.clone(), vec![Route::new(a, b, 1, 1)]).is_err());
    /// ```
    pub fn new(from: Point, to: Point, routes: Vec<Route>) -> Result<Self, DomainError> {
        if routes.len() < MIN_TRIP_ROUTES {
            return Err(DomainError::TripTooShort(routes.len()));
        }

        let starts_at_from = routes.first().is_some_and(|r| r.from() == &from);
        let ends_at_to = routes.last().is_some_and(|r| r.to() == &to);
        if !starts_at_from || !ends_at_to {
            return Err(DomainError::WrongEndpoints { from, to });
        }

        for pair in routes.windows(2) {
            if pair[0].to() != pair[1].from() {
                return Err(DomainError::RoutesNotConnected(
                    pair[1].from().clone(),
                    pair[0].to().clone(),
                ));
            }
        }

        let total_time = routes.iter().map(|r| u64::from(r.time)).sum();
        let total_cost = routes.iter().map(|r| u64::from(r.cost)).sum();

        Ok(Self {
            from,
            to,
            routes,
            total_time,
            total_cost,
            fastest: false,
            cheapest: false,
        })
    }

    /// Returns the start point of the trip.
    pub fn from(&self) -> &Point {
        &self.from
    }

    /// Returns the end point of the trip.
    pub fn to(&self) -> &Point {
        &self.to
    }

    /// Returns the routes in travel order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the sum of route times.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Returns the sum of route costs.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Returns every point visited, start and end included.
    pub fn points(&self) -> Vec<&Point> {
        std::iter::once(&self.from)
            .chain(self.routes.iter().map(|r| r.to()))
            .collect()
    }

    /// Whether this trip is the fastest in its result set.
    pub fn is_fastest(&self) -> bool {
        self.fastest
    }

    /// Whether this trip is the cheapest in its result set.
    pub fn is_cheapest(&self) -> bool {
        self.cheapest
    }

    pub(crate) fn mark_fastest(&mut self) {
        self.fastest = true;
    }

    pub(crate) fn mark_cheapest(&mut self) {
        self.cheapest = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(s: &str) -> Point {
        Point::parse(s).unwrap()
    }

    fn route(from: &str, to: &str, time: u32, cost: u32) -> Route {
        Route::new(point(from), point(to), time, cost)
    }

    #[test]
    fn totals_are_sums() {
        let trip = Trip::new(
            point("E"),
            point("B"),
            vec![
                route("E", "D", 3, 5),
                route("D", "F", 4, 50),
                route("F", "I", 45, 50),
                route("I", "B", 65, 5),
            ],
        )
        .unwrap();

        assert_eq!(trip.total_time(), 117);
        assert_eq!(trip.total_cost(), 110);
        assert!(!trip.is_fastest());
        assert!(!trip.is_cheapest());
    }

    #[test]
    fn totals_do_not_overflow_u32() {
        let trip = Trip::new(
            point("A"),
            point("C"),
            vec![route("A", "B", u32::MAX, u32::MAX), route("B", "C", 1, 1)],
        )
        .unwrap();

        assert_eq!(trip.total_time(), u64::from(u32::MAX) + 1);
        assert_eq!(trip.total_cost(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn points_in_order() {
        let trip = Trip::new(
            point("A"),
            point("B"),
            vec![route("A", "C", 1, 20), route("C", "B", 1, 12)],
        )
        .unwrap();

        let names: Vec<&str> = trip.points().iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn single_route_rejected() {
        let result = Trip::new(point("A"), point("E"), vec![route("A", "E", 30, 5)]);
        assert_eq!(result, Err(DomainError::TripTooShort(1)));
    }

    #[test]
    fn empty_rejected() {
        let result = Trip::new(point("A"), point("E"), vec![]);
        assert_eq!(result, Err(DomainError::TripTooShort(0)));
    }

    #[test]
    fn disconnected_rejected() {
        let result = Trip::new(
            point("A"),
            point("B"),
            vec![route("A", "C", 1, 1), route("D", "B", 1, 1)],
        );
        assert_eq!(
            result,
            Err(DomainError::RoutesNotConnected(point("D"), point("C")))
        );
    }

    #[test]
    fn wrong_endpoints_rejected() {
        let result = Trip::new(
            point("A"),
            point("B"),
            vec![route("A", "C", 1, 1), route("C", "D", 1, 1)],
        );
        assert!(matches!(result, Err(DomainError::WrongEndpoints { .. })));
    }

    #[test]
    fn marks_are_independent() {
        let mut trip = Trip::new(
            point("A"),
            point("B"),
            vec![route("A", "C", 1, 20), route("C", "B", 1, 12)],
        )
        .unwrap();

        trip.mark_cheapest();
        assert!(trip.is_cheapest());
        assert!(!trip.is_fastest());

        trip.mark_fastest();
        assert!(trip.is_fastest());
    }
}
