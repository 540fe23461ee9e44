//! Domain error types.
//!
//! These errors represent invariant violations when assembling domain
//! values. They are distinct from store and service errors.

use super::Point;

/// Domain-level errors for trip construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trip has fewer routes than a multi-hop path needs
    #[error("trip must have at least 2 routes, got {0}")]
    TripTooShort(usize),

    /// Consecutive routes don't share a point
    #[error("routes are not connected: {0} does not continue from {1}")]
    RoutesNotConnected(Point, Point),

    /// First or last route doesn't touch the trip endpoints
    #[error("trip from {from} to {to} does not start and end at its endpoints")]
    WrongEndpoints { from: Point, to: Point },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::TripTooShort(1);
        assert_eq!(err.to_string(), "trip must have at least 2 routes, got 1");

        let c = Point::parse("C").unwrap();
        let d = Point::parse("D").unwrap();
        let err = DomainError::RoutesNotConnected(d.clone(), c.clone());
        assert_eq!(
            err.to_string(),
            "routes are not connected: D does not continue from C"
        );

        let err = DomainError::WrongEndpoints { from: c, to: d };
        assert_eq!(
            err.to_string(),
            "trip from C to D does not start and end at its endpoints"
        );
    }
}
