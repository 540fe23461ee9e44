//! Errors surfaced to callers of [`DeliveryService`](super::DeliveryService).

use crate::domain::{InvalidPoint, Point};
use crate::store::StoreError;

/// Errors from network operations.
///
/// Each kind is distinct so the web layer can pick a status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The operation references a point that is not in the network.
    /// Carries the name as given, which need not be a valid point name.
    #[error("the point [{0}] does not exist")]
    PointNotFound(String),

    /// No route exists for the given pair of points
    #[error("there is no route set from point [{from}] to [{to}]")]
    RouteNotFound { from: Point, to: Point },

    /// A point with this name already exists
    #[error("point {0} already exists")]
    ExistingPoint(Point),

    /// A route between these points already exists
    #[error("the route ({from} -> {to}) already exists")]
    ExistingRoute { from: Point, to: Point },

    /// A route would start and end at the same point
    #[error("the route ({0} -> {0}) is not permitted")]
    InvalidRoute(Point),

    /// A point name failed validation
    #[error(transparent)]
    InvalidPoint(#[from] InvalidPoint),
}

impl From<StoreError> for DeliveryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::PointNotFound(point) => DeliveryError::PointNotFound(point.to_string()),
            StoreError::InvalidRoute(point) => DeliveryError::InvalidRoute(point),
        }
    }
}
