//! Store error types.

use crate::domain::Point;

/// Errors raised by store mutations.
///
/// Duplicate inserts are not errors at this level: the add primitives
/// return `false` and leave the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A route endpoint is not a stored point
    #[error("the point [{0}] does not exist")]
    PointNotFound(Point),

    /// A route would start and end at the same point
    #[error("the route ({0} -> {0}) is not permitted")]
    InvalidRoute(Point),
}
