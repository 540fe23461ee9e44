//! Domain types for the delivery network.
//!
//! Points, routes and trips. Types enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod error;
mod point;
mod route;
mod trip;

pub use error::DomainError;
pub use point::{InvalidPoint, Point};
pub use route::{Route, RouteKey};
pub use trip::{MIN_TRIP_ROUTES, Trip};
