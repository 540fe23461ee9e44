//! Web layer for the delivery network.
//!
//! Provides HTTP endpoints for managing points and routes and for querying
//! trips.

mod auth;
mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
