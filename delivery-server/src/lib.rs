//! Delivery network server.
//!
//! Keeps a network of named points joined by one-way routes, each with a
//! time and a cost, and answers: "what are all the ways to get from here to
//! there, and which is fastest and which is cheapest?"

pub mod config;
pub mod domain;
pub mod load;
pub mod planner;
pub mod service;
pub mod store;
pub mod web;
