//! Next-train lookups against a Transiter stop API.
//!
//! Resolves free-text station names to stop ids and finds the next
//! departure for a line and direction at a station.

pub mod departures;
pub mod error;
pub mod fetch;
pub mod infra;
pub mod models;
pub mod output;
pub mod parser;
pub mod selector;
pub mod services;
pub mod stations;

#[cfg(test)]
pub(crate) mod testing;

pub use error::TransitError;
