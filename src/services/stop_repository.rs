//! Trait for reading stops from an upstream transit system.

use crate::error::TransitError;
use crate::models::{Stop, StopsPage};

/// Abstraction over a stop source bound to a single transit system
/// (e.g., a Transiter server serving `us-ny-subway`).
#[async_trait::async_trait]
pub trait StopRepository: Send + Sync {
    /// Returns one page of station-type stops, starting after `cursor`
    /// (or at the beginning when `cursor` is `None`).
    async fn fetch_stations_page(&self, cursor: Option<&str>) -> Result<StopsPage, TransitError>;

    /// Returns a single stop with its full schedule.
    async fn fetch_stop(&self, stop_id: &str) -> Result<Stop, TransitError>;
}
