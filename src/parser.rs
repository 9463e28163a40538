//! JSON decoding for Transiter stop payloads.

use crate::models::{Stop, StopsPage};

/// Decodes a single [`Stop`] including its schedule.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid stop, including a time field
/// that is neither empty nor a number of epoch seconds.
pub fn parse_stop(bytes: &[u8]) -> serde_json::Result<Stop> {
    serde_json::from_slice(bytes)
}

/// Decodes one page of the station catalog.
pub fn parse_stops_page(bytes: &[u8]) -> serde_json::Result<StopsPage> {
    serde_json::from_slice(bytes)
}
