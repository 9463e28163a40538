use crate::models::Stop;

use super::normalize::normalize_station_name;

/// Returns `true` when every character of `needle` occurs in `haystack`
/// in the same order, not necessarily adjacent.
pub fn fuzzy_contains(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}

/// Selects the catalog stops whose lowercased name fuzzily contains the
/// normalized `query`.
///
/// Results keep catalog order. Stops that share a name are all returned;
/// the catalog uses separate stations for platforms at one location and
/// unrelated locations can share a name, so there is nothing to dedupe on.
pub fn match_stations<'a>(query: &str, catalog: &'a [Stop]) -> Vec<&'a Stop> {
    let needle = normalize_station_name(query);
    catalog
        .iter()
        .filter(|stop| fuzzy_contains(&needle, &stop.name.to_lowercase()))
        .collect()
}
