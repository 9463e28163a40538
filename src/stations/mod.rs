//! Station name resolution.
//!
//! A query is normalized, the full station catalog is read page by page,
//! and every station whose name fuzzily contains the query is returned.

mod catalog;
mod matcher;
mod normalize;

pub use catalog::read_station_catalog;
pub use matcher::{fuzzy_contains, match_stations};
pub use normalize::normalize_station_name;

use tracing::info;

use crate::error::TransitError;
use crate::models::Stop;
use crate::services::StopRepository;

/// Reads the catalog and returns every station matching `query`.
///
/// An empty result is not an error here; see [`lookup_stations`].
#[tracing::instrument(skip(repo))]
pub async fn find_stations<R>(repo: &R, query: &str) -> Result<Vec<Stop>, TransitError>
where
    R: StopRepository + ?Sized,
{
    let catalog = read_station_catalog(repo).await?;
    let matches: Vec<Stop> = match_stations(query, &catalog)
        .into_iter()
        .cloned()
        .collect();
    info!(catalog = catalog.len(), matches = matches.len(), "Station search finished");
    Ok(matches)
}

/// Like [`find_stations`], but zero matches is reported as
/// [`TransitError::StationNotFound`].
pub async fn lookup_stations<R>(repo: &R, query: &str) -> Result<Vec<Stop>, TransitError>
where
    R: StopRepository + ?Sized,
{
    let stations = find_stations(repo, query).await?;
    if stations.is_empty() {
        return Err(TransitError::StationNotFound {
            query: query.to_string(),
        });
    }
    Ok(stations)
}
