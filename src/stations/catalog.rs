use tracing::debug;

use crate::error::TransitError;
use crate::models::Stop;
use crate::services::StopRepository;

/// Drains the paginated station catalog into a single collection.
///
/// Pages are requested one after another, each with the cursor returned by
/// the previous page, and concatenated in response order. The first failing
/// page aborts the read and its error is returned; stops from earlier pages
/// are dropped.
pub async fn read_station_catalog<R>(repo: &R) -> Result<Vec<Stop>, TransitError>
where
    R: StopRepository + ?Sized,
{
    let mut stops = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = repo.fetch_stations_page(cursor.as_deref()).await?;
        pages += 1;
        debug!(page = pages, stops = page.stops.len(), "Station page fetched");

        let next = page.next_cursor().map(str::to_string);
        stops.extend(page.stops);

        match next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    debug!(pages, total = stops.len(), "Station catalog read");
    Ok(stops)
}
