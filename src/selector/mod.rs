//! Line and direction selection over scheduled stop-times.

mod direction;
mod line;

pub use direction::{DestinationStationMatcher, DirectionMatcher, HeadsignMatcher};
pub use line::LineSelector;

use tracing::debug;

use crate::error::TransitError;
use crate::services::StopRepository;

/// Builds a [`LineSelector`] from rider options.
///
/// Exactly one of `direction` (a headsign) or `destination` (a stop id) must
/// be given. A destination is fetched so trips ending at any of its child
/// platforms also match. Empty strings count as absent.
pub async fn build_line_selector<R>(
    repo: &R,
    line: &str,
    direction: Option<&str>,
    destination: Option<&str>,
) -> Result<LineSelector, TransitError>
where
    R: StopRepository + ?Sized,
{
    if line.is_empty() {
        return Err(TransitError::InvalidSelector("--line is required".to_string()));
    }

    let direction = direction.filter(|d| !d.is_empty());
    let destination = destination.filter(|d| !d.is_empty());

    let matcher = match (direction, destination) {
        (Some(headsign), None) => DirectionMatcher::headsign(headsign),
        (None, Some(stop_id)) => {
            let stop = repo.fetch_stop(stop_id).await?;
            debug!(stop_id, children = stop.child_stops.len(), "Destination resolved");
            DirectionMatcher::destination(&stop)
        }
        _ => {
            return Err(TransitError::InvalidSelector(
                "must set exactly one of --direction, --destination".to_string(),
            ));
        }
    };

    Ok(LineSelector::new(line, matcher))
}
