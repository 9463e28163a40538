//! Next-departure selection.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::TransitError;
use crate::models::Stop;
use crate::selector::LineSelector;
use crate::services::StopRepository;

/// Returns the earliest future arrival at `stop` that `selector` accepts.
///
/// Stop-times flagged as future but carrying no arrival time are skipped.
/// When several candidates share the earliest time, any of them may be the
/// one returned; the instant is the same either way.
pub fn next_departure(stop: &Stop, selector: &LineSelector) -> Result<DateTime<Utc>, TransitError> {
    stop.stop_times
        .iter()
        .filter(|st| st.future && selector.matches(st))
        .filter_map(|st| st.arrival.time)
        .min()
        .ok_or_else(|| TransitError::NoDepartures {
            selector: selector.describe(),
            station: stop.name.clone(),
        })
}

/// Fetches `station_id` and selects its next departure for `selector`.
#[tracing::instrument(skip(repo, selector), fields(line_selector = %selector))]
pub async fn fetch_next_departure<R>(
    repo: &R,
    station_id: &str,
    selector: &LineSelector,
) -> Result<DateTime<Utc>, TransitError>
where
    R: StopRepository + ?Sized,
{
    let stop = repo.fetch_stop(station_id).await?;
    let departure = next_departure(&stop, selector)?;
    info!(station = %stop.name, %departure, "Next departure found");
    Ok(departure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::DirectionMatcher;
    use crate::testing::{FakeRepository, stop, stop_time};

    fn downtown_q() -> LineSelector {
        LineSelector::new("Q", DirectionMatcher::headsign("Downtown"))
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_selects_earliest_future_match() {
        let mut station = stop("R17", "Times Sq-42 St");
        station.stop_times = vec![
            stop_time("Q", "Downtown", "D43S", Some(10), false),
            stop_time("Q", "Downtown", "D43S", Some(30), true),
            stop_time("Q", "Downtown", "D43S", Some(20), true),
            stop_time("Q", "Uptown", "Q05N", Some(40), true),
        ];

        assert_eq!(next_departure(&station, &downtown_q()).unwrap(), at(20));
    }

    #[test]
    fn test_future_without_arrival_is_ineligible() {
        let mut station = stop("R17", "Times Sq-42 St");
        station.stop_times = vec![
            stop_time("Q", "Downtown", "D43S", None, true),
            stop_time("Q", "Downtown", "D43S", Some(50), true),
        ];

        assert_eq!(next_departure(&station, &downtown_q()).unwrap(), at(50));
    }

    #[test]
    fn test_ties_resolve_to_shared_time() {
        let mut station = stop("R17", "Times Sq-42 St");
        station.stop_times = vec![
            stop_time("Q", "Downtown", "D43S", Some(20), true),
            stop_time("Q", "Downtown", "D43S", Some(20), true),
        ];

        assert_eq!(next_departure(&station, &downtown_q()).unwrap(), at(20));
    }

    #[test]
    fn test_no_candidates_is_not_found() {
        let mut station = stop("R17", "Times Sq-42 St");
        station.stop_times = vec![
            stop_time("Q", "Downtown", "D43S", Some(10), false),
            stop_time("Q", "Uptown", "Q05N", Some(40), true),
            stop_time("Q", "Downtown", "D43S", None, true),
        ];

        let err = next_departure(&station, &downtown_q()).unwrap_err();
        assert!(matches!(
            err,
            TransitError::NoDepartures { ref selector, ref station } if selector == "Downtown Q" && station == "Times Sq-42 St"
        ));
        assert_eq!(
            err.to_string(),
            "could not find any Downtown Q trains at station Times Sq-42 St"
        );
    }

    #[test]
    fn test_empty_schedule_is_not_found() {
        let station = stop("R17", "Times Sq-42 St");
        assert!(matches!(
            next_departure(&station, &downtown_q()),
            Err(TransitError::NoDepartures { .. })
        ));
    }

    #[test]
    fn test_entries_with_null_sections_are_skipped() {
        let station = crate::parser::parse_stop(
            br#"{"id": "R17", "name": "Times Sq-42 St", "stopTimes": [
                {"arrival": null, "future": true, "headsign": "Downtown",
                 "trip": {"route": {"id": "Q"}}},
                {"arrival": {"time": "5"}, "future": true, "headsign": "Downtown",
                 "trip": {"route": {"color": "FF"}}},
                {"arrival": {"time": "7"}, "future": true, "headsign": "Downtown", "trip": null},
                {"arrival": {"time": "60"}, "future": true, "headsign": "Downtown",
                 "destination": null, "trip": {"route": {"id": "Q"}}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(next_departure(&station, &downtown_q()).unwrap(), at(60));
    }

    #[tokio::test]
    async fn test_fetch_next_departure() {
        let mut station = stop("R17", "Times Sq-42 St");
        station.stop_times = vec![stop_time("Q", "Downtown", "D43S", Some(90), true)];
        let repo = FakeRepository::with_stops(vec![station]);

        let departure = fetch_next_departure(&repo, "R17", &downtown_q()).await.unwrap();
        assert_eq!(departure, at(90));

        let missing = fetch_next_departure(&repo, "XXX", &downtown_q()).await;
        assert!(matches!(missing, Err(TransitError::Status { status: 404, .. })));
    }
}
