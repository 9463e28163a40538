//! In-memory [`StopRepository`] and fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;

use crate::error::TransitError;
use crate::models::{EventTime, Route, Stop, StopReference, StopTime, StopsPage, Trip};
use crate::services::StopRepository;

/// Either a page's stops plus next cursor, or the HTTP status it fails with.
pub type PageResult = Result<(Vec<Stop>, Option<&'static str>), u16>;

#[derive(Default)]
pub struct FakeRepository {
    pages: Vec<(Option<&'static str>, PageResult)>,
    stops: HashMap<String, Stop>,
    requested: Mutex<Vec<Option<String>>>,
}

impl FakeRepository {
    pub fn with_pages(pages: Vec<(Option<&'static str>, PageResult)>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn with_stops(stops: Vec<Stop>) -> Self {
        Self {
            stops: stops.into_iter().map(|s| (s.id.clone(), s)).collect(),
            ..Default::default()
        }
    }

    /// Cursors passed to `fetch_stations_page`, in call order.
    pub fn requested_cursors(&self) -> Vec<Option<String>> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StopRepository for FakeRepository {
    async fn fetch_stations_page(&self, cursor: Option<&str>) -> Result<StopsPage, TransitError> {
        self.requested.lock().unwrap().push(cursor.map(str::to_string));

        let url = format!("fake://stops?first_id={}", cursor.unwrap_or_default());
        let (_, result) = self
            .pages
            .iter()
            .find(|(c, _)| *c == cursor)
            .ok_or_else(|| TransitError::Status {
                url: url.clone(),
                status: 404,
            })?;

        match result {
            Ok((stops, next)) => Ok(StopsPage {
                stops: stops.clone(),
                next_id: next.map(str::to_string),
            }),
            Err(status) => Err(TransitError::Status {
                url,
                status: *status,
            }),
        }
    }

    async fn fetch_stop(&self, stop_id: &str) -> Result<Stop, TransitError> {
        self.stops
            .get(stop_id)
            .cloned()
            .ok_or_else(|| TransitError::Status {
                url: format!("fake://stops/{stop_id}"),
                status: 404,
            })
    }
}

pub fn stop(id: &str, name: &str) -> Stop {
    Stop {
        id: id.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

/// A stop-time on `route` arriving at `arrival` epoch seconds.
pub fn stop_time(route: &str, headsign: &str, destination: &str, arrival: Option<i64>, future: bool) -> StopTime {
    StopTime {
        arrival: EventTime {
            time: arrival.and_then(|secs| DateTime::from_timestamp(secs, 0)),
        },
        departure: EventTime::default(),
        future,
        headsign: headsign.to_string(),
        destination: StopReference {
            id: destination.to_string(),
            name: String::new(),
        },
        trip: Trip {
            id: format!("{route}-{}", arrival.unwrap_or_default()),
            route: Route {
                id: route.to_string(),
                color: String::new(),
            },
        },
    }
}
