//! Stop and schedule records as served by the Transiter stop API.
//!
//! Records are read-only once decoded and live only for the duration of a
//! single command.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A station or platform together with its schedule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stop_times: Vec<StopTime>,
    #[serde(default)]
    pub service_maps: Vec<ServiceMap>,
    #[serde(default)]
    pub child_stops: Vec<StopReference>,
}

impl Stop {
    /// Returns every route id served at this stop, deduplicated and sorted.
    pub fn lines(&self) -> Vec<String> {
        let lines: BTreeSet<&str> = self
            .service_maps
            .iter()
            .flat_map(|map| map.routes.iter())
            .map(|route| route.id.as_str())
            .collect();
        lines.into_iter().map(str::to_string).collect()
    }
}

/// Lightweight pointer to another stop (children, trip destinations).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StopReference {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One scheduled arrival/departure event for a trip at a stop.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTime {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival: EventTime,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure: EventTime,
    #[serde(default)]
    pub future: bool,
    #[serde(default)]
    pub headsign: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: StopReference,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trip: Trip,
}

/// An arrival or departure instant. `time` is `None` when upstream left it unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EventTime {
    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trip {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: Route,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub color: String,
}

/// A grouping of routes serving a stop.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceMap {
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One page of the station catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsPage {
    #[serde(default)]
    pub stops: Vec<Stop>,
    /// Cursor for the next page. Empty or absent on the last page.
    #[serde(default)]
    pub next_id: Option<String>,
}

impl StopsPage {
    /// Returns the cursor to follow, or `None` once pagination is finished.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Epoch seconds are transmitted as a string; the empty string means unset.
fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(secs) => {
            let secs: i64 = secs
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid epoch seconds {secs:?}: {e}")))?;
            DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("epoch seconds out of range: {secs}")))
        }
    }
}
