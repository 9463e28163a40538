use std::collections::HashSet;
use std::fmt;

use crate::models::{Stop, StopTime};

/// Decides whether a stop-time runs in the direction a rider asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionMatcher {
    Headsign(HeadsignMatcher),
    DestinationStation(DestinationStationMatcher),
}

impl DirectionMatcher {
    pub fn headsign(headsign: impl Into<String>) -> Self {
        Self::Headsign(HeadsignMatcher::new(headsign))
    }

    pub fn destination(stop: &Stop) -> Self {
        Self::DestinationStation(DestinationStationMatcher::from_stop(stop))
    }

    pub fn matches(&self, stop_time: &StopTime) -> bool {
        match self {
            Self::Headsign(m) => m.matches(stop_time),
            Self::DestinationStation(m) => m.matches(stop_time),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Headsign(m) => m.describe(),
            Self::DestinationStation(m) => m.describe(),
        }
    }
}

impl fmt::Display for DirectionMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Matches on the rider-facing headsign ("Uptown", "Manhattan", ...),
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadsignMatcher {
    headsign: String,
}

impl HeadsignMatcher {
    pub fn new(headsign: impl Into<String>) -> Self {
        Self {
            headsign: headsign.into(),
        }
    }

    pub fn matches(&self, stop_time: &StopTime) -> bool {
        self.headsign.to_lowercase() == stop_time.headsign.to_lowercase()
    }

    pub fn describe(&self) -> String {
        self.headsign.clone()
    }
}

/// Matches trips terminating at a station or at any of its child platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationStationMatcher {
    station_id: String,
    child_ids: HashSet<String>,
    name: String,
}

impl DestinationStationMatcher {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            station_id: stop.id.clone(),
            child_ids: stop.child_stops.iter().map(|c| c.id.clone()).collect(),
            name: stop.name.clone(),
        }
    }

    pub fn matches(&self, stop_time: &StopTime) -> bool {
        let destination = &stop_time.destination.id;
        *destination == self.station_id || self.child_ids.contains(destination)
    }

    pub fn describe(&self) -> String {
        format!("{} bound", self.name)
    }
}
