use std::fmt;

use crate::models::StopTime;

use super::direction::DirectionMatcher;

/// A route id plus a direction: "the downtown Q".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSelector {
    line: String,
    direction: DirectionMatcher,
}

impl LineSelector {
    pub fn new(line: impl Into<String>, direction: DirectionMatcher) -> Self {
        Self {
            line: line.into(),
            direction,
        }
    }

    pub fn matches(&self, stop_time: &StopTime) -> bool {
        stop_time.trip.route.id == self.line && self.direction.matches(stop_time)
    }

    /// e.g. `"Downtown Q"` or `"Coney Island-Stillwell Av bound Q"`.
    pub fn describe(&self) -> String {
        format!("{} {}", self.direction.describe(), self.line)
    }
}

impl fmt::Display for LineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
