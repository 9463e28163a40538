//! Console rendering for station tables and departure times.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use csv::WriterBuilder;
use tracing::debug;

use crate::models::Stop;

/// Writes matched stations as a tab-separated `ID / Name / Lines` table.
pub fn write_station_table<W: Write>(writer: W, stations: &[Stop]) -> Result<()> {
    debug!(rows = stations.len(), "Writing station table");

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    writer.write_record(["ID", "Name", "Lines"])?;
    for station in stations {
        let lines = station.lines().join(", ");
        writer.write_record([station.id.as_str(), station.name.as_str(), lines.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

/// Wall-clock time such as `03:04:05 PM`.
pub fn format_clock_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%I:%M:%S %p").to_string()
}

/// Time left until `departure` as `MM:SS`; minutes are not capped at 59.
/// A departure already in the past shows as `00:00`.
pub fn format_countdown(departure: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = (departure - now).num_seconds().max(0);
    format!("{:02}:{:02}", remaining / 60, remaining % 60)
}
