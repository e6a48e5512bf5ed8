//! Station snapshot table reader.
//!
//! The table is a header-first delimited text file with one row per station
//! per collection timestamp.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use geo::Point;
use serde::Deserialize;

use crate::identifiers::StationIdentifier;
use crate::models::{DatasetError, Result, StationSnapshot, StationState};

#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(rename = "nom")]
    name: String,
    #[serde(rename = "mdate")]
    timestamp: String,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "etat")]
    state: String,
    #[serde(rename = "nbclassiq")]
    classic_bikes: f64,
    #[serde(rename = "nbelec")]
    electric_bikes: f64,
    #[serde(rename = "nbvelos")]
    available_bikes: f64,
    #[serde(rename = "nbplaces")]
    available_slots: f64,
}

/// Read the station table from disk
pub fn read_station_file(path: &Path) -> Result<Vec<StationSnapshot>> {
    let file = File::open(path).map_err(|source| DatasetError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshots = parse_stations(file, path)?;
    tracing::info!("loaded {} station snapshots from {}", snapshots.len(), path.display());
    Ok(snapshots)
}

/// Parse station rows from any reader; `path` is only used in errors
pub fn parse_stations<R: Read>(reader: R, path: &Path) -> Result<Vec<StationSnapshot>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut snapshots = Vec::new();
    for (index, row) in reader.deserialize::<StationRow>().enumerate() {
        let malformed = |reason: String| DatasetError::Malformed {
            path: path.to_path_buf(),
            record: index + 1,
            reason,
        };

        let row = row.map_err(|e| malformed(e.to_string()))?;
        snapshots.push(row.into_snapshot().map_err(malformed)?);
    }

    Ok(snapshots)
}

impl StationRow {
    fn into_snapshot(self) -> std::result::Result<StationSnapshot, String> {
        let timestamp = parse_timestamp(&self.timestamp)
            .ok_or_else(|| format!("unrecognized timestamp '{}'", self.timestamp))?;

        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(format!(
                "invalid position ({}, {})",
                self.latitude, self.longitude
            ));
        }

        Ok(StationSnapshot {
            name: StationIdentifier::new(self.name),
            timestamp,
            location: Point::new(self.longitude, self.latitude),
            state: StationState::parse(&self.state),
            classic_bikes: to_count("nbclassiq", self.classic_bikes)?,
            electric_bikes: to_count("nbelec", self.electric_bikes)?,
            available_bikes: to_count("nbvelos", self.available_bikes)?,
            available_slots: to_count("nbplaces", self.available_slots)?,
        })
    }
}

/// Counts are sometimes exported as floats ("3.0"); accept any
/// non-negative whole number.
fn to_count(column: &str, value: f64) -> std::result::Result<u32, String> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(format!("{column} must be a non-negative integer, got {value}"))
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a collection timestamp. Offsets, when present, are dropped in
/// favour of the local wall-clock time they were recorded in.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
