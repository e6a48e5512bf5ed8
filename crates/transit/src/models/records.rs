//! Dataset rows: station snapshots and transit line segments.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use geo::{MultiLineString, Point};

use crate::identifiers::{LineIdentifier, StationIdentifier};
use crate::models::types::{StationState, VehicleType};

/// One timestamped observation of a single station
#[derive(Clone, Debug, PartialEq)]
pub struct StationSnapshot {
    pub name: StationIdentifier,
    pub timestamp: NaiveDateTime,
    /// x = longitude, y = latitude
    pub location: Point,
    pub state: StationState,
    pub classic_bikes: u32,
    pub electric_bikes: u32,
    /// Stored as collected; expected to equal classic + electric
    pub available_bikes: u32,
    pub available_slots: u32,
}

impl StationSnapshot {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Observation time truncated to the minute, the granularity the
    /// dashboard offers for selection.
    pub fn minute(&self) -> NaiveTime {
        let time = self.timestamp.time();
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }
}

/// One transit line geometry with its aggregate performance figures
#[derive(Clone, Debug, PartialEq)]
pub struct TransitLineSegment {
    pub geometry: MultiLineString,
    pub line: LineIdentifier,
    pub terminus: Arc<str>,
    pub vehicle: VehicleType,
    /// Negative when vehicles run early
    pub average_delay_secs: f64,
    pub average_speed_kmh: f64,
    pub vehicle_count: u32,
}

impl TransitLineSegment {
    pub fn average_delay_minutes(&self) -> f64 {
        self.average_delay_secs / 60.0
    }

    /// Strictly greater than the threshold
    pub fn is_delayed(&self, threshold_secs: f64) -> bool {
        self.average_delay_secs > threshold_secs
    }
}
