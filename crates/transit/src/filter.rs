//! Date/time selection over the station time series.
//!
//! Snapshots are collected at fixed intervals and the dashboard only offers
//! values that exist in the data, so matching is exact equality on the date
//! and on the minute of the timestamp.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use crate::models::StationSnapshot;

/// A date and minute picked by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Selection {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` query values
    pub fn parse(date: &str, time: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?;
        Some(Self { date, time })
    }

    pub fn matches(&self, snapshot: &StationSnapshot) -> bool {
        snapshot.date() == self.date && snapshot.minute() == self.time
    }
}

/// Snapshots observed exactly at `selection`, in source order.
///
/// No selection yet means nothing to show, not an error.
pub fn filter(snapshots: &[StationSnapshot], selection: Option<&Selection>) -> Vec<StationSnapshot> {
    let Some(selection) = selection else {
        return Vec::new();
    };

    snapshots
        .iter()
        .filter(|snapshot| selection.matches(snapshot))
        .cloned()
        .collect()
}

/// Dates offered in the date selector, ascending.
///
/// The first collection day only holds a partial series and is left out.
pub fn available_dates(snapshots: &[StationSnapshot]) -> Vec<NaiveDate> {
    snapshots
        .iter()
        .map(StationSnapshot::date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .skip(1)
        .collect()
}

/// Minutes offered in the time selector, ascending
pub fn available_times(snapshots: &[StationSnapshot]) -> Vec<NaiveTime> {
    snapshots
        .iter()
        .map(StationSnapshot::minute)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
