//! # tbm-live-transit
//!
//! Read-only bike-share and transit datasets for the TBM Live dashboard.
//!
//! ## Features
//!
//! - **Typed rows**: station snapshots and line segments with closed enums
//!   for station state and vehicle type
//! - **Loaders**: delimited-text station table, GeoJSON line geometries
//! - **Load once**: memoized per source for the lifetime of the process
//! - **Selection**: exact date/minute filtering of the station time series
//!
//! ## Example
//!
//! ```
//! use tbm_live_transit::prelude::*;
//! use chrono::NaiveDate;
//! use geo::Point;
//!
//! let snapshot = StationSnapshot {
//!     name: StationIdentifier::new("Meriadeck"),
//!     timestamp: NaiveDate::from_ymd_opt(2023, 7, 14).unwrap().and_hms_opt(20, 4, 0).unwrap(),
//!     location: Point::new(-0.5827, 44.8378),
//!     state: StationState::Connected,
//!     classic_bikes: 4,
//!     electric_bikes: 2,
//!     available_bikes: 6,
//!     available_slots: 14,
//! };
//!
//! let datasets = Datasets::new(StaticDatasetSource::from_data("demo", vec![snapshot], vec![]));
//! let stations = datasets.stations();
//!
//! let selection = Selection::parse("2023-07-14", "20:04").unwrap();
//! assert_eq!(filter(&stations.rows, Some(&selection)).len(), 1);
//! ```

pub mod cache;
pub mod filter;
pub mod identifiers;
pub mod loader;
pub mod models;

// Re-exports for convenience
pub mod prelude {
    pub use crate::cache::{DatasetCache, Datasets, Loaded};
    pub use crate::filter::{available_dates, available_times, filter, Selection};
    pub use crate::identifiers::*;
    pub use crate::loader::{FileDatasetSource, StaticDatasetSource};
    pub use crate::models::{records::*, traits::*, types::*};
}

pub use prelude::*;
