//! Map construction for the TBM Live dashboard.
//!
//! Turns station snapshots and line segments from `tbm-live-transit` into
//! [`map::MapDocument`]s and serializes them for the browser.

pub mod map;
pub mod popup;
pub mod render;
pub mod style;

// Re-export the dataset crate
pub use tbm_live_transit as transit;

pub use map::network::TransitMapBuilder;
pub use map::station::StationMapBuilder;
pub use map::tile::{TileLayer, TileProvider, TileStyle};
pub use map::MapDocument;
