//! Core traits for dataset access.
//!
//! These traits define the public interface the dashboard needs from its
//! data. Implementations can be file-backed or in-memory.

use crate::identifiers::{DatasetKind, SourceKey};
use crate::models::records::{StationSnapshot, TransitLineSegment};
use crate::models::types::Result;

/// Provider of the two read-only datasets
pub trait DatasetSource: Send + Sync {
    /// Identity of the backing source for `kind`, used to memoize loads
    fn source_key(&self, kind: DatasetKind) -> SourceKey;

    /// Station snapshots in source order
    fn load_station_data(&self) -> Result<Vec<StationSnapshot>>;

    /// Line geometries in source order
    fn load_transit_geometry(&self) -> Result<Vec<TransitLineSegment>>;
}
