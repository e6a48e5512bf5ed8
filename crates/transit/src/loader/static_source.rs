//! In-memory dataset source.

use std::sync::Arc;

use crate::identifiers::{DatasetKind, SourceKey};
use crate::models::{DatasetSource, Result, StationSnapshot, TransitLineSegment};

/// Serves rows held in memory
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Debug)]
pub struct StaticDatasetSource {
    name: Arc<str>,
    stations: Arc<[StationSnapshot]>,
    segments: Arc<[TransitLineSegment]>,
}

impl StaticDatasetSource {
    pub fn from_data(
        name: impl AsRef<str>,
        stations: Vec<StationSnapshot>,
        segments: Vec<TransitLineSegment>,
    ) -> Self {
        Self {
            name: name.as_ref().into(),
            stations: stations.into(),
            segments: segments.into(),
        }
    }
}

impl DatasetSource for StaticDatasetSource {
    fn source_key(&self, kind: DatasetKind) -> SourceKey {
        SourceKey::new(kind, format!("memory:{}", self.name))
    }

    fn load_station_data(&self) -> Result<Vec<StationSnapshot>> {
        Ok(self.stations.to_vec())
    }

    fn load_transit_geometry(&self) -> Result<Vec<TransitLineSegment>> {
        Ok(self.segments.to_vec())
    }
}
