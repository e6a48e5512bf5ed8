//! Dataset source backed by the two flat files on disk.

use std::path::{Path, PathBuf};

use crate::identifiers::{DatasetKind, SourceKey};
use crate::loader::{lines::read_line_file, stations::read_station_file};
use crate::models::{DatasetSource, Result, StationSnapshot, TransitLineSegment};

#[derive(Clone, Debug)]
pub struct FileDatasetSource {
    stations_path: PathBuf,
    lines_path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(stations_path: impl Into<PathBuf>, lines_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            lines_path: lines_path.into(),
        }
    }

    /// Default layout of a data directory: `stations_VCube.csv` and
    /// `gdfbustrambat.json` side by side.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("stations_VCube.csv"), dir.join("gdfbustrambat.json"))
    }

    pub fn stations_path(&self) -> &Path {
        &self.stations_path
    }

    pub fn lines_path(&self) -> &Path {
        &self.lines_path
    }
}

impl DatasetSource for FileDatasetSource {
    fn source_key(&self, kind: DatasetKind) -> SourceKey {
        match kind {
            DatasetKind::Stations => SourceKey::from_path(kind, &self.stations_path),
            DatasetKind::Lines => SourceKey::from_path(kind, &self.lines_path),
        }
    }

    fn load_station_data(&self) -> Result<Vec<StationSnapshot>> {
        read_station_file(&self.stations_path)
    }

    fn load_transit_geometry(&self) -> Result<Vec<TransitLineSegment>> {
        read_line_file(&self.lines_path)
    }
}
