//! Core data types and enums for the bike-share and transit datasets.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// Enums
// ============================================================================

/// Operational state of a bike-share station
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StationState {
    Connected,
    Maintenance,
    Disconnected,
    /// Any value the dataset carries that is not one of the known states
    Unknown(Arc<str>),
}

impl StationState {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "CONNECTEE" | "CONNECTED" => Self::Connected,
            "MAINTENANCE" => Self::Maintenance,
            "DECONNECTEE" | "DISCONNECTED" => Self::Disconnected,
            other => Self::Unknown(other.into()),
        }
    }

    /// Label as it appears in the source data
    pub fn label(&self) -> &str {
        match self {
            Self::Connected => "CONNECTEE",
            Self::Maintenance => "MAINTENANCE",
            Self::Disconnected => "DECONNECTEE",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for StationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of vehicle serving a transit line
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Bus,
    Tram,
    Boat,
    Unknown(Arc<str>),
}

impl VehicleType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "BUS" => Self::Bus,
            "TRAM" => Self::Tram,
            "BATEAU" | "BOAT" => Self::Boat,
            other => Self::Unknown(other.into()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Bus => "BUS",
            Self::Tram => "TRAM",
            Self::Boat => "BATEAU",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset {path} (record {record}): {reason}")]
    Malformed {
        path: PathBuf,
        record: usize,
        reason: String,
    },

    #[error("Malformed dataset {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

impl DatasetError {
    /// Every variant leaves the view without data to show; callers degrade
    /// to an empty result either way.
    pub fn is_data_unavailable(&self) -> bool {
        match self {
            Self::Unavailable { .. } => true,
            Self::Malformed { .. } => true,
            Self::Unreadable { .. } => true,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Unavailable { path, .. }
            | Self::Malformed { path, .. }
            | Self::Unreadable { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_state_parse() {
        assert_eq!(StationState::parse("CONNECTEE"), StationState::Connected);
        assert_eq!(StationState::parse(" MAINTENANCE "), StationState::Maintenance);
        assert_eq!(StationState::parse("DECONNECTEE"), StationState::Disconnected);
        assert_eq!(
            StationState::parse("EN_TRAVAUX"),
            StationState::Unknown("EN_TRAVAUX".into())
        );
    }

    #[test]
    fn test_state_label_round_trips_raw_value() {
        assert_eq!(StationState::parse("FERMEE").label(), "FERMEE");
        assert_eq!(StationState::Connected.to_string(), "CONNECTEE");
    }

    #[test]
    fn test_vehicle_type_parse() {
        assert_eq!(VehicleType::parse("BUS"), VehicleType::Bus);
        assert_eq!(VehicleType::parse("TRAM"), VehicleType::Tram);
        assert_eq!(VehicleType::parse("BATEAU"), VehicleType::Boat);
        assert_eq!(VehicleType::parse("TRAIN"), VehicleType::Unknown("TRAIN".into()));
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = DatasetError::Unavailable {
            path: PathBuf::from("stations.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_bad_record_is_data_unavailable() {
        let err = DatasetError::Malformed {
            path: PathBuf::from("stations.csv"),
            record: 12,
            reason: "unrecognized timestamp".into(),
        };
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_unparseable_document_is_data_unavailable() {
        let err = DatasetError::Unreadable {
            path: PathBuf::from("lines.json"),
            reason: "expected value at line 1 column 1".into(),
        };
        assert!(err.is_data_unavailable());
        assert_eq!(err.path(), std::path::Path::new("lines.json"));
    }

    #[test]
    fn test_error_display_names_path() {
        let err = DatasetError::Malformed {
            path: PathBuf::from("stations.csv"),
            record: 3,
            reason: "bad latitude".into(),
        };
        assert_eq!(err.path(), std::path::Path::new("stations.csv"));
        assert_eq!(
            err.to_string(),
            "Malformed dataset stations.csv (record 3): bad latitude"
        );
    }
}
