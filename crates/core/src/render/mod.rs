//! Serializers for map documents.

pub mod geojson;
pub mod leaflet;

pub use self::geojson::to_feature_collection;
pub use leaflet::{fragment, head_includes, standalone_page};
