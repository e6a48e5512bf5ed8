use anyhow::{Context, Result};
use geojson::GeoJson;
use std::fs;
use std::path::Path;
use tbm_live_core::render::{standalone_page, to_feature_collection};
use tbm_live_core::MapDocument;

/// Write every layer of the map as one FeatureCollection
pub fn write_map_geojson(doc: &MapDocument, path: &Path) -> Result<usize> {
    let collection = to_feature_collection(doc);
    let count = collection.features.len();
    let json = serde_json::to_string_pretty(&GeoJson::FeatureCollection(collection))
        .context("Failed to serialize GeoJSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(count)
}

/// Write a self-contained Leaflet page showing the map
pub fn write_map_html(doc: &MapDocument, title: &str, path: &Path) -> Result<()> {
    fs::write(path, standalone_page(doc, title))
        .with_context(|| format!("Failed to write {}", path.display()))
}
