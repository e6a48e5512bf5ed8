//! Transit line geometry reader.
//!
//! Accepts a GeoJSON FeatureCollection whose features carry a LineString or
//! MultiLineString geometry and the aggregate line properties.

use std::path::Path;

use geo::{Coord, LineString, MultiLineString};
use geojson::{Feature, GeoJson, JsonObject, JsonValue};

use crate::identifiers::LineIdentifier;
use crate::models::{DatasetError, Result, TransitLineSegment, VehicleType};

/// Read the line geometry collection from disk
pub fn read_line_file(path: &Path) -> Result<Vec<TransitLineSegment>> {
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let segments = parse_lines(&content, path)?;
    tracing::info!("loaded {} line segments from {}", segments.len(), path.display());
    Ok(segments)
}

/// Parse line segments from GeoJSON text; `path` is only used in errors
pub fn parse_lines(content: &str, path: &Path) -> Result<Vec<TransitLineSegment>> {
    let geojson: GeoJson = content.parse().map_err(|e: geojson::Error| DatasetError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(DatasetError::Unreadable {
                path: path.to_path_buf(),
                reason: "expected a FeatureCollection, found a bare geometry".into(),
            });
        }
    };

    features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            feature_to_segment(feature).map_err(|reason| DatasetError::Malformed {
                path: path.to_path_buf(),
                record: index + 1,
                reason,
            })
        })
        .collect()
}

fn feature_to_segment(feature: Feature) -> std::result::Result<TransitLineSegment, String> {
    let geometry = feature
        .geometry
        .ok_or_else(|| "feature has no geometry".to_string())?;
    let geometry = geometry_to_lines(geometry.value)?;

    let properties = feature.properties.unwrap_or_default();

    Ok(TransitLineSegment {
        geometry,
        line: LineIdentifier::new(text_property(&properties, "ligne_com")?),
        terminus: text_property(&properties, "libelle")?.into(),
        vehicle: VehicleType::parse(&text_property(&properties, "vehicule")?),
        average_delay_secs: number_property(&properties, "retard")?,
        average_speed_kmh: number_property(&properties, "vitesse")?,
        vehicle_count: count_property(&properties, "nb_vehicule")?,
    })
}

/// Convert a GeoJSON geometry value to a geo MultiLineString
fn geometry_to_lines(value: geojson::Value) -> std::result::Result<MultiLineString, String> {
    match value {
        geojson::Value::LineString(coords) => {
            Ok(MultiLineString::new(vec![coords_to_linestring(&coords)?]))
        }
        geojson::Value::MultiLineString(lines) => Ok(MultiLineString::new(
            lines
                .iter()
                .map(|coords| coords_to_linestring(coords))
                .collect::<std::result::Result<_, _>>()?,
        )),
        _ => Err("geometry is not a LineString or MultiLineString".to_string()),
    }
}

/// Convert GeoJSON coordinate array to LineString; every position needs
/// at least a longitude and a latitude
fn coords_to_linestring(coords: &[Vec<f64>]) -> std::result::Result<LineString, String> {
    coords
        .iter()
        .enumerate()
        .map(|(index, c)| match c.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(format!(
                "position {} has {} coordinate(s), expected at least 2",
                index + 1,
                c.len()
            )),
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(LineString::new)
}

fn property<'a>(properties: &'a JsonObject, key: &str) -> std::result::Result<&'a JsonValue, String> {
    match properties.get(key) {
        Some(JsonValue::Null) | None => Err(format!("missing property '{key}'")),
        Some(value) => Ok(value),
    }
}

/// Line labels are sometimes numeric in the export
fn text_property(properties: &JsonObject, key: &str) -> std::result::Result<String, String> {
    match property(properties, key)? {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        other => Err(format!("property '{key}' is not text: {other}")),
    }
}

fn number_property(properties: &JsonObject, key: &str) -> std::result::Result<f64, String> {
    let value = property(properties, key)?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| format!("property '{key}' is not a number: {value}"))
}

fn count_property(properties: &JsonObject, key: &str) -> std::result::Result<u32, String> {
    let n = number_property(properties, key)?;
    if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 {
        Ok(n as u32)
    } else {
        Err(format!("property '{key}' must be a non-negative integer, got {n}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[-0.58, 44.84], [-0.57, 44.85]]},
                "properties": {"ligne_com": "Tram A", "libelle": "Mérignac Centre", "vehicule": "TRAM",
                               "retard": 150, "vitesse": 19.2, "nb_vehicule": 24}
            },
            {
                "type": "Feature",
                "geometry": {"type": "MultiLineString", "coordinates": [
                    [[-0.56, 44.83], [-0.55, 44.84]],
                    [[-0.55, 44.84], [-0.54, 44.86]]
                ]},
                "properties": {"ligne_com": 9, "libelle": "Gare Saint-Jean", "vehicule": "BUS",
                               "retard": -12.5, "vitesse": 14.0, "nb_vehicule": 6.0}
            }
        ]
    }"#;

    #[test]
    fn test_parse_lines() {
        let segments = parse_lines(SAMPLE, Path::new("lines.json")).unwrap();
        assert_eq!(segments.len(), 2);

        let tram = &segments[0];
        assert_eq!(tram.line.as_str(), "Tram A");
        assert_eq!(&*tram.terminus, "Mérignac Centre");
        assert_eq!(tram.vehicle, VehicleType::Tram);
        assert_relative_eq!(tram.average_delay_secs, 150.0);
        assert_eq!(tram.vehicle_count, 24);
        assert_eq!(tram.geometry.0.len(), 1);

        let bus = &segments[1];
        assert_eq!(bus.line.as_str(), "9");
        assert_eq!(bus.vehicle, VehicleType::Bus);
        assert_relative_eq!(bus.average_delay_secs, -12.5);
        assert_eq!(bus.geometry.0.len(), 2);
    }

    #[test]
    fn test_point_geometry_is_malformed() {
        let content = r#"{"type": "FeatureCollection", "features": [{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [-0.58, 44.84]},
            "properties": {"ligne_com": "A", "libelle": "x", "vehicule": "TRAM",
                           "retard": 0, "vitesse": 0, "nb_vehicule": 0}
        }]}"#;

        let err = parse_lines(content, Path::new("lines.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { record: 1, .. }));
    }

    #[test]
    fn test_short_position_is_rejected() {
        let properties = serde_json::json!({
            "ligne_com": "B", "libelle": "Berges du Lac", "vehicule": "TRAM",
            "retard": 0, "vitesse": 0, "nb_vehicule": 0
        });
        let feature = Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::MultiLineString(vec![
                vec![vec![-0.56, 44.83], vec![-0.55, 44.84]],
                vec![vec![-0.55, 44.84], vec![-0.54]],
            ]))),
            id: None,
            properties: properties.as_object().cloned(),
            foreign_members: None,
        };

        let reason = feature_to_segment(feature).unwrap_err();
        assert!(reason.contains("position 2"));
    }

    #[test]
    fn test_short_position_in_text_is_unreadable() {
        let content = r#"{"type": "FeatureCollection", "features": [{
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[-0.58, 44.84], [-0.57]]},
            "properties": {"ligne_com": "A", "libelle": "x", "vehicule": "TRAM",
                           "retard": 0, "vitesse": 0, "nb_vehicule": 0}
        }]}"#;

        let err = parse_lines(content, Path::new("lines.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Unreadable { .. }));
    }

    #[test]
    fn test_missing_property_is_malformed() {
        let content = r#"{"type": "FeatureCollection", "features": [{
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[-0.58, 44.84], [-0.57, 44.85]]},
            "properties": {"ligne_com": "A", "libelle": "x", "vehicule": "TRAM"}
        }]}"#;

        match parse_lines(content, Path::new("lines.json")) {
            Err(DatasetError::Malformed { reason, .. }) => assert!(reason.contains("retard")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_unreadable() {
        assert!(matches!(
            parse_lines("{not json", Path::new("lines.json")),
            Err(DatasetError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        assert!(matches!(
            read_line_file(Path::new("/nonexistent/lines.json")),
            Err(DatasetError::Unavailable { .. })
        ));
    }
}
