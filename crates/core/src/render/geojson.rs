use geo::{MultiLineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::json;

use crate::map::{MapDocument, MapFeature, MapLayer};
use crate::style::{PathStyle, hex};

/// Convert a geo Point to GeoJSON Value
fn point_to_geojson(point: Point) -> Value {
    Value::Point(vec![point.x(), point.y()])
}

/// Convert a geo MultiLineString to GeoJSON Value
fn lines_to_geojson(lines: &MultiLineString) -> Value {
    let coords: Vec<Vec<Vec<f64>>> = lines
        .0
        .iter()
        .map(|line| line.0.iter().map(|c| vec![c.x, c.y]).collect())
        .collect();

    // A single line stays a LineString so simple viewers handle it
    match <[_; 1]>::try_from(coords) {
        Ok([line]) => Value::LineString(line),
        Err(coords) => Value::MultiLineString(coords),
    }
}

/// GeoJSON geometry object for a line feature, as Leaflet's `L.geoJSON` takes it
pub fn geometry_json(lines: &MultiLineString) -> serde_json::Value {
    serde_json::to_value(Geometry::new(lines_to_geojson(lines))).unwrap_or(serde_json::Value::Null)
}

fn style_properties(style: &PathStyle, properties: &mut serde_json::Map<String, serde_json::Value>) {
    properties.insert("stroke".to_string(), json!(hex(style.color)));
    properties.insert("stroke-width".to_string(), json!(style.weight));
    if let Some(fill) = style.fill {
        properties.insert("fill".to_string(), json!(hex(fill)));
    }
}

/// Create a GeoJSON Feature from a map feature, tagged with its layer name
fn map_feature_to_feature(feature: &MapFeature, layer: &MapLayer) -> Feature {
    let mut properties = serde_json::Map::new();
    properties.insert("layer".to_string(), json!(layer.name.as_deref()));
    style_properties(feature.style(), &mut properties);
    properties.insert("popup".to_string(), json!(feature.popup().html));

    let geometry = match feature {
        MapFeature::Circle(marker) => {
            properties.insert("radius".to_string(), json!(marker.radius));
            point_to_geojson(marker.location)
        }
        MapFeature::Line(line) => lines_to_geojson(&line.geometry),
    };

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Every feature of every layer, in layer order
pub fn to_feature_collection(doc: &MapDocument) -> FeatureCollection {
    let features = doc
        .layers
        .iter()
        .flat_map(|layer| {
            layer
                .features
                .iter()
                .map(move |feature| map_feature_to_feature(feature, layer))
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
