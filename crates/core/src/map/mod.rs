//! Map documents: base tiles plus named, independently toggleable layers.
//!
//! Documents are plain values. Builders construct every feature up front,
//! collect them into layers and compose the document once; renderers in
//! [`crate::render`] turn the result into something a browser can show.

pub mod network;
pub mod station;
pub mod tile;

use std::sync::Arc;

use geo::{MultiLineString, Point};
use strum::{Display, EnumIter};

use crate::style::PathStyle;
use tile::TileLayer;

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub html: String,
    pub max_width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub location: Point,
    /// Screen pixels
    pub radius: f64,
    pub style: PathStyle,
    pub popup: Popup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    pub geometry: MultiLineString,
    pub style: PathStyle,
    pub popup: Popup,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapFeature {
    Circle(CircleMarker),
    Line(LineFeature),
}

impl MapFeature {
    pub fn style(&self) -> &PathStyle {
        match self {
            Self::Circle(marker) => &marker.style,
            Self::Line(line) => &line.style,
        }
    }

    pub fn popup(&self) -> &Popup {
        match self {
            Self::Circle(marker) => &marker.popup,
            Self::Line(line) => &line.popup,
        }
    }
}

/// A group of features shown or hidden together
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer {
    /// Unnamed layers are always shown and never listed in the layer control
    pub name: Option<Arc<str>>,
    pub features: Vec<MapFeature>,
}

impl MapLayer {
    pub fn named(name: impl AsRef<str>, features: Vec<MapFeature>) -> Self {
        Self {
            name: Some(name.as_ref().into()),
            features,
        }
    }

    pub fn unnamed(features: Vec<MapFeature>) -> Self {
        Self {
            name: None,
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DrawShape {
    Polyline,
    Polygon,
    Circle,
    Rectangle,
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Freehand drawing toolbar
#[derive(Debug, Clone, PartialEq)]
pub struct DrawControl {
    pub position: ControlPosition,
    pub shapes: Vec<DrawShape>,
    pub editable: bool,
    /// Offer a download of the drawn shapes as GeoJSON under this name
    pub export_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub center: Point,
    pub zoom: u8,
    pub tiles: Vec<TileLayer>,
    pub layers: Vec<MapLayer>,
    pub layer_control: bool,
    pub draw: Option<DrawControl>,
}

impl MapDocument {
    pub fn layer(&self, name: &str) -> Option<&MapLayer> {
        self.layers
            .iter()
            .find(|layer| layer.name.as_deref() == Some(name))
    }

    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(MapLayer::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_draw_shape_names() {
        let names: Vec<String> = DrawShape::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["polyline", "polygon", "circle", "rectangle", "marker"]);
        assert_eq!(ControlPosition::TopLeft.to_string(), "topleft");
    }

    #[test]
    fn test_layer_lookup() {
        let doc = MapDocument {
            center: Point::new(-0.5792, 44.8378),
            zoom: 13,
            tiles: Vec::new(),
            layers: vec![MapLayer::unnamed(Vec::new()), MapLayer::named("Bus", Vec::new())],
            layer_control: false,
            draw: None,
        };

        assert!(doc.layer("Bus").is_some());
        assert!(doc.layer("Tram").is_none());
        assert_eq!(doc.feature_count(), 0);
    }
}
