//! Bus • Tram • BatCub network map.
//!
//! Every segment is drawn once in the layer of its vehicle type. Segments
//! whose average delay exceeds [`DELAY_THRESHOLD_SECS`] are drawn a second
//! time, in red, in the delayed-lines layer.

use geo::Point;
use itertools::Itertools;
use palette::Srgb;
use strum::{EnumIter, IntoEnumIterator};

use tbm_live_transit::{TransitLineSegment, VehicleType};

use crate::map::tile::TileLayer;
use crate::map::{
    ControlPosition, DrawControl, DrawShape, LineFeature, MapDocument, MapFeature, MapLayer,
};
use crate::popup::segment_popup;
use crate::style::{Color, PathStyle, RED};

pub const BUS_COLOR: Color = Srgb::new(0x01, 0xb1, 0xeb);
pub const TRAM_COLOR: Color = Srgb::new(0x83, 0x1f, 0x82);
pub const BOAT_COLOR: Color = Srgb::new(0x2b, 0x9c, 0xbf);
pub const UNKNOWN_VEHICLE_COLOR: Color = Srgb::new(0x8d, 0xc6, 0x3f);
pub const DELAYED_COLOR: Color = RED;

pub const LINE_WEIGHT: f32 = 2.0;
pub const DELAY_THRESHOLD_SECS: f64 = 100.0;

/// Toggleable layers of the network map, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum NetworkLayer {
    Tram,
    Bus,
    Boat,
    Delayed,
}

impl NetworkLayer {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Tram => "🚊 Tram",
            Self::Bus => "🚍 Bus",
            Self::Boat => "🚢 BatCub",
            Self::Delayed => "Lignes en retards",
        }
    }

    /// Layer a vehicle type is drawn into; unknown types have none
    pub fn for_vehicle(vehicle: &VehicleType) -> Option<Self> {
        match vehicle {
            VehicleType::Tram => Some(Self::Tram),
            VehicleType::Bus => Some(Self::Bus),
            VehicleType::Boat => Some(Self::Boat),
            VehicleType::Unknown(_) => None,
        }
    }
}

pub fn vehicle_color(vehicle: &VehicleType) -> Color {
    match vehicle {
        VehicleType::Bus => BUS_COLOR,
        VehicleType::Tram => TRAM_COLOR,
        VehicleType::Boat => BOAT_COLOR,
        VehicleType::Unknown(_) => UNKNOWN_VEHICLE_COLOR,
    }
}

/// Features produced for one segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFeatures {
    pub primary: Option<(NetworkLayer, LineFeature)>,
    pub delayed: Option<LineFeature>,
}

pub fn segment_features(segment: &TransitLineSegment) -> SegmentFeatures {
    let color = vehicle_color(&segment.vehicle);
    let popup = segment_popup(segment, color);

    let primary = NetworkLayer::for_vehicle(&segment.vehicle).map(|layer| {
        (
            layer,
            LineFeature {
                geometry: segment.geometry.clone(),
                style: PathStyle::stroke(color, LINE_WEIGHT),
                popup: popup.clone(),
            },
        )
    });

    if primary.is_none() {
        tracing::debug!(
            "line {} has unknown vehicle type '{}', not placed in a vehicle layer",
            segment.line,
            segment.vehicle
        );
    }

    let delayed = segment
        .is_delayed(DELAY_THRESHOLD_SECS)
        .then(|| LineFeature {
            geometry: segment.geometry.clone(),
            style: PathStyle::stroke(DELAYED_COLOR, LINE_WEIGHT),
            popup,
        });

    SegmentFeatures { primary, delayed }
}

pub struct TransitMapBuilder {
    pub center: Point,
    pub zoom: u8,
    pub tile: TileLayer,
}

impl TransitMapBuilder {
    pub fn new(tile: TileLayer) -> Self {
        Self {
            center: Point::new(-0.64265, 44.84101),
            zoom: 12,
            tile,
        }
    }

    pub fn build(&self, segments: &[TransitLineSegment]) -> MapDocument {
        let features: Vec<SegmentFeatures> = segments.iter().map(segment_features).collect();

        let mut by_layer = features
            .iter()
            .filter_map(|f| f.primary.clone())
            .into_group_map();
        let delayed: Vec<MapFeature> = features
            .into_iter()
            .filter_map(|f| f.delayed)
            .map(MapFeature::Line)
            .collect();

        let layers = NetworkLayer::iter()
            .map(|layer| {
                let features = match layer {
                    NetworkLayer::Delayed => delayed.clone(),
                    vehicle => by_layer
                        .remove(&vehicle)
                        .unwrap_or_default()
                        .into_iter()
                        .map(MapFeature::Line)
                        .collect(),
                };
                MapLayer::named(layer.title(), features)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "built network map: {}",
            layers
                .iter()
                .map(|l| format!("{}={}", l.name.as_deref().unwrap_or_default(), l.len()))
                .join(", ")
        );

        MapDocument {
            center: self.center,
            zoom: self.zoom,
            tiles: vec![self.tile.clone()],
            layers,
            layer_control: true,
            draw: Some(DrawControl {
                position: ControlPosition::TopLeft,
                shapes: DrawShape::iter().collect(),
                editable: true,
                export_filename: Some("data.geojson".into()),
            }),
        }
    }
}
