//! Bike-share station map: one circle marker per snapshot.

use geo::Point;
use palette::Srgb;

use tbm_live_transit::{StationSnapshot, StationState};

use crate::map::tile::{TileLayer, TileStyle};
use crate::map::{CircleMarker, MapDocument, MapFeature, MapLayer};
use crate::popup::station_popup;
use crate::style::{Color, PathStyle, RED};

pub const CONNECTED_COLOR: Color = Srgb::new(0xe3, 0x72, 0x22);
pub const MAINTENANCE_COLOR: Color = Srgb::new(0x0a, 0x8a, 0x9f);
pub const DISCONNECTED_COLOR: Color = RED;
pub const UNKNOWN_STATE_COLOR: Color = Srgb::new(0x80, 0x80, 0x80);

/// Marker radius per available bike
pub const RADIUS_PER_BIKE: f64 = 1.5;
pub const MARKER_WEIGHT: f32 = 1.0;

pub fn state_color(state: &StationState) -> Color {
    match state {
        StationState::Connected => CONNECTED_COLOR,
        StationState::Maintenance => MAINTENANCE_COLOR,
        StationState::Disconnected => DISCONNECTED_COLOR,
        StationState::Unknown(_) => UNKNOWN_STATE_COLOR,
    }
}

pub fn marker_radius(available_bikes: u32) -> f64 {
    available_bikes as f64 * RADIUS_PER_BIKE
}

/// Filled discs read well on light tiles; on the dark basemap only the
/// outline is drawn so markers stay legible.
pub fn marker_style(state: &StationState, tile_style: TileStyle) -> PathStyle {
    let color = state_color(state);
    let style = PathStyle::stroke(color, MARKER_WEIGHT);
    match tile_style {
        TileStyle::Light => style.with_fill(color),
        TileStyle::Dark => style,
    }
}

pub fn station_marker(snapshot: &StationSnapshot, tile_style: TileStyle) -> CircleMarker {
    let style = marker_style(&snapshot.state, tile_style);
    CircleMarker {
        location: snapshot.location,
        radius: marker_radius(snapshot.available_bikes),
        style,
        popup: station_popup(snapshot, style.color),
    }
}

pub struct StationMapBuilder {
    pub center: Point,
    pub zoom: u8,
}

impl StationMapBuilder {
    pub fn new() -> Self {
        Self {
            center: Point::new(-0.5792, 44.8378),
            zoom: 13,
        }
    }

    pub fn build(&self, snapshots: &[StationSnapshot], tile: &TileLayer) -> MapDocument {
        let markers = snapshots
            .iter()
            .map(|snapshot| MapFeature::Circle(station_marker(snapshot, tile.style)))
            .collect();

        tracing::debug!("built station map with {} markers", snapshots.len());

        MapDocument {
            center: self.center,
            zoom: self.zoom,
            tiles: vec![TileLayer {
                name: None,
                ..tile.clone()
            }],
            layers: vec![MapLayer::unnamed(markers)],
            layer_control: false,
            draw: None,
        }
    }
}

impl Default for StationMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::tile::TileProvider;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use tbm_live_transit::StationIdentifier;

    fn snapshot(state: StationState, bikes: u32) -> StationSnapshot {
        StationSnapshot {
            name: StationIdentifier::new("Hôtel de Ville"),
            timestamp: NaiveDate::from_ymd_opt(2023, 7, 14)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            location: Point::new(-0.5783, 44.8377),
            state,
            classic_bikes: bikes,
            electric_bikes: 0,
            available_bikes: bikes,
            available_slots: 20 - bikes,
        }
    }

    fn circles(doc: &MapDocument) -> Vec<&CircleMarker> {
        doc.layers
            .iter()
            .flat_map(|layer| &layer.features)
            .filter_map(|feature| match feature {
                MapFeature::Circle(marker) => Some(marker),
                MapFeature::Line(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_bikes_zero_radius() {
        let marker = station_marker(&snapshot(StationState::Connected, 0), TileStyle::Light);
        assert_relative_eq!(marker.radius, 0.0);
    }

    #[test]
    fn test_radius_is_linear() {
        assert_relative_eq!(marker_radius(1), 1.5);
        assert_relative_eq!(marker_radius(10), 15.0);
    }

    #[test]
    fn test_known_states_have_fixed_colors() {
        let known = [CONNECTED_COLOR, MAINTENANCE_COLOR, DISCONNECTED_COLOR];
        for state in [
            StationState::Connected,
            StationState::Maintenance,
            StationState::Disconnected,
        ] {
            let color = state_color(&state);
            assert!(known.contains(&color));
            assert_eq!(color, state_color(&state.clone()));
        }
        assert_ne!(CONNECTED_COLOR, MAINTENANCE_COLOR);
    }

    #[test]
    fn test_unknown_state_uses_fallback() {
        let state = StationState::parse("EN_TRAVAUX");
        assert_eq!(state_color(&state), UNKNOWN_STATE_COLOR);
    }

    #[test]
    fn test_fill_follows_tile_style() {
        let light = marker_style(&StationState::Connected, TileStyle::Light);
        assert_eq!(light.fill, Some(CONNECTED_COLOR));

        let dark = marker_style(&StationState::Connected, TileStyle::Dark);
        assert_eq!(dark.fill, None);
        assert_eq!(dark.color, CONNECTED_COLOR);
    }

    #[test]
    fn test_build_one_marker_per_snapshot() {
        let provider = TileProvider::new(Some("key".into()));
        let rows = vec![
            snapshot(StationState::Connected, 4),
            snapshot(StationState::Disconnected, 0),
        ];

        let doc = StationMapBuilder::new().build(&rows, &provider.dark());
        let markers = circles(&doc);

        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|m| !m.style.is_filled()));
        assert_eq!(markers[1].style.color, DISCONNECTED_COLOR);
        assert_eq!(doc.tiles.len(), 1);
        assert_eq!(doc.tiles[0].style, TileStyle::Dark);
        assert!(!doc.layer_control);
    }

    #[test]
    fn test_build_empty() {
        let doc = StationMapBuilder::new().build(&[], &TileProvider::default().light());
        assert_eq!(doc.feature_count(), 0);
    }
}
