//! Popup markup attached to stations and line segments.

use std::fmt::Write;

use tbm_live_transit::{StationSnapshot, TransitLineSegment, VehicleType};

use crate::map::Popup;
use crate::style::{Color, hex};

pub const STATION_POPUP_MAX_WIDTH: u32 = 250;

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Average delay shown as minutes with two decimals, e.g. `2.50 minutes`
pub fn format_delay(segment: &TransitLineSegment) -> String {
    format!("{:.2} minutes", segment.average_delay_minutes())
}

pub fn vehicle_emoji(vehicle: &VehicleType) -> &'static str {
    match vehicle {
        VehicleType::Tram => "🚊",
        VehicleType::Bus => "🚍",
        VehicleType::Boat => "🚢",
        VehicleType::Unknown(_) => "",
    }
}

pub fn station_popup(snapshot: &StationSnapshot, color: Color) -> Popup {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div style="font-size:12px"><h4 style="color:{};margin-bottom:0">{}</h4>"#,
        hex(color),
        escape_html(snapshot.name.as_str())
    );
    for (label, value) in [
        ("État", escape_html(snapshot.state.label())),
        ("Places disponible", snapshot.available_slots.to_string()),
        ("Vélos disponible", snapshot.available_bikes.to_string()),
        ("Vélos électriques", snapshot.electric_bikes.to_string()),
        ("Vélos classiques", snapshot.classic_bikes.to_string()),
    ] {
        let _ = write!(html, r#"<p style="margin-bottom:0"><b>{label}:</b> {value}</p>"#);
    }
    html.push_str("</div>");

    Popup {
        html,
        max_width: Some(STATION_POPUP_MAX_WIDTH),
    }
}

/// Shared by a segment's vehicle-layer feature and its delayed duplicate
pub fn segment_popup(segment: &TransitLineSegment, color: Color) -> Popup {
    let mut html = String::new();
    let _ = write!(
        html,
        "<div style=\"font-size:12px; padding:10px; background-color: #F8F9F9; border-radius: 5px; \
         box-shadow: 0 0 10px rgba(0,0,0,0.25); min-width: 300px;\">\
         <h4 style=\"color:{};margin-bottom:10px\">{}</h4>",
        hex(color),
        escape_html(segment.line.as_str())
    );

    let emoji = vehicle_emoji(&segment.vehicle);
    for (label, value) in [
        ("Terminus", escape_html(&segment.terminus)),
        (
            "Vehicule",
            format!("{emoji} {}", escape_html(segment.vehicle.label()))
                .trim_start()
                .to_string(),
        ),
        ("Retard Moyen", format_delay(segment)),
        ("Vitesse Moyenne (km/h)", segment.average_speed_kmh.to_string()),
        ("Nombre de véhicule/ligne", segment.vehicle_count.to_string()),
    ] {
        let _ = write!(html, r#"<p style="margin-bottom:5px"><b>{label}:</b> {value}</p>"#);
    }
    html.push_str("</div>");

    Popup {
        html,
        max_width: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RED;
    use chrono::NaiveDate;
    use geo::{LineString, MultiLineString, Point};
    use tbm_live_transit::{LineIdentifier, StationIdentifier, StationState};

    fn tram_b(delay_secs: f64) -> TransitLineSegment {
        TransitLineSegment {
            geometry: MultiLineString::new(vec![LineString::from(vec![(0.0, 0.0), (1.0, 1.0)])]),
            line: LineIdentifier::new("Tram B"),
            terminus: "Pessac Centre".into(),
            vehicle: VehicleType::Tram,
            average_delay_secs: delay_secs,
            average_speed_kmh: 18.4,
            vehicle_count: 21,
        }
    }

    #[test]
    fn test_format_delay() {
        assert_eq!(format_delay(&tram_b(150.0)), "2.50 minutes");
        assert_eq!(format_delay(&tram_b(0.0)), "0.00 minutes");
        assert_eq!(format_delay(&tram_b(-45.0)), "-0.75 minutes");
        assert_eq!(format_delay(&tram_b(100.0)), "1.67 minutes");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Gare <St-Jean> & \"co\""), "Gare &lt;St-Jean&gt; &amp; &quot;co&quot;");
    }

    #[test]
    fn test_station_popup_content() {
        let snapshot = StationSnapshot {
            name: StationIdentifier::new("Place Gambetta"),
            timestamp: NaiveDate::from_ymd_opt(2023, 7, 14)
                .unwrap()
                .and_hms_opt(20, 4, 0)
                .unwrap(),
            location: Point::new(-0.58, 44.84),
            state: StationState::Maintenance,
            classic_bikes: 3,
            electric_bikes: 1,
            available_bikes: 4,
            available_slots: 11,
        };

        let popup = station_popup(&snapshot, RED);
        assert_eq!(popup.max_width, Some(250));
        assert!(popup.html.contains(">Place Gambetta</h4>"));
        assert!(popup.html.contains("color:#ff0000"));
        assert!(popup.html.contains("<b>État:</b> MAINTENANCE"));
        assert!(popup.html.contains("<b>Places disponible:</b> 11"));
        assert!(popup.html.contains("<b>Vélos électriques:</b> 1"));
        assert!(popup.html.contains("<b>Vélos classiques:</b> 3"));
    }

    #[test]
    fn test_segment_popup_content() {
        let popup = segment_popup(&tram_b(150.0), RED);
        assert!(popup.html.contains(">Tram B</h4>"));
        assert!(popup.html.contains("<b>Vehicule:</b> 🚊 TRAM"));
        assert!(popup.html.contains("<b>Retard Moyen:</b> 2.50 minutes"));
        assert!(popup.html.contains("<b>Vitesse Moyenne (km/h):</b> 18.4"));
        assert!(popup.html.contains("<b>Nombre de véhicule/ligne:</b> 21"));
    }
}
