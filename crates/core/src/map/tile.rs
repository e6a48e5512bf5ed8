//! Base map tiles and the day/night tile policy.

use chrono::NaiveTime;

/// Visual theme of the base map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStyle {
    Light,
    Dark,
}

impl TileStyle {
    /// Light tiles between sunrise and sunset of the collection period
    /// (06:20 inclusive to 21:40 exclusive), dark tiles otherwise.
    pub fn for_time(time: NaiveTime) -> Self {
        if (DAY_START..DAY_END).contains(&time) {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

const DAY_START: NaiveTime = match NaiveTime::from_hms_opt(6, 20, 0) {
    Some(t) => t,
    None => NaiveTime::MIN,
};
const DAY_END: NaiveTime = match NaiveTime::from_hms_opt(21, 40, 0) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

/// A raster tile source, addressed by an opaque URL template
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// Shown in the layer control; unnamed layers are not listed
    pub name: Option<String>,
    pub url_template: String,
    pub attribution: String,
    pub subdomains: Option<String>,
    pub style: TileStyle,
}

const MAPTILER_DATAVIZ: &str = "https://api.maptiler.com/maps/dataviz/{z}/{x}/{y}.png?key=";
const OSM_STANDARD: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const CARTO_DARK_MATTER: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

/// Builds tile layers from the configured provider key
#[derive(Debug, Clone, Default)]
pub struct TileProvider {
    maptiler_key: Option<String>,
}

impl TileProvider {
    pub fn new(maptiler_key: Option<String>) -> Self {
        let maptiler_key = maptiler_key.filter(|key| !key.trim().is_empty());
        if maptiler_key.is_none() {
            tracing::warn!("no MapTiler key configured, light tiles fall back to OpenStreetMap");
        }
        Self { maptiler_key }
    }

    /// MapTiler "dataviz" tiles, or OpenStreetMap when no key is configured
    pub fn light(&self) -> TileLayer {
        match &self.maptiler_key {
            Some(key) => TileLayer {
                name: Some("Dataviz Map".into()),
                url_template: format!("{MAPTILER_DATAVIZ}{key}"),
                attribution: "© MapTiler © OpenStreetMap contributors".into(),
                subdomains: None,
                style: TileStyle::Light,
            },
            None => TileLayer {
                name: Some("OpenStreetMap".into()),
                url_template: OSM_STANDARD.into(),
                attribution: "Map data © OpenStreetMap contributors".into(),
                subdomains: Some("abc".into()),
                style: TileStyle::Light,
            },
        }
    }

    /// CartoDB dark_matter
    pub fn dark(&self) -> TileLayer {
        TileLayer {
            name: Some("CartoDB dark_matter".into()),
            url_template: CARTO_DARK_MATTER.into(),
            attribution: "Map data © OpenStreetMap contributors © CARTO".into(),
            subdomains: Some("abcd".into()),
            style: TileStyle::Dark,
        }
    }

    pub fn for_style(&self, style: TileStyle) -> TileLayer {
        match style {
            TileStyle::Light => self.light(),
            TileStyle::Dark => self.dark(),
        }
    }

    pub fn for_time(&self, time: NaiveTime) -> TileLayer {
        self.for_style(TileStyle::for_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_noon_is_light_and_night_is_dark() {
        assert_eq!(TileStyle::for_time(at(12, 0)), TileStyle::Light);
        assert_eq!(TileStyle::for_time(at(23, 0)), TileStyle::Dark);
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(TileStyle::for_time(at(6, 19)), TileStyle::Dark);
        assert_eq!(TileStyle::for_time(at(6, 20)), TileStyle::Light);
        assert_eq!(TileStyle::for_time(at(21, 39)), TileStyle::Light);
        assert_eq!(TileStyle::for_time(at(21, 40)), TileStyle::Dark);
        assert_eq!(TileStyle::for_time(at(0, 0)), TileStyle::Dark);
    }

    #[test]
    fn test_light_tile_embeds_key() {
        let provider = TileProvider::new(Some("abc123".into()));
        let tile = provider.for_time(at(12, 0));
        assert_eq!(
            tile.url_template,
            "https://api.maptiler.com/maps/dataviz/{z}/{x}/{y}.png?key=abc123"
        );
        assert_eq!(tile.style, TileStyle::Light);
    }

    #[test]
    fn test_missing_key_falls_back_to_osm() {
        let provider = TileProvider::new(Some("  ".into()));
        assert!(provider.light().url_template.contains("openstreetmap.org"));
        assert_eq!(provider.for_time(at(23, 0)).style, TileStyle::Dark);
    }
}
