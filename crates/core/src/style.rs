use palette::Srgb;

pub type Color = Srgb<u8>;

/// `#rrggbb`, the form Leaflet and GeoJSON viewers expect
pub fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

pub const RED: Color = Srgb::new(0xff, 0x00, 0x00);

/// Stroke and optional fill of a rendered feature
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
    pub color: Color,
    pub weight: f32,
    pub fill: Option<Color>,
}

impl PathStyle {
    pub fn stroke(color: Color, weight: f32) -> Self {
        Self {
            color,
            weight,
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill_color: Color) -> Self {
        self.fill = Some(fill_color);
        self
    }

    pub fn is_filled(&self) -> bool {
        self.fill.is_some()
    }
}
