pub mod bike_share;
pub mod home;
pub mod layout;
pub mod network;

use tbm_live_core::popup::escape_html;

/// Width and height of the embedded maps, in pixels
pub const MAP_SIZE: (u32, u32) = (945, 450);

/// Red alert shown when a dataset could not be loaded
pub fn notice(text: &str) -> String {
    format!("<div class=\"alert\">{}</div>\n", escape_html(text))
}
