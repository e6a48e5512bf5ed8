use crate::shell::{Page, View};

pub const LIVE_SYNC_LOGO: &str = "/assets/Images/Logo_live_sync.png";

pub fn render() -> Page {
    Page {
        view: View::Home,
        body: format!(
            "<div style=\"display:flex;justify-content:center\">\
             <img src=\"{LIVE_SYNC_LOGO}\" alt=\"TBM live sync\" style=\"width:75%\"></div>\n"
        ),
        with_draw: false,
    }
}
