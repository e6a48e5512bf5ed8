//! Page frame: head, sidebar navigation and content column.

use std::fmt::Write;

use tbm_live_core::render::head_includes;

use crate::shell::{Page, View};

pub const PAGE_TITLE: &str = "TBM : un diaporama du réseau";
pub const LOGO: &str = "/assets/Images/LOGO_TBM.png";

const STYLE: &str = r#"<style>
body { margin: 0; display: flex; font-family: "Source Sans Pro", sans-serif; color: #31333f; }
nav { width: 240px; min-height: 100vh; background: #f0f2f6; padding: 20px; box-sizing: border-box; }
nav img { width: 100%; margin-bottom: 20px; }
nav a { display: block; padding: 10px; margin-bottom: 4px; border-radius: 6px; color: #31333f; text-decoration: none; }
nav a.active { background: #e37222; color: #fff; }
main { flex: 1; padding: 30px 60px; max-width: 1050px; }
.block { text-align: justify; background-color: #f5f5f5; padding: 20px; border-radius: 10px; border: 2px solid #000; }
.block h2 { text-align: center; }
.centered { margin-top: 20px; text-align: center; }
.fact { background-color: #f0f2f6; padding: 10px; border-radius: 10px; }
.fact h4 { color: #0078D4; }
.alert { background-color: #ffe0e0; color: #9c0000; padding: 12px 16px; border-radius: 8px; margin-bottom: 20px; }
.spacer { height: 20px; }
form.selectors label { display: block; margin: 10px 0 4px; }
form.selectors select { min-width: 280px; padding: 6px; }
</style>
"#;

fn sidebar(active: View) -> String {
    let mut nav = format!("<nav>\n<img src=\"{LOGO}\" alt=\"TBM\">\n");
    for view in View::ALL {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = writeln!(nav, "<a href=\"{}\"{class}>{}</a>", view.path(), view.label());
    }
    nav.push_str("</nav>\n");
    nav
}

/// The complete HTML document for a rendered view
pub fn document(page: &Page) -> String {
    let maps = if page.view == View::Home {
        String::new()
    } else {
        head_includes(page.with_draw)
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n{maps}{STYLE}</head>\n<body>\n{nav}<main>\n{body}</main>\n\
         </body>\n</html>\n",
        nav = sidebar(page.view),
        body = page.body,
    )
}
