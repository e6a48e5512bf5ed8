//! Embedded Power BI reports shown below each map.

use std::fmt;

/// An analysis report embedded as an iframe, preceded by a sign-in notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFrame {
    pub heading: &'static str,
    pub title: &'static str,
    pub src: &'static str,
    pub frame_width: u32,
    pub frame_height: u32,
    pub container_width: u32,
    pub container_height: u32,
}

pub const VCUB_REPORT: ReportFrame = ReportFrame {
    heading: "Rapport d'analyse VCub",
    title: "V3",
    src: "https://app.powerbi.com/reportEmbed?reportId=a5a6fa02-137c-48ca-9754-8467b7366089&autoAuth=true&ctid=5892e2db-e39d-4cc1-a179-dc66550efc30",
    frame_width: 980,
    frame_height: 600,
    container_width: 1000,
    container_height: 650,
};

pub const NETWORK_REPORT: ReportFrame = ReportFrame {
    heading: "Rapport d'analyse Bus • Tram • BatCub",
    title: "TRAM • BUS • BATEAU",
    src: "https://app.powerbi.com/reportEmbed?reportId=7f601950-66d2-4060-840b-21740784a6dc&autoAuth=true&ctid=5892e2db-e39d-4cc1-a179-dc66550efc30",
    frame_width: 945,
    frame_height: 2000,
    container_width: 1000,
    container_height: 1200,
};

impl fmt::Display for ReportFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<div class=\"block centered\"><h2>{heading}</h2>\
             <p>Pour visualiser ce rapport, veuillez vous connecter à un compte Power BI</p></div>\n\
             <div class=\"spacer\"></div>\n\
             <div style=\"width:{cw}px;height:{ch}px;overflow:hidden;position:relative\">\
             <iframe title=\"{title}\" width=\"{fw}\" height=\"{fh}\" src=\"{src}\" \
             frameborder=\"0\" allowfullscreen style=\"position:absolute\"></iframe></div>\n",
            heading = self.heading,
            title = self.title,
            src = self.src.replace('&', "&amp;"),
            cw = self.container_width,
            ch = self.container_height,
            fw = self.frame_width,
            fh = self.frame_height,
        )
    }
}
