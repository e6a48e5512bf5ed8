//! VCub view: presentation, video, date/time selectors and the station map.

use std::fmt::Write;

use chrono::{Local, Locale, NaiveDate, NaiveTime};
use tbm_live_core::StationMapBuilder;
use tbm_live_core::popup::escape_html;
use tbm_live_core::render::fragment;
use tbm_live_core::transit::{DatasetSource, Selection, available_dates, available_times, filter};

use crate::reports::VCUB_REPORT;
use crate::shell::{Page, Shell, View, ViewQuery};
use crate::views::{MAP_SIZE, notice};

pub const VIDEO: &str = "/assets/Video/VCub_video.mp4";

const PRESENTATION: &str = r#"<div class="block">
<h2>Visualisation en temps réel des besoins en vélos VCub</h2>
<p>Cette carte offre une visualisation en temps réel des besoins en vélos classiques et électriques VCub. Les données sont collectées en temps réel à différents intervalles en fonction des jeux de données disponibles, puis affichées en temps réel sur la carte.</p>
<p>La taille du cercle représente la disponibilité des vélos : plus le cercle est grand, plus il y a de vélos disponibles, et plus il est petit, moins il y a de vélos disponibles. La couleur du cercle indique également l'état de la station.</p>
<p>Pour une expérience plus immersive, placez le curseur à 4 minutes lors de la fête nationale du 14 juillet, entre 20 heures et 3 heures du matin, sur la place du Miroir d'Eau, lieu habituel pour admirer le feu d'artifice, où les stations connaissent un mouvement considérable.</p>
<p>La collecte de données a été volontairement interrompue après 14 jours en raison de limitations matérielles.</p>
</div>
"#;

const EXPLORATION: &str = r#"<div class="block">
<h2>Exploration des données VCub</h2>
<p>Dans cette démonstration, vous avez la possibilité de choisir parmi les 14 jours de données sur l'utilisation des vélos classiques et électriques VCub dans la métropole bordelaise.</p>
<p>Sélectionnez une date et une heure pour afficher la disponibilité des vélos sur la carte interactive.</p>
<p>En cliquant sur une station (extrémité du cercle), vous pouvez obtenir des détails sur le nombre de vélos disponibles, ainsi que le nombre de places que peut accueillir la station.</p>
<p>Explorez les variations de la demande VCub au fil du temps !</p>
</div>
"#;

/// Long French date, e.g. `vendredi 14 juillet 2023`
pub fn date_label(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%A %-d %B %Y", Locale::fr_FR)
        .to_string()
}

/// Selection to display.
///
/// Without any query value the first offered date and time are used, as the
/// selectors show them preselected. A partial or malformed query selects
/// nothing.
pub fn resolve_selection(
    query: &ViewQuery,
    dates: &[NaiveDate],
    times: &[NaiveTime],
) -> Option<Selection> {
    match (query.date.as_deref(), query.time.as_deref()) {
        (None, None) => Some(Selection::new(*dates.first()?, *times.first()?)),
        (Some(date), Some(time)) => Selection::parse(date, time),
        _ => None,
    }
}

fn selectors(dates: &[NaiveDate], times: &[NaiveTime], selection: Option<&Selection>) -> String {
    let mut html = String::from("<form class=\"selectors\" method=\"get\" action=\"/vcub\">\n");

    html.push_str("<label for=\"date\">Selectionnez une date :</label>\n<select id=\"date\" name=\"date\" onchange=\"this.form.submit()\">\n");
    for date in dates {
        let selected = if selection.map(|s| s.date) == Some(*date) { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            date.format("%Y-%m-%d"),
            escape_html(&date_label(*date))
        );
    }
    html.push_str("</select>\n");

    html.push_str("<label for=\"time\">Selectionnez une heure :</label>\n<select id=\"time\" name=\"time\" onchange=\"this.form.submit()\">\n");
    for time in times {
        let value = time.format("%H:%M");
        let selected = if selection.map(|s| s.time) == Some(*time) { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{value}\"{selected}>{value}</option>");
    }
    html.push_str("</select>\n<noscript><button type=\"submit\">Afficher</button></noscript>\n</form>\n");
    html
}

pub fn render<S: DatasetSource>(query: &ViewQuery, shell: &Shell<S>) -> Page {
    let loaded = shell.datasets().stations();
    let dates = available_dates(&loaded.rows);
    let times = available_times(&loaded.rows);
    let selection = resolve_selection(query, &dates, &times);

    let rows = filter(&loaded.rows, selection.as_ref());
    let tile_time = selection.map_or_else(|| Local::now().time(), |s| s.time);
    let tile = shell.tiles().for_time(tile_time);
    let doc = StationMapBuilder::new().build(&rows, &tile);

    let mut body = String::new();
    body.push_str(PRESENTATION);
    body.push_str("<div class=\"spacer\"></div>\n");
    let _ = writeln!(
        body,
        "<video controls width=\"100%\"><source src=\"{VIDEO}\" type=\"video/mp4\"></video>"
    );
    body.push_str("<hr>\n<div class=\"spacer\"></div>\n");
    body.push_str(EXPLORATION);
    body.push_str("<div class=\"spacer\"></div>\n");
    if let Some(text) = &loaded.notice {
        body.push_str(&notice(text));
    }
    body.push_str(&selectors(&dates, &times, selection.as_ref()));
    body.push_str("<div class=\"spacer\"></div>\n");
    body.push_str(&fragment(&doc, "vcub-map", MAP_SIZE.0, MAP_SIZE.1));
    body.push_str("<hr>\n");
    body.push_str(&VCUB_REPORT.to_string());

    Page {
        view: View::BikeShare,
        body,
        with_draw: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;
    use tbm_live_core::TileProvider;
    use tbm_live_core::transit::{StaticDatasetSource, StationIdentifier, StationSnapshot, StationState};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, d).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn snapshot(name: &str, date: NaiveDate, time: NaiveTime) -> StationSnapshot {
        StationSnapshot {
            name: StationIdentifier::new(name),
            timestamp: date.and_time(time),
            location: Point::new(-0.5701, 44.8414),
            state: StationState::Connected,
            classic_bikes: 2,
            electric_bikes: 1,
            available_bikes: 3,
            available_slots: 12,
        }
    }

    fn shell(rows: Vec<StationSnapshot>) -> Shell<StaticDatasetSource> {
        Shell::new(
            StaticDatasetSource::from_data("vcub", rows, Vec::new()),
            TileProvider::new(Some("key".into())),
            "facts.txt",
        )
    }

    fn query(date: &str, time: &str) -> ViewQuery {
        ViewQuery {
            date: Some(date.into()),
            time: Some(time.into()),
        }
    }

    #[test]
    fn test_date_label_is_french() {
        assert_eq!(date_label(day(14)), "vendredi 14 juillet 2023");
        assert_eq!(date_label(day(1)), "samedi 1 juillet 2023");
    }

    #[test]
    fn test_resolve_selection() {
        let dates = [day(14), day(15)];
        let times = [at(12, 0), at(23, 0)];

        assert_eq!(
            resolve_selection(&ViewQuery::default(), &dates, &times),
            Some(Selection::new(day(14), at(12, 0)))
        );
        assert_eq!(
            resolve_selection(&query("2023-07-15", "23:00"), &dates, &times),
            Some(Selection::new(day(15), at(23, 0)))
        );
        let partial = ViewQuery {
            date: Some("2023-07-15".into()),
            time: None,
        };
        assert_eq!(resolve_selection(&partial, &dates, &times), None);
        assert_eq!(resolve_selection(&query("14/07", "midi"), &dates, &times), None);
        assert_eq!(resolve_selection(&ViewQuery::default(), &[], &times), None);
    }

    #[test]
    fn test_render_selected_snapshot() {
        let shell = shell(vec![
            snapshot("Gare Saint-Jean", day(13), at(12, 0)),
            snapshot("Gare Saint-Jean", day(14), at(12, 0)),
            snapshot("Place Gambetta", day(14), at(23, 0)),
        ]);

        let page = render(&query("2023-07-14", "23:00"), &shell);

        assert_eq!(page.view, View::BikeShare);
        assert!(page.body.contains("Place Gambetta"));
        assert!(!page.body.contains("Gare Saint-Jean"));
        assert!(page.body.contains("dark_all"));
        assert!(page.body.contains("<option value=\"2023-07-14\" selected>vendredi 14 juillet 2023</option>"));
        assert!(!page.body.contains("value=\"2023-07-13\""));
        assert!(page.body.contains("<option value=\"23:00\" selected>23:00</option>"));
        assert!(page.body.contains("Rapport d'analyse VCub"));
    }

    #[test]
    fn test_render_defaults_to_first_values() {
        let shell = shell(vec![
            snapshot("Gare Saint-Jean", day(13), at(12, 0)),
            snapshot("Quinconces", day(14), at(12, 0)),
        ]);

        let page = render(&ViewQuery::default(), &shell);
        assert!(page.body.contains("Quinconces"));
        assert!(page.body.contains("api.maptiler.com"));
    }

    #[test]
    fn test_render_missing_data_shows_notice() {
        let shell = Shell::new(
            tbm_live_core::transit::FileDatasetSource::in_dir(std::path::Path::new(
                "/nonexistent/tbm",
            )),
            TileProvider::new(Some("key".into())),
            "facts.txt",
        );

        let page = render(&ViewQuery::default(), &shell);
        assert!(page.body.contains("class=\"alert\""));
        assert!(page.body.contains("Données indisponibles"));
        assert!(page.body.contains("vcub-map"));
    }
}
