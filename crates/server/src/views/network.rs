//! Bus • Tram • BatCub view: presentation, fun fact and the network map.

use rand::Rng;
use tbm_live_core::TransitMapBuilder;
use tbm_live_core::popup::escape_html;
use tbm_live_core::render::fragment;
use tbm_live_core::transit::DatasetSource;

use crate::facts::{load_facts, pick_fact};
use crate::reports::NETWORK_REPORT;
use crate::shell::{Page, Shell, View};
use crate::views::{MAP_SIZE, notice};

const PRESENTATION: &str = r#"<div class="block">
<h2>Bus • Tram • BatCub</h2>
<p>Dans la continuité des 14 jours de données que nous avons explorés, découvrez maintenant les lignes de Bus, Tram et BatCub de la métropole bordelaise.
Chaque véhicule est associé à une couleur distincte pour les identifier facilement sur la carte.
En changeant de couche, vous avez la possibilité de sélectionner quel type de véhicule vous souhaitez afficher.
De plus, vous pouvez desactiver / activer la visualisation des lignes en retard, qui apparaissent en rouge pour une identification rapide.</p>
</div>
"#;

pub const FACT_UNAVAILABLE: &str = "Fait amusant non disponible...";

fn fact_block(fact: Option<&str>) -> String {
    let text = fact.map(escape_html).unwrap_or_else(|| FACT_UNAVAILABLE.to_string());
    format!("<div class=\"fact\"><h4>💡 Le saviez-vous ?</h4><p>{text}</p></div>\n")
}

pub fn render<S: DatasetSource, R: Rng + ?Sized>(shell: &Shell<S>, rng: &mut R) -> Page {
    let facts = load_facts(shell.facts_file());
    let loaded = shell.datasets().segments();
    let doc = TransitMapBuilder::new(shell.tiles().light()).build(&loaded.rows);

    let mut body = String::new();
    body.push_str(PRESENTATION);
    body.push_str("<div class=\"spacer\"></div>\n");
    body.push_str(&fact_block(pick_fact(&facts, rng)));
    body.push_str("<div class=\"spacer\"></div>\n");
    if let Some(text) = &loaded.notice {
        body.push_str(&notice(text));
    }
    body.push_str(&fragment(&doc, "network-map", MAP_SIZE.0, MAP_SIZE.1));
    body.push_str("<hr>\n");
    body.push_str(&NETWORK_REPORT.to_string());

    Page {
        view: View::Network,
        body,
        with_draw: doc.draw.is_some(),
    }
}
