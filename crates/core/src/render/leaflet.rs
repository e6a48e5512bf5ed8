//! Leaflet rendering of map documents.
//!
//! The document is serialized to JSON and embedded next to a small loader
//! script that rebuilds tiles, layers, popups and controls in the browser.

use serde_json::{Value, json};

use crate::map::tile::TileLayer;
use crate::map::{DrawControl, MapDocument, MapFeature, MapLayer, Popup};
use crate::render::geojson::geometry_json;
use crate::style::{PathStyle, hex};

const LEAFLET_VERSION: &str = "1.9.4";
const LEAFLET_DRAW_VERSION: &str = "1.0.4";

/// Stylesheets and scripts a page must include before any fragment
pub fn head_includes(with_draw: bool) -> String {
    let mut head = format!(
        r#"<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
"#
    );
    if with_draw {
        head.push_str(&format!(
            r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet.draw/{LEAFLET_DRAW_VERSION}/leaflet.draw.css">
<script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet.draw/{LEAFLET_DRAW_VERSION}/leaflet.draw.js"></script>
"#
        ));
    }
    head
}

fn style_json(style: &PathStyle) -> Value {
    json!({
        "color": hex(style.color),
        "weight": style.weight,
        "fill": style.is_filled(),
        "fillColor": style.fill.map(hex),
    })
}

fn popup_json(popup: &Popup) -> Value {
    json!({ "html": popup.html, "maxWidth": popup.max_width })
}

fn feature_json(feature: &MapFeature) -> Value {
    match feature {
        MapFeature::Circle(marker) => json!({
            "kind": "circle",
            "location": [marker.location.y(), marker.location.x()],
            "radius": marker.radius,
            "style": style_json(&marker.style),
            "popup": popup_json(&marker.popup),
        }),
        MapFeature::Line(line) => json!({
            "kind": "line",
            "geometry": geometry_json(&line.geometry),
            "style": style_json(&line.style),
            "popup": popup_json(&line.popup),
        }),
    }
}

fn layer_json(layer: &MapLayer) -> Value {
    json!({
        "name": layer.name.as_deref(),
        "features": layer.features.iter().map(feature_json).collect::<Vec<_>>(),
    })
}

fn tile_json(tile: &TileLayer) -> Value {
    json!({
        "name": tile.name,
        "url": tile.url_template,
        "attribution": tile.attribution,
        "subdomains": tile.subdomains,
    })
}

fn draw_json(draw: &DrawControl) -> Value {
    let shapes: serde_json::Map<String, Value> = draw
        .shapes
        .iter()
        .map(|shape| (shape.to_string(), Value::Bool(true)))
        .collect();
    json!({
        "position": draw.position.to_string(),
        "draw": shapes,
        "edit": draw.editable,
        "exportFilename": draw.export_filename,
    })
}

/// The JSON handed to the loader script
pub fn document_json(doc: &MapDocument) -> Value {
    json!({
        "center": [doc.center.y(), doc.center.x()],
        "zoom": doc.zoom,
        "tiles": doc.tiles.iter().map(tile_json).collect::<Vec<_>>(),
        "layers": doc.layers.iter().map(layer_json).collect::<Vec<_>>(),
        "layerControl": doc.layer_control,
        "draw": doc.draw.as_ref().map(draw_json),
    })
}

/// JSON is embedded inside a `<script>` element; popups carry closing tags
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

const LOADER: &str = r#"(function (elementId, doc) {
  var map = L.map(elementId).setView(doc.center, doc.zoom);
  var bases = {};
  var overlays = {};
  doc.tiles.forEach(function (t) {
    var options = { attribution: t.attribution, maxZoom: 20 };
    if (t.subdomains) { options.subdomains = t.subdomains; }
    var tile = L.tileLayer(t.url, options).addTo(map);
    if (t.name) { bases[t.name] = tile; }
  });
  doc.layers.forEach(function (layer) {
    var group = L.featureGroup();
    layer.features.forEach(function (f) {
      var item = f.kind === 'circle'
        ? L.circleMarker(f.location, Object.assign({ radius: f.radius }, f.style))
        : L.geoJSON(f.geometry, { style: function () { return f.style; } });
      var popup = {};
      if (f.popup.maxWidth) { popup.maxWidth = f.popup.maxWidth; }
      item.bindPopup(f.popup.html, popup);
      item.addTo(group);
    });
    group.addTo(map);
    if (layer.name) { overlays[layer.name] = group; }
  });
  if (doc.layerControl) { L.control.layers(bases, overlays).addTo(map); }
  if (doc.draw && L.Control.Draw) {
    var drawn = new L.FeatureGroup().addTo(map);
    map.addControl(new L.Control.Draw({
      position: doc.draw.position,
      draw: doc.draw.draw,
      edit: doc.draw.edit ? { featureGroup: drawn } : false
    }));
    map.on(L.Draw.Event.CREATED, function (e) { drawn.addLayer(e.layer); });
    if (doc.draw.exportFilename) {
      var exporter = L.control({ position: 'topright' });
      exporter.onAdd = function () {
        var a = L.DomUtil.create('a', 'leaflet-bar');
        a.href = '#';
        a.textContent = 'Export';
        a.style.padding = '4px 8px';
        a.style.background = '#fff';
        a.onclick = function (ev) {
          ev.preventDefault();
          var link = document.createElement('a');
          link.href = 'data:application/json;charset=utf-8,' +
            encodeURIComponent(JSON.stringify(drawn.toGeoJSON()));
          link.download = doc.draw.exportFilename;
          link.click();
        };
        return a;
      };
      exporter.addTo(map);
    }
  }
})"#;

/// An embeddable `<div>` + `<script>` pair; the page must carry
/// [`head_includes`].
pub fn fragment(doc: &MapDocument, element_id: &str, width: u32, height: u32) -> String {
    let data = script_safe(&document_json(doc).to_string());
    format!(
        "<div id=\"{element_id}\" style=\"width:{width}px;height:{height}px\"></div>\n\
         <script>{LOADER}({id}, {data});</script>\n",
        id = json!(element_id),
    )
}

/// A complete HTML page showing only the map
pub fn standalone_page(doc: &MapDocument, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{head}\
         <style>html, body {{ margin: 0; }}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = crate::popup::escape_html(title),
        head = head_includes(doc.draw.is_some()),
        body = fragment(doc, "map", 945, 450),
    )
}
