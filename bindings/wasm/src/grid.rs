use serde_json::Value;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

use crate::common::*;

/// Composite a GeoJSON FeatureCollection of areas into the hex overlay FeatureCollection.
/// `grid_resolution` and `outline_multiplier` are the raw `data-grid-resolution` and
/// `data-outline-multiplier` attribute values; missing or unreadable ones use the defaults.
#[wasm_bindgen(js_name = "build_hex_grid")]
pub fn build_hex_grid(
    areas: JsValue,
    grid_resolution: Option<String>,
    outline_multiplier: Option<String>,
) -> Result<JsValue, JsValue> {
    let input = js_to_json(&areas).map_err(js_err)?;
    let data = hexmap_core::parse_geojson(&input).map_err(js_err)?;

    let config = hexmap_core::GridConfig::from_attributes(grid_resolution.as_deref(), outline_multiplier.as_deref());
    let cells = hexmap_core::build_hex_grid(&data.areas, &config, &mut rand::rng());

    let geojson = hexmap_core::cells_to_geojson(&cells).map_err(js_err)?;
    json_to_js(&geojson).map_err(js_err)
}

/// Whether a cell of this opacity shows its label on hover.
#[wasm_bindgen(js_name = "is_interactive")]
pub fn is_interactive(opacity: f64) -> bool {
    hexmap_core::CompositedCell::is_interactive_opacity(opacity)
}

/// Parse a CMS color token into `{ r, g, b }`.
#[wasm_bindgen(js_name = "parse_color")]
pub fn parse_color(token: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&hexmap_core::parse_color(token)).map_err(|e| e.into())
}

/// The bottom and top fill layer definitions for a GeoJSON source holding the cells.
#[wasm_bindgen(js_name = "fill_layers")]
pub fn fill_layers(source_id: &str) -> Result<JsValue, JsValue> {
    let layers = Value::Array(hexmap_core::fill_layers(source_id).into());
    json_to_js(&layers).map_err(js_err)
}

/// Id of the style layer to insert the hex layers before, given `map.getStyle().layers`.
#[wasm_bindgen(js_name = "find_anchor_layer")]
pub fn find_anchor_layer(style_layers: JsValue) -> Result<Option<String>, JsValue> {
    let layers = js_to_json(&style_layers).map_err(js_err)?;
    let layers = layers.as_array().ok_or_else(|| js_err("style layers must be an array"))?;
    Ok(hexmap_core::find_anchor_layer(layers).map(str::to_string))
}
