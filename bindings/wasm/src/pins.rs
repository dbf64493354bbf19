use hexmap_core::Pin;
use serde::Serialize;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

use crate::common::*;

/// A pin as handed to the page script, with its marker placement resolved.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Marker<'a> {
    #[serde(flatten)]
    pin: &'a Pin,
    marker_z_index: f64,
    visible: bool,
}

/// Read the pins of a GeoJSON FeatureCollection, ordered bottom to top.
/// With `zoom`, `visible` tells whether each marker is shown at that zoom level.
#[wasm_bindgen(js_name = "read_pins")]
pub fn read_pins(collection: JsValue, zoom: Option<f64>) -> Result<JsValue, JsValue> {
    let input = js_to_json(&collection).map_err(js_err)?;
    let data = hexmap_core::parse_geojson(&input).map_err(js_err)?;

    let markers: Vec<Marker> = data.pins.iter()
        .map(|pin| Marker {
            pin,
            marker_z_index: pin.marker_z_index(),
            visible: zoom.is_none_or(|zoom| pin.is_visible_at(zoom)),
        })
        .collect();

    let value = serde_json::to_value(&markers).map_err(js_err)?;
    json_to_js(&value).map_err(js_err)
}

/// Whether clicking `pin` (as returned by `read_pins`) opens one of the page's dialogs.
#[wasm_bindgen(js_name = "pin_opens_dialog")]
pub fn pin_opens_dialog(pin: JsValue, dialog_ids: Vec<String>) -> Result<bool, JsValue> {
    let pin: Pin = serde_wasm_bindgen::from_value(pin)?;
    Ok(pin.opens_dialog(|slug| dialog_ids.iter().any(|id| id == slug)))
}
