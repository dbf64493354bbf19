use anyhow::{anyhow, Result};
use serde_json::Value;
use wasm_bindgen::JsValue;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a plain JS object (e.g. a GeoJSON FeatureCollection) to a serde_json Value.
pub(crate) fn js_to_json(value: &JsValue) -> Result<Value> {
    let text: String = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow!("value is not JSON-serializable: {:?}", e))?
        .into();
    serde_json::from_str(&text).map_err(|e| anyhow!("invalid JSON from JS: {}", e))
}

/// Convert a serde_json Value to a JS object.
/// Going through a JSON string keeps large GeoJSON payloads cheap to hand over.
pub(crate) fn json_to_js(value: &Value) -> Result<JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| anyhow!("Failed to serialize JSON to string: {}", e))?;
    js_sys::JSON::parse(&text).map_err(|e| anyhow!("Failed to parse JSON string: {:?}", e))
}
