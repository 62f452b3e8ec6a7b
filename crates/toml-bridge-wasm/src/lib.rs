//! WASM bindings for toml-bridge.
//!
//! JavaScript hands values across as JSON text, so both functions speak JSON
//! on the script side and TOML on the other:
//!
//! ```sh
//! cargo build -p toml-bridge-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/toml-bridge-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/toml_bridge_wasm.wasm
//! ```

use toml_bridge::{decode_str, encode_value, EncodeOptions, HostValue};
use wasm_bindgen::prelude::*;

/// Encode a JSON object string as TOML, indenting nested tables by `indent`
/// spaces (0 keeps the default layout).
///
/// Throws a JS error if the input is not JSON or cannot be represented in TOML.
#[wasm_bindgen]
pub fn encode(json: &str, indent: u32) -> std::result::Result<String, JsValue> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let value = HostValue::from_json(&parsed);
    encode_value(&value, &EncodeOptions::with_indent(indent as usize))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a TOML string into compact JSON.
///
/// Throws a JS error if the input is not valid TOML.
#[wasm_bindgen]
pub fn decode(toml: &str) -> std::result::Result<String, JsValue> {
    let value = decode_str(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let tree = value.to_json().map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&tree).map_err(|e| JsValue::from_str(&e.to_string()))
}
