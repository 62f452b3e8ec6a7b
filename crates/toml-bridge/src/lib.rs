//! # toml-bridge
//!
//! Encode dynamically-typed script values to TOML text and decode TOML text
//! back into script values.
//!
//! Both directions go through an intermediate document tree:
//!
//! ```text
//! encode: HostValue -> Document -> PlainDocument -> TOML text
//! decode: TOML text -> PlainDocument -> Document -> HostValue
//! ```
//!
//! [`Document`] keeps mapping insertion order, [`PlainDocument`] does not. The
//! `toml` crate works on order-erased tables, so decoded mappings come back in
//! key order rather than in the order they were written.
//!
//! ## Quick start
//!
//! ```rust
//! use toml_bridge::{decode_str, encode_value, Dict, EncodeOptions, HostValue, List};
//!
//! let doc: Dict = [("name", HostValue::from("app"))].into_iter().collect();
//! doc.insert("ports", [80, 443].into_iter().collect::<List>());
//!
//! let text = encode_value(&HostValue::Dict(doc.clone()), &EncodeOptions::default()).unwrap();
//! assert_eq!(text, "name = \"app\"\nports = [80, 443]\n");
//!
//! let back = decode_str(&text).unwrap();
//! assert_eq!(back, HostValue::Dict(doc));
//! ```
//!
//! ## Modules
//!
//! - [`module`]: the `toml` script module (`toml.encode`, `toml.decode`)
//! - [`args`]: argument validation for both builtins
//! - [`value`]: host value model
//! - [`document`]: ordered and order-erased document trees
//! - [`convert`]: host value <-> document
//! - [`normalize`]: ordered <-> order-erased mappings
//! - [`codec`]: document <-> TOML text via the `toml` crate
//! - [`layout`]: indented table layout
//! - [`error`]: error types

pub mod args;
pub mod codec;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
mod json;
pub mod layout;
pub mod module;
pub mod normalize;
pub mod value;

pub use config::EncodeOptions;
pub use document::{Document, PlainDocument};
pub use error::{BridgeError, CallError, ParseError, Result};
pub use module::{Builtin, TomlModule};
pub use value::{Dict, HostValue, List, Struct};

/// Encode a host value as TOML text.
///
/// The value must be a mapping (a `Dict` or `Struct`) at the top level.
pub fn encode_value(value: &HostValue, options: &EncodeOptions) -> Result<String> {
    let doc = convert::value_to_document(value)?;
    let plain = normalize::erase_order(doc);
    codec::encode(&plain, options)
}

/// Decode TOML text into a host value (always a `Dict` at the top level).
pub fn decode_str(text: &str) -> Result<HostValue> {
    let plain = codec::decode(text)?;
    let doc = normalize::restore_order(plain);
    Ok(convert::document_to_value(doc))
}
