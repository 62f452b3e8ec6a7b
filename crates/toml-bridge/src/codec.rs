//! TOML text <-> [`PlainDocument`], delegating the format itself to the `toml` crate.
//!
//! Shape rules on the encode path:
//!
//! - The root must be a mapping (TOML documents are tables).
//! - Null mapping entries are omitted; TOML has no null.
//! - Null sequence elements are rejected.
//! - Datetime leaves must hold valid TOML datetime text.

use std::collections::BTreeMap;

use toml::value::Datetime;
use toml::{Table, Value};

use crate::config::EncodeOptions;
use crate::document::PlainDocument;
use crate::error::{BridgeError, ParseError, Result};
use crate::layout;

/// Serialize a normalized tree to TOML text.
///
/// `options.indent == 0` yields the `toml` crate's default layout; a positive
/// width indents nested table sections (see [`crate::layout`]).
pub fn encode(doc: &PlainDocument, options: &EncodeOptions) -> Result<String> {
    let table = match doc {
        PlainDocument::Mapping(map) => to_table(map)?,
        other => {
            return Err(BridgeError::Encode(format!(
                "top-level value must be a table, got {}",
                other.kind()
            )));
        }
    };

    let text = if options.indent == 0 {
        toml::to_string(&table).map_err(|e| BridgeError::Encode(e.to_string()))?
    } else {
        layout::write_indented(&table, options.indent)
    };
    log::debug!(
        "encoded {} top-level keys into {} bytes of TOML (indent={})",
        table.len(),
        text.len(),
        options.indent
    );
    Ok(text)
}

/// Parse TOML text into an order-erased tree.
pub fn decode(text: &str) -> Result<PlainDocument> {
    let table: Table = toml::from_str(text).map_err(|e| {
        let offset = e.span().map(|span| span.start);
        BridgeError::Parse(ParseError::new(e.message(), text, offset))
    })?;
    log::debug!(
        "decoded {} bytes of TOML into {} top-level keys",
        text.len(),
        table.len()
    );
    Ok(from_table(table))
}

fn to_table(map: &BTreeMap<String, PlainDocument>) -> Result<Table> {
    let mut table = Table::new();
    for (key, value) in map {
        if matches!(value, PlainDocument::Null) {
            log::trace!("omitting null value for key '{key}'");
            continue;
        }
        table.insert(key.clone(), to_value(value)?);
    }
    Ok(table)
}

fn to_value(doc: &PlainDocument) -> Result<Value> {
    Ok(match doc {
        PlainDocument::Null => {
            return Err(BridgeError::Encode(
                "cannot encode an array with a null element".to_string(),
            ));
        }
        PlainDocument::Bool(b) => Value::Boolean(*b),
        PlainDocument::Integer(n) => Value::Integer(*n),
        PlainDocument::Float(f) => Value::Float(*f),
        PlainDocument::String(s) => Value::String(s.clone()),
        PlainDocument::Datetime(s) => match s.parse::<Datetime>() {
            Ok(dt) => Value::Datetime(dt),
            Err(e) => {
                let message = format!("invalid datetime '{s}': {e}");
                return Err(BridgeError::Encode(message));
            }
        },
        PlainDocument::Sequence(items) => {
            Value::Array(items.iter().map(to_value).collect::<Result<Vec<_>>>()?)
        }
        PlainDocument::Mapping(map) => Value::Table(to_table(map)?),
    })
}

fn from_table(table: Table) -> PlainDocument {
    let entries = table.into_iter().map(|(k, v)| (k, from_value(v)));
    PlainDocument::Mapping(entries.collect())
}

fn from_value(value: Value) -> PlainDocument {
    match value {
        Value::String(s) => PlainDocument::String(s),
        Value::Integer(n) => PlainDocument::Integer(n),
        Value::Float(f) => PlainDocument::Float(f),
        Value::Boolean(b) => PlainDocument::Bool(b),
        Value::Datetime(dt) => PlainDocument::Datetime(dt.to_string()),
        Value::Array(items) => {
            PlainDocument::Sequence(items.into_iter().map(from_value).collect())
        }
        Value::Table(table) => from_table(table),
    }
}
