//! Intermediate document trees shared by the encode and decode paths.
//!
//! [`Document`] keeps mapping insertion order; [`PlainDocument`] does not.
//! Keeping them as separate types makes every order-erasing or order-restoring
//! step visible in a signature.

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Canonical, interpreter-agnostic tree with ordered mappings.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// A TOML date, time or datetime in its textual (RFC 3339) form.
    Datetime(String),
    Sequence(Vec<Document>),
    Mapping(IndexMap<String, Document>),
}

/// The same shapes as [`Document`], with order-erased mappings.
#[derive(Debug, Clone, PartialEq)]
pub enum PlainDocument {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Datetime(String),
    Sequence(Vec<PlainDocument>),
    Mapping(BTreeMap<String, PlainDocument>),
}

impl PlainDocument {
    /// Short shape name used in codec diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PlainDocument::Null => "null",
            PlainDocument::Bool(_) => "boolean",
            PlainDocument::Integer(_) => "integer",
            PlainDocument::Float(_) => "float",
            PlainDocument::String(_) => "string",
            PlainDocument::Datetime(_) => "datetime",
            PlainDocument::Sequence(_) => "array",
            PlainDocument::Mapping(_) => "table",
        }
    }
}
