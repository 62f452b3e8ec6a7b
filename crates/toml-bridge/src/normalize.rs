//! Order normalization between [`Document`] and [`PlainDocument`].

use crate::document::{Document, PlainDocument};

/// Replace every ordered mapping with an order-erased one, recursively.
/// Sequence order is kept.
pub fn erase_order(doc: Document) -> PlainDocument {
    match doc {
        Document::Null => PlainDocument::Null,
        Document::Bool(b) => PlainDocument::Bool(b),
        Document::Integer(n) => PlainDocument::Integer(n),
        Document::Float(f) => PlainDocument::Float(f),
        Document::String(s) => PlainDocument::String(s),
        Document::Datetime(s) => PlainDocument::Datetime(s),
        Document::Sequence(items) => {
            PlainDocument::Sequence(items.into_iter().map(erase_order).collect())
        }
        Document::Mapping(map) => {
            let entries = map.into_iter().map(|(k, v)| (k, erase_order(v)));
            PlainDocument::Mapping(entries.collect())
        }
    }
}

/// Lift every order-erased mapping into an ordered one.
///
/// The resulting order is whatever order the plain mapping enumerates its
/// keys in (sorted, for `BTreeMap`), not the order of the source text.
pub fn restore_order(doc: PlainDocument) -> Document {
    match doc {
        PlainDocument::Null => Document::Null,
        PlainDocument::Bool(b) => Document::Bool(b),
        PlainDocument::Integer(n) => Document::Integer(n),
        PlainDocument::Float(f) => Document::Float(f),
        PlainDocument::String(s) => Document::String(s),
        PlainDocument::Datetime(s) => Document::Datetime(s),
        PlainDocument::Sequence(items) => {
            Document::Sequence(items.into_iter().map(restore_order).collect())
        }
        PlainDocument::Mapping(map) => {
            let entries = map.into_iter().map(|(k, v)| (k, restore_order(v)));
            Document::Mapping(entries.collect())
        }
    }
}
