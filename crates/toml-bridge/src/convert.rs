//! Conversions between host values and the canonical document tree.

use indexmap::IndexMap;

use crate::document::Document;
use crate::error::{BridgeError, Result};
use crate::value::{Dict, HostValue, List};

/// Deepest container nesting accepted on the encode path.
pub const MAX_DEPTH: usize = 128;

/// Convert a host value into a [`Document`].
///
/// Fails on functions, on containers that reach themselves, and on nesting
/// deeper than [`MAX_DEPTH`]. A container referenced twice without a cycle
/// converts to two independent subtrees.
pub fn value_to_document(value: &HostValue) -> Result<Document> {
    let mut walker = Walker { path: Vec::new() };
    walker.convert(value)
}

/// Convert a [`Document`] back into a host value. Every document shape has a
/// host representation; datetimes become strings.
pub fn document_to_value(doc: Document) -> HostValue {
    match doc {
        Document::Null => HostValue::None,
        Document::Bool(b) => HostValue::Bool(b),
        Document::Integer(n) => HostValue::Int(n),
        Document::Float(f) => HostValue::Float(f),
        Document::String(s) | Document::Datetime(s) => HostValue::String(s),
        Document::Sequence(items) => {
            HostValue::List(items.into_iter().map(document_to_value).collect::<List>())
        }
        Document::Mapping(map) => {
            let entries = map.into_iter().map(|(k, v)| (k, document_to_value(v)));
            HostValue::Dict(entries.collect::<Dict>())
        }
    }
}

/// Recursive converter state: the containers on the current path. Structs
/// have no identity and are recorded as `None`.
struct Walker {
    path: Vec<Option<usize>>,
}

impl Walker {
    fn convert(&mut self, value: &HostValue) -> Result<Document> {
        match value {
            HostValue::None => Ok(Document::Null),
            HostValue::Bool(b) => Ok(Document::Bool(*b)),
            HostValue::Int(n) => Ok(Document::Integer(*n)),
            HostValue::Float(f) => Ok(Document::Float(*f)),
            HostValue::String(s) => Ok(Document::String(s.clone())),
            HostValue::List(list) => {
                self.enter(list.id(), "list")?;
                let items = list
                    .items()
                    .iter()
                    .map(|item| self.convert(item))
                    .collect::<Result<Vec<_>>>();
                self.leave();
                Ok(Document::Sequence(items?))
            }
            HostValue::Dict(dict) => {
                self.enter(dict.id(), "dict")?;
                let map = self.convert_entries(dict.entries().iter());
                self.leave();
                Ok(Document::Mapping(map?))
            }
            HostValue::Struct(st) => {
                self.check_depth()?;
                self.path.push(None);
                let map = self.convert_entries(st.fields.iter());
                self.leave();
                Ok(Document::Mapping(map?))
            }
            HostValue::Function(name) => Err(BridgeError::UnsupportedValue(format!(
                "function '{name}' cannot be represented in TOML"
            ))),
            HostValue::Opaque(type_name) => Err(BridgeError::UnsupportedValue(format!(
                "value of type '{type_name}' cannot be represented in TOML"
            ))),
        }
    }

    fn convert_entries<'v>(
        &mut self,
        entries: impl Iterator<Item = (&'v String, &'v HostValue)>,
    ) -> Result<IndexMap<String, Document>> {
        let mut map = IndexMap::new();
        for (key, value) in entries {
            map.insert(key.clone(), self.convert(value)?);
        }
        Ok(map)
    }

    fn enter(&mut self, id: usize, kind: &'static str) -> Result<()> {
        if self.path.contains(&Some(id)) {
            log::debug!("cycle detected through {kind} at depth {}", self.path.len());
            return Err(BridgeError::CyclicValue { kind });
        }
        self.check_depth()?;
        self.path.push(Some(id));
        Ok(())
    }

    fn check_depth(&self) -> Result<()> {
        if self.path.len() >= MAX_DEPTH {
            return Err(BridgeError::UnsupportedValue(format!(
                "value nests deeper than {MAX_DEPTH} levels"
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.path.pop();
    }
}
