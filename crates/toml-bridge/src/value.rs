//! The host scripting value model.
//!
//! `List` and `Dict` are shared, mutable containers with reference identity,
//! the way an interpreter heap hands them to builtins. Two handles may point at
//! the same container, and a container may (by mistake) contain itself; the
//! encoder detects that case instead of recursing forever.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// A dynamically-typed script value.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(List),
    Dict(Dict),
    /// Named, immutable field set. Encodes like a mapping.
    Struct(Struct),
    /// A callable. Has no TOML representation.
    Function(String),
    /// Any other interpreter object, identified by its type name.
    Opaque(String),
}

impl HostValue {
    /// The script-facing type name, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            HostValue::None => "NoneType",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::String(_) => "string",
            HostValue::List(_) => "list",
            HostValue::Dict(_) => "dict",
            HostValue::Struct(_) => "struct",
            HostValue::Function(_) => "function",
            HostValue::Opaque(type_name) => type_name,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            HostValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            HostValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        HostValue::Bool(b)
    }
}

impl From<i64> for HostValue {
    fn from(n: i64) -> Self {
        HostValue::Int(n)
    }
}

impl From<i32> for HostValue {
    fn from(n: i32) -> Self {
        HostValue::Int(n.into())
    }
}

impl From<f64> for HostValue {
    fn from(f: f64) -> Self {
        HostValue::Float(f)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::String(s.to_string())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::String(s)
    }
}

impl From<List> for HostValue {
    fn from(l: List) -> Self {
        HostValue::List(l)
    }
}

impl From<Dict> for HostValue {
    fn from(d: Dict) -> Self {
        HostValue::Dict(d)
    }
}

impl From<Struct> for HostValue {
    fn from(s: Struct) -> Self {
        HostValue::Struct(s)
    }
}

/// Shared handle to a mutable sequence.
#[derive(Clone, Default, PartialEq)]
pub struct List(Rc<RefCell<Vec<HostValue>>>);

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: impl Into<HostValue>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<HostValue> {
        self.0.borrow().get(index).cloned()
    }

    /// Borrow the elements for reading.
    pub fn items(&self) -> Ref<'_, Vec<HostValue>> {
        self.0.borrow()
    }

    /// Drop all elements. Breaks reference cycles built through this list.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Identity of the underlying container.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<V: Into<HostValue>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let items = iter.into_iter().map(Into::into).collect();
        List(Rc::new(RefCell::new(items)))
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(items) => f.debug_list().entries(items.iter()).finish(),
            Err(_) => f.write_str("[<borrowed>]"),
        }
    }
}

/// Shared handle to a mutable, insertion-ordered string-keyed mapping.
#[derive(Clone, Default, PartialEq)]
pub struct Dict(Rc<RefCell<IndexMap<String, HostValue>>>);

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. A replaced key keeps its original position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<HostValue>) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<HostValue> {
        self.0.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Borrow the entries for reading.
    pub fn entries(&self) -> Ref<'_, IndexMap<String, HostValue>> {
        self.0.borrow()
    }

    /// Drop all entries. Breaks reference cycles built through this dict.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Identity of the underlying container.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<K: Into<String>, V: Into<HostValue>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        Dict(Rc::new(RefCell::new(entries.collect())))
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(entries) => f.debug_map().entries(entries.iter()).finish(),
            Err(_) => f.write_str("{<borrowed>}"),
        }
    }
}

/// An immutable record with a type name and ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub name: String,
    pub fields: IndexMap<String, HostValue>,
}

impl Struct {
    pub fn new<K, V>(name: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<HostValue>,
    {
        Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
