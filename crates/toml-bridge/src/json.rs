//! JSON <-> host value bridge, for front ends that exchange JSON text
//! instead of live script values.

use serde_json::{Map, Number, Value};

use crate::convert::MAX_DEPTH;
use crate::error::{BridgeError, Result};
use crate::value::{Dict, HostValue, List};

impl HostValue {
    /// Build a host value from JSON. Object key order is kept.
    ///
    /// Unsigned integers above `i64::MAX` become floats.
    pub fn from_json(json: &Value) -> HostValue {
        match json {
            Value::Null => HostValue::None,
            Value::Bool(b) => HostValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => HostValue::Int(i),
                None => HostValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => HostValue::String(s.clone()),
            Value::Array(items) => {
                HostValue::List(items.iter().map(HostValue::from_json).collect::<List>())
            }
            Value::Object(map) => {
                let entries = map.iter().map(|(k, v)| (k.clone(), Self::from_json(v)));
                HostValue::Dict(entries.collect::<Dict>())
            }
        }
    }

    /// Render a host value as JSON.
    ///
    /// Non-finite floats, functions and opaque values become `null`; structs
    /// become objects. Fails on self-referential values and on nesting deeper
    /// than [`MAX_DEPTH`].
    pub fn to_json(&self) -> Result<Value> {
        let mut path = Vec::new();
        json_of(self, &mut path)
    }
}

/// `path` holds the containers being rendered; structs are recorded as `None`.
fn json_of(value: &HostValue, path: &mut Vec<Option<usize>>) -> Result<Value> {
    match value {
        HostValue::None | HostValue::Function(_) | HostValue::Opaque(_) => Ok(Value::Null),
        HostValue::Bool(b) => Ok(Value::Bool(*b)),
        HostValue::Int(n) => Ok(Value::Number((*n).into())),
        HostValue::Float(f) => Ok(Number::from_f64(*f).map_or(Value::Null, Value::Number)),
        HostValue::String(s) => Ok(Value::String(s.clone())),
        HostValue::List(list) => {
            enter(path, Some(list.id()), "list")?;
            let items = list
                .items()
                .iter()
                .map(|item| json_of(item, path))
                .collect::<Result<Vec<_>>>();
            path.pop();
            Ok(Value::Array(items?))
        }
        HostValue::Dict(dict) => {
            enter(path, Some(dict.id()), "dict")?;
            let object = object_of(dict.entries().iter(), path);
            path.pop();
            Ok(Value::Object(object?))
        }
        HostValue::Struct(st) => {
            enter(path, None, "struct")?;
            let object = object_of(st.fields.iter(), path);
            path.pop();
            Ok(Value::Object(object?))
        }
    }
}

fn object_of<'v>(
    entries: impl Iterator<Item = (&'v String, &'v HostValue)>,
    path: &mut Vec<Option<usize>>,
) -> Result<Map<String, Value>> {
    let mut object = Map::new();
    for (key, value) in entries {
        object.insert(key.clone(), json_of(value, path)?);
    }
    Ok(object)
}

fn enter(path: &mut Vec<Option<usize>>, id: Option<usize>, kind: &'static str) -> Result<()> {
    if id.is_some() && path.contains(&id) {
        return Err(BridgeError::CyclicValue { kind });
    }
    if path.len() >= MAX_DEPTH {
        return Err(BridgeError::UnsupportedValue(format!(
            "value nests deeper than {MAX_DEPTH} levels"
        )));
    }
    path.push(id);
    Ok(())
}
