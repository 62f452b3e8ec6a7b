//! # toml-bridge-python
//!
//! Python bindings for toml-bridge, built with PyO3.
//!
//! Exposes the `toml` builtins to Python as the `_native` module, operating
//! on native Python values rather than JSON text:
//!
//! - `encode(value, *, indent=0)` -- dict → TOML string
//! - `decode(text)` -- TOML string → dict
//!
//! Both accept `*args, **kwargs` and hand them to the shared argument
//! validator, so arity and keyword errors read the same as in any other host.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};
use pyo3::IntoPyObjectExt;
use toml_bridge::convert::MAX_DEPTH;
use toml_bridge::{Dict, HostValue, List, TomlModule};

/// Python → host value conversion state.
///
/// Lists and dicts already seen map to the same handle, so a Python list that
/// contains itself becomes a `List` that contains itself, and the encoder
/// reports the cycle instead of this conversion recursing forever.
///
/// `depth` counts open containers only. Up to `MAX_DEPTH + 1` levels the
/// structure is copied as is. Deeper subtrees become empty lists, which the
/// encoder never reaches because it rejects the level above them.
#[derive(Default)]
struct FromPython {
    seen: HashMap<usize, HostValue>,
    depth: usize,
}

impl FromPython {
    fn convert(&mut self, obj: &Bound<'_, PyAny>) -> PyResult<HostValue> {
        if obj.is_none() {
            return Ok(HostValue::None);
        }
        // bool before int: Python bools are ints.
        if let Ok(b) = obj.downcast::<PyBool>() {
            return Ok(HostValue::Bool(b.is_true()));
        }
        if obj.is_instance_of::<PyInt>() {
            return Ok(HostValue::Int(obj.extract::<i64>()?));
        }
        if let Ok(f) = obj.downcast::<PyFloat>() {
            return Ok(HostValue::Float(f.value()));
        }
        if let Ok(s) = obj.downcast::<PyString>() {
            return Ok(HostValue::String(s.to_str()?.to_owned()));
        }

        let id = obj.as_ptr() as usize;
        if let Some(existing) = self.seen.get(&id) {
            return Ok(existing.clone());
        }
        if let Ok(list) = obj.downcast::<PyList>() {
            return self.sequence(id, list.iter());
        }
        if let Ok(tuple) = obj.downcast::<PyTuple>() {
            return self.sequence(id, tuple.iter());
        }
        if let Ok(dict) = obj.downcast::<PyDict>() {
            return self.mapping(id, dict);
        }
        if obj.is_callable() {
            return Ok(HostValue::Function(obj.str()?.to_string()));
        }
        Ok(HostValue::Opaque(obj.get_type().name()?.to_string()))
    }

    fn sequence<'py>(
        &mut self,
        id: usize,
        items: impl Iterator<Item = Bound<'py, PyAny>>,
    ) -> PyResult<HostValue> {
        let out = List::new();
        if self.depth > MAX_DEPTH {
            return Ok(HostValue::List(out));
        }
        self.seen.insert(id, HostValue::List(out.clone()));
        self.depth += 1;
        for item in items {
            out.push(self.convert(&item)?);
        }
        self.depth -= 1;
        Ok(HostValue::List(out))
    }

    fn mapping(&mut self, id: usize, dict: &Bound<'_, PyDict>) -> PyResult<HostValue> {
        if self.depth > MAX_DEPTH {
            return Ok(HostValue::List(List::new()));
        }
        let out = Dict::new();
        self.seen.insert(id, HostValue::Dict(out.clone()));
        self.depth += 1;
        for (key, value) in dict.iter() {
            let Ok(name) = key.extract::<String>() else {
                return Err(PyValueError::new_err(format!(
                    "dict keys must be str, got {}",
                    key.get_type().name()?
                )));
            };
            out.insert(name, self.convert(&value)?);
        }
        self.depth -= 1;
        Ok(HostValue::Dict(out))
    }

    /// Empty every container built during conversion, breaking any cycles
    /// copied over from Python so the handles can be freed.
    fn release(self) {
        for value in self.seen.into_values() {
            match value {
                HostValue::List(list) => list.clear(),
                HostValue::Dict(dict) => dict.clear(),
                _ => {}
            }
        }
    }
}

fn to_python(py: Python<'_>, value: &HostValue) -> PyResult<PyObject> {
    match value {
        HostValue::None | HostValue::Function(_) | HostValue::Opaque(_) => Ok(py.None()),
        HostValue::Bool(b) => (*b).into_py_any(py),
        HostValue::Int(n) => (*n).into_py_any(py),
        HostValue::Float(f) => (*f).into_py_any(py),
        HostValue::String(s) => s.as_str().into_py_any(py),
        HostValue::List(list) => {
            let items = list
                .items()
                .iter()
                .map(|item| to_python(py, item))
                .collect::<PyResult<Vec<_>>>()?;
            Ok(PyList::new(py, items)?.into_any().unbind())
        }
        HostValue::Dict(dict) => {
            let out = PyDict::new(py);
            for (key, item) in dict.entries().iter() {
                out.set_item(key.as_str(), to_python(py, item)?)?;
            }
            Ok(out.into_any().unbind())
        }
        HostValue::Struct(st) => {
            let out = PyDict::new(py);
            for (key, item) in &st.fields {
                out.set_item(key.as_str(), to_python(py, item)?)?;
            }
            Ok(out.into_any().unbind())
        }
    }
}

type Call = (Vec<HostValue>, Vec<(String, HostValue)>);

fn convert_call(
    conv: &mut FromPython,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<Call> {
    let mut positional = Vec::with_capacity(args.len());
    for arg in args.iter() {
        positional.push(conv.convert(&arg)?);
    }
    let mut keywords = Vec::new();
    if let Some(kwargs) = kwargs {
        for (name, value) in kwargs.iter() {
            keywords.push((name.extract::<String>()?, conv.convert(&value)?));
        }
    }
    Ok((positional, keywords))
}

/// Run `toml.<member>` with Python arguments and convert the result back.
fn call_member(
    py: Python<'_>,
    member: &str,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    let mut conv = FromPython::default();
    let outcome = convert_call(&mut conv, args, kwargs).and_then(|(positional, keywords)| {
        TomlModule
            .call(member, &positional, &keywords)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    });
    conv.release();
    let value = outcome?;
    log::trace!("toml.{member} returned a {}", value.type_name());
    to_python(py, &value)
}

/// Encode a dict as TOML text.
///
/// Args:
///     value: A dict (nested dicts, lists, tuples, str, int, float, bool).
///         `None` entries in dicts are omitted.
///     indent: Spaces per nesting level for table sections (keyword-only,
///         default 0 = library layout).
///
/// Returns:
///     The TOML string.
///
/// Raises:
///     ValueError: On wrong arguments, unrepresentable or self-referential
///         values, or a non-dict top level.
#[pyfunction]
#[pyo3(signature = (*args, **kwargs))]
fn encode(
    py: Python<'_>,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    call_member(py, "encode", args, kwargs)
}

/// Decode TOML text into a dict.
///
/// Args:
///     text: A TOML document.
///
/// Returns:
///     A dict; keys come back in sorted order, datetimes as strings.
///
/// Raises:
///     ValueError: On wrong arguments or malformed TOML (with line and column).
#[pyfunction]
#[pyo3(signature = (*args, **kwargs))]
fn decode(
    py: Python<'_>,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    call_member(py, "decode", args, kwargs)
}

/// The `_native` Python module, implemented in Rust via PyO3.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    Ok(())
}
