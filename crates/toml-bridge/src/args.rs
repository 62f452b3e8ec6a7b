//! Argument validation for the `encode` and `decode` builtins.
//!
//! Builtins receive positional arguments as a slice and keyword arguments as
//! `(name, value)` pairs, in call order. Validation runs before any conversion
//! work, so a bad call never produces partial output.

use crate::config::EncodeOptions;
use crate::error::{BridgeError, Result};
use crate::value::HostValue;

/// Keyword arguments recognized by `encode`.
pub const ENCODE_KWARGS: &[&str] = &["indent"];

/// Validated arguments of an `encode` call.
#[derive(Debug)]
pub struct EncodeArgs<'a> {
    pub value: &'a HostValue,
    pub options: EncodeOptions,
}

/// Check an `encode` call: one positional value plus an optional `indent`.
pub fn validate_encode<'a>(
    args: &'a [HostValue],
    kwargs: &[(String, HostValue)],
) -> Result<EncodeArgs<'a>> {
    let value = single_positional(args)?;
    check_names(kwargs, ENCODE_KWARGS)?;

    let mut options = EncodeOptions::default();
    for (name, arg) in kwargs {
        if name == "indent" {
            options.indent = indent_width(arg)?;
        }
    }
    Ok(EncodeArgs { value, options })
}

/// Check a `decode` call: one positional string, no keyword arguments.
pub fn validate_decode<'a>(
    args: &'a [HostValue],
    kwargs: &[(String, HostValue)],
) -> Result<&'a str> {
    let value = single_positional(args)?;
    check_names(kwargs, &[])?;
    value.as_str().ok_or_else(|| {
        BridgeError::UnsupportedValue(format!(
            "expected a string to decode, got {}",
            value.type_name()
        ))
    })
}

fn single_positional(args: &[HostValue]) -> Result<&HostValue> {
    match args {
        [value] => Ok(value),
        _ => Err(BridgeError::Arity { got: args.len() }),
    }
}

fn check_names(kwargs: &[(String, HostValue)], allowed: &[&str]) -> Result<()> {
    for (name, _) in kwargs {
        if !allowed.contains(&name.as_str()) {
            return Err(BridgeError::UnknownArgument { name: name.clone() });
        }
    }
    Ok(())
}

fn indent_width(arg: &HostValue) -> Result<usize> {
    match arg {
        HostValue::Int(n) => usize::try_from(*n).map_err(|_| negative_indent(*n)),
        other => Err(BridgeError::UnsupportedValue(format!(
            "indent must be an int, got {}",
            other.type_name()
        ))),
    }
}

fn negative_indent(n: i64) -> BridgeError {
    BridgeError::UnsupportedValue(format!("indent must be a non-negative integer, got {n}"))
}
