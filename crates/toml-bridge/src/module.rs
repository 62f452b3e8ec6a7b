//! The `toml` module as seen by scripts: `toml.encode` and `toml.decode`.

use crate::args::{validate_decode, validate_encode};
use crate::error::{BridgeError, CallError, Result};
use crate::value::HostValue;
use crate::{decode_str, encode_value};

/// Signature shared by every builtin in the module.
pub type BuiltinFn = fn(&[HostValue], &[(String, HostValue)]) -> Result<HostValue>;

/// A named, callable member of a script module.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Qualified name, e.g. `toml.encode`.
    pub name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    /// Invoke the builtin, tagging any failure with its qualified name.
    pub fn call(
        &self,
        args: &[HostValue],
        kwargs: &[(String, HostValue)],
    ) -> std::result::Result<HostValue, CallError> {
        (self.func)(args, kwargs).map_err(|source| CallError {
            function: self.name,
            source,
        })
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<built-in function {}>", self.name)
    }
}

static MEMBERS: [(&str, Builtin); 2] = [
    (
        "encode",
        Builtin {
            name: "toml.encode",
            func: encode,
        },
    ),
    (
        "decode",
        Builtin {
            name: "toml.decode",
            func: decode,
        },
    ),
];

/// Registration record for the `toml` namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlModule;

impl TomlModule {
    pub const NAME: &'static str = "toml";

    /// Member names, in registration order.
    pub fn members(&self) -> impl Iterator<Item = &'static str> {
        MEMBERS.iter().map(|(name, _)| *name)
    }

    /// Look up a member by its unqualified name.
    pub fn member(&self, name: &str) -> Option<Builtin> {
        MEMBERS
            .iter()
            .find(|(member, _)| *member == name)
            .map(|(_, builtin)| *builtin)
    }

    /// Call `toml.<member>(*args, **kwargs)`.
    pub fn call(
        &self,
        member: &str,
        args: &[HostValue],
        kwargs: &[(String, HostValue)],
    ) -> std::result::Result<HostValue, CallError> {
        match self.member(member) {
            Some(builtin) => builtin.call(args, kwargs),
            None => {
                let message = format!("module has no member '{member}'");
                Err(CallError {
                    function: Self::NAME,
                    source: BridgeError::UnsupportedValue(message),
                })
            }
        }
    }
}

/// `toml.encode(value, indent=0)`: host value to TOML text.
pub fn encode(args: &[HostValue], kwargs: &[(String, HostValue)]) -> Result<HostValue> {
    let call = validate_encode(args, kwargs)?;
    encode_value(call.value, &call.options).map(HostValue::String)
}

/// `toml.decode(text)`: TOML text to host value.
pub fn decode(args: &[HostValue], kwargs: &[(String, HostValue)]) -> Result<HostValue> {
    let text = validate_decode(args, kwargs)?;
    decode_str(text)
}
