//! Error types for TOML encode/decode calls.

use thiserror::Error;

/// Errors that can occur while encoding a host value to TOML or decoding TOML
/// back into a host value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// Wrong number of positional arguments.
    #[error("expected exactly one argument, got {got}")]
    Arity { got: usize },

    /// A keyword argument outside the set the builtin recognizes.
    #[error("unexpected keyword argument '{name}'")]
    UnknownArgument { name: String },

    /// A value (or argument) the converter cannot represent.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// The value reaches itself through one of its containers.
    #[error("cannot encode a self-referential {kind}")]
    CyclicValue { kind: &'static str },

    /// The TOML serializer rejected the document.
    #[error("TOML encode error: {0}")]
    Encode(String),

    /// The input text was not valid TOML.
    #[error("TOML parse error{}: {}", .0.location(), .0.message)]
    Parse(ParseError),
}

/// Diagnostic for malformed TOML input.
///
/// `line` and `column` are 1-based and only present when the parser reported
/// a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ParseError {
    /// Build a diagnostic from a parser message and an optional byte offset into `text`.
    pub fn new(message: impl Into<String>, text: &str, offset: Option<usize>) -> Self {
        let (line, column) = match offset {
            Some(offset) => {
                let (line, column) = line_column(text, offset);
                (Some(line), Some(column))
            }
            None => (None, None),
        };
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// ` at line L, column C` when a position is known, otherwise empty.
    pub fn location(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => format!(" at line {line}, column {column}"),
            _ => String::new(),
        }
    }
}

/// 1-based line and column (in characters) of a byte offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// A failed builtin call, tagged with the qualified builtin name
/// (e.g. `toml.encode`).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{function}: {source}")]
pub struct CallError {
    pub function: &'static str,
    #[source]
    pub source: BridgeError,
}

/// Convenience alias used throughout toml-bridge.
pub type Result<T> = std::result::Result<T, BridgeError>;
