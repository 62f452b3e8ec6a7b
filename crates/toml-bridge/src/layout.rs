//! Indented TOML layout.
//!
//! The `toml` serializer has no indentation setting, so positive indent widths
//! are laid out here: plain key/value pairs of a table come first, then its
//! sub-tables and arrays of tables as `[a.b]` / `[[a.b]]` sections. A section
//! header is indented one unit per enclosing table, and its entries one unit
//! deeper:
//!
//! ```toml
//! name = "app"
//!
//! [server]
//!     port = 8080
//!
//!     [server.tls]
//!         enabled = true
//! ```
//!
//! Leaf values (including inline arrays and inline tables inside mixed
//! arrays) are still rendered by the `toml` crate.

use toml::{Table, Value};

/// Render `table` as a TOML document indented by `indent` spaces per level.
pub fn write_indented(table: &Table, indent: usize) -> String {
    let unit = " ".repeat(indent);
    let mut out = String::new();
    let mut path = Vec::new();
    write_body(&mut out, table, &mut path, &unit);
    out
}

fn write_body(out: &mut String, table: &Table, path: &mut Vec<String>, unit: &str) {
    let pad = unit.repeat(path.len());
    for (key, value) in table {
        if is_section(value) {
            continue;
        }
        out.push_str(&pad);
        write_key(out, key);
        out.push_str(" = ");
        out.push_str(&value.to_string());
        out.push('\n');
    }

    for (key, value) in table {
        match value {
            Value::Table(sub) => {
                path.push(key.clone());
                write_header(out, path, unit, false);
                write_body(out, sub, path, unit);
                path.pop();
            }
            Value::Array(items) if is_table_array(items) => {
                path.push(key.clone());
                for item in items {
                    if let Value::Table(sub) = item {
                        write_header(out, path, unit, true);
                        write_body(out, sub, path, unit);
                    }
                }
                path.pop();
            }
            _ => {}
        }
    }
}

fn write_header(out: &mut String, path: &[String], unit: &str, array: bool) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&unit.repeat(path.len().saturating_sub(1)));
    out.push_str(if array { "[[" } else { "[" });
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        write_key(out, segment);
    }
    out.push_str(if array { "]]" } else { "]" });
    out.push('\n');
}

/// Tables and non-empty arrays made only of tables get their own sections.
fn is_section(value: &Value) -> bool {
    match value {
        Value::Table(_) => true,
        Value::Array(items) => is_table_array(items),
        _ => false,
    }
}

fn is_table_array(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(|item| matches!(item, Value::Table(_)))
}

/// Write a key bare when TOML allows it, otherwise as a basic string.
fn write_key(out: &mut String, key: &str) {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        out.push_str(key);
        return;
    }
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
