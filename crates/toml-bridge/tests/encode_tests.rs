/// Encode-path tests: host value → TOML text.
use toml_bridge::{encode_value, BridgeError, Dict, EncodeOptions, HostValue, List, Struct};

fn encode(value: &HostValue) -> Result<String, BridgeError> {
    encode_value(value, &EncodeOptions::default())
}

fn encode_indented(value: &HostValue, indent: usize) -> String {
    encode_value(value, &EncodeOptions::with_indent(indent)).expect("encode failed")
}

// ============================================================================
// Default layout
// ============================================================================

#[test]
fn encode_flat_scalars() {
    let doc: Dict = [
        ("a", HostValue::Int(1)),
        ("b", HostValue::Bool(true)),
        ("c", HostValue::from("hi")),
    ]
    .into_iter()
    .collect();
    let toml = encode(&doc.into()).unwrap();
    assert_eq!(toml, "a = 1\nb = true\nc = \"hi\"\n");
}

#[test]
fn encode_sorts_keys() {
    // Mappings are order-erased before serialization.
    let doc: Dict = [("zeta", 1), ("alpha", 2)].into_iter().collect();
    let toml = encode(&doc.into()).unwrap();
    assert_eq!(toml, "alpha = 2\nzeta = 1\n");
}

#[test]
fn encode_integer_sequence() {
    let doc = Dict::new();
    doc.insert("a", [1, 2, 3].into_iter().collect::<List>());
    let toml = encode(&doc.into()).unwrap();
    assert_eq!(toml, "a = [1, 2, 3]\n");
}

#[test]
fn encode_empty_dict() {
    let toml = encode(&Dict::new().into()).unwrap();
    assert_eq!(toml, "");
}

#[test]
fn encode_nested_table_has_header() {
    let inner: Dict = [("port", 8080)].into_iter().collect();
    let doc = Dict::new();
    doc.insert("server", inner);
    let toml = encode(&doc.into()).unwrap();
    assert!(toml.contains("[server]"), "missing header in:\n{toml}");
    assert!(toml.contains("port = 8080"), "missing key in:\n{toml}");
    assert!(
        !toml.contains("    port"),
        "default layout must not indent:\n{toml}"
    );
}

#[test]
fn encode_struct_as_table() {
    let fields = [("name", HostValue::from("app")), ("debug", false.into())];
    let st = Struct::new("config", fields);
    let toml = encode(&st.into()).unwrap();
    assert_eq!(toml, "debug = false\nname = \"app\"\n");
}

#[test]
fn encode_float_keeps_fraction() {
    let doc: Dict = [("ratio", 0.5), ("whole", 2.0)].into_iter().collect();
    let toml = encode(&doc.into()).unwrap();
    assert_eq!(toml, "ratio = 0.5\nwhole = 2.0\n");
}

// ============================================================================
// Indented layout
// ============================================================================

#[test]
fn encode_indent_nested_tables() {
    let tls: Dict = [("enabled", true)].into_iter().collect();
    let server = Dict::new();
    server.insert("port", 8080);
    server.insert("tls", tls);
    let doc = Dict::new();
    doc.insert("name", "app");
    doc.insert("server", server);

    let toml = encode_indented(&doc.into(), 4);
    assert_eq!(
        toml,
        "name = \"app\"\n\n[server]\n    port = 8080\n\n    [server.tls]\n        enabled = true\n"
    );
}

#[test]
fn encode_indent_array_of_tables() {
    let items: List = [1, 2]
        .into_iter()
        .map(|n| [("a", n)].into_iter().collect::<Dict>())
        .collect();
    let doc = Dict::new();
    doc.insert("svc", items);

    let toml = encode_indented(&doc.into(), 2);
    assert_eq!(toml, "[[svc]]\n  a = 1\n\n[[svc]]\n  a = 2\n");
}

#[test]
fn encode_indent_flat_document_is_unindented() {
    let doc: Dict = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(encode_indented(&doc.into(), 4), "a = 1\nb = 2\n");
}

#[test]
fn encode_indent_quotes_unusual_keys() {
    let inner: Dict = [("a b", 1)].into_iter().collect();
    let doc = Dict::new();
    doc.insert("x.y", inner);

    let toml = encode_indented(&doc.into(), 2);
    assert_eq!(toml, "[\"x.y\"]\n  \"a b\" = 1\n");
}

#[test]
fn encode_indent_mixed_array_stays_inline() {
    let mixed = List::new();
    mixed.push(1);
    mixed.push([("k", "v")].into_iter().collect::<Dict>());
    let doc = Dict::new();
    doc.insert("m", mixed);

    let toml = encode_indented(&doc.into(), 4);
    assert!(toml.starts_with("m = [1, {"), "unexpected layout:\n{toml}");
    assert!(!toml.contains("[[m]]"));
}

// ============================================================================
// Null handling
// ============================================================================

#[test]
fn encode_omits_null_entries() {
    let doc: Dict = [("a", HostValue::None), ("b", HostValue::Int(1))]
        .into_iter()
        .collect();
    assert_eq!(encode(&doc.into()).unwrap(), "b = 1\n");
}

#[test]
fn encode_rejects_null_in_sequence() {
    let list = List::new();
    list.push(1);
    list.push(HostValue::None);
    let doc = Dict::new();
    doc.insert("a", list);
    let err = encode(&doc.into()).unwrap_err();
    assert!(matches!(err, BridgeError::Encode(_)), "got {err:?}");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn encode_rejects_scalar_root() {
    let err = encode(&HostValue::Int(1)).unwrap_err();
    assert!(
        matches!(err, BridgeError::Encode(ref m) if m.contains("table")),
        "got {err:?}"
    );
}

#[test]
fn encode_rejects_sequence_root() {
    let list: List = [1, 2].into_iter().collect();
    let err = encode(&list.into()).unwrap_err();
    assert!(matches!(err, BridgeError::Encode(_)), "got {err:?}");
}

#[test]
fn encode_rejects_function() {
    let doc = Dict::new();
    doc.insert("f", HostValue::Function("helper".to_string()));
    let err = encode(&doc.into()).unwrap_err();
    assert!(
        matches!(err, BridgeError::UnsupportedValue(ref m) if m.contains("helper")),
        "got {err:?}"
    );
}

#[test]
fn encode_rejects_self_containing_list() {
    let list = List::new();
    list.push(1);
    list.push(list.clone());
    let doc = Dict::new();
    doc.insert("a", list.clone());

    let err = encode(&doc.into()).unwrap_err();
    assert_eq!(err, BridgeError::CyclicValue { kind: "list" });
    list.clear();
}

#[test]
fn encode_rejects_self_containing_dict() {
    let doc = Dict::new();
    doc.insert("me", doc.clone());

    let err = encode(&doc.clone().into()).unwrap_err();
    assert_eq!(err, BridgeError::CyclicValue { kind: "dict" });
    doc.clear();
}

#[test]
fn encode_allows_shared_acyclic_list() {
    let shared: List = [1, 2].into_iter().collect();
    let doc = Dict::new();
    doc.insert("x", shared.clone());
    doc.insert("y", shared);
    assert_eq!(encode(&doc.into()).unwrap(), "x = [1, 2]\ny = [1, 2]\n");
}

#[test]
fn encode_rejects_excessive_nesting() {
    let root = Dict::new();
    let mut cursor = root.clone();
    for _ in 0..200 {
        let next = Dict::new();
        cursor.insert("n", next.clone());
        cursor = next;
    }
    let err = encode(&root.into()).unwrap_err();
    assert!(
        matches!(err, BridgeError::UnsupportedValue(_)),
        "got {err:?}"
    );
}

#[test]
fn encode_rejects_opaque_value() {
    let doc = Dict::new();
    doc.insert("s", HostValue::Opaque("set".to_string()));
    let err = encode(&doc.into()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported value: value of type 'set' cannot be represented in TOML"
    );
}
