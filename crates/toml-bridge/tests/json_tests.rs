use serde_json::json;
use toml_bridge::{BridgeError, HostValue, List, Struct};

#[test]
fn from_json_keeps_object_order() {
    let value = HostValue::from_json(&json!({"z": 1, "a": 2}));
    assert_eq!(value.as_dict().unwrap().keys(), vec!["z", "a"]);
}

#[test]
fn from_json_number_kinds() {
    let value = HostValue::from_json(&json!([1, -2, 1.5, 18446744073709551615u64]));
    let list = value.as_list().unwrap();
    assert_eq!(list.get(0), Some(HostValue::Int(1)));
    assert_eq!(list.get(1), Some(HostValue::Int(-2)));
    assert_eq!(list.get(2), Some(HostValue::Float(1.5)));
    assert_eq!(
        list.get(3),
        Some(HostValue::Float(18446744073709551615u64 as f64))
    );
}

#[test]
fn to_json_roundtrips_plain_data() {
    let source = json!({"s": "x", "n": null, "b": true, "l": [1, {"k": 2.5}]});
    assert_eq!(HostValue::from_json(&source).to_json().unwrap(), source);
}

#[test]
fn to_json_nulls_unrepresentable_values() {
    assert_eq!(HostValue::Float(f64::NAN).to_json().unwrap(), json!(null));
    let function = HostValue::Function("f".to_string());
    assert_eq!(function.to_json().unwrap(), json!(null));
}

#[test]
fn to_json_struct_as_object() {
    let st = Struct::new("point", [("x", 1), ("y", 2)]);
    assert_eq!(
        HostValue::Struct(st).to_json().unwrap(),
        json!({"x": 1, "y": 2})
    );
}

#[test]
fn to_json_rejects_self_referential_list() {
    let list = List::new();
    list.push(HostValue::List(list.clone()));
    let err = HostValue::List(list.clone()).to_json().unwrap_err();
    assert_eq!(err, BridgeError::CyclicValue { kind: "list" });
    list.clear();
}

#[test]
fn to_json_shared_container_is_not_a_cycle() {
    let shared = List::new();
    shared.push(1);
    let outer: List = [HostValue::List(shared.clone()), HostValue::List(shared)]
        .into_iter()
        .collect();
    assert_eq!(HostValue::List(outer).to_json().unwrap(), json!([[1], [1]]));
}

#[test]
fn to_json_rejects_excessive_nesting() {
    let mut value = HostValue::Int(0);
    for _ in 0..200 {
        value = HostValue::List([value].into_iter().collect());
    }
    let err = value.to_json().unwrap_err();
    assert!(
        matches!(err, BridgeError::UnsupportedValue(_)),
        "got {err:?}"
    );
}
