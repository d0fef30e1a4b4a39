use crate::ast;
use crate::path_resolver::resolve_argument_value;
use crate::path_resolver::resolve_variable_value;
use crate::value::JsonObject;
use serde_json::json;

fn value(literal: &str) -> ast::Value {
    ast::parse_value(literal).expect("invalid value literal")
}

fn variables(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(object) => object,
        _ => panic!("variables must be an object"),
    }
}

#[test]
fn empty_path_wraps_the_node_itself() {
    let mut node = value("42");

    assert_eq!(resolve_argument_value(&mut node, &[], None).as_int(), Some(42));
}

#[test]
fn walks_object_literal_fields() {
    let mut node = value("{coordinates: {latitude: 59.9, longitude: 10.7}}");

    let resolved = resolve_argument_value(&mut node, &["coordinates", "longitude"], None);

    assert_eq!(resolved.as_double(), Some(10.7));
}

#[test]
fn missing_field_or_scalar_descent_is_absent() {
    let mut node = value("{coordinates: {latitude: 59.9}}");
    assert!(resolve_argument_value(&mut node, &["coordinates", "longitude"], None).is_null());
    assert!(resolve_argument_value(&mut node, &["nope", "deeper"], None).is_null());

    let mut scalar = value("5");
    assert!(resolve_argument_value(&mut scalar, &["x"], None).is_null());
}

#[test]
fn switches_to_variables_at_a_reference() {
    let mut node = value("{from: $from}");
    let mut vars = variables(json!({"from": {"place": {"id": "NSR:1"}}}));

    let resolved = resolve_argument_value(&mut node, &["from", "place", "id"], Some(&mut vars));

    assert_eq!(resolved.as_str(), Some("NSR:1"));
}

#[test]
fn terminal_reference_resolves_the_whole_variable() {
    let mut node = value("$count");
    let mut vars = variables(json!({"count": 7}));

    assert_eq!(resolve_argument_value(&mut node, &[], Some(&mut vars)).as_int(), Some(7));
}

#[test]
fn reference_without_variables_is_absent() {
    let mut node = value("{from: $from}");

    assert!(resolve_argument_value(&mut node, &["from", "name"], None).is_null());
}

#[test]
fn resolved_variable_can_be_replaced_in_place() {
    let mut node = value("$when");
    let mut vars = variables(json!({"when": "08:00"}));

    let result = resolve_argument_value(&mut node, &[], Some(&mut vars)).set_string("09:30");

    assert_eq!(result, Ok(()));
    assert_eq!(vars.get("when"), Some(&json!("09:30")));
}

#[test]
fn variable_walk_stops_at_first_missing_segment() {
    let mut vars = variables(json!({"to": {"name": "Bergen"}}));

    assert_eq!(resolve_variable_value(Some(&mut vars), "to", &["name"]).as_str(), Some("Bergen"));
    assert!(resolve_variable_value(Some(&mut vars), "to", &["nope", "name"]).is_null());
    assert!(resolve_variable_value(Some(&mut vars), "to", &["name", "deeper"]).is_null());
    assert!(resolve_variable_value(None, "to", &[]).is_null());
}
