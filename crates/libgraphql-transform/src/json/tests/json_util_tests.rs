use crate::json::json_util;
use serde_json::json;

#[test]
fn removes_top_level_field() {
    let mut node = json!({"a": 1, "b": 2, "c": 3});

    json_util::remove_field(&mut node, &["b"]);

    assert_eq!(serde_json::to_string(&node).ok(), Some(r#"{"a":1,"c":3}"#.to_string()));
}

#[test]
fn removes_nested_field_found_by_deep_search() {
    let mut node = json!({
        "data": {"plan": {"trip": {"id": 1, "legs": []}}},
    });

    json_util::remove_field(&mut node, &["trip", "legs"]);

    assert_eq!(node, json!({"data": {"plan": {"trip": {"id": 1}}}}));
}

#[test]
fn removes_from_every_array_element() {
    let mut node = json!([
        {"trip": {"id": 1, "legs": []}},
        {"trip": {"id": 2, "legs": []}},
        {"other": true},
    ]);

    json_util::remove_field(&mut node, &["trip", "legs"]);

    assert_eq!(node, json!([{"trip": {"id": 1}}, {"trip": {"id": 2}}, {"other": true}]));
}

#[test]
fn deep_search_takes_first_match_in_entry_order() {
    let mut node = json!({
        "first": {"trip": {"id": 1}},
        "trip": {"id": 2},
    });

    json_util::remove_field(&mut node, &["trip", "id"]);

    assert_eq!(node, json!({"first": {"trip": {}}, "trip": {"id": 2}}));
}

#[test]
fn missing_paths_are_ignored() {
    let original = json!({"a": {"b": 1}, "n": 5});
    let mut node = original.clone();

    json_util::remove_field(&mut node, &["x", "y"]);
    json_util::remove_field(&mut node, &["n", "y"]);
    json_util::remove_field(&mut node, &[]);

    assert_eq!(node, original);
}

#[test]
fn find_value_searches_arrays() {
    let node = json!({"list": [{"x": 1}, {"target": "found"}], "target": "late"});
    let serde_json::Value::Object(object) = node else {
        panic!("expected an object");
    };

    assert_eq!(json_util::find_value(&object, "target"), Some(&json!("found")));
}
