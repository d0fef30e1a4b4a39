//! Helpers over raw [`serde_json::Value`] trees.

use crate::value::JsonObject;

/// Remove the field at `path` from `node`, if it exists.
///
/// Arrays apply the removal to each of their elements. Every segment but
/// the last is located with a deep search, so `["trip", "id"]` also
/// reaches a `trip` nested below unrelated objects.
pub fn remove_field(node: &mut serde_json::Value, path: &[&str]) {
    match node {
        serde_json::Value::Array(items) => {
            for item in items {
                remove_field(item, path);
            }
        },

        serde_json::Value::Object(object) => match path {
            [] => (),
            [field_name] => {
                object.shift_remove(*field_name);
            },
            [field_name, rest @ ..] => {
                if let Some(child) = find_value_mut(object, field_name) {
                    remove_field(child, rest);
                }
            },
        },

        _ => (),
    }
}

/// The first value keyed `field_name` at any depth, depth-first in entry
/// order. An entry's own key is checked before its descendants.
pub fn find_value<'v>(object: &'v JsonObject, field_name: &str) -> Option<&'v serde_json::Value> {
    for (key, value) in object {
        if key == field_name {
            return Some(value);
        }
        if let Some(found) = find_descendant(value, field_name) {
            return Some(found);
        }
    }
    None
}

fn find_descendant<'v>(node: &'v serde_json::Value, field_name: &str) -> Option<&'v serde_json::Value> {
    match node {
        serde_json::Value::Object(object) => find_value(object, field_name),
        serde_json::Value::Array(items) => items.iter()
            .find_map(|item| find_descendant(item, field_name)),
        _ => None,
    }
}

fn find_value_mut<'v>(
    object: &'v mut JsonObject,
    field_name: &str,
) -> Option<&'v mut serde_json::Value> {
    for (key, value) in object.iter_mut() {
        if key == field_name {
            return Some(value);
        }
        if let Some(found) = find_descendant_mut(value, field_name) {
            return Some(found);
        }
    }
    None
}

fn find_descendant_mut<'v>(
    node: &'v mut serde_json::Value,
    field_name: &str,
) -> Option<&'v mut serde_json::Value> {
    match node {
        serde_json::Value::Object(object) => find_value_mut(object, field_name),
        serde_json::Value::Array(items) => items.iter_mut()
            .find_map(|item| find_descendant_mut(item, field_name)),
        _ => None,
    }
}
