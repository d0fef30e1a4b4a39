use crate::json::JsonMessageError;
use crate::value::JsonObject;
use serde::Serialize;
use std::str::FromStr;

type Result<T> = std::result::Result<T, JsonMessageError>;

/// A JSON envelope: one object, or a batch of objects processed
/// position-by-position.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonMessage {
    Single(JsonObject),
    Batch(Vec<JsonObject>),
}

impl JsonMessage {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(element) => Ok(Self::Single(element)),
            serde_json::Value::Array(items) => items.into_iter()
                .map(|item| match item {
                    serde_json::Value::Object(element) => Ok(element),
                    other => Err(JsonMessageError::NotAnObject(json_kind(&other))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Batch),
            other => Err(JsonMessageError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn elements(&self) -> &[JsonObject] {
        match self {
            Self::Single(element) => std::slice::from_ref(element),
            Self::Batch(elements) => elements,
        }
    }

    /// Every object entry (at any depth below the message's root objects)
    /// for which `matcher` returns true, in depth-first order.
    ///
    /// Only objects are walked; arrays are opaque. A matching entry's value
    /// is collected but not searched any further.
    pub fn find_child_nodes<F>(&self, mut matcher: F) -> Vec<&serde_json::Value>
    where
        F: FnMut(&str, &serde_json::Value) -> bool,
    {
        let mut found = vec![];
        for element in self.elements() {
            collect_child_nodes(element, &mut matcher, &mut found);
        }
        found
    }

    /// Replace the value of every object entry keyed `element_name` with
    /// the result of `mapper`. Walks objects only and never descends into
    /// a replaced entry.
    pub fn transform_node<F, E>(&mut self, element_name: &str, mut mapper: F) -> std::result::Result<(), E>
    where
        F: FnMut(serde_json::Value) -> std::result::Result<serde_json::Value, E>,
    {
        match self {
            Self::Single(element) => transform_object(element, element_name, &mut mapper),
            Self::Batch(elements) => elements.iter_mut()
                .try_for_each(|element| transform_object(element, element_name, &mut mapper)),
        }
    }

    /// Fold the arrays found under `element_name` in `other` into this
    /// message.
    ///
    /// A single-object message takes the first matching entry anywhere in
    /// `other` and appends its elements to every matching entry in `self`.
    /// A batch merges position-by-position on each element's direct
    /// `element_name` entry; positions past the end of the shorter batch
    /// are left alone.
    pub fn merge_elements(&mut self, other: &JsonMessage, element_name: &str) -> Result<()> {
        match self {
            Self::Single(_) => {
                let Some(other_value) = other
                    .find_child_nodes(|key, _| key == element_name)
                    .into_iter()
                    .next()
                else {
                    log::debug!("nothing to merge: `{element_name}` not found in other message");
                    return Ok(());
                };
                self.transform_node(element_name, |this_value| {
                    array_union(element_name, Some(this_value), Some(other_value.clone()))
                        .map(|merged| merged.unwrap_or(serde_json::Value::Null))
                })
            },

            Self::Batch(elements) => {
                let Self::Batch(other_elements) = other else {
                    return Err(JsonMessageError::ShapeMismatch);
                };
                for (element, other_element) in elements.iter_mut().zip(other_elements) {
                    let merged = array_union(
                        element_name,
                        element.get(element_name).cloned(),
                        other_element.get(element_name).cloned(),
                    )?;
                    if let Some(merged) = merged {
                        element.insert(element_name.to_string(), merged);
                    }
                }
                Ok(())
            },
        }
    }

    pub fn write_value_as_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| JsonMessageError::SerializeError(e.into()))
    }
}

impl FromStr for JsonMessage {
    type Err = JsonMessageError;

    fn from_str(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| JsonMessageError::ParseError(e.into()))
            .and_then(Self::from_value)
    }
}

/// `a`'s elements followed by `b`'s. An absent side yields the other side
/// unchanged; otherwise both sides must be arrays.
pub fn array_union(
    element_name: &str,
    a: Option<serde_json::Value>,
    b: Option<serde_json::Value>,
) -> Result<Option<serde_json::Value>> {
    match (a, b) {
        (None, other) | (other, None) => Ok(other),
        (Some(serde_json::Value::Array(mut a)), Some(serde_json::Value::Array(b))) => {
            a.extend(b);
            Ok(Some(serde_json::Value::Array(a)))
        },
        _ => Err(JsonMessageError::MergeTypeMismatch {
            element_name: element_name.to_string(),
        }),
    }
}

fn collect_child_nodes<'v, F>(
    object: &'v JsonObject,
    matcher: &mut F,
    found: &mut Vec<&'v serde_json::Value>,
) where
    F: FnMut(&str, &serde_json::Value) -> bool,
{
    for (key, value) in object {
        if matcher(key, value) {
            found.push(value);
        } else if let serde_json::Value::Object(child) = value {
            collect_child_nodes(child, matcher, found);
        }
    }
}

fn transform_object<F, E>(
    object: &mut JsonObject,
    element_name: &str,
    mapper: &mut F,
) -> std::result::Result<(), E>
where
    F: FnMut(serde_json::Value) -> std::result::Result<serde_json::Value, E>,
{
    for (key, value) in object.iter_mut() {
        if key == element_name {
            *value = mapper(std::mem::take(value))?;
        } else if let serde_json::Value::Object(child) = value {
            transform_object(child, element_name, mapper)?;
        }
    }
    Ok(())
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Null => "null",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::Object(_) => "an object",
        serde_json::Value::String(_) => "a string",
    }
}
