use crate::value::node_slot::NodeRef;
use crate::value::ArgumentValue;
use crate::value::BoxedValue;
use crate::value::NodeSlot;
use crate::value::SetValueError;
use crate::value::ValueUpdate;
use indexmap::IndexMap;

/// A value supplied out-of-band through the request's `variables` object.
///
/// The handle points at the JSON node itself, so [`set_value`] replaces the
/// node in place within its parent object or array. A path that ran off the
/// end of the variables object yields a handle to a missing node: it reads
/// like an absent value and refuses every mutation.
///
/// [`set_value`]: ArgumentValue::set_value
#[derive(Debug)]
pub struct VariableValue<'a> {
    node: NodeSlot<'a, serde_json::Value>,
}

impl<'a> VariableValue<'a> {
    pub fn new(node: Option<&'a mut serde_json::Value>) -> Self {
        Self {
            node: NodeSlot::from_option(node),
        }
    }

    /// A read-only handle onto a node of the variables object.
    pub fn shared(node: Option<&'a serde_json::Value>) -> Self {
        Self {
            node: node.map_or(NodeSlot::Missing, NodeSlot::Shared),
        }
    }

    /// The JSON node behind this value.
    pub fn node(&self) -> Option<&serde_json::Value> {
        self.node.get()
    }

    fn child<'s>(node: NodeRef<'s, serde_json::Value>) -> BoxedValue<'s> {
        Box::new(VariableValue { node: node.into_slot() })
    }

    pub(crate) fn list_entries<'s>(
        node: NodeRef<'s, serde_json::Value>,
    ) -> Option<Vec<BoxedValue<'s>>> {
        match node {
            NodeRef::Mut(serde_json::Value::Array(items)) => Some(
                items.iter_mut()
                    .map(|item| Self::child(NodeRef::Mut(item)))
                    .collect(),
            ),
            NodeRef::Shared(serde_json::Value::Array(items)) => Some(
                items.iter()
                    .map(|item| Self::child(NodeRef::Shared(item)))
                    .collect(),
            ),
            _ => None,
        }
    }

    pub(crate) fn map_entries<'s>(
        node: NodeRef<'s, serde_json::Value>,
    ) -> Option<IndexMap<String, BoxedValue<'s>>> {
        match node {
            NodeRef::Mut(serde_json::Value::Object(fields)) => Some(
                fields.iter_mut()
                    .map(|(name, value)| (
                        name.to_owned(),
                        Self::child(NodeRef::Mut(value)),
                    ))
                    .collect(),
            ),
            NodeRef::Shared(serde_json::Value::Object(fields)) => Some(
                fields.iter()
                    .map(|(name, value)| (
                        name.to_owned(),
                        Self::child(NodeRef::Shared(value)),
                    ))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl<'a> ArgumentValue<'a> for VariableValue<'a> {
    fn as_bool(&self) -> Option<bool> {
        self.node.get()?.as_bool()
    }

    fn as_double(&self) -> Option<f64> {
        self.node.get()?.as_f64()
    }

    fn as_int(&self) -> Option<i32> {
        json_int(self.node.get()?)
    }

    fn as_list(&mut self) -> Option<Vec<BoxedValue<'_>>> {
        Self::list_entries(self.node.reborrow()?)
    }

    fn as_map(&mut self) -> Option<IndexMap<String, BoxedValue<'_>>> {
        Self::map_entries(self.node.reborrow()?)
    }

    fn as_str(&self) -> Option<&str> {
        self.node.get()?.as_str()
    }

    fn deep_copy(&self) -> BoxedValue<'a> {
        Box::new(VariableValue {
            node: self.node.deep_copy(),
        })
    }

    fn is_null(&self) -> bool {
        self.node.get().is_none_or(serde_json::Value::is_null)
    }

    fn set_value(&mut self, update: ValueUpdate) -> Result<(), SetValueError> {
        let node = self.node.get_mut()?;
        let attempted = update.kind_name();
        match update {
            ValueUpdate::List(entries) if node.is_array() => {
                *node = serde_json::Value::Array(
                    entries.iter()
                        .map(|entry| serde_json::Value::from(entry.name()))
                        .collect(),
                );
            },

            ValueUpdate::Text(text) if node.is_string() =>
                *node = serde_json::Value::String(text),

            ValueUpdate::Int(int) if json_int(node).is_some() =>
                *node = serde_json::Value::from(int),

            _ => return Err(SetValueError::TypeMismatch {
                attempted,
                actual: json_value_kind(node),
            }),
        }
        Ok(())
    }
}

fn json_int(node: &serde_json::Value) -> Option<i32> {
    node.as_i64().and_then(|n| i32::try_from(n).ok())
}

pub(crate) fn json_value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Null => "null",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::Object(_) => "object",
        serde_json::Value::String(_) => "string",
    }
}
