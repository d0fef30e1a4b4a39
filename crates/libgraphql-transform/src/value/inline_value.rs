use crate::ast;
use crate::value::node_slot::NodeRef;
use crate::value::ArgumentValue;
use crate::value::BoxedValue;
use crate::value::JsonObject;
use crate::value::ListEntry;
use crate::value::NodeSlot;
use crate::value::SetValueError;
use crate::value::ValueUpdate;
use crate::value::VariableValue;
use indexmap::IndexMap;

/// A value written directly in the query document.
///
/// When paired with the request's variables object, an inline variable
/// reference can still be decomposed with [`as_map`](ArgumentValue::as_map).
/// Values reached that way are read-only: they belong to the variables
/// object, not to this handle.
#[derive(Debug)]
pub struct InlineValue<'a> {
    node: NodeSlot<'a, ast::Value>,
    variables: Option<&'a JsonObject>,
}

impl<'a> InlineValue<'a> {
    pub fn new(
        node: &'a mut ast::Value,
        variables: Option<&'a JsonObject>,
    ) -> Self {
        Self {
            node: NodeSlot::Borrowed(node),
            variables,
        }
    }

    /// An inline value that owns its node outright.
    pub fn owned(node: ast::Value, variables: Option<&'a JsonObject>) -> Self {
        Self {
            node: NodeSlot::Owned(Box::new(node)),
            variables,
        }
    }

    pub(crate) fn from_slot(
        node: NodeSlot<'a, ast::Value>,
        variables: Option<&'a JsonObject>,
    ) -> Self {
        Self { node, variables }
    }

    /// The AST node behind this value.
    pub fn node(&self) -> Option<&ast::Value> {
        self.node.get()
    }

    fn variable_map_entries<'s>(
        variables: Option<&'s JsonObject>,
        var_name: &str,
    ) -> Option<IndexMap<String, BoxedValue<'s>>> {
        let var_node = variables?.get(var_name)?;
        VariableValue::map_entries(NodeRef::Shared(var_node))
    }

    fn child<'s>(
        node: NodeRef<'s, ast::Value>,
        variables: Option<&'s JsonObject>,
    ) -> BoxedValue<'s> {
        Box::new(InlineValue::from_slot(node.into_slot(), variables))
    }
}

impl<'a> ArgumentValue<'a> for InlineValue<'a> {
    fn as_bool(&self) -> Option<bool> {
        match self.node.get()? {
            ast::Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    fn as_double(&self) -> Option<f64> {
        match self.node.get()? {
            ast::Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    fn as_int(&self) -> Option<i32> {
        match self.node.get()? {
            ast::Value::Int(number) =>
                number.as_i64().and_then(|n| i32::try_from(n).ok()),
            _ => None,
        }
    }

    fn as_list(&mut self) -> Option<Vec<BoxedValue<'_>>> {
        let variables = self.variables;
        match self.node.reborrow()? {
            NodeRef::Mut(ast::Value::List(items)) => Some(
                items.iter_mut()
                    .map(|item| Self::child(NodeRef::Mut(item), variables))
                    .collect(),
            ),
            NodeRef::Shared(ast::Value::List(items)) => Some(
                items.iter()
                    .map(|item| Self::child(NodeRef::Shared(item), variables))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn as_map(&mut self) -> Option<IndexMap<String, BoxedValue<'_>>> {
        let variables = self.variables;
        match self.node.reborrow()? {
            NodeRef::Mut(ast::Value::Variable(var_name)) =>
                Self::variable_map_entries(variables, var_name),
            NodeRef::Shared(ast::Value::Variable(var_name)) =>
                Self::variable_map_entries(variables, var_name),
            NodeRef::Mut(ast::Value::Object(fields)) => Some(
                fields.iter_mut()
                    .map(|(name, value)| (
                        name.to_string(),
                        Self::child(NodeRef::Mut(value), variables),
                    ))
                    .collect(),
            ),
            NodeRef::Shared(ast::Value::Object(fields)) => Some(
                fields.iter()
                    .map(|(name, value)| (
                        name.to_string(),
                        Self::child(NodeRef::Shared(value), variables),
                    ))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self.node.get()? {
            ast::Value::String(value) => Some(value.as_str()),
            ast::Value::Enum(name) => Some(name.as_str()),
            _ => None,
        }
    }

    fn deep_copy(&self) -> BoxedValue<'a> {
        Box::new(InlineValue {
            node: self.node.deep_copy(),
            variables: self.variables,
        })
    }

    fn is_null(&self) -> bool {
        matches!(self.node.get(), None | Some(ast::Value::Null))
    }

    fn set_value(&mut self, update: ValueUpdate) -> Result<(), SetValueError> {
        let node = self.node.get_mut()?;
        let attempted = update.kind_name();
        match (node, update) {
            (ast::Value::List(items), ValueUpdate::List(entries)) => {
                *items = entries.into_iter()
                    .map(|entry| match entry {
                        ListEntry::Enum(name) => ast::Value::Enum(name),
                        ListEntry::String(value) => ast::Value::String(value),
                    })
                    .collect();
            },

            (ast::Value::Enum(name), ValueUpdate::Text(text)) => *name = text,

            (ast::Value::String(value), ValueUpdate::Text(text)) => *value = text,

            (ast::Value::Int(number), ValueUpdate::Int(int)) =>
                *number = ast::Number::from(int),

            (node, _) => return Err(SetValueError::TypeMismatch {
                attempted,
                actual: ast_value_kind(node),
            }),
        }
        Ok(())
    }
}

pub(crate) fn ast_value_kind(value: &ast::Value) -> &'static str {
    match value {
        ast::Value::Boolean(_) => "boolean",
        ast::Value::Enum(_) => "enum",
        ast::Value::Float(_) => "float",
        ast::Value::Int(_) => "int",
        ast::Value::List(_) => "list",
        ast::Value::Null => "null",
        ast::Value::Object(_) => "object",
        ast::Value::String(_) => "string",
        ast::Value::Variable(_) => "variable",
    }
}
