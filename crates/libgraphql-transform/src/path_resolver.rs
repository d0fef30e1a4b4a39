//! Resolve the effective value of an argument through an attribute path,
//! following variable references out of the query and into the variables
//! object.

use crate::ast;
use crate::value::AbsentValue;
use crate::value::BoxedValue;
use crate::value::InlineValue;
use crate::value::JsonObject;
use crate::value::VariableValue;

/// Walk `path` into `value`, one object field per segment.
///
/// As soon as a variable reference is met, the inline walk is abandoned and
/// the rest of the path (prefixed with the variable's name) is resolved
/// against `variables` instead; inline resolution never resumes after that.
/// A segment that names a missing field, or that would have to descend into
/// a scalar or list, resolves to an [`AbsentValue`].
pub fn resolve_argument_value<'a>(
    value: &'a mut ast::Value,
    path: &[&str],
    variables: Option<&'a mut JsonObject>,
) -> BoxedValue<'a> {
    let mut current = Some(value);
    for (idx, segment) in path.iter().enumerate() {
        current = match current {
            Some(ast::Value::Variable(var_name)) => {
                let var_name = var_name.clone();
                return resolve_variable_value(
                    variables,
                    &var_name,
                    &path[idx..],
                );
            },
            Some(ast::Value::Object(fields)) => fields.get_mut(*segment),
            _ => None,
        };
    }

    match current {
        Some(ast::Value::Variable(var_name)) => {
            let var_name = var_name.clone();
            resolve_variable_value(variables, &var_name, &[])
        },
        Some(node) => Box::new(InlineValue::new(node, variables.map(|vars| &*vars))),
        None => Box::new(AbsentValue),
    }
}

/// Walk `variables[var_name]` and then each segment of `path` through nested
/// JSON objects.
///
/// The first missing segment ends the walk and yields a [`VariableValue`]
/// over a missing node.
pub fn resolve_variable_value<'a>(
    variables: Option<&'a mut JsonObject>,
    var_name: &str,
    path: &[&str],
) -> BoxedValue<'a> {
    let mut current = variables.and_then(|vars| vars.get_mut(var_name));
    for segment in path {
        current = current
            .and_then(serde_json::Value::as_object_mut)
            .and_then(|fields| fields.get_mut(*segment));
    }
    Box::new(VariableValue::new(current))
}
