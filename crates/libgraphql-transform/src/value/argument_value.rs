use crate::value::ListEntry;
use crate::value::SetValueError;
use crate::value::ValueUpdate;
use indexmap::IndexMap;

pub type BoxedValue<'a> = Box<dyn ArgumentValue<'a> + 'a>;

/// The effective value of an argument, wherever it lives.
///
/// A value is either written inline in the query ([`InlineValue`]), supplied
/// out-of-band through the request's variables object ([`VariableValue`]),
/// or does not exist at all ([`AbsentValue`]). All three answer the same
/// typed accessors and mutate their underlying node in place.
///
/// Typed accessors never coerce between kinds: an int literal is not a
/// string, a string is not an int. The one exception is that an enum literal
/// also answers [`as_str`](ArgumentValue::as_str) with its symbolic name.
///
/// [`InlineValue`]: crate::value::InlineValue
/// [`VariableValue`]: crate::value::VariableValue
/// [`AbsentValue`]: crate::value::AbsentValue
pub trait ArgumentValue<'a>: std::fmt::Debug {
    fn as_bool(&self) -> Option<bool>;

    fn as_double(&self) -> Option<f64>;

    fn as_int(&self) -> Option<i32>;

    /// Each element of a list-shaped value, or `None` if the value is not a
    /// list.
    fn as_list(&mut self) -> Option<Vec<BoxedValue<'_>>>;

    /// Each entry of an object-shaped value keyed by field name, or `None` if
    /// the value is not an object.
    fn as_map(&mut self) -> Option<IndexMap<String, BoxedValue<'_>>>;

    fn as_str(&self) -> Option<&str>;

    /// An independent copy that shares no mutable node with `self`.
    fn deep_copy(&self) -> BoxedValue<'a>;

    /// True if there is no value, or the value is an explicit `null`.
    fn is_null(&self) -> bool;

    /// Replace the underlying node's payload in place. The kind of `update`
    /// must match the kind of the node.
    fn set_value(&mut self, update: ValueUpdate) -> Result<(), SetValueError>;

    fn set_int(&mut self, value: i32) -> Result<(), SetValueError> {
        self.set_value(ValueUpdate::Int(value))
    }

    fn set_list(&mut self, entries: Vec<ListEntry>) -> Result<(), SetValueError> {
        self.set_value(ValueUpdate::List(entries))
    }

    fn set_string(&mut self, value: &str) -> Result<(), SetValueError> {
        self.set_value(ValueUpdate::Text(value.to_string()))
    }
}
