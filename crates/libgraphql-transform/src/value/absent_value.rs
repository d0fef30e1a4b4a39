use crate::value::ArgumentValue;
use crate::value::BoxedValue;
use crate::value::SetValueError;
use crate::value::ValueUpdate;
use indexmap::IndexMap;

/// The value of an argument, field or variable path that does not exist.
///
/// Every accessor answers `None`, [`is_null`](ArgumentValue::is_null) answers
/// `true`, and every mutation fails with
/// [`SetValueError::UnsupportedMutation`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AbsentValue;

impl<'a> ArgumentValue<'a> for AbsentValue {
    fn as_bool(&self) -> Option<bool> {
        None
    }

    fn as_double(&self) -> Option<f64> {
        None
    }

    fn as_int(&self) -> Option<i32> {
        None
    }

    fn as_list(&mut self) -> Option<Vec<BoxedValue<'_>>> {
        None
    }

    fn as_map(&mut self) -> Option<IndexMap<String, BoxedValue<'_>>> {
        None
    }

    fn as_str(&self) -> Option<&str> {
        None
    }

    fn deep_copy(&self) -> BoxedValue<'a> {
        Box::new(AbsentValue)
    }

    fn is_null(&self) -> bool {
        true
    }

    fn set_value(&mut self, _update: ValueUpdate) -> Result<(), SetValueError> {
        Err(SetValueError::UnsupportedMutation("an absent value"))
    }
}
