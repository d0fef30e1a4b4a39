mod absent_value;
mod argument_value;
mod inline_value;
mod node_slot;
mod set_value_error;
mod value_update;
mod variable_value;

pub use absent_value::AbsentValue;
pub use argument_value::ArgumentValue;
pub use argument_value::BoxedValue;
pub use inline_value::InlineValue;
pub(crate) use node_slot::NodeSlot;
pub use set_value_error::SetValueError;
pub use value_update::ListEntry;
pub use value_update::ValueUpdate;
pub use variable_value::VariableValue;

/// The JSON object holding a request's out-of-band variables.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests;
