use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum JsonMessageError {
    #[error("Unable to merge `{element_name}`: both sides must be arrays")]
    MergeTypeMismatch {
        element_name: String,
    },

    #[error("Expected a JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Error parsing JSON payload: {0}")]
    ParseError(Arc<serde_json::Error>),

    #[error("Error serializing JSON payload: {0}")]
    SerializeError(Arc<serde_json::Error>),

    #[error("Unable to merge a single-object message into a batch message")]
    ShapeMismatch,
}
