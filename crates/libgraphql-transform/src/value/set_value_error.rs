use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SetValueError {
    #[error("Unable to set {attempted} value on a value of kind `{actual}`")]
    TypeMismatch {
        attempted: &'static str,
        actual: &'static str,
    },

    #[error("Unable to set a value on {0}")]
    UnsupportedMutation(&'static str),
}
