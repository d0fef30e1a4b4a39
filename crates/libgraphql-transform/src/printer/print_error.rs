use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PrintError {
    #[error("Unable to print unsupported operation kind: `{0}`")]
    UnsupportedOperation(&'static str),
}
