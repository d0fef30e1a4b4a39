use crate::ast;
use crate::json::JsonMessageError;
use crate::printer::PrintError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum GraphQLRequestError {
    #[error("Error reading or writing the request envelope: {0}")]
    Envelope(JsonMessageError),

    #[error("Invalid value literal: {0}")]
    InvalidValueLiteral(ast::ValueLiteralError),

    #[error("Error parsing the `query` text of the request: {0}")]
    MalformedInput(Arc<ast::ParseError>),

    #[error("Error printing the request's query document: {0}")]
    Print(PrintError),

    #[error("Unable to set argument `{argument_name}` on unknown field `{field_name}`")]
    UnknownField {
        field_name: String,
        argument_name: String,
    },
}
impl std::convert::From<JsonMessageError> for GraphQLRequestError {
    fn from(err: JsonMessageError) -> GraphQLRequestError {
        GraphQLRequestError::Envelope(err)
    }
}
impl std::convert::From<ast::ValueLiteralError> for GraphQLRequestError {
    fn from(err: ast::ValueLiteralError) -> GraphQLRequestError {
        GraphQLRequestError::InvalidValueLiteral(err)
    }
}
impl std::convert::From<ast::ParseError> for GraphQLRequestError {
    fn from(err: ast::ParseError) -> GraphQLRequestError {
        GraphQLRequestError::MalformedInput(Arc::new(err))
    }
}
impl std::convert::From<PrintError> for GraphQLRequestError {
    fn from(err: PrintError) -> GraphQLRequestError {
        GraphQLRequestError::Print(err)
    }
}
