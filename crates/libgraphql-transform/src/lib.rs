pub mod ast;
mod graphql_request;
mod graphql_request_error;
pub mod json;
pub mod path_resolver;
pub mod printer;
pub mod selection;
pub mod value;
pub mod variable_references;

pub use graphql_request::GraphQLRequest;
pub use graphql_request_error::GraphQLRequestError;
pub use json::JsonMessage;
pub use printer::GraphQLPrinter;
pub use printer::PrinterOptions;
pub use value::ArgumentValue;

#[cfg(test)]
mod tests;
