mod json_message;
mod json_message_error;
pub mod json_util;

pub use json_message::array_union;
pub use json_message::JsonMessage;
pub use json_message_error::JsonMessageError;

#[cfg(test)]
mod tests;
