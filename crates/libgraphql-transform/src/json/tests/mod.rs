mod array_union_properties;
mod json_message_tests;
mod json_util_tests;
