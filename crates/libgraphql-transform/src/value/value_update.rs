/// A replacement payload for [`ArgumentValue::set_value`].
///
/// [`ArgumentValue::set_value`]: crate::value::ArgumentValue::set_value
#[derive(Clone, Debug, PartialEq)]
pub enum ValueUpdate {
    /// Replace the contents of a list-kind value, entry by entry.
    List(Vec<ListEntry>),

    /// Replace the payload of a string- or enum-kind value.
    Text(String),

    /// Replace the payload of an int-kind value.
    Int(i32),
}
impl ValueUpdate {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Text(_) => "string",
            Self::Int(_) => "integer",
        }
    }
}
impl std::convert::From<&str> for ValueUpdate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
impl std::convert::From<String> for ValueUpdate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl std::convert::From<i32> for ValueUpdate {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<Vec<ListEntry>> for ValueUpdate {
    fn from(entries: Vec<ListEntry>) -> Self {
        Self::List(entries)
    }
}

/// One element written by a [`ValueUpdate::List`].
///
/// Inline, a `String` becomes a string literal and an `Enum` becomes an enum
/// literal. In the variables object both are written as JSON strings.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEntry {
    Enum(String),
    String(String),
}
impl ListEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(name) | Self::String(name) => name.as_str(),
        }
    }
}
