use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PrinterOptions {
    /// Number of spaces per indentation step.
    pub indent_width: usize,
    pub style: PrintStyle,
}
impl std::default::Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            style: PrintStyle::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintStyle {
    /// Indent each nesting level by one more step, print empty list and
    /// object literals as `[]`/`{}` and escape string literals. Output
    /// re-parses to the same document.
    #[default]
    Canonical,

    /// Byte-for-byte the output existing consumers were built against.
    /// Every nested line is indented by exactly one step no matter how deep
    /// it sits. Empty list and object literals print nothing, and string
    /// literals are quoted without escaping.
    Legacy,
}
