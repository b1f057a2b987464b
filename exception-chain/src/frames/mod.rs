use serde::{Deserialize, Serialize};

// We consume two differently shaped kinds of stack frame, which we transform into this
// single, unified representation.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct FrameRecord {
    pub location: String, // "<declaring type or class>:<method>"
    pub file: String,     // The file the frame is in, or "Unknown"
    pub line: u32,        // 0 when the runtime doesn't know
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>, // Only source-level frames carry a column
    pub in_project: bool, // Is this the reporting application's own code?
}

impl FrameRecord {
    pub fn new(
        owner: Option<&str>,
        method: Option<&str>,
        file: Option<&str>,
        line: u32,
        column: Option<u32>,
        in_project: bool,
        unknown_file: &str,
    ) -> Self {
        Self {
            location: format_location(owner, method),
            file: file.unwrap_or(unknown_file).to_string(),
            line,
            column,
            in_project,
        }
    }
}

/// Joins a type (or class) name and a method name into a frame location.
///
/// When only one half is known, that half is the whole location, so a frame with any
/// identity at all never ends up with an empty location.
pub fn format_location(owner: Option<&str>, method: Option<&str>) -> String {
    match (owner, method) {
        (Some(owner), Some(method)) => format!("{owner}:{method}"),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => String::new(),
    }
}
