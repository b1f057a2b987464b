use serde::{Deserialize, Serialize};

use crate::frames::FrameRecord;

/// One link of a causal chain, in the shape handed on for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ExceptionRecord {
    pub name: String,
    pub message: Option<String>,
    #[serde(default)]
    pub frames: Vec<FrameRecord>,
}

impl ExceptionRecord {
    pub fn first_in_project_frame(&self) -> Option<&FrameRecord> {
        self.frames.iter().find(|f| f.in_project)
    }
}
