use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    classifier::ProjectClassifier,
    config::NormalizeOptions,
    frames::FrameRecord,
    langs::{CapturedError, ErrorRef},
    types::ExceptionRecord,
};

/// Introspection over a managed-runtime exception: a typed error with a message, a
/// capturable source-level call stack, and an optional inner exception.
pub trait NativeException {
    fn type_name(&self) -> &str;

    fn message(&self) -> Option<Cow<'_, str>>;

    /// Frames in call-stack order, or `None` if the stack couldn't be captured.
    fn stack_frames(&self) -> Option<Cow<'_, [NativeFrame]>>;

    fn inner_exception(&self) -> Option<ErrorRef<'_>>;
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NativeFrame {
    pub declaring_type: Option<String>, // Fully qualified name of the type declaring the method
    pub method: Option<String>,         // The name of the method
    pub file: Option<String>,           // The source file, if debug info was available
    #[serde(default)]
    pub line: u32, // 0 when unknown
    pub column: Option<u32>,
}

impl NativeFrame {
    pub fn to_record(&self, classifier: &ProjectClassifier, unknown_file: &str) -> FrameRecord {
        let in_project = self
            .declaring_type
            .as_deref()
            .is_some_and(|t| classifier.is_in_project(t));

        FrameRecord::new(
            self.declaring_type.as_deref(),
            self.method.as_deref(),
            self.file.as_deref(),
            self.line,
            self.column,
            in_project,
            unknown_file,
        )
    }
}

pub fn normalize(
    error: &dyn NativeException,
    classifier: &ProjectClassifier,
    options: &NormalizeOptions,
) -> ExceptionRecord {
    let frames: Vec<FrameRecord> = error
        .stack_frames()
        .map(|frames| {
            frames
                .iter()
                .map(|f| f.to_record(classifier, &options.unknown_file))
                .collect()
        })
        .unwrap_or_default();

    ExceptionRecord {
        name: error.type_name().to_string(),
        message: error.message().map(Cow::into_owned),
        frames,
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CapturedException {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub message: Option<String>,
    // Absent when the runtime couldn't capture a stack for this exception
    #[serde(default)]
    pub stack: Option<Vec<NativeFrame>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner: Option<Box<CapturedError>>,
}

impl NativeException for CapturedException {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        self.message.as_deref().map(Cow::Borrowed)
    }

    fn stack_frames(&self) -> Option<Cow<'_, [NativeFrame]>> {
        self.stack.as_deref().map(Cow::Borrowed)
    }

    fn inner_exception(&self) -> Option<ErrorRef<'_>> {
        self.inner.as_deref().map(CapturedError::as_error_ref)
    }
}
