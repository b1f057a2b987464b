use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    classifier::ProjectClassifier,
    config::NormalizeOptions,
    frames::FrameRecord,
    langs::{CapturedError, ErrorRef},
    types::ExceptionRecord,
};

/// Introspection over a virtual-machine throwable, which carries its own list of stack
/// trace elements rather than a capturable source-level stack.
pub trait Throwable {
    fn type_name(&self) -> &str;

    fn localized_message(&self) -> Option<Cow<'_, str>>;

    /// Elements in call-stack order, or `None` if the VM didn't record a trace.
    fn stack_trace(&self) -> Option<Cow<'_, [StackTraceElement]>>;

    fn cause(&self) -> Option<ErrorRef<'_>>;
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StackTraceElement {
    pub class_name: String,        // The fully qualified, java-import style class name
    pub method_name: String,       // The name of the method
    pub file_name: Option<String>, // The source file name, e.g. "Foo.java"
    // The VM reports -1 for an unknown line, and -2 for native methods
    #[serde(default)]
    pub line_number: i32,
}

impl StackTraceElement {
    pub fn to_record(&self, classifier: &ProjectClassifier, unknown_file: &str) -> FrameRecord {
        FrameRecord::new(
            Some(self.class_name.as_str()),
            Some(self.method_name.as_str()),
            self.file_name.as_deref(),
            u32::try_from(self.line_number).unwrap_or(0),
            None,
            classifier.is_in_project(&self.class_name),
            unknown_file,
        )
    }
}

pub fn normalize(
    error: &dyn Throwable,
    classifier: &ProjectClassifier,
    options: &NormalizeOptions,
) -> ExceptionRecord {
    let frames: Vec<FrameRecord> = error
        .stack_trace()
        .map(|elements| {
            elements
                .iter()
                .map(|e| e.to_record(classifier, &options.unknown_file))
                .collect()
        })
        .unwrap_or_default();

    ExceptionRecord {
        name: error.type_name().to_string(),
        message: error.localized_message().map(Cow::into_owned),
        frames,
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CapturedThrowable {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub localized_message: Option<String>,
    #[serde(default)]
    pub stack_trace: Option<Vec<StackTraceElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<CapturedError>>,
}

impl Throwable for CapturedThrowable {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn localized_message(&self) -> Option<Cow<'_, str>> {
        self.localized_message.as_deref().map(Cow::Borrowed)
    }

    fn stack_trace(&self) -> Option<Cow<'_, [StackTraceElement]>> {
        self.stack_trace.as_deref().map(Cow::Borrowed)
    }

    fn cause(&self) -> Option<ErrorRef<'_>> {
        self.cause.as_deref().map(CapturedError::as_error_ref)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::classifier::ProjectNamespaces;

    fn foo_element() -> StackTraceElement {
        StackTraceElement {
            class_name: "com.example.Foo".to_string(),
            method_name: "bar".to_string(),
            file_name: Some("Foo.java".to_string()),
            line_number: 10,
        }
    }

    #[test]
    fn test_throwable_normalization() {
        let classifier = ProjectClassifier::new(Some(ProjectNamespaces::new(["com.example"])));
        let throwable = CapturedThrowable {
            type_name: "IllegalStateException".to_string(),
            localized_message: Some("bad state".to_string()),
            stack_trace: Some(vec![
                foo_element(),
                StackTraceElement {
                    class_name: "android.os.Handler".to_string(),
                    method_name: "dispatchMessage".to_string(),
                    file_name: None,
                    line_number: 106,
                },
            ]),
            cause: None,
        };

        let record = normalize(&throwable, &classifier, &NormalizeOptions::default());

        assert_eq!(record.name, "IllegalStateException");
        assert_eq!(record.message.as_deref(), Some("bad state"));
        assert_eq!(
            record.frames,
            vec![
                FrameRecord {
                    location: "com.example.Foo:bar".to_string(),
                    file: "Foo.java".to_string(),
                    line: 10,
                    column: None,
                    in_project: true,
                },
                FrameRecord {
                    location: "android.os.Handler:dispatchMessage".to_string(),
                    file: "Unknown".to_string(),
                    line: 106,
                    column: None,
                    in_project: false,
                },
            ]
        );
    }

    #[test]
    fn test_negative_line_numbers_are_unknown() {
        let classifier = ProjectClassifier::default();
        for line_number in [-1, -2] {
            let element = StackTraceElement {
                line_number,
                ..foo_element()
            };
            assert_eq!(element.to_record(&classifier, "Unknown").line, 0);
        }
    }

    #[test]
    fn test_missing_trace_gives_empty_frames() {
        let throwable = CapturedThrowable {
            type_name: "OutOfMemoryError".to_string(),
            localized_message: None,
            stack_trace: None,
            cause: None,
        };

        let record = normalize(
            &throwable,
            &ProjectClassifier::default(),
            &NormalizeOptions::default(),
        );

        assert!(record.frames.is_empty());
        assert_eq!(record.message, None);
    }
}
