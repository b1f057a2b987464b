use serde::{Deserialize, Serialize};

use crate::{
    classifier::ProjectClassifier, config::NormalizeOptions, types::ExceptionRecord,
};

pub mod jvm;
pub mod native;

use jvm::{CapturedThrowable, Throwable};
use native::{CapturedException, NativeException};

/// A borrowed error value in one of the two representations we know how to read.
#[derive(Clone, Copy)]
pub enum ErrorRef<'a> {
    Native(&'a dyn NativeException),
    Throwable(&'a dyn Throwable),
}

impl<'a> ErrorRef<'a> {
    pub fn normalize(
        self,
        classifier: &ProjectClassifier,
        options: &NormalizeOptions,
    ) -> ExceptionRecord {
        match self {
            ErrorRef::Native(e) => native::normalize(e, classifier, options),
            ErrorRef::Throwable(e) => jvm::normalize(e, classifier, options),
        }
    }

    pub fn cause(self) -> Option<ErrorRef<'a>> {
        match self {
            ErrorRef::Native(e) => e.inner_exception(),
            ErrorRef::Throwable(e) => e.cause(),
        }
    }

    pub fn type_name(self) -> &'a str {
        match self {
            ErrorRef::Native(e) => e.type_name(),
            ErrorRef::Throwable(e) => e.type_name(),
        }
    }

    // Identifies the underlying error object, so a chain that loops back on itself can be
    // spotted. Zero-sized errors have no distinct address, so they are never tracked.
    pub(crate) fn identity(self) -> Option<ErrorIdentity<'a>> {
        match self {
            ErrorRef::Native(e) if std::mem::size_of_val(e) > 0 => {
                Some(ErrorIdentity::Native(std::ptr::from_ref(e)))
            }
            ErrorRef::Throwable(e) if std::mem::size_of_val(e) > 0 => {
                Some(ErrorIdentity::Throwable(std::ptr::from_ref(e)))
            }
            _ => None,
        }
    }
}

// The full trait object pointer, address and vtable both. An error holding its cause inline
// as the first field shares the cause's address, but not its vtable.
#[derive(Clone, Copy, Hash)]
pub(crate) enum ErrorIdentity<'a> {
    Native(*const (dyn NativeException + 'a)),
    Throwable(*const (dyn Throwable + 'a)),
}

impl PartialEq for ErrorIdentity<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorIdentity::Native(a), ErrorIdentity::Native(b)) => std::ptr::eq(*a, *b),
            (ErrorIdentity::Throwable(a), ErrorIdentity::Throwable(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for ErrorIdentity<'_> {}

impl std::fmt::Debug for ErrorRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ErrorRef::Native(_) => "Native",
            ErrorRef::Throwable(_) => "Throwable",
        };
        f.debug_tuple(kind).field(&self.type_name()).finish()
    }
}

// An owned snapshot of an error graph, as an SDK would serialize it before handing it to us.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CapturedError {
    Native(CapturedException),
    Throwable(CapturedThrowable),
}

impl CapturedError {
    pub fn as_error_ref(&self) -> ErrorRef<'_> {
        match self {
            CapturedError::Native(e) => ErrorRef::Native(e),
            CapturedError::Throwable(e) => ErrorRef::Throwable(e),
        }
    }
}
