pub mod chain;
pub mod classifier;
pub mod config;
pub mod error;
pub mod frames;
pub mod langs;
pub mod metric_consts;
pub mod types;

pub use chain::ExceptionConverter;
pub use classifier::{ProjectClassifier, ProjectNamespaces};
pub use frames::FrameRecord;
pub use langs::{CapturedError, ErrorRef};
pub use types::ExceptionRecord;
