use std::collections::HashSet;

use tracing::warn;

use crate::{
    classifier::ProjectClassifier,
    config::{Config, NormalizeOptions},
    error::Error,
    langs::{CapturedError, ErrorRef},
    metric_consts::{CHAINS_CONVERTED, CHAINS_TRUNCATED},
    types::ExceptionRecord,
};

/// Walks an error's causal chain, outermost error first, producing one record per link.
#[derive(Debug, Clone, Default)]
pub struct ExceptionConverter {
    classifier: ProjectClassifier,
    options: NormalizeOptions,
}

impl ExceptionConverter {
    pub fn new(classifier: ProjectClassifier) -> Self {
        Self::with_options(classifier, NormalizeOptions::default())
    }

    pub fn with_options(classifier: ProjectClassifier, options: NormalizeOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    /// Builds a converter from the reporting client's configuration. Hosts that hand us
    /// their configuration across a boundary where it might be missing get an error here,
    /// rather than a converter that fails later.
    pub fn from_config(config: Option<&Config>) -> Result<Self, Error> {
        let config = config.ok_or(Error::InvalidArgument("config is required"))?;
        if config.max_chain_depth == 0 {
            return Err(Error::InvalidArgument("max_chain_depth must be at least 1"));
        }

        Ok(Self::with_options(
            config.classifier(),
            config.normalize_options(),
        ))
    }

    pub fn from_env() -> Result<Self, Error> {
        let config = Config::init_with_defaults()?;
        Self::from_config(Some(&config))
    }

    pub fn classifier(&self) -> &ProjectClassifier {
        &self.classifier
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn convert(&self, error: ErrorRef<'_>) -> Vec<ExceptionRecord> {
        // The outermost error is always reported, whatever the configured limit
        let max_depth = self.options.max_chain_depth.max(1);

        let mut records = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(error);

        while let Some(error) = current {
            if error.identity().is_some_and(|id| !visited.insert(id)) {
                warn!(
                    exception_type = error.type_name(),
                    depth = records.len(),
                    "Exception chain refers back to itself, stopping"
                );
                metrics::counter!(CHAINS_TRUNCATED, "reason" => "cycle").increment(1);
                break;
            }

            if records.len() == max_depth {
                warn!(
                    max_depth,
                    "Exception chain exceeds maximum depth, dropping remaining causes"
                );
                metrics::counter!(CHAINS_TRUNCATED, "reason" => "depth").increment(1);
                break;
            }

            records.push(error.normalize(&self.classifier, &self.options));
            current = error.cause();
        }

        metrics::counter!(CHAINS_CONVERTED).increment(1);
        records
    }

    pub fn convert_captured(&self, error: &CapturedError) -> Vec<ExceptionRecord> {
        self.convert(error.as_error_ref())
    }
}
