use envconfig::Envconfig;

use crate::classifier::{ProjectClassifier, ProjectNamespaces};

// Reported in place of a frame's file name when the runtime doesn't provide one
pub const UNKNOWN_FILE: &str = "Unknown";

// Chains are assumed to be short, but nothing stops a runtime from handing us a
// self-referential or absurdly deep one.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 64;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    // Comma separated list of namespace prefixes, e.g. "MyApp,com.example.myapp"
    #[envconfig(from = "PROJECT_NAMESPACES")]
    pub project_namespaces: Option<ProjectNamespaces>,

    #[envconfig(from = "MAX_CHAIN_DEPTH", default = "64")]
    pub max_chain_depth: usize,
}

impl Config {
    pub fn init_with_defaults() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }

    pub fn classifier(&self) -> ProjectClassifier {
        ProjectClassifier::new(self.project_namespaces.clone())
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            max_chain_depth: self.max_chain_depth,
            ..Default::default()
        }
    }
}

/// Fallback values and limits applied while normalizing an exception chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub unknown_file: String,
    pub max_chain_depth: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            unknown_file: UNKNOWN_FILE.to_string(),
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}
