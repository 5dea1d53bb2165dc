//! Name reference path configuration.
//!
//! This module describes which fields of which resource kinds hold the name
//! of another resource, and consolidates such declarations so that a
//! transformation engine can rewrite every reference when the named
//! resource is renamed.

mod defaultconfig;
mod pathconfig;
mod refpathconfig;


pub use defaultconfig::*;
pub use pathconfig::*;
pub use refpathconfig::*;

use thiserror::Error;

/// Error type for reading and writing configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
