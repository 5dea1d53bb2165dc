//! # Name Reference Config
//!
//! Name reference path configuration and merging for Kubernetes-style
//! resources.
//!
//! A reference path configuration declares that a field in one resource kind
//! holds the name of a resource of another kind (for example,
//! `pod.spec.volumes.configMap.name` names a ConfigMap). A transformation
//! tool consumes the merged configuration to rewrite every such field when
//! the referenced resource is renamed.
//!
//! The core operation is the merge: user-supplied records fold into a base
//! configuration (typically the built-in defaults), and records that
//! reference the same resource type consolidate into one record with their
//! path lists concatenated.
//!
//! ## Modules
//!
//! - [`resid`] - Resource identity (group/version/kind) value types
//! - [`config`] - Reference path configuration records, merging, and the
//!   built-in defaults

pub mod config;
pub mod resid;

pub use config::{
    default_name_references, ConfigError, PathConfig, ReferencePathConfig, ReferencePathConfigs,
    DEFAULT_NAME_REFERENCE_YAML,
};
pub use resid::Gvk;
