//! Resource identity types.
//!
//! A resource type in a Kubernetes-style API is identified by the triple of
//! API group, API version, and kind. This module provides that triple as a
//! plain value type so it can serve as a merge key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gvk identifies a resource type by its API group, API version, and kind.
///
/// All three fields compare by string value. An empty field is ordinary data,
/// not an error: an empty group denotes the core API group, and an empty
/// version or kind denotes "any" in configurations that match broadly.
///
/// Displays as `group/version/kind` with empty fields omitted; a fully empty
/// identity displays as `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gvk {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl Gvk {
    /// Creates a new Gvk from group, version, and kind.
    pub fn new(group: impl Into<String>, version: impl Into<String>, kind: impl Into<String>) -> Self {
        Gvk {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Creates a Gvk for a core-group kind, leaving group and version empty.
    pub fn from_kind(kind: impl Into<String>) -> Self {
        Gvk {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Returns true if group, version, and kind are all empty.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.kind.is_empty()
    }

    /// Returns the apiVersion form of the identity: `group/version`, or just
    /// `version` for the core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for Gvk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "*");
        }

        let mut first = true;
        for part in [&self.group, &self.version, &self.kind] {
            if part.is_empty() {
                continue;
            }
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{}", part)?;
            first = false;
        }
        Ok(())
    }
}
