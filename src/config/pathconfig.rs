//! Path configuration for a single referencing field.

use crate::resid::Gvk;
use serde::{Deserialize, Serialize};
use std::fmt;

/// PathConfig locates one field that holds the name of a referenced resource.
///
/// The path is an ordered sequence of field names descending into the
/// resource document, e.g. `[spec, volumes, configMap, name]`. The optional
/// `gvk` scopes the path to the resource kind that owns the field; when
/// absent the path applies to any kind. Displays as slash-separated
/// segments, prefixed with the owning kind when scoped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// The resource kind this path belongs to, if scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gvk: Option<Gvk>,

    /// Field names from the document root down to the referencing field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,

    /// If true, a transformer should create the path when it is absent.
    #[serde(
        default,
        skip_serializing_if = "is_false",
        rename = "createIfNotPresent"
    )]
    pub create_if_not_present: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl PathConfig {
    /// Creates an unscoped PathConfig from path segments.
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PathConfig {
            path: path.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Creates a PathConfig scoped to the resource kind that owns the field.
    pub fn with_gvk<I, S>(gvk: Gvk, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PathConfig {
            gvk: Some(gvk),
            path: path.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl fmt::Display for PathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref gvk) = self.gvk {
            write!(f, "{}:", gvk)?;
        }
        write!(f, "{}", self.path.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_config_new() {
        let pc = PathConfig::new(["spec", "volumes", "configMap", "name"]);
        assert_eq!(pc.path, vec!["spec", "volumes", "configMap", "name"]);
        assert!(pc.gvk.is_none());
        assert!(!pc.create_if_not_present);
    }

    #[test]
    fn test_path_config_with_gvk() {
        let pc = PathConfig::with_gvk(Gvk::new("", "v1", "Pod"), ["spec", "serviceAccountName"]);
        assert_eq!(pc.gvk, Some(Gvk::new("", "v1", "Pod")));
        assert_eq!(pc.path, vec!["spec", "serviceAccountName"]);
    }

    #[test]
    fn test_path_config_display() {
        let unscoped = PathConfig::new(["metadata", "name"]);
        assert_eq!(format!("{}", unscoped), "metadata/name");

        let scoped = PathConfig::with_gvk(Gvk::new("", "v1", "Pod"), ["spec", "serviceAccountName"]);
        assert_eq!(format!("{}", scoped), "v1/Pod:spec/serviceAccountName");
    }

    #[test]
    fn test_path_config_deserialize() {
        let yaml = r#"
gvk:
  version: v1
  kind: Pod
path: [spec, volumes, configMap, name]
"#;
        let pc: PathConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(pc.gvk, Some(Gvk::new("", "v1", "Pod")));
        assert_eq!(pc.path, vec!["spec", "volumes", "configMap", "name"]);
        assert!(!pc.create_if_not_present);
    }

    #[test]
    fn test_path_config_deserialize_create_if_not_present() {
        let yaml = "path: [metadata, annotations]\ncreateIfNotPresent: true\n";
        let pc: PathConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(pc.create_if_not_present);
    }

    #[test]
    fn test_path_config_serialize_omits_defaults() {
        let pc = PathConfig::new(["metadata", "name"]);
        let yaml = serde_yaml::to_string(&pc).unwrap();
        assert!(!yaml.contains("gvk"));
        assert!(!yaml.contains("createIfNotPresent"));
    }
}
