//! Reference path configuration records and their merge operation.

use super::pathconfig::PathConfig;
use super::ConfigError;
use crate::resid::Gvk;
use serde::{Deserialize, Serialize};

/// ReferencePathConfig contains the configuration of fields that reference
/// the name of another resource, keyed by that resource's group, version,
/// and kind.
///
/// e.g. `pod.spec.volumes.configMap.name` references the name of a ConfigMap.
/// Its record looks like:
///
/// ```yaml
/// version: v1
/// kind: ConfigMap
/// pathConfigs:
/// - gvk:
///     version: v1
///     kind: Pod
///   path: [spec, volumes, configMap, name]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePathConfig {
    /// The referenced resource type, serialized as inline `group`,
    /// `version`, and `kind` keys with empty fields omitted.
    #[serde(flatten)]
    gvk: Gvk,

    /// All field locations known to hold a reference to the resource's name.
    #[serde(default, skip_serializing_if = "Vec::is_empty", rename = "pathConfigs")]
    path_configs: Vec<PathConfig>,
}

impl ReferencePathConfig {
    /// Creates a record for the referenced resource type with the given
    /// path configurations.
    pub fn new(gvk: Gvk, path_configs: Vec<PathConfig>) -> Self {
        ReferencePathConfig { gvk, path_configs }
    }

    /// Returns the referenced resource type. This is the merge key.
    pub fn gvk(&self) -> &Gvk {
        &self.gvk
    }

    /// Returns the path configurations in insertion order.
    pub fn path_configs(&self) -> &[PathConfig] {
        &self.path_configs
    }
}

/// ReferencePathConfigs is an ordered collection of reference path records.
///
/// A merged collection holds at most one record per referenced resource
/// type; input collections may contain duplicates, which `merge_all`
/// consolidates. Merging takes the collection by value, so a collection
/// shared across threads must be cloned or externally synchronized first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferencePathConfigs {
    items: Vec<ReferencePathConfig>,
}

impl ReferencePathConfigs {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        ReferencePathConfigs { items: Vec::new() }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferencePathConfig> {
        self.items.iter()
    }

    /// Returns the first record whose referenced resource type equals `gvk`.
    pub fn find(&self, gvk: &Gvk) -> Option<&ReferencePathConfig> {
        self.items.iter().find(|c| c.gvk == *gvk)
    }

    /// Folds a single record into the collection.
    ///
    /// Every existing record whose referenced resource type equals the
    /// incoming record's has the incoming path configurations appended in
    /// place, after its own. If no record matched anywhere in the scan, the
    /// incoming record is appended at the end. The relative order of all
    /// other records is preserved. This operation cannot fail.
    pub fn merge_one(mut self, incoming: ReferencePathConfig) -> Self {
        let mut found = false;
        for existing in &mut self.items {
            if existing.gvk == incoming.gvk {
                existing
                    .path_configs
                    .extend(incoming.path_configs.iter().cloned());
                found = true;
            }
        }

        if !found {
            self.items.push(incoming);
        }
        self
    }

    /// Merges another collection into this one, folding its records in
    /// their given order.
    ///
    /// Records in `additional` that share a referenced resource type with a
    /// record already present are consolidated into it; genuinely new types
    /// are appended in first-seen order. Duplicates inside `additional`
    /// itself consolidate as well, since each record is folded against the
    /// growing result. Merging an empty collection returns `self` unchanged.
    pub fn merge_all(self, additional: ReferencePathConfigs) -> Self {
        let mut result = self;
        for config in additional {
            result = result.merge_one(config);
        }
        result
    }

    /// Parses a collection from a YAML document. An empty document yields
    /// an empty collection.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let parsed: Option<ReferencePathConfigs> = serde_yaml::from_str(yaml)?;
        Ok(parsed.unwrap_or_default())
    }

    /// Parses a collection from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the collection to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes the collection to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<ReferencePathConfig> for ReferencePathConfigs {
    fn from_iter<T: IntoIterator<Item = ReferencePathConfig>>(iter: T) -> Self {
        ReferencePathConfigs {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ReferencePathConfigs {
    type Item = ReferencePathConfig;
    type IntoIter = std::vec::IntoIter<ReferencePathConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferencePathConfigs {
    type Item = &'a ReferencePathConfig;
    type IntoIter = std::slice::Iter<'a, ReferencePathConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = ReferencePathConfig::new(
            Gvk::new("", "v1", "ConfigMap"),
            vec![PathConfig::new(["spec", "volumes", "configMap", "name"])],
        );

        assert_eq!(record.gvk(), &Gvk::new("", "v1", "ConfigMap"));
        assert_eq!(record.path_configs().len(), 1);
        // Repeated calls observe the same value; the accessor has no effect.
        assert_eq!(record.gvk(), record.gvk());
    }

    #[test]
    fn test_record_wire_shape() {
        let record = ReferencePathConfig::new(
            Gvk::new("", "v1", "ConfigMap"),
            vec![PathConfig::with_gvk(
                Gvk::new("", "v1", "Pod"),
                ["spec", "volumes", "configMap", "name"],
            )],
        );

        let yaml = serde_yaml::to_string(&record).unwrap();
        // The identity keys are inline on the record, not nested.
        assert!(yaml.contains("version: v1"));
        assert!(yaml.contains("kind: ConfigMap"));
        assert!(yaml.contains("pathConfigs:"));
        assert!(!yaml.contains("group:"));
    }

    #[test]
    fn test_record_deserialize() {
        let yaml = r#"
version: v1
kind: ConfigMap
pathConfigs:
- gvk:
    version: v1
    kind: Pod
  path: [spec, volumes, configMap, name]
"#;
        let record: ReferencePathConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.gvk(), &Gvk::new("", "v1", "ConfigMap"));
        assert_eq!(record.path_configs().len(), 1);
        assert_eq!(
            record.path_configs()[0].path,
            vec!["spec", "volumes", "configMap", "name"]
        );
    }

    #[test]
    fn test_collection_from_yaml() {
        let yaml = r#"
- version: v1
  kind: ConfigMap
  pathConfigs:
  - path: [spec, volumes, configMap, name]
- version: v1
  kind: Secret
  pathConfigs:
  - path: [spec, volumes, secret, secretName]
"#;
        let configs = ReferencePathConfigs::from_yaml(yaml).unwrap();
        assert_eq!(configs.len(), 2);
        assert!(configs.find(&Gvk::new("", "v1", "ConfigMap")).is_some());
        assert!(configs.find(&Gvk::new("", "v1", "Secret")).is_some());
        assert!(configs.find(&Gvk::new("", "v1", "Pod")).is_none());
    }

    #[test]
    fn test_collection_from_yaml_empty_document() {
        let configs = ReferencePathConfigs::from_yaml("").unwrap();
        assert!(configs.is_empty());

        let configs = ReferencePathConfigs::from_yaml("---\n").unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_collection_from_yaml_invalid() {
        assert!(ReferencePathConfigs::from_yaml("just a string\n").is_err());
    }

    #[test]
    fn test_collection_from_json() {
        let json = r#"[{"version":"v1","kind":"ConfigMap","pathConfigs":[{"path":["metadata","name"]}]}]"#;
        let configs = ReferencePathConfigs::from_json(json).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs.iter().next().unwrap().gvk().kind, "ConfigMap");
    }

    #[test]
    fn test_collection_yaml_roundtrip() {
        let configs: ReferencePathConfigs = vec![
            ReferencePathConfig::new(
                Gvk::new("", "v1", "ConfigMap"),
                vec![PathConfig::new(["spec", "volumes", "configMap", "name"])],
            ),
            ReferencePathConfig::new(
                Gvk::new("rbac.authorization.k8s.io", "v1", "Role"),
                vec![PathConfig::new(["roleRef", "name"])],
            ),
        ]
        .into_iter()
        .collect();

        let yaml = configs.to_yaml().unwrap();
        let parsed = ReferencePathConfigs::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, configs);
    }

    #[test]
    fn test_collection_json_roundtrip() {
        let configs: ReferencePathConfigs = vec![
            ReferencePathConfig::new(
                Gvk::new("", "v1", "ConfigMap"),
                vec![PathConfig::new(["spec", "volumes", "configMap", "name"])],
            ),
            ReferencePathConfig::new(
                Gvk::new("apps", "v1", "Deployment"),
                vec![PathConfig::new(["spec", "template", "spec", "serviceAccountName"])],
            ),
        ]
        .into_iter()
        .collect();

        let json = configs.to_json_pretty().unwrap();
        // Identity keys stay inline in JSON too, and an empty group is omitted.
        assert!(json.contains("\"kind\": \"ConfigMap\""));
        assert!(json.contains("\"group\": \"apps\""));
        assert!(!json.contains("\"group\": \"\""));

        let parsed = ReferencePathConfigs::from_json(&json).unwrap();
        assert_eq!(parsed, configs);
    }

    #[test]
    fn test_collection_from_iterator_preserves_order() {
        let configs: ReferencePathConfigs = vec![
            ReferencePathConfig::new(Gvk::from_kind("B"), vec![]),
            ReferencePathConfig::new(Gvk::from_kind("A"), vec![]),
        ]
        .into_iter()
        .collect();

        let kinds: Vec<&str> = configs.iter().map(|c| c.gvk().kind.as_str()).collect();
        assert_eq!(kinds, vec!["B", "A"]);
    }
}
