//! Built-in default name reference configuration.

use super::refpathconfig::ReferencePathConfigs;
use once_cell::sync::Lazy;

/// DEFAULT_NAME_REFERENCE_YAML is the built-in table of name reference paths
/// for core resource kinds. It can be deserialized into
/// [`ReferencePathConfigs`] and is the base that user-supplied configuration
/// merges into.
pub const DEFAULT_NAME_REFERENCE_YAML: &str = r#"- version: v1
  kind: ConfigMap
  pathConfigs:
  - gvk:
      version: v1
      kind: Pod
    path: [spec, volumes, configMap, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, volumes, projected, sources, configMap, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, containers, env, valueFrom, configMapKeyRef, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, containers, envFrom, configMapRef, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, initContainers, env, valueFrom, configMapKeyRef, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, initContainers, envFrom, configMapRef, name]
  - gvk:
      group: apps
      version: v1
      kind: Deployment
    path: [spec, template, spec, volumes, configMap, name]
  - gvk:
      group: apps
      version: v1
      kind: Deployment
    path: [spec, template, spec, containers, env, valueFrom, configMapKeyRef, name]
  - gvk:
      group: apps
      version: v1
      kind: StatefulSet
    path: [spec, template, spec, volumes, configMap, name]
- version: v1
  kind: Secret
  pathConfigs:
  - gvk:
      version: v1
      kind: Pod
    path: [spec, volumes, secret, secretName]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, containers, env, valueFrom, secretKeyRef, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, containers, envFrom, secretRef, name]
  - gvk:
      version: v1
      kind: Pod
    path: [spec, imagePullSecrets, name]
  - gvk:
      version: v1
      kind: ServiceAccount
    path: [secrets, name]
  - gvk:
      version: v1
      kind: ServiceAccount
    path: [imagePullSecrets, name]
  - gvk:
      group: apps
      version: v1
      kind: Deployment
    path: [spec, template, spec, volumes, secret, secretName]
  - gvk:
      group: networking.k8s.io
      version: v1
      kind: Ingress
    path: [spec, tls, secretName]
- version: v1
  kind: ServiceAccount
  pathConfigs:
  - gvk:
      version: v1
      kind: Pod
    path: [spec, serviceAccountName]
  - gvk:
      group: apps
      version: v1
      kind: Deployment
    path: [spec, template, spec, serviceAccountName]
  - gvk:
      group: rbac.authorization.k8s.io
      version: v1
      kind: ClusterRoleBinding
    path: [subjects, name]
  - gvk:
      group: rbac.authorization.k8s.io
      version: v1
      kind: RoleBinding
    path: [subjects, name]
- version: v1
  kind: PersistentVolumeClaim
  pathConfigs:
  - gvk:
      version: v1
      kind: Pod
    path: [spec, volumes, persistentVolumeClaim, claimName]
  - gvk:
      group: apps
      version: v1
      kind: StatefulSet
    path: [spec, template, spec, volumes, persistentVolumeClaim, claimName]
- version: v1
  kind: Service
  pathConfigs:
  - gvk:
      group: networking.k8s.io
      version: v1
      kind: Ingress
    path: [spec, rules, http, paths, backend, service, name]
  - gvk:
      group: networking.k8s.io
      version: v1
      kind: Ingress
    path: [spec, defaultBackend, service, name]
  - gvk:
      group: apps
      version: v1
      kind: StatefulSet
    path: [spec, serviceName]
"#;

static DEFAULT_NAME_REFERENCES: Lazy<ReferencePathConfigs> = Lazy::new(|| {
    ReferencePathConfigs::from_yaml(DEFAULT_NAME_REFERENCE_YAML)
        .expect("built-in name reference configuration should parse")
});

/// Returns the built-in default name reference configuration, parsed once on
/// first use.
pub fn default_name_references() -> &'static ReferencePathConfigs {
    &DEFAULT_NAME_REFERENCES
}
