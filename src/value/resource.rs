//! Accessors for the well-known parts of a resource document.

use super::value::{Map, Value};

/// Annotation holding the manifest from the last client-side apply.
pub const LAST_APPLIED_CONFIG_ANNOTATION: &str = "kubectl.kubernetes.io/last-applied-configuration";

impl Value {
    pub fn api_version(&self) -> &str {
        self.nested_str(&["apiVersion"]).unwrap_or_default()
    }

    pub fn kind(&self) -> &str {
        self.nested_str(&["kind"]).unwrap_or_default()
    }

    /// API group of the resource; the core group is the empty string.
    pub fn group(&self) -> &str {
        api_group(self.api_version())
    }

    pub fn name(&self) -> &str {
        self.nested_str(&["metadata", "name"]).unwrap_or_default()
    }

    pub fn labels(&self) -> Option<&Map> {
        self.nested_map(&["metadata", "labels"])
    }

    pub fn annotations(&self) -> Option<&Map> {
        self.nested_map(&["metadata", "annotations"])
    }

    pub fn annotation(&self, name: &str) -> Option<&str> {
        self.annotations()?.get(name)?.as_str()
    }
}

/// Extracts the group from an `apiVersion` such as `apps/v1`.
pub fn api_group(api_version: &str) -> &str {
    match api_version.split_once('/') {
        Some((group, _)) => group,
        None => "",
    }
}
