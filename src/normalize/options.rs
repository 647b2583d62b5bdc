//! Options controlling normalization and comparison.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diff::DiffError;
use crate::schema::{GroupKind, SchemaRegistry};
use crate::value::parse_pointer;

/// ResourceOverride lists the paths of one kind that are never compared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOverride {
    /// JSON pointers, e.g. `/spec/replicas`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_differences: Vec<String>,
}

/// DiffOptions configures a diff.
///
/// Overrides are keyed by `group/Kind`, or by the bare `Kind` for the core
/// group. Without an attached registry the built-in catalog is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOptions {
    #[serde(default)]
    pub ignore_aggregated_roles: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, ResourceOverride>,

    #[serde(skip)]
    registry: Option<Arc<SchemaRegistry>>,
}

impl DiffOptions {
    pub fn new() -> Self {
        DiffOptions::default()
    }

    /// Parses options from YAML and checks every override pointer.
    pub fn from_yaml(yaml: &str) -> Result<Self, DiffError> {
        let options: DiffOptions =
            serde_yaml::from_str(yaml).map_err(|e| DiffError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Parses options from JSON and checks every override pointer.
    pub fn from_json(json: &str) -> Result<Self, DiffError> {
        let options: DiffOptions =
            serde_json::from_str(json).map_err(|e| DiffError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_ignore_aggregated_roles(mut self, ignore: bool) -> Self {
        self.ignore_aggregated_roles = ignore;
        self
    }

    /// Adds a path exclusion for a kind.
    pub fn with_ignored_path(mut self, gk: &GroupKind, pointer: impl Into<String>) -> Self {
        self.overrides
            .entry(gk.to_string())
            .or_default()
            .ignore_differences
            .push(pointer.into());
        self
    }

    /// Attaches a registry to use instead of the built-in one.
    pub fn with_registry(mut self, registry: Arc<SchemaRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Returns the attached registry, or the built-in one.
    pub fn registry(&self) -> Arc<SchemaRegistry> {
        match self.registry {
            Some(ref registry) => Arc::clone(registry),
            None => SchemaRegistry::builtin(),
        }
    }

    /// Returns the paths excluded from comparison for a kind.
    pub fn ignored_paths(&self, gk: &GroupKind) -> &[String] {
        self.overrides
            .get(&gk.to_string())
            .map(|o| o.ignore_differences.as_slice())
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), DiffError> {
        for (key, over) in &self.overrides {
            for pointer in &over.ignore_differences {
                if parse_pointer(pointer).map_or(true, |tokens| tokens.is_empty()) {
                    return Err(DiffError::InvalidOptions(format!(
                        "override {}: {:?} is not a JSON pointer to a field",
                        key, pointer
                    )));
                }
            }
        }
        Ok(())
    }
}
