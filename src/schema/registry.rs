//! Registry of kinds known to the diff engine.
//!
//! Each kind carries its scope and, optionally, a codec that performs the
//! typed round trip. The built-in registry is parsed once from
//! [`BUILTIN_CATALOG_YAML`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::typed::{TypedValue, ValidationErrors};
use crate::value::Value;
use super::builtin::BUILTIN_CATALOG_YAML;
use super::elements::{Schema, TypeDef, TypeRef};

/// GroupKind identifies a kind independently of its API version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKind {
    pub group: String,
    pub kind: String,
}

impl GroupKind {
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        GroupKind {
            group: group.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for GroupKind {
    /// Core kinds print as `Kind`, everything else as `group/Kind`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}/{}", self.group, self.kind)
        }
    }
}

/// Scope tells whether objects of a kind live inside a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    Namespaced,
    Cluster,
}

/// KindCodec converts between raw documents and their typed form.
pub trait KindCodec: Send + Sync {
    fn decode(&self, value: &Value) -> Result<TypedValue, ValidationErrors>;
    fn encode(&self, typed: &TypedValue) -> Value;
}

/// SchemaCodec is a KindCodec backed by a type in a Schema.
#[derive(Debug, Clone)]
pub struct SchemaCodec {
    schema: Arc<Schema>,
    type_ref: TypeRef,
}

impl SchemaCodec {
    pub fn new(schema: Arc<Schema>, type_name: impl Into<String>) -> Self {
        SchemaCodec {
            schema,
            type_ref: TypeRef::named(type_name),
        }
    }

    /// Returns true if the codec's type exists in its schema.
    pub fn is_valid(&self) -> bool {
        self.schema.resolve(&self.type_ref).is_some()
    }
}

impl KindCodec for SchemaCodec {
    fn decode(&self, value: &Value) -> Result<TypedValue, ValidationErrors> {
        TypedValue::decode(value, Arc::clone(&self.schema), self.type_ref.clone())
    }

    fn encode(&self, typed: &TypedValue) -> Value {
        typed.encode()
    }
}

/// Error type for building a registry from a catalog.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("kind {kind} references unknown type {type_name}")]
    UnknownType { kind: GroupKind, type_name: String },
}

#[derive(Clone)]
struct KindEntry {
    scope: Scope,
    codec: Option<Arc<dyn KindCodec>>,
}

/// SchemaRegistry maps a GroupKind to its scope and codec.
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    kinds: HashMap<GroupKind, KindEntry>,
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<String> = self.kinds.keys().map(|gk| gk.to_string()).collect();
        kinds.sort();
        f.debug_struct("SchemaRegistry").field("kinds", &kinds).finish()
    }
}

#[derive(Deserialize)]
struct Catalog {
    #[serde(default)]
    kinds: Vec<CatalogKind>,
    #[serde(default)]
    types: Vec<TypeDef>,
}

#[derive(Deserialize)]
struct CatalogKind {
    #[serde(default)]
    group: String,
    kind: String,
    scope: Scope,
    #[serde(default, rename = "type")]
    type_name: Option<String>,
}

static BUILTIN: Lazy<Arc<SchemaRegistry>> = Lazy::new(|| {
    Arc::new(SchemaRegistry::from_catalog_yaml(BUILTIN_CATALOG_YAML).expect("builtin catalog should parse"))
});

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        SchemaRegistry::default()
    }

    /// Returns the shared built-in registry.
    pub fn builtin() -> Arc<SchemaRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a registry from a catalog of kinds and the types they use.
    pub fn from_catalog_yaml(yaml: &str) -> Result<SchemaRegistry, RegistryError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        let schema = Arc::new(Schema::with_types(catalog.types));

        let mut registry = SchemaRegistry::new();
        for entry in catalog.kinds {
            let gk = GroupKind::new(entry.group, entry.kind);
            match entry.type_name {
                Some(type_name) => {
                    let codec = SchemaCodec::new(Arc::clone(&schema), type_name.clone());
                    if !codec.is_valid() {
                        return Err(RegistryError::UnknownType { kind: gk, type_name });
                    }
                    registry.register_codec(gk, entry.scope, Arc::new(codec));
                }
                None => registry.register_scope(gk, entry.scope),
            }
        }
        Ok(registry)
    }

    /// Registers a kind together with the codec used for its round trip.
    pub fn register_codec(&mut self, gk: GroupKind, scope: Scope, codec: Arc<dyn KindCodec>) {
        self.kinds.insert(
            gk,
            KindEntry {
                scope,
                codec: Some(codec),
            },
        );
    }

    /// Registers a kind's scope, keeping any codec already registered for it.
    pub fn register_scope(&mut self, gk: GroupKind, scope: Scope) {
        self.kinds
            .entry(gk)
            .and_modify(|e| e.scope = scope)
            .or_insert(KindEntry { scope, codec: None });
    }

    /// Returns the codec for a kind, if one is registered.
    pub fn codec(&self, gk: &GroupKind) -> Option<&dyn KindCodec> {
        self.kinds.get(gk).and_then(|e| e.codec.as_deref())
    }

    /// Returns the scope of a kind, or None when the kind is unknown.
    pub fn scope(&self, gk: &GroupKind) -> Option<Scope> {
        self.kinds.get(gk).map(|e| e.scope)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
