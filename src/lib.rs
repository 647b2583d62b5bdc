//! # Manifest Diff
//!
//! Decides whether a desired resource manifest is in sync with the object
//! observed in a cluster, and what a sync would change.
//!
//! Both documents are normalized into a comparable form first: cluster-scoped
//! kinds lose their namespace, Secret `stringData` is folded into `data`, and
//! kinds with a known schema are round-tripped through it so that equivalent
//! encodings compare equal. The comparison itself is two-way, or three-way
//! when the live object records the manifest it was last applied from.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON resource documents
//! - [`schema`] - Type schema language and the registry of known kinds
//! - [`typed`] - Decoding and canonical re-encoding of documents against a schema
//! - [`normalize`] - Normalization pipeline and diff options
//! - [`merge`] - Computing and applying merge patches
//! - [`diff`] - Two-way and three-way comparison of configs with live objects
//! - [`redact`] - Hiding Secret values for display

pub mod diff;
pub mod merge;
pub mod normalize;
pub mod redact;
pub mod schema;
pub mod typed;
pub mod value;

pub use diff::{
    diff, diff_array, last_applied_configuration, three_way_diff, two_way_diff, DiffError, DiffMode,
    DiffResult, DiffResultList,
};
pub use merge::{apply_patch, compute_patch};
pub use normalize::{normalize, normalize_with, DiffOptions, NormalizeRole, Normalizer, ResourceOverride};
pub use redact::hide_secret_data;
pub use schema::{GroupKind, KindCodec, Schema, SchemaRegistry, Scope};
pub use typed::TypedValue;
pub use value::Value;
