//! Schema module defines the type language used for the typed round trip and
//! the registry that maps kinds onto it.
//!
//! The type language is a small subset of the structured-merge-diff model:
//! it only describes the parts of an object whose encoding a typed client
//! would change.

mod builtin;
mod elements;
mod registry;

pub use builtin::BUILTIN_CATALOG_YAML;
pub use elements::*;
pub use registry::*;
