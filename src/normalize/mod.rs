//! Normalize module - Brings config and live documents into a comparable form.
//!
//! This module provides the normalization pipeline, its options and the hook
//! for caller-supplied normalization.

mod normalizer;
mod options;
mod role;
mod secret;

pub use normalizer::*;
pub use options::*;

pub(crate) use secret::fold_string_data;
