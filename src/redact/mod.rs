//! Redact module - Hides Secret values while keeping them comparable.

mod secret;

pub use secret::*;
