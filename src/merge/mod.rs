//! Merge module - Computes and applies merge patches between documents.

mod patch;

pub use patch::*;
