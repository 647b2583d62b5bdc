//! Diff module - Decides whether a config is in sync with its live object.
//!
//! This module provides two-way and three-way comparison, comparison of
//! paired sequences and the crate's error type.

mod array;
mod compare;
mod error;
mod prune;
mod result;

#[cfg(test)]
mod diff_test;

pub use array::*;
pub use compare::*;
pub use error::*;
pub use prune::prune;
pub use result::*;
