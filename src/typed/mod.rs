//! Typed module - Round-trips documents through a kind's schema.
//!
//! This module provides decoding, canonical re-encoding and resource quantities.

mod quantity;
mod typed_value;
mod validation;

pub use quantity::*;
pub use typed_value::*;
pub use validation::*;
