//! Value module - In-memory representation of YAML/JSON resource documents.
//!
//! A closed tagged union keeps every tree walk in the crate a total function.

mod pointer;
mod resource;
mod value;

pub use pointer::*;
pub use resource::*;
pub use value::*;
