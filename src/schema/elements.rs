//! Core schema elements and type definitions.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema is a list of named types.
///
/// Schema types are indexed in a map before the first search so this type
/// should be considered immutable.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeDef>,

    #[serde(skip)]
    type_map: OnceCell<HashMap<String, TypeDef>>,
}

impl Clone for Schema {
    fn clone(&self) -> Self {
        Schema::with_types(self.types.clone())
    }
}

/// TypeDef represents a named type in a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDef {
    /// Top level types should be named. Every type must have a unique name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(flatten)]
    pub atom: Atom,
}

/// TypeRef either refers to a named type or declares an inlined type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeRef {
    /// Reference to named type in schema.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "namedType")]
    pub named_type: Option<String>,

    /// Inline type definition.
    #[serde(flatten)]
    pub inlined: Box<Atom>,
}

/// Atom represents the smallest possible pieces of the type system.
/// At most one of the fields is expected to be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Atom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar: Option<Scalar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<List>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<Map>,
}

/// Scalar (AKA "primitive") represents a type which has a single value.
///
/// Besides the plain JSON scalars, a few cluster encodings get their own
/// scalar so the round trip can canonicalize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scalar {
    String,
    /// Whole numbers; integral floats are accepted and rewritten as integers.
    Integer,
    Numeric,
    Boolean,
    Untyped,
    /// Resource quantity such as `500m` or `1Gi`.
    Quantity,
    /// RFC 3339 timestamp.
    Timestamp,
    IntOrString,
}

/// Omit controls when a struct field is dropped on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Omit {
    /// Dropped when null or equal to the zero value of its type.
    #[default]
    Empty,
    /// Dropped only when null or absent; zero values are kept.
    Nil,
    /// Always written, using the zero value of its type when absent.
    Never,
}

fn is_default_omit(omit: &Omit) -> bool {
    *omit == Omit::Empty
}

/// Map describes either a structure with known fields, a string-keyed
/// dictionary with a uniform element type, or both.
///
/// Keys matching neither a field nor an element type are passed through
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Map {
    /// Each struct field appears exactly once in this list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<StructField>,

    /// ElementType is the type of the map's remaining keys.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "elementType")]
    pub element_type: Option<TypeRef>,

    #[serde(skip)]
    field_map: OnceCell<HashMap<String, StructField>>,
}

/// StructField pairs a field name with a field type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructField {
    /// Name is the field name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Type is the field type.
    #[serde(default, rename = "type")]
    pub field_type: TypeRef,

    #[serde(default, skip_serializing_if = "is_default_omit")]
    pub omit: Omit,
}

/// List represents a type which contains zero or more elements, all of the
/// same subtype.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct List {
    /// ElementType is the type of the list's elements.
    #[serde(default, rename = "elementType")]
    pub element_type: TypeRef,
}

impl Schema {
    /// Creates a new empty schema.
    pub fn new() -> Self {
        Schema::default()
    }

    /// Creates a schema with the given type definitions.
    pub fn with_types(types: Vec<TypeDef>) -> Self {
        Schema {
            types,
            type_map: OnceCell::new(),
        }
    }

    /// FindNamedType returns the referenced TypeDef, if it exists.
    pub fn find_named_type(&self, name: &str) -> Option<&TypeDef> {
        let map = self.type_map.get_or_init(|| {
            self.types
                .iter()
                .map(|t| (t.name.clone(), t.clone()))
                .collect()
        });
        map.get(name)
    }

    /// Resolve returns the atom referenced, whether it is inline or named.
    /// Returns None if a named type can't be found.
    pub fn resolve<'a>(&'a self, tr: &'a TypeRef) -> Option<&'a Atom> {
        match tr.named_type {
            Some(ref named) => self.find_named_type(named).map(|t| &t.atom),
            None => Some(tr.inlined.as_ref()),
        }
    }
}

impl Map {
    /// Creates a new Map with the given fields.
    pub fn with_fields(fields: Vec<StructField>) -> Self {
        Map {
            fields,
            ..Default::default()
        }
    }

    /// Creates a new Map with the given element type.
    pub fn with_element_type(element_type: TypeRef) -> Self {
        Map {
            element_type: Some(element_type),
            ..Default::default()
        }
    }

    /// FindField returns the referenced StructField, if it exists.
    pub fn find_field(&self, name: &str) -> Option<&StructField> {
        let map = self.field_map.get_or_init(|| {
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.clone()))
                .collect()
        });
        map.get(name)
    }

    /// A struct has named fields; a pure dictionary only has an element type.
    pub fn is_struct(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef {
            named_type: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn scalar(scalar: Scalar) -> Self {
        TypeRef {
            named_type: None,
            inlined: Box::new(Atom {
                scalar: Some(scalar),
                ..Default::default()
            }),
        }
    }
}

impl Atom {
    /// Returns true if this atom represents a scalar type.
    pub fn is_scalar(&self) -> bool {
        self.scalar.is_some()
    }

    /// Returns true if this atom represents a list type.
    pub fn is_list(&self) -> bool {
        self.list.is_some()
    }

    /// Returns true if this atom represents a map type.
    pub fn is_map(&self) -> bool {
        self.map.is_some()
    }
}
