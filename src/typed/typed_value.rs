//! TypedValue implementation.
//!
//! Decoding checks a document against its schema and rewrites scalars into
//! their canonical encodings. Encoding writes the document back out the way a
//! typed client would, dropping fields that equal their zero value.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::schema::{Atom, Omit, Scalar, Schema, TypeRef};
use crate::value::{Map, Value};
use super::quantity::canonical_quantity;
use super::validation::{ValidationError, ValidationErrors};

/// TypedValue is a decoded Value paired with its schema and type.
#[derive(Debug, Clone)]
pub struct TypedValue {
    value: Value,
    type_ref: TypeRef,
    schema: Arc<Schema>,
}

impl TypedValue {
    /// Decodes `value` against `type_ref`, collecting every mismatch.
    pub fn decode(value: &Value, schema: Arc<Schema>, type_ref: TypeRef) -> Result<TypedValue, ValidationErrors> {
        let mut decoder = Decoder {
            schema: &schema,
            errors: ValidationErrors::new(),
        };
        let decoded = decoder.value(value, &type_ref, "");
        if !decoder.errors.is_empty() {
            return Err(decoder.errors);
        }
        Ok(TypedValue {
            value: decoded,
            type_ref,
            schema,
        })
    }

    /// Returns a reference to the decoded value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns a reference to the type reference.
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// Returns a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Writes the value back out, applying each field's omit policy.
    pub fn encode(&self) -> Value {
        encode_value(&self.schema, &self.value, &self.type_ref)
    }
}

struct Decoder<'a> {
    schema: &'a Schema,
    errors: ValidationErrors,
}

impl Decoder<'_> {
    fn value(&mut self, value: &Value, type_ref: &TypeRef, path: &str) -> Value {
        let atom = match self.schema.resolve(type_ref) {
            Some(atom) => atom,
            None => {
                if let Some(ref name) = type_ref.named_type {
                    self.errors.add(ValidationError::schema_error(format!(
                        "no type found matching: {}",
                        name
                    )));
                }
                return value.clone();
            }
        };

        if value.is_null() {
            return Value::Null;
        }
        if let Some(scalar) = atom.scalar {
            self.scalar(value, scalar, path)
        } else if let Some(ref list) = atom.list {
            self.list(value, &list.element_type, path)
        } else if let Some(ref map) = atom.map {
            self.map(value, map, path)
        } else {
            value.clone()
        }
    }

    fn scalar(&mut self, value: &Value, scalar: Scalar, path: &str) -> Value {
        let decoded = match (scalar, value) {
            (Scalar::String, Value::String(_)) => Some(value.clone()),
            (Scalar::Integer | Scalar::IntOrString, Value::Int(_)) => Some(value.clone()),
            (Scalar::Integer | Scalar::IntOrString, Value::Float(f)) => whole_number(*f).map(Value::Int),
            (Scalar::IntOrString, Value::String(_)) => Some(value.clone()),
            (Scalar::Numeric, Value::Int(_) | Value::Float(_)) => Some(value.clone()),
            (Scalar::Boolean, Value::Bool(_)) => Some(value.clone()),
            (Scalar::Untyped, Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)) => {
                Some(value.clone())
            }
            (Scalar::Quantity, Value::String(s)) => return self.quantity(s, path),
            (Scalar::Quantity, Value::Int(i)) => return self.quantity(&i.to_string(), path),
            (Scalar::Quantity, Value::Float(f)) => return self.quantity(&f.to_string(), path),
            (Scalar::Timestamp, Value::String(s)) => return self.timestamp(s, path),
            _ => None,
        };

        match decoded {
            Some(v) => v,
            None => {
                self.errors.add(ValidationError::type_mismatch(
                    display_path(path),
                    scalar_name(scalar),
                    value.type_name(),
                ));
                value.clone()
            }
        }
    }

    fn quantity(&mut self, raw: &str, path: &str) -> Value {
        match canonical_quantity(raw) {
            Ok(canonical) => {
                if canonical != raw {
                    trace!(path = %display_path(path), %raw, %canonical, "canonicalized quantity");
                }
                Value::String(canonical)
            }
            Err(e) => {
                self.errors.add(ValidationError::invalid_value(display_path(path), e.to_string()));
                Value::String(raw.to_string())
            }
        }
    }

    fn timestamp(&mut self, raw: &str, path: &str) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Value::String(ts.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            Err(e) => {
                self.errors.add(ValidationError::invalid_value(
                    display_path(path),
                    format!("invalid timestamp {:?}: {}", raw, e),
                ));
                Value::String(raw.to_string())
            }
        }
    }

    fn list(&mut self, value: &Value, element_type: &TypeRef, path: &str) -> Value {
        let Value::List(items) = value else {
            self.errors.add(ValidationError::type_mismatch(display_path(path), "list", value.type_name()));
            return value.clone();
        };
        Value::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| self.value(item, element_type, &format!("{}[{}]", path, i)))
                .collect(),
        )
    }

    fn map(&mut self, value: &Value, map: &crate::schema::Map, path: &str) -> Value {
        let Value::Map(fields) = value else {
            self.errors.add(ValidationError::type_mismatch(display_path(path), "map", value.type_name()));
            return value.clone();
        };
        let mut out = Map::new();
        for (key, item) in fields.iter() {
            let child = format!("{}.{}", path, key);
            let decoded = if let Some(field) = map.find_field(key) {
                self.value(item, &field.field_type, &child)
            } else if let Some(ref element_type) = map.element_type {
                self.value(item, element_type, &child)
            } else {
                item.clone()
            };
            out.set(key.clone(), decoded);
        }
        Value::Map(out)
    }
}

fn whole_number(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "."
    } else {
        path
    }
}

fn scalar_name(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::String => "string",
        Scalar::Integer => "integer",
        Scalar::Numeric => "numeric",
        Scalar::Boolean => "boolean",
        Scalar::Untyped => "scalar",
        Scalar::Quantity => "quantity",
        Scalar::Timestamp => "timestamp",
        Scalar::IntOrString => "int or string",
    }
}

fn encode_value(schema: &Schema, value: &Value, type_ref: &TypeRef) -> Value {
    let Some(atom) = schema.resolve(type_ref) else {
        return value.clone();
    };
    match (value, &atom.list, &atom.map) {
        (Value::List(items), Some(list), _) => Value::List(
            items
                .iter()
                .map(|item| encode_value(schema, item, &list.element_type))
                .collect(),
        ),
        (Value::Map(fields), _, Some(map)) => Value::Map(encode_map(schema, fields, map)),
        _ => value.clone(),
    }
}

fn encode_map(schema: &Schema, fields: &Map, map: &crate::schema::Map) -> Map {
    let mut out = Map::new();
    for (key, item) in fields.iter() {
        if map.find_field(key).is_some() {
            continue;
        }
        let encoded = match map.element_type {
            Some(ref element_type) => encode_value(schema, item, element_type),
            None => item.clone(),
        };
        out.set(key.clone(), encoded);
    }

    for field in &map.fields {
        let atom = schema.resolve(&field.field_type);
        let encoded = fields
            .get(&field.name)
            .map(|item| encode_value(schema, item, &field.field_type))
            .filter(|item| !item.is_null());
        let emitted = match (field.omit, encoded) {
            (Omit::Never, None) => Some(zero_value(schema, atom)),
            (Omit::Empty, Some(item)) if is_empty(&item, atom) => None,
            (_, encoded) => encoded,
        };
        if let Some(item) = emitted {
            out.set(field.name.clone(), item);
        }
    }
    out
}

/// Mirrors `omitempty`: structs are never empty, everything else is empty
/// at its zero value.
fn is_empty(value: &Value, atom: Option<&Atom>) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Float(f) => *f == 0.0,
        Value::String(s) => s.is_empty(),
        Value::List(l) => l.is_empty(),
        Value::Map(m) => m.is_empty() && !is_struct(atom),
    }
}

fn is_struct(atom: Option<&Atom>) -> bool {
    atom.and_then(|a| a.map.as_ref()).is_some_and(|m| m.is_struct())
}

fn zero_value(schema: &Schema, atom: Option<&Atom>) -> Value {
    let Some(atom) = atom else {
        return Value::Null;
    };
    match (atom.scalar, &atom.map) {
        (Some(Scalar::String), _) => Value::String(String::new()),
        (Some(Scalar::Integer | Scalar::IntOrString | Scalar::Numeric), _) => Value::Int(0),
        (Some(Scalar::Boolean), _) => Value::Bool(false),
        (None, Some(map)) if map.is_struct() => Value::Map(encode_map(schema, &Map::new(), map)),
        _ => Value::Null,
    }
}
