//! JSON merge patches (RFC 7386).
//!
//! A null in a patch deletes the key it sits under, so a field that is
//! legitimately null cannot be told apart from a deletion. Documents that
//! need such a field must exclude it from comparison instead.

use crate::value::{Map, Value};

/// Computes the merge patch that turns `from` into `to`.
///
/// Nested maps are patched key by key. Every other value, lists included,
/// is replaced whole.
pub fn compute_patch(from: &Value, to: &Value) -> Value {
    match (from, to) {
        (Value::Map(from), Value::Map(to)) => Value::Map(map_patch(from, to)),
        _ => to.clone(),
    }
}

fn map_patch(from: &Map, to: &Map) -> Map {
    let mut patch = Map::new();
    for key in from.keys() {
        if !to.has(key) {
            patch.set(key.clone(), Value::Null);
        }
    }
    for (key, to_item) in to.iter() {
        match from.get(key) {
            Some(from_item) if from_item == to_item => {}
            Some(Value::Map(from_map)) => match to_item {
                Value::Map(to_map) => patch.set(key.clone(), Value::Map(map_patch(from_map, to_map))),
                _ => patch.set(key.clone(), to_item.clone()),
            },
            _ => patch.set(key.clone(), to_item.clone()),
        }
    }
    patch
}

/// Applies a merge patch to `target` and returns the result.
///
/// A sub-patch whose target is missing or not a map is applied to an empty
/// map, so the result never carries null deletion markers.
pub fn apply_patch(target: &Value, patch: &Value) -> Value {
    let Value::Map(patch) = patch else {
        return patch.clone();
    };
    let mut result = match target {
        Value::Map(m) => m.clone(),
        _ => Map::new(),
    };
    for (key, item) in patch.iter() {
        if item.is_null() {
            result.delete(key);
            continue;
        }
        let patched = apply_patch(result.get(key).unwrap_or(&Value::Null), item);
        result.set(key.clone(), patched);
    }
    Value::Map(result)
}
