//! Presence pruning: projecting a document onto the shape of another.

use crate::value::{Map, Value};

/// Keeps, at every map node of `doc`, only the keys that `template` also has
/// at that path. Below a kept key that is not a map on both sides the value
/// is kept whole, so lists and scalars compare structurally.
pub fn prune(doc: &Value, template: &Value) -> Value {
    match (doc, template) {
        (Value::Map(doc), Value::Map(template)) => Value::Map(
            doc.iter()
                .filter_map(|(key, item)| {
                    template
                        .get(key)
                        .map(|shape| (key.clone(), prune(item, shape)))
                })
                .collect(),
        ),
        _ => doc.clone(),
    }
}

/// Merges the key shapes of two documents. Where only one side is a map,
/// `primary` wins.
pub(crate) fn union_shape(primary: &Value, secondary: &Value) -> Value {
    match (primary, secondary) {
        (Value::Map(a), Value::Map(b)) => {
            let mut out = Map::new();
            for (key, item) in a.iter() {
                let merged = match b.get(key) {
                    Some(other) => union_shape(item, other),
                    None => item.clone(),
                };
                out.set(key.clone(), merged);
            }
            for (key, item) in b.iter() {
                if !a.has(key) {
                    out.set(key.clone(), item.clone());
                }
            }
            Value::Map(out)
        }
        _ => primary.clone(),
    }
}
