//! Folding of Secret `stringData` into `data`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::diff::DiffError;
use crate::value::{Map, Value};

/// Returns true for core-group Secrets.
fn is_secret(doc: &Value) -> bool {
    doc.group().is_empty() && doc.kind() == "Secret"
}

/// Moves every `stringData` entry into `data`, base64-encoded, the way the
/// API server does on write. A folded key replaces an existing `data` key.
///
/// A `data` that is neither a map nor null is left alone together with
/// `stringData`; the schema check reports it.
pub(crate) fn fold_string_data(doc: &mut Value) -> Result<(), DiffError> {
    if !is_secret(doc) {
        return Ok(());
    }
    let Some(fields) = doc.as_map_mut() else {
        return Ok(());
    };
    if fields.get("stringData").map_or(true, Value::is_null) {
        fields.delete("stringData");
        return Ok(());
    }
    let Some(Value::Map(string_data)) = fields.get("stringData") else {
        return Err(DiffError::InvalidStringData {
            key: "stringData".to_string(),
        });
    };

    let mut encoded = Map::new();
    for (key, item) in string_data.iter() {
        let Value::String(plain) = item else {
            return Err(DiffError::InvalidStringData { key: key.clone() });
        };
        encoded.set(key.clone(), Value::String(STANDARD.encode(plain)));
    }

    let mut data = match fields.get("data") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Map(m)) => m.clone(),
        Some(_) => return Ok(()),
    };
    for (key, item) in encoded.fields {
        data.set(key, item);
    }
    fields.delete("stringData");
    fields.set("data".to_string(), Value::Map(data));
    Ok(())
}
