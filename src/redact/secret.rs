//! Redaction of Secret values for display.

use std::collections::BTreeMap;

use tracing::debug;

use crate::diff::{last_applied_configuration, DiffError};
use crate::normalize::fold_string_data;
use crate::value::{to_json, Value, LAST_APPLIED_CONFIG_ANNOTATION};

const FILLER: &str = "+";

/// Placeholder length for the first distinct value of a key; each further
/// distinct value gets four more characters.
const BASE_LENGTH: usize = 8;
const LENGTH_STEP: usize = 4;

/// Tracks, per key, the distinct values seen in scan order.
#[derive(Debug, Default)]
struct Replacements {
    seen: BTreeMap<String, Vec<Value>>,
}

impl Replacements {
    fn observe(&mut self, data: Option<&Value>) {
        let Some(Value::Map(data)) = data else {
            return;
        };
        for (key, item) in data.iter() {
            if item.is_null() {
                continue;
            }
            let values = self.seen.entry(key.clone()).or_default();
            if !values.contains(item) {
                values.push(item.clone());
            }
        }
    }

    fn placeholder(&self, key: &str, item: &Value) -> Option<String> {
        let rank = self.seen.get(key)?.iter().position(|v| v == item)?;
        Some(FILLER.repeat(BASE_LENGTH + LENGTH_STEP * rank))
    }

    fn apply(&self, doc: &mut Value) {
        let Some(Value::Map(data)) = doc.get_path_mut(&["data"]) else {
            return;
        };
        for (key, item) in data.fields.iter_mut() {
            if let Some(placeholder) = self.placeholder(key, item) {
                *item = Value::String(placeholder);
            }
        }
    }
}

/// Returns copies of `target` and `live` with every `data` value replaced by
/// a run of `+` characters.
///
/// Values are scanned in the order target, live, then the record in live's
/// last-applied-configuration annotation. For each key the first distinct
/// value becomes 8 characters, the second 12 and the third 16, so equal
/// values share a placeholder and different values never do. The redacted
/// record replaces the original annotation.
pub fn hide_secret_data(
    target: Option<&Value>,
    live: Option<&Value>,
) -> Result<(Option<Value>, Option<Value>), DiffError> {
    let mut target = target.cloned();
    let mut live = live.cloned();
    let mut orig = match live {
        Some(ref live) => last_applied_configuration(live)?,
        None => None,
    };

    for doc in [&mut target, &mut live, &mut orig].into_iter().flatten() {
        fold_string_data(doc)?;
    }

    let mut replacements = Replacements::default();
    for doc in [&target, &live, &orig] {
        replacements.observe(doc.as_ref().and_then(|d| d.get_path(&["data"])));
    }
    for doc in [&mut target, &mut live, &mut orig].into_iter().flatten() {
        replacements.apply(doc);
    }
    debug!(keys = replacements.seen.len(), "redacted secret data");

    if let (Some(orig), Some(live)) = (orig, live.as_mut()) {
        let record = to_json(&orig).map_err(|e| DiffError::InvalidLastApplied(e.to_string()))?;
        live.set_path(
            &["metadata", "annotations", LAST_APPLIED_CONFIG_ANNOTATION],
            Value::String(record),
        );
    }
    Ok((target, live))
}
