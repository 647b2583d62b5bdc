//! Comparison of index-paired sequences of configs and live objects.

use tracing::debug;

use crate::normalize::{DiffOptions, Normalizer};
use crate::value::Value;
use super::compare::diff;
use super::error::DiffError;
use super::result::DiffResultList;

/// Runs [`diff`] over each `(configs[i], lives[i])` pair in order and stops
/// at the first error.
pub fn diff_array(
    configs: &[Option<Value>],
    lives: &[Option<Value>],
    normalizer: Option<&dyn Normalizer>,
    options: &DiffOptions,
) -> Result<DiffResultList, DiffError> {
    if configs.len() != lives.len() {
        return Err(DiffError::LengthMismatch {
            configs: configs.len(),
            lives: lives.len(),
        });
    }

    let mut results = DiffResultList::new();
    for (config, live) in configs.iter().zip(lives) {
        results.push(diff(config.as_ref(), live.as_ref(), normalizer, options)?);
    }
    debug!(count = results.len(), modified = results.modified, "diffed resources");
    Ok(results)
}
