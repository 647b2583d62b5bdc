//! Comparison of a config with its live object.
//!
//! Two-way mode compares the normalized config with the normalized live
//! object projected onto the config's shape. Three-way mode replays the change
//! between the prior-applied record and the config onto live, and reports a
//! difference when that replay would change anything the config or the
//! record talks about.

use tracing::debug;

use crate::merge::{apply_patch, compute_patch};
use crate::normalize::{normalize_with, DiffOptions, NormalizeRole, Normalizer};
use crate::value::{from_json, from_yaml, Value, LAST_APPLIED_CONFIG_ANNOTATION};
use super::error::DiffError;
use super::prune::{prune, union_shape};
use super::result::{DiffMode, DiffResult};

/// Compares `config` with `live`, choosing the mode from what is available.
///
/// A missing live object means the config would be created. A missing
/// config is never reported as a difference here. When live carries a
/// last-applied-configuration annotation the three-way mode is used,
/// otherwise the two-way mode.
///
/// In three-way mode a null-valued field that the last-applied record lacks
/// is replayed as a deletion, so comparing a document with itself can report
/// a difference. Such fields have to be excluded through overrides.
pub fn diff(
    config: Option<&Value>,
    live: Option<&Value>,
    normalizer: Option<&dyn Normalizer>,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    let Some(live) = live else {
        debug!(mode = ?DiffMode::Create, "no live object");
        return Ok(DiffResult {
            modified: config.is_some(),
            mode: DiffMode::Create,
            predicted_live: config.cloned(),
            normalized_live: None,
            normalized_config: None,
        });
    };
    let Some(config) = config else {
        debug!(mode = ?DiffMode::NoConfig, "no config");
        return Ok(DiffResult {
            modified: false,
            mode: DiffMode::NoConfig,
            predicted_live: Some(live.clone()),
            normalized_live: Some(live.clone()),
            normalized_config: None,
        });
    };

    match last_applied_configuration(live)? {
        Some(orig) => three_way_diff(&orig, config, live, normalizer, options),
        None => two_way_diff(config, live, normalizer, options),
    }
}

/// Compares `config` with `live`, ignoring any prior-applied record.
pub fn two_way_diff(
    config: &Value,
    live: &Value,
    normalizer: Option<&dyn Normalizer>,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    let config = normalize_with(config, NormalizeRole::Config, normalizer, options)?;
    let live = normalize_with(live, NormalizeRole::Live, normalizer, options)?;

    let modified = config != prune(&live, &config);
    debug!(mode = ?DiffMode::TwoWay, modified, "computed diff");
    Ok(DiffResult {
        modified,
        mode: DiffMode::TwoWay,
        predicted_live: Some(live.clone()),
        normalized_live: Some(live),
        normalized_config: Some(config),
    })
}

/// Compares `config` with `live` using `orig` as the merge base.
pub fn three_way_diff(
    orig: &Value,
    config: &Value,
    live: &Value,
    normalizer: Option<&dyn Normalizer>,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    let mut orig = normalize_with(orig, NormalizeRole::Config, normalizer, options)?;
    let config = normalize_with(config, NormalizeRole::Config, normalizer, options)?;
    let live = normalize_with(live, NormalizeRole::Live, normalizer, options)?;

    // A namespace left out of the config comes from the destination, so
    // dropping it is not a withdrawal.
    if config.get_path(&["metadata", "namespace"]).is_none() {
        orig.remove_path(&["metadata", "namespace"]);
    }

    let patch = compute_patch(&orig, &config);
    let predicted_live = apply_patch(&live, &patch);

    // Fields only in the record must stay comparable so that withdrawing
    // them shows up as a change.
    let shape = union_shape(&config, &orig);
    let modified = prune(&predicted_live, &shape) != prune(&live, &shape);
    debug!(mode = ?DiffMode::ThreeWay, modified, "computed diff");
    Ok(DiffResult {
        modified,
        mode: DiffMode::ThreeWay,
        predicted_live: Some(predicted_live),
        normalized_live: Some(live),
        normalized_config: Some(config),
    })
}

/// Returns the manifest recorded by the last client-side apply, if any.
///
/// The record is read as JSON, falling back to YAML.
pub fn last_applied_configuration(live: &Value) -> Result<Option<Value>, DiffError> {
    let Some(raw) = live.annotation(LAST_APPLIED_CONFIG_ANNOTATION) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let parsed = match from_json(raw) {
        Ok(v) => v,
        Err(json_err) => from_yaml(raw).map_err(|_| DiffError::InvalidLastApplied(json_err.to_string()))?,
    };
    if !parsed.is_map() {
        return Err(DiffError::InvalidLastApplied(format!(
            "expected an object, got {}",
            parsed.type_name()
        )));
    }
    Ok(Some(parsed))
}
