//! Results of a comparison.

use serde::Serialize;

use crate::value::Value;

/// How a DiffResult was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffMode {
    /// There is no live object; the config would be created.
    Create,
    /// There is no config; nothing is compared.
    NoConfig,
    /// Config against live.
    TwoWay,
    /// Config against live, using the prior-applied record as merge base.
    ThreeWay,
}

/// DiffResult is the verdict of comparing one config with one live object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub modified: bool,
    pub mode: DiffMode,
    /// What live would look like after a sync.
    pub predicted_live: Option<Value>,
    pub normalized_live: Option<Value>,
    pub normalized_config: Option<Value>,
}

/// DiffResultList holds one DiffResult per input pair, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResultList {
    pub diffs: Vec<DiffResult>,
    /// True if any element is modified.
    pub modified: bool,
}

impl DiffResultList {
    pub fn new() -> Self {
        DiffResultList::default()
    }

    pub fn push(&mut self, result: DiffResult) {
        self.modified |= result.modified;
        self.diffs.push(result);
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiffResult> {
        self.diffs.iter()
    }
}
