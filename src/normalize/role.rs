//! Role and ClusterRole rule handling.

use crate::value::Value;

const RBAC_GROUP: &str = "rbac.authorization.k8s.io";

pub(crate) fn is_role(doc: &Value) -> bool {
    doc.group() == RBAC_GROUP && matches!(doc.kind(), "Role" | "ClusterRole")
}

/// A role is aggregated when it has an aggregation rule; its `rules` are then
/// filled in by a controller. An `aggregate-to-*` label only marks a role
/// whose own rules feed another one.
pub(crate) fn is_aggregated(doc: &Value) -> bool {
    doc.get_path(&["aggregationRule"]).is_some_and(Value::is_map)
}

/// Writes an empty `rules` list as null, and drops `rules` from aggregated
/// roles when aggregated roles are ignored.
pub(crate) fn normalize_rules(doc: &mut Value, ignore_aggregated: bool) {
    if !is_role(doc) {
        return;
    }
    if ignore_aggregated && is_aggregated(doc) {
        doc.remove_path(&["rules"]);
        return;
    }
    if let Some(rules) = doc.get_path_mut(&["rules"]) {
        if rules.as_list().is_some_and(|l| l.is_empty()) {
            *rules = Value::Null;
        }
    }
}
