//! Normalization pipeline that brings config and live documents into a
//! comparable form.

use tracing::{debug, trace};

use crate::diff::DiffError;
use crate::schema::{GroupKind, Scope, SchemaRegistry};
use crate::value::Value;
use super::options::DiffOptions;
use super::role::normalize_rules;
use super::secret::fold_string_data;

/// Which side of a comparison a document is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizeRole {
    Config,
    Live,
}

/// Normalizer is a caller-supplied step that runs after the built-in ones.
pub trait Normalizer {
    fn normalize(&self, doc: &mut Value, role: NormalizeRole) -> Result<(), DiffError>;
}

impl<F> Normalizer for F
where
    F: Fn(&mut Value, NormalizeRole) -> Result<(), DiffError>,
{
    fn normalize(&self, doc: &mut Value, role: NormalizeRole) -> Result<(), DiffError> {
        self(doc, role)
    }
}

/// Normalizes `resource` with the built-in steps only.
pub fn normalize(resource: &Value, role: NormalizeRole, options: &DiffOptions) -> Result<Value, DiffError> {
    normalize_with(resource, role, None, options)
}

/// Normalizes `resource`, finishing with `normalizer` when one is given.
///
/// Steps run in order: namespace erasure, Secret stringData folding, the
/// typed round trip, role rule handling, override path removal and finally
/// the custom normalizer.
pub fn normalize_with(
    resource: &Value,
    role: NormalizeRole,
    normalizer: Option<&dyn Normalizer>,
    options: &DiffOptions,
) -> Result<Value, DiffError> {
    let registry = options.registry();
    let gk = GroupKind::new(resource.group(), resource.kind());
    debug!(kind = %gk, ?role, "normalizing resource");

    let mut doc = resource.clone();
    erase_namespace(&mut doc, registry.scope(&gk));
    fold_string_data(&mut doc)?;
    let mut doc = round_trip(&doc, &gk, &registry)?;
    normalize_rules(&mut doc, options.ignore_aggregated_roles);

    for pointer in options.ignored_paths(&gk) {
        if doc.remove_pointer(pointer).is_some() {
            trace!(kind = %gk, %pointer, "removed ignored path");
        }
    }
    drop_empty_annotations(&mut doc);

    if let Some(normalizer) = normalizer {
        normalizer.normalize(&mut doc, role)?;
    }
    Ok(doc)
}

/// Clears the namespace unless the kind is known to be namespaced.
fn erase_namespace(doc: &mut Value, scope: Option<Scope>) {
    if scope != Some(Scope::Namespaced) && doc.remove_path(&["metadata", "namespace"]).is_some() {
        trace!("erased namespace");
    }
    drop_empty_annotations(doc);
}

/// Removes a null or empty annotations map, which compares equal to none.
fn drop_empty_annotations(doc: &mut Value) {
    let empty = match doc.get_path(&["metadata", "annotations"]) {
        Some(Value::Null) => true,
        Some(Value::Map(m)) => m.is_empty(),
        _ => false,
    };
    if empty {
        doc.remove_path(&["metadata", "annotations"]);
    }
}

fn round_trip(doc: &Value, gk: &GroupKind, registry: &SchemaRegistry) -> Result<Value, DiffError> {
    let Some(codec) = registry.codec(gk) else {
        trace!(kind = %gk, "no schema registered");
        return Ok(doc.clone());
    };
    let typed = codec.decode(doc).map_err(|source| DiffError::Schema {
        kind: gk.clone(),
        source,
    })?;
    trace!(kind = %gk, "round-tripped through schema");
    Ok(codec.encode(&typed))
}
