//! Field compaction (OMS §6).
//!
//! Rewrites a record's top-level field names to their short canonical
//! codes and drops Null-valued fields. Compaction is deliberately not
//! recursive: the table is defined for the record's top level only, so
//! nested mappings such as `invalidation_policy` pass through verbatim
//! and are only re-sorted by the serializer.

use crate::error::ValidationError;
use crate::model::{FIELD_NAMESPACE, FIELD_TYPE, FieldMapVersion, GrainMap, Value};

/// Compacts a grain record's top-level field names.
///
/// Null-valued fields are removed before compaction; fields not present
/// in the version's table keep their full names (forward compatibility
/// for fields added after the table was frozen). Fails when `type` or
/// `namespace` is absent or Null.
pub fn compact_fields(
    record: &GrainMap,
    version: FieldMapVersion,
) -> Result<GrainMap, ValidationError> {
    for field in [FIELD_TYPE, FIELD_NAMESPACE] {
        match record.get(field) {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingRequiredField { field });
            }
            Some(_) => {}
        }
    }

    let mut compacted = GrainMap::new();
    for (key, value) in record {
        if value.is_null() {
            continue;
        }
        let key = match version.short_code(key) {
            Some(code) => code.to_string(),
            None => key.clone(),
        };
        compacted.insert(key, value.clone());
    }
    Ok(compacted)
}
