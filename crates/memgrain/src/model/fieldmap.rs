//! Versioned field-compaction tables (OMS §6, Appendix C).
//!
//! Each table maps full field names to short canonical codes. Tables are
//! immutable and append-only across format versions: a short code never
//! changes meaning once published, because it is baked into every
//! address computed under that version.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

lazy_static! {
    static ref FIELD_MAP_V1: FxHashMap<&'static str, &'static str> = {
        let mut m = FxHashMap::default();
        m.insert("type", "t");
        m.insert("subject", "s");
        m.insert("relation", "r");
        m.insert("object", "o");
        m.insert("confidence", "c");
        m.insert("source_type", "st");
        m.insert("created_at", "ca");
        m.insert("namespace", "ns");
        m.insert("author_did", "adid");
        m.insert("invalidation_policy", "ip");
        m
    };
}

/// Version selector for the field-compaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldMapVersion {
    /// The OMS v1 table (Appendix C).
    #[default]
    V1,
}

impl FieldMapVersion {
    /// Returns the short code for `field`, or `None` when the field is
    /// not in this version's table. Unlisted fields pass through
    /// verbatim during compaction.
    pub fn short_code(self, field: &str) -> Option<&'static str> {
        match self {
            FieldMapVersion::V1 => FIELD_MAP_V1.get(field).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_table() {
        let v1 = FieldMapVersion::V1;
        assert_eq!(v1.short_code("type"), Some("t"));
        assert_eq!(v1.short_code("subject"), Some("s"));
        assert_eq!(v1.short_code("relation"), Some("r"));
        assert_eq!(v1.short_code("object"), Some("o"));
        assert_eq!(v1.short_code("confidence"), Some("c"));
        assert_eq!(v1.short_code("source_type"), Some("st"));
        assert_eq!(v1.short_code("created_at"), Some("ca"));
        assert_eq!(v1.short_code("namespace"), Some("ns"));
        assert_eq!(v1.short_code("author_did"), Some("adid"));
        assert_eq!(v1.short_code("invalidation_policy"), Some("ip"));
    }

    #[test]
    fn test_unlisted_fields_have_no_code() {
        let v1 = FieldMapVersion::V1;
        assert_eq!(v1.short_code("observer_id"), None);
        assert_eq!(v1.short_code("mode"), None);
        assert_eq!(v1.short_code(""), None);
    }
}
