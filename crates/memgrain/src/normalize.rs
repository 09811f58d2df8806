//! Unicode normalization (OMS §5.1).
//!
//! Every string that reaches the serializer — values and mapping keys
//! alike — is in Unicode Normalization Form C. Two records that differ
//! only in composition (a precomposed accented character vs a base
//! character plus combining mark) therefore produce byte-identical
//! payloads and the same address.

use unicode_normalization::UnicodeNormalization;

use crate::model::{GrainMap, Value};

/// Returns the NFC form of a string.
pub fn normalize_text(s: &str) -> String {
    s.nfc().collect()
}

/// Returns an equal-shaped value with every string replaced by its NFC
/// form. Recurses into lists and maps, including map keys; non-string
/// scalars pass through unchanged.
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Text(s) => Value::Text(normalize_text(s)),
        Value::List(items) => Value::List(items.iter().map(normalize_value).collect()),
        Value::Map(map) => Value::Map(normalize_map(map)),
        other => other.clone(),
    }
}

/// Normalizes every key and value of a grain map.
pub fn normalize_map(map: &GrainMap) -> GrainMap {
    map.iter()
        .map(|(key, value)| (normalize_text(key), normalize_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // "café" precomposed vs decomposed.
    const NFC: &str = "caf\u{e9}";
    const NFD: &str = "cafe\u{301}";

    #[test]
    fn test_text_normalized_to_nfc() {
        assert_eq!(normalize_text(NFD), NFC);
        assert_eq!(normalize_text(NFC), NFC);
        assert_eq!(normalize_value(&Value::from(NFD)), Value::from(NFC));
    }

    #[test]
    fn test_map_keys_normalized() {
        let mut map = GrainMap::new();
        map.insert(NFD.to_string(), Value::from(1i64));

        let normalized = normalize_map(&map);
        assert!(normalized.contains_key(NFC));
        assert!(!normalized.contains_key(NFD));
    }

    #[test]
    fn test_recursion_into_lists_and_maps() {
        let mut inner = GrainMap::new();
        inner.insert("note".to_string(), Value::from(NFD));
        let value = Value::List(vec![Value::Map(inner), Value::from(NFD)]);

        let Value::List(items) = normalize_value(&value) else {
            panic!("expected list");
        };
        assert_eq!(items[1], Value::from(NFC));
        let Value::Map(map) = &items[0] else {
            panic!("expected map");
        };
        assert_eq!(map["note"], Value::from(NFC));
    }

    #[test]
    fn test_non_string_scalars_untouched() {
        for value in [
            Value::Null,
            Value::Bool(true),
            Value::Int(-7),
            Value::Float(0.97),
            Value::Bytes(vec![0x65, 0xcc, 0x81]),
        ] {
            assert_eq!(normalize_value(&value), value);
        }
    }
}
