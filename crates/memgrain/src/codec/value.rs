//! Canonical value encoding.
//!
//! Serializes a [`Value`] tree into its single canonical byte form.
//! Mapping keys are emitted in UTF-8 byte order at every depth — the
//! `BTreeMap` backing [`crate::model::GrainMap`] already iterates in that
//! order — while list element order is semantically significant and
//! preserved as-is.

use crate::codec::primitives::Writer;
use crate::error::EncodeError;
use crate::model::Value;

/// Encodes a value to canonical MessagePack bytes.
pub fn encode_canonical(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    encode_value(&mut writer, value)?;
    Ok(writer.into_bytes())
}

/// Encodes a single value into the writer.
pub fn encode_value(writer: &mut Writer, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Null => {
            writer.write_nil();
            Ok(())
        }
        Value::Bool(v) => {
            writer.write_bool(*v);
            Ok(())
        }
        Value::Int(v) => {
            writer.write_int(*v);
            Ok(())
        }
        Value::Float(v) => writer.write_float(*v),
        Value::Text(s) => writer.write_str(s),
        Value::Bytes(b) => writer.write_bin(b),
        Value::List(items) => {
            writer.write_array_len(items.len())?;
            for item in items {
                encode_value(writer, item)?;
            }
            Ok(())
        }
        Value::Map(map) => {
            writer.write_map_len(map.len())?;
            for (key, val) in map {
                writer.write_str(key)?;
                encode_value(writer, val)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GrainMap;

    fn hex(bytes: &[u8]) -> String {
        let mut s = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            s.push_str(&format!("{:02x}", byte));
        }
        s
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode_canonical(&Value::Null).unwrap(), [0xc0]);
        assert_eq!(encode_canonical(&Value::Bool(true)).unwrap(), [0xc3]);
        assert_eq!(encode_canonical(&Value::Int(5)).unwrap(), [0x05]);
        assert_eq!(
            encode_canonical(&Value::from("t")).unwrap(),
            [0xa1, b't']
        );
    }

    #[test]
    fn test_text_and_bytes_are_distinct_on_the_wire() {
        let text = encode_canonical(&Value::from("ab")).unwrap();
        let bytes = encode_canonical(&Value::Bytes(vec![b'a', b'b'])).unwrap();
        assert_eq!(text, [0xa2, b'a', b'b']);
        assert_eq!(bytes, [0xc4, 0x02, b'a', b'b']);
    }

    #[test]
    fn test_list_order_preserved() {
        let list = Value::List(vec![Value::Int(2), Value::Int(1), Value::Int(3)]);
        assert_eq!(encode_canonical(&list).unwrap(), [0x93, 0x02, 0x01, 0x03]);
    }

    #[test]
    fn test_map_keys_sorted() {
        let mut map = GrainMap::new();
        map.insert("ns".to_string(), Value::from("safety"));
        map.insert("c".to_string(), Value::from(1.0));
        map.insert("ip".to_string(), Value::Map(GrainMap::new()));

        let encoded = encode_canonical(&Value::Map(map)).unwrap();
        // fixmap(3), then "c", "ip", "ns" in byte order.
        assert_eq!(encoded[0], 0x83);
        assert_eq!(&encoded[1..3], [0xa1, b'c']);
        assert_eq!(&encoded[12..15], [0xa2, b'i', b'p']);
        assert_eq!(&encoded[16..19], [0xa2, b'n', b's']);
    }

    #[test]
    fn test_nested_map_keys_sorted() {
        let mut inner = GrainMap::new();
        inner.insert("mode".to_string(), Value::from("locked"));
        inner.insert("authorized".to_string(), Value::List(vec![]));
        let mut outer = GrainMap::new();
        outer.insert("ip".to_string(), Value::Map(inner));

        let encoded = encode_canonical(&Value::Map(outer)).unwrap();
        assert_eq!(
            hex(&encoded),
            "81a2697082aa617574686f72697a656490a46d6f6465a66c6f636b6564"
        );
    }

    #[test]
    fn test_observation_payload_vector() {
        // The "autonomy" lidar observation from the OMS worked example,
        // already compacted under the v1 field map.
        let mut map = GrainMap::new();
        map.insert("t".to_string(), Value::from("observation"));
        map.insert("observer_id".to_string(), Value::from("lidar-front"));
        map.insert("observer_type".to_string(), Value::from("lidar"));
        map.insert("s".to_string(), Value::from("raven-001"));
        map.insert("o".to_string(), Value::from("obstacle:3.2m"));
        map.insert("c".to_string(), Value::from(0.97));
        map.insert("ns".to_string(), Value::from("autonomy"));

        let encoded = encode_canonical(&Value::Map(map)).unwrap();
        assert_eq!(
            hex(&encoded),
            "87a163cb3fef0a3d70a3d70aa26e73a86175746f6e6f6d79a16fad6f6273\
             7461636c653a332e326dab6f627365727665725f6964ab6c696461722d66\
             726f6e74ad6f627365727665725f74797065a56c69646172a173a9726176\
             656e2d303031a174ab6f62736572766174696f6e"
        );
    }

    #[test]
    fn test_insertion_order_does_not_change_bytes() {
        let mut a = GrainMap::new();
        a.insert("t".to_string(), Value::from("fact"));
        a.insert("ns".to_string(), Value::from("safety"));

        let mut b = GrainMap::new();
        b.insert("ns".to_string(), Value::from("safety"));
        b.insert("t".to_string(), Value::from("fact"));

        assert_eq!(
            encode_canonical(&Value::Map(a)).unwrap(),
            encode_canonical(&Value::Map(b)).unwrap()
        );
    }

    #[test]
    fn test_nan_inside_map_rejected() {
        let mut map = GrainMap::new();
        map.insert("c".to_string(), Value::Float(f64::NAN));
        assert_eq!(
            encode_canonical(&Value::Map(map)),
            Err(EncodeError::FloatIsNan)
        );
    }
}
