//! Content addressing: the end-to-end pipeline (OMS §21).
//!
//! `address_grain` runs compaction, NFC normalization, canonical
//! serialization, header construction, and hashing, in that order.
//! Every stage is a pure function of its input; the same record and
//! options always produce the same address, so concurrent or repeated
//! invocations need no coordination.

use sha2::{Digest, Sha256};

use crate::codec::encode_canonical;
use crate::compact::compact_fields;
use crate::error::{AddressError, ValidationError};
use crate::header::{FORMAT_VERSION, Header, NsHashWidth};
use crate::model::{
    FIELD_CREATED_AT, FIELD_NAMESPACE, FIELD_TYPE, FieldMapVersion, GrainMap, GrainType,
    Sensitivity, Value,
};
use crate::normalize::{normalize_map, normalize_text};

/// Options for the addressing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressOptions {
    /// Field-compaction table version.
    pub field_map: FieldMapVersion,
    /// Header format version byte.
    pub format_version: u8,
    /// Sensitivity class packed into header flags bits 6–7.
    pub sensitivity: Sensitivity,
    /// Namespace-hash width of the header layout.
    pub ns_width: NsHashWidth,
}

impl Default for AddressOptions {
    fn default() -> Self {
        Self {
            field_map: FieldMapVersion::V1,
            format_version: FORMAT_VERSION,
            sensitivity: Sensitivity::Public,
            // The latest published header layout (OMS §21.6) carries two
            // namespace-hash bytes.
            ns_width: NsHashWidth::Two,
        }
    }
}

/// Pipeline output: the address plus the exact bytes that were hashed,
/// kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Addressed {
    /// 64 lowercase hex characters; the grain's permanent identifier.
    pub address: String,
    /// The packed header.
    pub header: Header,
    /// The canonical payload bytes.
    pub payload: Vec<u8>,
}

/// Computes the content address of a grain record.
///
/// The record must carry `type` (a known grain type tag), `namespace`
/// (text), and `created_at` (non-negative millisecond epoch integer).
/// Failures are terminal for the record; no partial address is returned.
pub fn address_grain(record: &GrainMap, options: &AddressOptions) -> Result<Addressed, AddressError> {
    let grain_type = require_grain_type(record)?;
    let namespace = normalize_text(require_text(record, FIELD_NAMESPACE)?);
    let created_at_ms = require_timestamp(record)?;

    let compacted = compact_fields(record, options.field_map)?;
    let normalized = normalize_map(&compacted);
    let payload = encode_canonical(&Value::Map(normalized))?;

    let header = Header::build(
        options.format_version,
        options.sensitivity.flags_byte(),
        grain_type.code(),
        &namespace,
        created_at_ms,
        options.ns_width,
    );
    let address = content_address(header.as_bytes(), &payload);
    Ok(Addressed {
        address,
        header,
        payload,
    })
}

/// Hashes `header ‖ payload` and renders the digest as lowercase hex.
///
/// Pure and stateless; always returns the identical 64-character string
/// for identical input bytes.
pub fn content_address(header: &[u8], payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(header);
    hasher.update(payload);
    let digest = hasher.finalize();

    let mut address = String::with_capacity(64);
    for byte in digest {
        address.push_str(&format!("{:02x}", byte));
    }
    address
}

fn require_text<'a>(
    record: &'a GrainMap,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingRequiredField { field }),
        Some(Value::Text(s)) => Ok(s),
        Some(other) => Err(ValidationError::FieldTypeMismatch {
            field,
            expected: "text",
            found: other.kind(),
        }),
    }
}

fn require_grain_type(record: &GrainMap) -> Result<GrainType, ValidationError> {
    let tag = require_text(record, FIELD_TYPE)?;
    GrainType::from_tag(tag).ok_or_else(|| ValidationError::UnknownGrainType {
        tag: tag.to_string(),
    })
}

fn require_timestamp(record: &GrainMap) -> Result<u64, ValidationError> {
    match record.get(FIELD_CREATED_AT) {
        None | Some(Value::Null) => Err(ValidationError::MissingRequiredField {
            field: FIELD_CREATED_AT,
        }),
        Some(Value::Int(ms)) if *ms >= 0 => Ok(*ms as u64),
        Some(other) => Err(ValidationError::FieldTypeMismatch {
            field: FIELD_CREATED_AT,
            expected: "non-negative integer",
            found: other.kind(),
        }),
    }
}
