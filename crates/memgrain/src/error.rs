//! Error types for grain validation, canonical encoding, and addressing.

use thiserror::Error;

/// Error during record validation.
///
/// Validation failures abort address computation for the record; no
/// partial address is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("required field {field:?} is missing")]
    MissingRequiredField { field: &'static str },

    #[error("field {field:?} has the wrong type: expected {expected}, found {found}")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown grain type tag {tag:?}")]
    UnknownGrainType { tag: String },
}

/// Error during canonical encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("float value is NaN")]
    FloatIsNan,

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Reserved for value variants introduced by future format versions.
    #[error("unsupported value type: {kind}")]
    UnsupportedType { kind: &'static str },
}

/// Error from the end-to-end addressing pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
