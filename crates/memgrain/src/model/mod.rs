//! Data model types for grain records.
//!
//! This module contains the core types for representing grains:
//! - Values (the closed tagged union the canonical encoding recognizes)
//! - Grain metadata (type codes, sensitivity flags, required fields)
//! - Versioned field-compaction tables

pub mod fieldmap;
pub mod grain;
pub mod value;

pub use fieldmap::FieldMapVersion;
pub use grain::{FIELD_CREATED_AT, FIELD_NAMESPACE, FIELD_TYPE, GrainType, Sensitivity};
pub use value::{GrainMap, Value};
