//! memgrain: canonical encoding and content addressing for Memory Grain
//! (.mg) records.
//!
//! This crate implements the OMS v1.2 canonicalization pipeline that
//! turns a grain record into its permanent content address:
//!
//! 1. **Field compaction** — top-level field names rewritten to short
//!    canonical codes per a versioned table; Null fields dropped
//! 2. **Unicode normalization** — every string key and value to NFC
//! 3. **Canonical serialization** — recursively sorted mapping keys,
//!    one binary MessagePack representation per value
//! 4. **Header construction** — `version | flags | type_code | ns_hash
//!    | timestamp_seconds` as a fixed-width byte sequence
//! 5. **Content addressing** — lowercase hex SHA-256 of header ‖ payload
//!
//! The address is deterministic across platforms and stable for the
//! lifetime of the format: two records produce the same address exactly
//! when their canonical header and payload bytes are identical.
//!
//! # Quick Start
//!
//! ```rust
//! use memgrain::{AddressOptions, GrainMap, Value, address_grain};
//!
//! let mut grain = GrainMap::new();
//! grain.insert("type".to_string(), Value::from("fact"));
//! grain.insert("subject".to_string(), Value::from("agent-007"));
//! grain.insert("confidence".to_string(), Value::from(1.0));
//! grain.insert("namespace".to_string(), Value::from("safety"));
//! grain.insert("created_at".to_string(), Value::from(1_768_471_200_000i64));
//!
//! let addressed = address_grain(&grain, &AddressOptions::default()).unwrap();
//! assert_eq!(addressed.address.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Value, GrainType, field maps)
//! - [`codec`]: Canonical binary encoding
//! - [`compact`]: Field-name compaction
//! - [`normalize`]: Unicode NFC normalization
//! - [`header`]: Fixed-width header construction
//! - [`address`]: The end-to-end addressing pipeline
//! - [`error`]: Error types
//!
//! # Purity
//!
//! Every stage is a side-effect-free function over immutable inputs.
//! There is no shared mutable state; independent records can be
//! addressed concurrently with no coordination. The only shared
//! resource is the immutable field-compaction table, loaded once.

pub mod address;
pub mod codec;
pub mod compact;
pub mod error;
pub mod header;
pub mod model;
pub mod normalize;

// Re-export commonly used types at crate root
pub use address::{AddressOptions, Addressed, address_grain, content_address};
pub use codec::{Writer, encode_canonical, encode_value};
pub use compact::compact_fields;
pub use error::{AddressError, EncodeError, ValidationError};
pub use header::{FORMAT_VERSION, Header, NsHashWidth};
pub use model::{FieldMapVersion, GrainMap, GrainType, Sensitivity, Value};
pub use normalize::{normalize_map, normalize_text, normalize_value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// OMS spec version this crate implements.
pub const SPEC_VERSION: &str = "1.2";
