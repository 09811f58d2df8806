//! Canonical binary encoding for grain values.
//!
//! This module implements the canonical MessagePack profile (OMS §5):
//! exactly one byte representation per logical value, sorted mapping
//! keys at every depth.

pub mod primitives;
pub mod value;

pub use primitives::{MAX_LEN, Writer};
pub use value::{encode_canonical, encode_value};
