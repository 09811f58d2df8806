//! Grain header construction (OMS §4).
//!
//! Layout: `version(1) | flags(1) | type_code(1) | ns_hash(1–2) |
//! timestamp_seconds(4, big-endian)` — 8 or 9 bytes depending on the
//! namespace-hash width.

use sha2::{Digest, Sha256};

/// Header format version emitted by this crate.
pub const FORMAT_VERSION: u8 = 0x01;

/// Width of the truncated namespace hash carried in the header.
///
/// The width is a parameter of the header layout version, not a
/// constant: the published v1 observation headers carry one byte, the
/// v1.2 fact headers carry two. Callers must say which layout they are
/// producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NsHashWidth {
    One,
    Two,
}

impl NsHashWidth {
    /// Returns the number of namespace-hash bytes in the header.
    pub fn bytes(self) -> usize {
        match self {
            NsHashWidth::One => 1,
            NsHashWidth::Two => 2,
        }
    }
}

/// A packed grain header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    bytes: Vec<u8>,
    ns_width: NsHashWidth,
}

impl Header {
    /// Builds a header from grain metadata.
    ///
    /// The namespace hash is the leading prefix of a single SHA-256 over
    /// the namespace's UTF-8 bytes — a truncation, never a re-hash.
    /// `created_at_ms` is integer-divided by 1000: sub-second precision
    /// is discarded, never rounded.
    pub fn build(
        version: u8,
        flags: u8,
        type_code: u8,
        namespace: &str,
        created_at_ms: u64,
        ns_width: NsHashWidth,
    ) -> Header {
        let ns_digest = Sha256::digest(namespace.as_bytes());
        let seconds = (created_at_ms / 1000) as u32;

        let mut bytes = Vec::with_capacity(3 + ns_width.bytes() + 4);
        bytes.push(version);
        bytes.push(flags);
        bytes.push(type_code);
        bytes.extend_from_slice(&ns_digest[..ns_width.bytes()]);
        bytes.extend_from_slice(&seconds.to_be_bytes());
        Header { bytes, ns_width }
    }

    /// Returns the packed header bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the header length in bytes (8 or 9).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns false; a built header is never empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the format version byte.
    pub fn version(&self) -> u8 {
        self.bytes[0]
    }

    /// Returns the flags byte.
    pub fn flags(&self) -> u8 {
        self.bytes[1]
    }

    /// Returns the grain type code byte.
    pub fn type_code(&self) -> u8 {
        self.bytes[2]
    }

    /// Returns the truncated namespace-hash bytes.
    pub fn ns_hash(&self) -> &[u8] {
        &self.bytes[3..3 + self.ns_width.bytes()]
    }

    /// Returns the namespace-hash width this header was built with.
    pub fn ns_width(&self) -> NsHashWidth {
        self.ns_width
    }

    /// Returns the truncated timestamp in seconds.
    pub fn timestamp_seconds(&self) -> u32 {
        let start = 3 + self.ns_width.bytes();
        // The constructor always writes exactly 4 trailing bytes.
        u32::from_be_bytes(self.bytes[start..start + 4].try_into().unwrap())
    }
}
