//! Canonical MessagePack primitives.
//!
//! One write method per wire form. Every method emits the single
//! minimal-length representation for its input, so a logical value has
//! exactly one byte encoding. The representation choices are fixed by
//! OMS §5.2 and must never branch on equivalent alternatives.

use crate::error::EncodeError;

/// Upper bound on str/bin payload lengths and collection entry counts.
/// 32-bit length headers are the largest the wire format defines.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Writer for canonical MessagePack bytes.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a nil byte.
    #[inline]
    pub fn write_nil(&mut self) {
        self.buf.push(0xc0);
    }

    /// Writes a boolean.
    #[inline]
    pub fn write_bool(&mut self, v: bool) {
        self.buf.push(if v { 0xc3 } else { 0xc2 });
    }

    /// Writes the minimal integer form: positive/negative fixint when
    /// the value fits, otherwise the smallest uint family member for
    /// non-negative values and the smallest int family member for
    /// negative ones.
    pub fn write_int(&mut self, v: i64) {
        if v >= 0 {
            let u = v as u64;
            if u <= 0x7f {
                self.buf.push(u as u8);
            } else if u <= 0xff {
                self.buf.push(0xcc);
                self.buf.push(u as u8);
            } else if u <= 0xffff {
                self.buf.push(0xcd);
                self.buf.extend_from_slice(&(u as u16).to_be_bytes());
            } else if u <= 0xffff_ffff {
                self.buf.push(0xce);
                self.buf.extend_from_slice(&(u as u32).to_be_bytes());
            } else {
                self.buf.push(0xcf);
                self.buf.extend_from_slice(&u.to_be_bytes());
            }
        } else if v >= -32 {
            // Negative fixint: 0xe0..=0xff.
            self.buf.push(v as u8);
        } else if v >= i8::MIN as i64 {
            self.buf.push(0xd0);
            self.buf.push(v as u8);
        } else if v >= i16::MIN as i64 {
            self.buf.push(0xd1);
            self.buf.extend_from_slice(&(v as i16).to_be_bytes());
        } else if v >= i32::MIN as i64 {
            self.buf.push(0xd2);
            self.buf.extend_from_slice(&(v as i32).to_be_bytes());
        } else {
            self.buf.push(0xd3);
            self.buf.extend_from_slice(&v.to_be_bytes());
        }
    }

    /// Writes a 64-bit big-endian float. Floats always take the 8-byte
    /// form; NaN has no canonical bit pattern and is rejected.
    pub fn write_float(&mut self, v: f64) -> Result<(), EncodeError> {
        if v.is_nan() {
            return Err(EncodeError::FloatIsNan);
        }
        self.buf.push(0xcb);
        self.buf.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    /// Writes a string with the minimal str-family header.
    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        let len = s.len();
        if len <= 31 {
            self.buf.push(0xa0 | len as u8);
        } else if len <= 0xff {
            self.buf.push(0xd9);
            self.buf.push(len as u8);
        } else if len <= 0xffff {
            self.buf.push(0xda);
            self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        } else if len <= MAX_LEN {
            self.buf.push(0xdb);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        } else {
            return Err(EncodeError::LengthExceedsLimit {
                field: "str",
                len,
                max: MAX_LEN,
            });
        }
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Writes raw bytes with the minimal bin-family header. Bin and str
    /// are distinct families; text never uses these forms.
    pub fn write_bin(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let len = bytes.len();
        if len <= 0xff {
            self.buf.push(0xc4);
            self.buf.push(len as u8);
        } else if len <= 0xffff {
            self.buf.push(0xc5);
            self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        } else if len <= MAX_LEN {
            self.buf.push(0xc6);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        } else {
            return Err(EncodeError::LengthExceedsLimit {
                field: "bin",
                len,
                max: MAX_LEN,
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes an array header for `len` elements.
    pub fn write_array_len(&mut self, len: usize) -> Result<(), EncodeError> {
        if len <= 15 {
            self.buf.push(0x90 | len as u8);
        } else if len <= 0xffff {
            self.buf.push(0xdc);
            self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        } else if len <= MAX_LEN {
            self.buf.push(0xdd);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        } else {
            return Err(EncodeError::LengthExceedsLimit {
                field: "array",
                len,
                max: MAX_LEN,
            });
        }
        Ok(())
    }

    /// Writes a map header for `len` key/value pairs.
    pub fn write_map_len(&mut self, len: usize) -> Result<(), EncodeError> {
        if len <= 15 {
            self.buf.push(0x80 | len as u8);
        } else if len <= 0xffff {
            self.buf.push(0xde);
            self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        } else if len <= MAX_LEN {
            self.buf.push(0xdf);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        } else {
            return Err(EncodeError::LengthExceedsLimit {
                field: "map",
                len,
                max: MAX_LEN,
            });
        }
        Ok(())
    }
}
