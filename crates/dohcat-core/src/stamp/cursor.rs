//! Bounds-checked reader over a decoded stamp buffer.

use crate::StampError;

/// Continuation flag in a VLP length byte.
const VLP_MORE: u8 = 0x80;

/// Forward-only reader over a byte slice.
///
/// Mandatory fields go through [`read_array`](Self::read_array) and fail on
/// truncation. The LP and VLP readers are lenient: running off the end yields
/// an empty value instead of an error.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Start reading at the beginning of `buf`
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes left to read
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current offset into the buffer
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Read one byte, or `None` at end of buffer
    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.buf.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Read exactly `n` bytes or fail without moving the cursor
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], StampError> {
        let available = self.remaining();
        if n > available {
            return Err(StampError::Truncated {
                needed: n,
                available,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a fixed-size field
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], StampError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a length-prefixed string.
    ///
    /// A missing length byte or a length that overruns the buffer both give
    /// an empty string. In the overrun case the length byte stays consumed.
    pub fn read_lp(&mut self) -> String {
        let Some(len) = self.read_u8() else {
            return String::new();
        };
        match self.read_bytes(usize::from(len)) {
            Ok(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Err(_) => String::new(),
        }
    }

    /// Read a variable-length-prefixed list of opaque segments.
    ///
    /// Stops on a segment without the continuation bit, at end of buffer, or
    /// before a segment whose declared length would overrun the buffer.
    /// Zero-length segments are consumed but not returned.
    pub fn read_vlp(&mut self) -> Vec<&'a [u8]> {
        let mut segments = Vec::new();
        while let Some(len_byte) = self.read_u8() {
            let more = len_byte & VLP_MORE != 0;
            let len = usize::from(len_byte & !VLP_MORE);
            if len > 0 {
                match self.read_bytes(len) {
                    Ok(segment) => segments.push(segment),
                    Err(_) => break,
                }
            }
            if !more {
                break;
            }
        }
        segments
    }
}
