//! Positioned reader over binary input.
//!
//! [`Cursor`] is the primitive-read facade every decoder consumes: it borrows
//! the full input slice, tracks an absolute byte offset, and exposes the wire
//! format's three primitive shapes (varints, fixed-width little-endian
//! integers, and length-delimited regions). Reads advance the position on
//! success; [`Cursor::checkpoint`] and [`Cursor::rewind`] give callers the
//! full-rewind guarantee that ordered alternation depends on.

use crate::error::{DecodeError, DecodeErrorKind};

/// Maximum encoded size of a leb128 varint holding a `u64`.
const MAX_VARINT_BYTES: usize = 10;

/// A positioned reader over a borrowed byte slice.
///
/// The cursor is the only mutable state in a decode call: decoders are pure
/// values and all consumption bookkeeping lives here. A cursor must not be
/// shared between in-flight decode calls.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

/// A saved cursor position, restored with [`Cursor::rewind`].
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint(usize);

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Returns the current byte offset from the start of the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if no unread bytes remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Saves the current position.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Restores a previously saved position.
    ///
    /// Rewinding is an O(1) index reset; a failed decode attempt can always
    /// be fully unwound regardless of how far it advanced.
    #[inline]
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Reads `n` bytes, advancing past them.
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        match self.buf.get(self.pos..self.pos + n) {
            Some(bytes) => {
                self.pos += n;
                Ok(bytes)
            }
            None => Err(DecodeError::new(
                DecodeErrorKind::UnexpectedEndOfInput,
                self.pos,
            )),
        }
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        match self.buf.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            None => Err(DecodeError::new(
                DecodeErrorKind::UnexpectedEndOfInput,
                self.pos,
            )),
        }
    }

    /// Reads a leb128 varint of at most [`MAX_VARINT_BYTES`] bytes.
    ///
    /// Rejects unterminated encodings and encodings whose value does not fit
    /// in a `u64`, so the read is bounded for any input content.
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let start = self.pos;
        let mut value: u64 = 0;
        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_byte()?;
            // The tenth byte may only carry the final bit of a u64; anything
            // larger, or a continuation bit, makes the varint malformed.
            if i == MAX_VARINT_BYTES - 1 && byte > 1 {
                return Err(DecodeError::new(DecodeErrorKind::MalformedVarint, start));
            }
            value |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::new(DecodeErrorKind::MalformedVarint, start))
    }

    /// Reads a little-endian `u32`.
    pub fn read_fixed32(&mut self) -> Result<u32, DecodeError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(raw))
    }

    /// Reads a little-endian `u64`.
    pub fn read_fixed64(&mut self) -> Result<u64, DecodeError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(raw))
    }

    /// Reads a varint length prefix followed by that many bytes.
    ///
    /// The length is validated against the remaining input before any bytes
    /// are consumed past the prefix, so a hostile prefix cannot trigger an
    /// oversized read or allocation.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8], DecodeError> {
        let start = self.pos;
        let len = self.read_varint()?;
        let out_of_bounds = || {
            DecodeError::new(DecodeErrorKind::LengthOutOfBounds { len }, start)
        };
        let len = usize::try_from(len).map_err(|_| out_of_bounds())?;
        if len > self.remaining() {
            return Err(out_of_bounds());
        }
        self.take(len)
    }
}
