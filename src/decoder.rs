//! The decoder contract and its combinators.
//!
//! Implementors supply exactly one method, [`Decoder::decode_cursor`]. The
//! source adapters ([`Decoder::decode`], [`Decoder::decode_buf`],
//! [`Decoder::decode_reader`]) and the combinators ([`Decoder::and`],
//! [`Decoder::or`], [`Decoder::emap`], [`Decoder::emap_try`]) are derived
//! once here and available to every decoder.

mod combinator;
mod delimited;
mod scalar;

use core::fmt;

use crate::cursor::Cursor;
use crate::error::DecodeError;

pub use combinator::{constant, fail, from_fn};
pub use combinator::{And, Constant, Emap, EmapTry, Fail, FromFn, Or};
pub use delimited::{Delimited, RawBytes, Utf8String};
pub use scalar::{
    Bool, Double, Fixed32, Fixed64, Float, Int32, Int64, Sfixed32, Sfixed64, Sint32, Sint64,
    Uint32, Uint64,
};

/// A value that can attempt to decode a `Self::Value` from a [`Cursor`].
///
/// Decoders are pure values: they hold no mutable state, so a single decoder
/// may be invoked any number of times, against any number of cursors, and
/// shared freely between threads. All consumption state lives in the cursor
/// passed to each call.
///
/// A successful decode consumes exactly the bytes representing the value and
/// leaves the cursor positioned after them. A failed decode leaves the cursor
/// position unspecified; callers that want to retry must
/// [`rewind`](Cursor::rewind) to a checkpoint taken before the attempt.
pub trait Decoder {
    /// The type this decoder produces.
    type Value;

    /// Attempts to decode a value from the cursor.
    ///
    /// This is the sole required method; decoders must be total over any
    /// byte content, reporting malformed input through `Err` rather than
    /// panicking.
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError>;

    /// Decodes a value from a contiguous byte slice.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Value, DecodeError> {
        let mut cursor = Cursor::new(bytes);
        self.decode_cursor(&mut cursor)
    }

    /// Decodes a value from any [`bytes::Buf`] source.
    ///
    /// Collapsing the source to contiguous bytes is zero-copy for sources
    /// that are already contiguous, such as [`bytes::Bytes`].
    fn decode_buf<B: bytes::Buf>(&self, mut buf: B) -> Result<Self::Value, DecodeError> {
        let bytes = buf.copy_to_bytes(buf.remaining());
        self.decode(&bytes)
    }

    /// Decodes a value from a reader, draining it first.
    ///
    /// I/O faults are reported as `Err` values like any other failure.
    #[cfg(feature = "std")]
    fn decode_reader<R: std::io::Read>(&self, mut reader: R) -> Result<Self::Value, DecodeError> {
        let mut bytes = alloc::vec::Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(DecodeError::from_error)?;
        self.decode(&bytes)
    }

    /// Sequences `self` with `other`, producing the pair of both values.
    ///
    /// `self` decodes first; on failure the pair fails identically and
    /// `other` is never invoked. On success `other` decodes from the
    /// advanced cursor. Field order is significant: `a.and(b)` is not
    /// `b.and(a)`.
    fn and<D>(self, other: D) -> And<Self, D>
    where
        Self: Sized,
        D: Decoder,
    {
        And { left: self, right: other }
    }

    /// Ordered alternation: try `self`, and only on failure try the decoder
    /// produced by `other`.
    ///
    /// The right-hand side is a thunk so that the alternative is never even
    /// constructed when `self` succeeds. Before the alternative runs, the
    /// cursor is rewound to its position from before the failed attempt. If
    /// both sides fail, the alternative's failure is returned and the
    /// original failure is discarded.
    fn or<D, F>(self, other: F) -> Or<Self, F>
    where
        Self: Sized,
        D: Decoder<Value = Self::Value>,
        F: Fn() -> D,
    {
        Or { left: self, right: other }
    }

    /// Transforms the decoded value with a refinement that may itself fail.
    ///
    /// The refinement runs only on success and performs no cursor I/O; its
    /// failure becomes the decoder's failure.
    fn emap<B, F>(self, f: F) -> Emap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> Result<B, DecodeError>,
    {
        Emap { inner: self, f }
    }

    /// Like [`emap`](Decoder::emap), but accepts a refinement reporting any
    /// error type.
    ///
    /// The error is converted with [`DecodeError::from_error`]: its message
    /// is preserved and the offset defaults to `0`, since the refinement
    /// operates on the already-decoded value rather than the input.
    fn emap_try<B, E, F>(self, f: F) -> EmapTry<Self, F>
    where
        Self: Sized,
        E: fmt::Display,
        F: Fn(Self::Value) -> Result<B, E>,
    {
        EmapTry { inner: self, f }
    }
}

impl<D: Decoder + ?Sized> Decoder for &D {
    type Value = D::Value;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        (**self).decode_cursor(cursor)
    }
}
