//! Decoding failures.

use alloc::borrow::Cow;
use alloc::string::ToString;
use core::fmt;

use thiserror::Error;

/// The reason a decode attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("malformed leb128 varint")]
    MalformedVarint,
    #[error("length prefix {len} exceeds remaining input")]
    LengthOutOfBounds { len: u64 },
    #[error("invalid UTF-8 in length-delimited string")]
    InvalidUtf8,
    #[error("integer overflow: value does not fit in {target_type}")]
    IntegerOverflow { target_type: &'static str },
    #[error("{count} trailing bytes after delimited value")]
    TrailingBytes { count: usize },
    #[error("{0}")]
    Message(Cow<'static, str>),
}

/// A decoding failure: what went wrong, and the byte offset at which it was
/// detected.
///
/// The offset is `0` when no more precise position is known, e.g. for
/// failures raised by a refinement function operating on an already-decoded
/// value rather than on the input itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (at byte {offset})")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    offset: usize,
}

impl DecodeError {
    /// Creates a failure from a kind and the byte offset where it occurred.
    pub fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        DecodeError { kind, offset }
    }

    /// Creates a failure from a message, with no known offset.
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        DecodeError {
            kind: DecodeErrorKind::Message(message.into()),
            offset: 0,
        }
    }

    /// Creates a failure from an arbitrary underlying error.
    ///
    /// The message is the error's `Display` rendering; the offset defaults
    /// to `0` since the underlying error carries no position information.
    pub fn from_error<E: fmt::Display>(error: E) -> Self {
        DecodeError {
            kind: DecodeErrorKind::Message(error.to_string().into()),
            offset: 0,
        }
    }

    /// Returns the reason for the failure.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the byte offset at which the failure was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Shifts the failure's offset by `base` bytes.
    ///
    /// Used when a failure was produced against a sub-slice of the input and
    /// must be re-attributed to a position in the enclosing input.
    #[must_use]
    pub fn offset_by(mut self, base: usize) -> Self {
        self.offset += base;
        self
    }
}
