//! Decoders for length-delimited wire values.

use alloc::string::String;

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeErrorKind};

use super::Decoder;

/// Decoder for a length-delimited UTF-8 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8String;

impl Decoder for Utf8String {
    type Value = String;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<String, DecodeError> {
        let start = cursor.position();
        let bytes = cursor.read_length_delimited()?;
        match core::str::from_utf8(bytes) {
            Ok(s) => Ok(String::from(s)),
            Err(_) => Err(DecodeError::new(DecodeErrorKind::InvalidUtf8, start)),
        }
    }
}

/// Decoder for a length-delimited run of raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBytes;

impl Decoder for RawBytes {
    type Value = bytes::Bytes;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<bytes::Bytes, DecodeError> {
        let bytes = cursor.read_length_delimited()?;
        Ok(bytes::Bytes::copy_from_slice(bytes))
    }
}

/// Runs an inner decoder over exactly one length-delimited region.
///
/// This is how nested structures are framed on the wire: a length prefix
/// followed by the embedded value's bytes. The inner decoder must consume
/// the region entirely; leftover bytes are a failure, since they indicate
/// the inner decoder and the prefix disagree about the value's extent.
#[derive(Debug, Clone, Copy)]
pub struct Delimited<D> {
    inner: D,
}

impl<D> Delimited<D> {
    /// Wraps `inner` to decode it from a length-delimited region.
    pub fn new(inner: D) -> Self {
        Delimited { inner }
    }
}

impl<D: Decoder> Decoder for Delimited<D> {
    type Value = D::Value;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        let bytes = cursor.read_length_delimited()?;
        // Failures inside the region are re-attributed to the enclosing
        // input, not the region's own origin.
        let base = cursor.position() - bytes.len();
        let mut region = Cursor::new(bytes);
        let value = self
            .inner
            .decode_cursor(&mut region)
            .map_err(|err| err.offset_by(base))?;
        if !region.is_empty() {
            return Err(DecodeError::new(
                DecodeErrorKind::TrailingBytes {
                    count: region.remaining(),
                },
                base + region.position(),
            ));
        }
        Ok(value)
    }
}
