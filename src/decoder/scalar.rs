//! Decoders for the wire format's scalar mappings.

// This module uses `as` casts which have been reviewed for correctness.
#![allow(clippy::as_conversions)]

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeErrorKind};

use super::Decoder;

/// Decoder for a varint `uint64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uint64;

impl Decoder for Uint64 {
    type Value = u64;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<u64, DecodeError> {
        cursor.read_varint()
    }
}

/// Decoder for a varint `uint32`.
///
/// Values that do not fit 32 bits are rejected rather than truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uint32;

impl Decoder for Uint32 {
    type Value = u32;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<u32, DecodeError> {
        let start = cursor.position();
        let value = cursor.read_varint()?;
        u32::try_from(value).map_err(|_| {
            DecodeError::new(
                DecodeErrorKind::IntegerOverflow { target_type: "u32" },
                start,
            )
        })
    }
}

/// Decoder for a varint `int64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int64;

impl Decoder for Int64 {
    type Value = i64;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
        Ok(cursor.read_varint()? as i64)
    }
}

/// Decoder for a varint `int32`.
///
/// Negative values are carried sign-extended through 64 bits on the wire;
/// decoding takes the low 32 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int32;

impl Decoder for Int32 {
    type Value = i32;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<i32, DecodeError> {
        Ok(cursor.read_varint()? as i32)
    }
}

#[inline]
pub(crate) const fn zigzag_decode_32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ (-((n & 1) as i32))
}

#[inline]
pub(crate) const fn zigzag_decode_64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ (-((n & 1) as i64))
}

/// Decoder for a zigzag-encoded `sint32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sint32;

impl Decoder for Sint32 {
    type Value = i32;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<i32, DecodeError> {
        let start = cursor.position();
        let value = cursor.read_varint()?;
        let value = u32::try_from(value).map_err(|_| {
            DecodeError::new(
                DecodeErrorKind::IntegerOverflow { target_type: "u32" },
                start,
            )
        })?;
        Ok(zigzag_decode_32(value))
    }
}

/// Decoder for a zigzag-encoded `sint64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sint64;

impl Decoder for Sint64 {
    type Value = i64;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
        Ok(zigzag_decode_64(cursor.read_varint()?))
    }
}

/// Decoder for a varint `bool`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bool;

impl Decoder for Bool {
    type Value = bool;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<bool, DecodeError> {
        Ok(cursor.read_varint()? != 0)
    }
}

/// Decoder for a little-endian `fixed32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixed32;

impl Decoder for Fixed32 {
    type Value = u32;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<u32, DecodeError> {
        cursor.read_fixed32()
    }
}

/// Decoder for a little-endian `fixed64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixed64;

impl Decoder for Fixed64 {
    type Value = u64;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<u64, DecodeError> {
        cursor.read_fixed64()
    }
}

/// Decoder for a little-endian `sfixed32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sfixed32;

impl Decoder for Sfixed32 {
    type Value = i32;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<i32, DecodeError> {
        Ok(cursor.read_fixed32()? as i32)
    }
}

/// Decoder for a little-endian `sfixed64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sfixed64;

impl Decoder for Sfixed64 {
    type Value = i64;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
        Ok(cursor.read_fixed64()? as i64)
    }
}

/// Decoder for a little-endian `float`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

impl Decoder for Float {
    type Value = f32;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(cursor.read_fixed32()?))
    }
}

/// Decoder for a little-endian `double`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Double;

impl Decoder for Double {
    type Value = f64;

    #[inline]
    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(cursor.read_fixed64()?))
    }
}
