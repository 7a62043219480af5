//! Composable typed decoders for protobuf-style length-delimited wire formats.
//!
//! The crate is built around a single contract: [`Decoder::decode_cursor`],
//! which attempts to produce a value from a positioned [`Cursor`] over binary
//! input. Everything else is derived from it: adapters that accept byte
//! slices, [`bytes::Buf`] sources, or readers, and combinators that compose
//! small decoders into decoders for structured types.
//!
//! ```
//! use protodec::decoder::{Decoder, Uint64, Utf8String};
//!
//! let pair = Uint64.and(Utf8String);
//! // varint 42, then length-delimited "ok"
//! let bytes = [0x2a, 0x02, b'o', b'k'];
//! assert_eq!(pair.decode(&bytes).unwrap(), (42, "ok".into()));
//! ```

#![no_std]
#![deny(clippy::as_conversions)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod cursor;
pub mod decoder;
pub mod error;

pub use cursor::Cursor;
pub use decoder::Decoder;
pub use error::{DecodeError, DecodeErrorKind};
