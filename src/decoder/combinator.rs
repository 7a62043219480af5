//! Decoder combinators and trivial-decoder factories.

use alloc::borrow::Cow;
use core::fmt;
use core::marker::PhantomData;

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeErrorKind};

use super::Decoder;

/// Sequential pairing of two decoders. Built by [`Decoder::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    pub(super) left: L,
    pub(super) right: R,
}

impl<L, R> Decoder for And<L, R>
where
    L: Decoder,
    R: Decoder,
{
    type Value = (L::Value, R::Value);

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        let left = self.left.decode_cursor(cursor)?;
        let right = self.right.decode_cursor(cursor)?;
        Ok((left, right))
    }
}

/// Ordered alternation of two decoders. Built by [`Decoder::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<L, F> {
    pub(super) left: L,
    pub(super) right: F,
}

impl<L, D, F> Decoder for Or<L, F>
where
    L: Decoder,
    D: Decoder<Value = L::Value>,
    F: Fn() -> D,
{
    type Value = L::Value;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        let checkpoint = cursor.checkpoint();
        match self.left.decode_cursor(cursor) {
            Ok(value) => Ok(value),
            Err(_) => {
                // The failed attempt may have consumed bytes; the
                // alternative must see the input as if it had not.
                cursor.rewind(checkpoint);
                (self.right)().decode_cursor(cursor)
            }
        }
    }
}

/// Refinement of a decoded value with an explicitly fallible function.
/// Built by [`Decoder::emap`].
#[derive(Debug, Clone, Copy)]
pub struct Emap<D, F> {
    pub(super) inner: D,
    pub(super) f: F,
}

impl<D, B, F> Decoder for Emap<D, F>
where
    D: Decoder,
    F: Fn(D::Value) -> Result<B, DecodeError>,
{
    type Value = B;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        let value = self.inner.decode_cursor(cursor)?;
        (self.f)(value)
    }
}

/// Refinement of a decoded value with a function reporting an arbitrary
/// error type. Built by [`Decoder::emap_try`].
#[derive(Debug, Clone, Copy)]
pub struct EmapTry<D, F> {
    pub(super) inner: D,
    pub(super) f: F,
}

impl<D, B, E, F> Decoder for EmapTry<D, F>
where
    D: Decoder,
    E: fmt::Display,
    F: Fn(D::Value) -> Result<B, E>,
{
    type Value = B;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        let value = self.inner.decode_cursor(cursor)?;
        (self.f)(value).map_err(DecodeError::from_error)
    }
}

/// Lifts a cursor-consuming function into a decoder.
///
/// This is the escape hatch for decoders the combinators cannot express:
/// the function receives the cursor directly and performs its own primitive
/// reads.
pub fn from_fn<A, F>(f: F) -> FromFn<F>
where
    F: Fn(&mut Cursor<'_>) -> Result<A, DecodeError>,
{
    FromFn { f }
}

/// Decoder backed by a raw cursor-consuming function. Built by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<A, F> Decoder for FromFn<F>
where
    F: Fn(&mut Cursor<'_>) -> Result<A, DecodeError>,
{
    type Value = A;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        (self.f)(cursor)
    }
}

/// A decoder that always succeeds with a clone of `value`, consuming no
/// bytes.
pub fn constant<A: Clone>(value: A) -> Constant<A> {
    Constant { value }
}

/// Decoder produced by [`constant`].
#[derive(Debug, Clone, Copy)]
pub struct Constant<A> {
    value: A,
}

impl<A: Clone> Decoder for Constant<A> {
    type Value = A;

    fn decode_cursor(&self, _cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        Ok(self.value.clone())
    }
}

/// A decoder that always fails with `message`, consuming no bytes.
///
/// The failure is attributed to the cursor's current position.
pub fn fail<A>(message: impl Into<Cow<'static, str>>) -> Fail<A> {
    Fail {
        message: message.into(),
        _marker: PhantomData,
    }
}

/// Decoder produced by [`fail`].
#[derive(Debug, Clone)]
pub struct Fail<A> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Decoder for Fail<A> {
    type Value = A;

    fn decode_cursor(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, DecodeError> {
        Err(DecodeError::new(
            DecodeErrorKind::Message(self.message.clone()),
            cursor.position(),
        ))
    }
}
