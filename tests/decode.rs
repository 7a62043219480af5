//! End-to-end decoding tests composing decoders against externally encoded
//! input.

use proptest::prelude::*;
use proptest::property_test;

use protodec::decoder::{constant, fail, from_fn};
use protodec::decoder::{Decoder, Delimited, Sint64, Uint64, Utf8String};
use protodec::{Cursor, DecodeErrorKind};

/// Encodes a varint with the external leb128 encoder.
fn encode_varint(value: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    leb128::write::unsigned(&mut buf, value).unwrap();
    buf
}

/// Encodes a length-delimited byte run.
fn encode_delimited(bytes: &[u8]) -> Vec<u8> {
    let mut buf = encode_varint(bytes.len() as u64);
    buf.extend_from_slice(bytes);
    buf
}

const fn zigzag_encode_64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// The concrete pair scenario: varint 42 followed by the string "ok".
fn pair_bytes() -> Vec<u8> {
    let mut bytes = encode_varint(42);
    bytes.extend_from_slice(&encode_delimited(b"ok"));
    bytes
}

#[test]
fn decodes_the_pair_scenario() {
    let decoder = Uint64.and(Utf8String);
    let decoded = decoder.decode(&pair_bytes()).unwrap();
    assert_eq!(decoded, (42, String::from("ok")));
}

#[test]
fn truncated_pair_fails_with_end_of_input() {
    let decoder = Uint64.and(Utf8String);
    let err = decoder.decode(&pair_bytes()[..1]).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.offset(), 1);
}

#[test]
fn all_source_adapters_agree() {
    let decoder = Uint64.and(Utf8String);
    let bytes = pair_bytes();

    let from_slice = decoder.decode(&bytes);
    let from_buf = decoder.decode_buf(bytes::Bytes::from(bytes.clone()));
    let from_reader = decoder.decode_reader(std::io::Cursor::new(bytes.clone()));

    assert_eq!(from_slice, from_buf);
    assert_eq!(from_slice, from_reader);

    // Failures agree across adapters too.
    let truncated = &bytes[..1];
    assert_eq!(
        decoder.decode(truncated),
        decoder.decode_buf(bytes::Bytes::copy_from_slice(truncated))
    );
    assert_eq!(
        decoder.decode(truncated),
        decoder.decode_reader(std::io::Cursor::new(truncated.to_vec()))
    );
}

#[test]
fn pairing_matches_sequential_decoding() {
    let bytes = pair_bytes();

    let paired = Uint64.and(Utf8String).decode(&bytes).unwrap();

    let mut cursor = Cursor::new(&bytes);
    let first = Uint64.decode_cursor(&mut cursor).unwrap();
    let second = Utf8String.decode_cursor(&mut cursor).unwrap();
    assert_eq!(paired, (first, second));
    assert!(cursor.is_empty());
}

#[test]
fn alternation_matches_the_left_decoder_when_it_succeeds() {
    let bytes = encode_varint(7);
    let alternation = Uint64.or(|| fail::<u64>("unreachable"));
    assert_eq!(alternation.decode(&bytes), Uint64.decode(&bytes));
}

/// A two-interpretation union: a value is either a plain varint count or a
/// length-delimited label.
#[derive(Debug, Clone, PartialEq)]
enum Field {
    Count(u64),
    Label(String),
}

#[test]
fn alternation_decodes_a_tagged_union() {
    // A count is framed as varint tag 1 then the value; a label as varint
    // tag 2 then the string.
    let tag = |expected: u64| {
        Uint64.emap(move |tag| {
            if tag == expected {
                Ok(())
            } else {
                Err(protodec::DecodeError::message("unexpected tag"))
            }
        })
    };
    let count = tag(1).and(Uint64).emap(|((), v)| Ok(Field::Count(v)));
    let label = tag(2).and(Utf8String).emap(|((), s)| Ok(Field::Label(s)));
    let field = count.or(move || label.clone());

    let mut count_bytes = encode_varint(1);
    count_bytes.extend_from_slice(&encode_varint(9000));
    assert_eq!(field.decode(&count_bytes).unwrap(), Field::Count(9000));

    let mut label_bytes = encode_varint(2);
    label_bytes.extend_from_slice(&encode_delimited(b"label"));
    assert_eq!(
        field.decode(&label_bytes).unwrap(),
        Field::Label(String::from("label"))
    );

    let mut unknown = encode_varint(3);
    unknown.extend_from_slice(&encode_varint(0));
    let err = field.decode(&unknown).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::Message("unexpected tag".into()));
}

#[test]
fn trivial_decoders_consume_nothing() {
    let bytes = pair_bytes();
    let mut cursor = Cursor::new(&bytes);
    assert_eq!(constant("marker").decode_cursor(&mut cursor).unwrap(), "marker");
    assert_eq!(cursor.position(), 0);

    assert_eq!(constant(5u8).decode(&[]).unwrap(), 5);
    assert!(fail::<u8>("always").decode(&[]).is_err());
}

#[test]
fn from_fn_lifts_raw_cursor_reads() {
    // A three-field record decoded with direct primitive reads.
    let record = from_fn(|cursor: &mut Cursor<'_>| {
        let id = cursor.read_varint()?;
        let flags = cursor.read_fixed32()?;
        let name = Utf8String.decode_cursor(cursor)?;
        Ok((id, flags, name))
    });

    let mut bytes = encode_varint(12);
    bytes.extend_from_slice(&0xf0f0_u32.to_le_bytes());
    bytes.extend_from_slice(&encode_delimited(b"widget"));

    let decoded = record.decode(&bytes).unwrap();
    assert_eq!(decoded, (12, 0xf0f0, String::from("widget")));
}

#[test]
fn nested_delimited_record_roundtrip() {
    // An envelope holding a length-delimited (count, label) record.
    let record = Uint64.and(Utf8String);
    let envelope = Uint64.and(Delimited::new(record));

    let mut inner = encode_varint(3);
    inner.extend_from_slice(&encode_delimited(b"abc"));
    let mut bytes = encode_varint(77);
    bytes.extend_from_slice(&encode_delimited(&inner));

    let (seq, (count, label)) = envelope.decode(&bytes).unwrap();
    assert_eq!(seq, 77);
    assert_eq!(count, 3);
    assert_eq!(label, "abc");
}

#[property_test]
fn proptest_pair_roundtrip(count: u64, label: String) {
    let mut bytes = encode_varint(count);
    bytes.extend_from_slice(&encode_delimited(label.as_bytes()));

    let decoded = Uint64.and(Utf8String).decode(&bytes).unwrap();
    prop_assert_eq!(decoded, (count, label));
}

#[property_test]
fn proptest_signed_scalar_roundtrip(val: i64) {
    let bytes = encode_varint(zigzag_encode_64(val));
    prop_assert_eq!(Sint64.decode(&bytes).unwrap(), val);
}

#[property_test]
fn proptest_arbitrary_input_never_panics(bytes: Vec<u8>) {
    // Totality: malformed input must fail as a value, never as a panic.
    let decoder = Uint64.and(Utf8String).and(Delimited::new(Sint64));
    let _ = decoder.decode(&bytes);
}
