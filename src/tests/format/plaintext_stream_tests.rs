use std::io::Cursor;

use crate::error::FormatError;
use crate::format::{FormatKind, deserialize_plaintext_stream, stream_records};

#[test]
fn plaintext_stream_yields_lines_as_strings() {
    let input = "alpha\nbeta\n\ngamma\n";
    let iter = deserialize_plaintext_stream::<String, _>(Cursor::new(input.as_bytes()));

    let lines: Vec<String> = iter.collect::<Result<_, _>>().expect("lines should parse");

    assert_eq!(
        lines,
        vec![
            "alpha".to_string(),
            "beta".to_string(),
            "".to_string(),
            "gamma".to_string(),
        ]
    );
}

#[test]
fn plaintext_stream_strips_crlf_and_keeps_last_unterminated_line() {
    let input = "one\r\ntwo";
    let iter = deserialize_plaintext_stream::<String, _>(Cursor::new(input.as_bytes()));

    let lines: Vec<String> = iter.collect::<Result<_, _>>().unwrap();

    assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
}

#[test]
fn plaintext_stream_empty_input_yields_no_items() {
    let iter = deserialize_plaintext_stream::<String, _>(Cursor::new(&b""[..]));

    assert_eq!(iter.count(), 0);
}

#[test]
fn plaintext_stream_rejects_invalid_utf8_as_format_error() {
    let mut iter = deserialize_plaintext_stream::<String, _>(Cursor::new(&b"ok\n\xff\xfe\n"[..]));

    assert_eq!(iter.next().unwrap().unwrap(), "ok");
    assert!(matches!(iter.next(), Some(Err(FormatError::Serde(_)))));
}

#[test]
fn plaintext_stream_via_stream_records_yields_lines() {
    let stream = stream_records::<String, _>(
        FormatKind::Plaintext,
        Cursor::new("one\ntwo\n".as_bytes().to_vec()),
    )
    .expect("plaintext streaming should be supported");

    let lines: Vec<String> = stream.collect::<Result<_, _>>().unwrap();

    assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
}
