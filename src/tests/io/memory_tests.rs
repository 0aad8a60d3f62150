//! Tests for the in-memory provider.

use std::io::Read;

use crate::{InMemorySource, InputProvider};

#[test]
fn in_memory_source_reopens_from_the_start() {
    let src = InMemorySource::from_string("mem", "hello");

    for _ in 0..2 {
        let mut buf = String::new();
        src.open().unwrap().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }
    assert_eq!(src.id(), "mem");
    assert_eq!(src.data(), b"hello");
}

#[test]
fn in_memory_source_keeps_raw_bytes() {
    let src = InMemorySource::new("bytes", vec![0xff, 0x00, 0xe9]);

    let mut buf = Vec::new();
    src.open().unwrap().read_to_end(&mut buf).unwrap();
    assert_eq!(buf, vec![0xff, 0x00, 0xe9]);
}
