//! Tests for MultiSourceBuilder argument and config resolution.

use std::fs;

use crate::builder::MultiSourceBuilder;
use crate::cli::SourceArgs;
use crate::config::{EmptySourcesPolicy, ReaderConfig, SourceConfig};
use crate::error::ReaderError;
use crate::format::FormatKind;
use crate::Encoding;

fn invalid_message(err: ReaderError) -> String {
    match err {
        ReaderError::InvalidArgument(msg) => msg,
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn inline_sources_are_read_in_order() {
    let mut reader = MultiSourceBuilder::new()
        .add_source("=a\nb")
        .add_source("=")
        .add_source("=c")
        .build::<String>()
        .unwrap();

    reader.open().unwrap();
    let records: Vec<(String, String)> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r.header.source, r.payload)
        })
        .collect();

    assert_eq!(
        records,
        vec![
            ("inline-1".to_string(), "a".to_string()),
            ("inline-1".to_string(), "b".to_string()),
            ("inline-3".to_string(), "c".to_string()),
        ]
    );
}

#[test]
fn stdin_argument_resolves_to_stdin_provider() {
    let reader = MultiSourceBuilder::new()
        .sources_from_args(&["-".to_string()])
        .build::<String>()
        .unwrap();

    assert_eq!(reader.sources().len(), 1);
    assert_eq!(reader.sources()[0].id(), "-");
}

#[test]
fn at_prefix_forces_a_file_path() {
    let reader = MultiSourceBuilder::new()
        .add_source("@=odd-name.txt")
        .build::<String>()
        .unwrap();

    assert_eq!(reader.sources()[0].id(), "=odd-name.txt");
}

#[test]
fn empty_argument_is_rejected() {
    let err = MultiSourceBuilder::new()
        .add_source("a.txt")
        .add_source("")
        .build::<String>()
        .unwrap_err();

    assert!(invalid_message(err).contains("#2"));
}

#[test]
fn bare_at_sign_is_rejected() {
    let err = MultiSourceBuilder::new()
        .add_source("@")
        .build::<String>()
        .unwrap_err();

    assert!(invalid_message(err).contains("empty path"));
}

#[test]
fn format_is_inferred_from_extensions() {
    let reader = MultiSourceBuilder::new()
        .add_source("a.json")
        .add_source("b.ndjson")
        .add_source("=inline")
        .build::<serde_json::Value>()
        .unwrap();

    assert_eq!(reader.sources().len(), 3);
}

#[test]
fn mixed_extensions_are_rejected() {
    let err = MultiSourceBuilder::new()
        .add_source("a.json")
        .add_source("b.txt")
        .build::<String>()
        .unwrap_err();

    let msg = invalid_message(err);
    assert!(msg.contains("mixed formats"), "{msg}");
    assert!(msg.contains("a.json") && msg.contains("b.txt"), "{msg}");
}

#[test]
fn explicit_format_overrides_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.txt");
    fs::write(&path, "{\"n\":1}\n{\"n\":2}\n").unwrap();

    let mut reader = MultiSourceBuilder::new()
        .add_source(path.to_string_lossy())
        .with_format(FormatKind::Json)
        .build::<serde_json::Value>()
        .unwrap();

    reader.open().unwrap();
    let values: Vec<serde_json::Value> = reader
        .records()
        .map(|r| r.unwrap().into_payload())
        .collect();
    assert_eq!(values, vec![serde_json::json!({"n": 1}), serde_json::json!({"n": 2})]);
}

#[test]
fn no_sources_fails_on_open_unless_allowed() {
    let mut strict = MultiSourceBuilder::new().build::<String>().unwrap();
    assert!(matches!(strict.open(), Err(ReaderError::NoSources)));

    let mut lenient = MultiSourceBuilder::new()
        .with_empty_sources_policy(EmptySourcesPolicy::Ignore)
        .build::<String>()
        .unwrap();
    lenient.open().unwrap();
    assert!(lenient.read_record().unwrap().is_none());
}

#[test]
fn source_args_apply_format_encoding_and_policy() {
    let args = SourceArgs::new()
        .with_source("=caf\u{e9}")
        .with_format("text")
        .with_encoding("latin1")
        .with_allow_empty();

    let reader = MultiSourceBuilder::new()
        .with_source_args(&args)
        .unwrap()
        .build::<String>()
        .unwrap();

    assert_eq!(reader.encoding(), Encoding::Latin1);
    assert_eq!(reader.empty_sources_policy(), EmptySourcesPolicy::Ignore);
}

#[test]
fn source_args_with_unknown_format_or_encoding_fail() {
    let bad_format = SourceArgs::new().with_format("parquet");
    assert!(MultiSourceBuilder::new().with_source_args(&bad_format).is_err());

    let bad_encoding = SourceArgs::new().with_encoding("ebcdic");
    assert!(MultiSourceBuilder::new().with_source_args(&bad_encoding).is_err());
}

#[test]
fn config_inline_sources_end_to_end() {
    let config = ReaderConfig::new()
        .with_format("json")
        .add_source(SourceConfig::inline("first", "1 2"))
        .add_source(SourceConfig::inline("second", ""))
        .add_source(SourceConfig::inline("third", "3"));

    let mut reader = MultiSourceBuilder::from_config(config)
        .unwrap()
        .build::<i64>()
        .unwrap();

    reader.open().unwrap();
    let values: Vec<(String, i64)> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r.header.source, r.payload)
        })
        .collect();

    assert_eq!(
        values,
        vec![
            ("first".to_string(), 1),
            ("first".to_string(), 2),
            ("third".to_string(), 3),
        ]
    );
}

#[test]
fn config_file_source_requires_path() {
    let mut cfg = SourceConfig::file("data", "data.txt");
    cfg.path = None;

    let err = MultiSourceBuilder::from_config(ReaderConfig::new().add_source(cfg)).unwrap_err();
    assert!(invalid_message(err).contains("requires 'path'"));
}

#[test]
fn config_inline_source_requires_content() {
    let mut cfg = SourceConfig::inline("data", "");
    cfg.content = None;

    let err = MultiSourceBuilder::from_config(ReaderConfig::new().add_source(cfg)).unwrap_err();
    assert!(invalid_message(err).contains("requires 'content'"));
}

#[test]
fn config_unknown_kind_is_rejected() {
    let mut cfg = SourceConfig::stdin();
    cfg.kind = "socket".into();

    let err = MultiSourceBuilder::from_config(ReaderConfig::new().add_source(cfg)).unwrap_err();
    assert!(invalid_message(err).contains("unknown source kind 'socket'"));
}

#[test]
fn config_bad_policy_is_rejected() {
    let config = ReaderConfig::new().with_empty_sources("sometimes");

    assert!(matches!(
        MultiSourceBuilder::from_config(config),
        Err(ReaderError::InvalidArgument(_))
    ));
}
