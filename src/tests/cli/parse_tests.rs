//! Tests for CLI helper functions (split_source_tokens, SourceArgs).

use crate::Encoding;
use crate::FormatKind;
use crate::cli::{SourceArgs, split_source_tokens};

#[test]
fn test_split_source_tokens() {
    assert_eq!(split_source_tokens("a.txt,b.txt"), vec!["a.txt", "b.txt"]);
    assert_eq!(split_source_tokens(" a.txt , ,b.txt "), vec!["a.txt", "b.txt"]);
    assert_eq!(split_source_tokens("stdin"), vec!["-"]);
    assert_eq!(split_source_tokens("a.txt,STDIN"), vec!["a.txt", "-"]);
    assert_eq!(split_source_tokens("=x,y"), vec!["=x,y"]);
    assert!(split_source_tokens("").is_empty());
}

#[test]
fn test_source_args_parsing() {
    let args = SourceArgs::new()
        .with_source("a.csv")
        .with_source("-")
        .with_format("CSV")
        .with_encoding("ISO-8859-1");

    assert_eq!(args.format_kind().unwrap(), Some(FormatKind::Csv));
    assert_eq!(args.encoding().unwrap(), Some(Encoding::Latin1));
    assert!(args.is_stdin());
    assert!(!args.is_empty());
    assert!(!args.allow_empty);
}

#[test]
fn test_source_args_defaults() {
    let args = SourceArgs::new();

    assert_eq!(args.format_kind().unwrap(), None);
    assert_eq!(args.encoding().unwrap(), None);
    assert!(args.is_empty());
    assert!(!args.is_stdin());
}

#[test]
fn test_source_args_invalid_values() {
    assert!(SourceArgs::new().with_format("bson").format_kind().is_err());
    assert!(SourceArgs::new().with_encoding("utf-16").encoding().is_err());
}
