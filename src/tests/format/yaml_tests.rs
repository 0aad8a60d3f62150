use std::io::Cursor;
use std::sync::Arc;

use serde::Deserialize;

use crate::format::{FormatKind, FormatReaderFactory, deserialize_yaml_stream};
use crate::io::{InMemorySource, InputProvider};
use crate::reader::MultiSourceReader;

#[derive(Debug, Deserialize, PartialEq)]
struct Doc {
    name: String,
    value: i32,
}

#[test]
fn yaml_stream_reads_each_document() {
    let input = "---\nname: foo\nvalue: 1\n---\nname: bar\nvalue: 2\n";
    let docs: Vec<Doc> = deserialize_yaml_stream::<Doc, _>(Cursor::new(input.as_bytes().to_vec()))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].name, "foo");
    assert_eq!(docs[1].value, 2);
}

#[test]
fn yaml_documents_chain_across_sources() {
    let sources: Vec<Arc<dyn InputProvider>> = vec![
        Arc::new(InMemorySource::from_string("a.yaml", "name: a\nvalue: 1\n")),
        Arc::new(InMemorySource::from_string(
            "b.yaml",
            "---\nname: b\nvalue: 2\n---\nname: c\nvalue: 3\n",
        )),
    ];
    let mut reader =
        MultiSourceReader::new(sources, FormatReaderFactory::<Doc>::new(FormatKind::Yaml));

    reader.open().unwrap();
    let names: Vec<String> = reader
        .records()
        .map(|r| r.unwrap().payload.name)
        .collect();

    assert_eq!(names, vec!["a", "b", "c"]);
}
