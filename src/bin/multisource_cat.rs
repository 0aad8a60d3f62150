use std::error::Error;
use std::io::{self, BufWriter, Write};

use multisource::cli::{SourceArgs, SourceTokens};
use multisource::MultiSourceBuilder;
use sarge::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  multisource_cat --input <token> [--input <token> ...] [--format <format>] [--encoding <label>] [--allow-empty]"
    );
    eprintln!();
    eprintln!("Input tokens:");
    eprintln!("  - | stdin          Read from stdin");
    eprintln!("  =<content>         Inline content");
    eprintln!("  @<path>            Force treating value as a file path");
    eprintln!();
    eprintln!("Formats: plaintext | json | yaml | csv (default: inferred from extensions)");
    eprintln!("Encodings: utf-8 | iso-8859-1 (default: utf-8)");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let input_ref = reader.add::<SourceTokens>(tag::both('i', "input"));
    let format_ref = reader.add::<String>(tag::both('f', "format"));
    let encoding_ref = reader.add::<String>(tag::both('e', "encoding"));
    let allow_empty_ref = reader.add::<bool>(tag::long("allow-empty"));

    let args = reader.parse()?;

    let SourceTokens(sources) = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("SourceTokens parsing is infallible"),
        None => SourceTokens::default(),
    };

    let source_args = SourceArgs {
        sources,
        format: format_ref.get(&args).and_then(Result::ok),
        encoding: encoding_ref.get(&args).and_then(Result::ok),
        allow_empty: allow_empty_ref.get(&args).and_then(Result::ok).unwrap_or(false),
    };

    let mut records = MultiSourceBuilder::new()
        .with_source_args(&source_args)?
        .build::<serde_json::Value>()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    records.open()?;
    for record in records.records() {
        let record = record?;
        serde_json::to_writer(&mut out, &record.payload)?;
        out.write_all(b"\n")?;
    }
    records.close()?;
    out.flush()?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("multisource_cat error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
