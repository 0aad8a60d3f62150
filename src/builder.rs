//! Builder for creating multi-source readers from arguments or configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::SourceArgs;
use crate::config::{EmptySourcesPolicy, ReaderConfig, SourceConfig, SourceSpec};
use crate::encoding::Encoding;
use crate::error::{ReaderError, Result};
use crate::format::{FormatKind, FormatReaderFactory, MultiInputReader};
use crate::io::{FileInput, InMemorySource, InputProvider, StdinInput};
use crate::reader::MultiSourceReader;

/// Builds a [`MultiInputReader`] from raw source arguments.
///
/// Source arguments follow the usual CLI conventions:
/// - `-` reads stdin
/// - `=<content>` reads the literal content
/// - `@<path>` forces `<path>` to be treated as a file
/// - anything else is a file path
///
/// When no format is set explicitly, it is inferred from the file
/// extensions, which must all agree.
#[derive(Debug, Default)]
pub struct MultiSourceBuilder {
    source_args: Vec<String>,
    source_specs: Vec<SourceSpec>,
    format: Option<FormatKind>,
    encoding: Encoding,
    empty_sources: EmptySourcesPolicy,
}

impl MultiSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sources_from_args(mut self, args: &[String]) -> Self {
        self.source_args = args.to_vec();
        self
    }

    pub fn add_source(mut self, arg: impl Into<String>) -> Self {
        self.source_args.push(arg.into());
        self
    }

    pub fn add_source_spec(mut self, spec: SourceSpec) -> Self {
        self.source_specs.push(spec);
        self
    }

    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_empty_sources_policy(mut self, policy: EmptySourcesPolicy) -> Self {
        self.empty_sources = policy;
        self
    }

    /// Apply parsed CLI arguments.
    pub fn with_source_args(mut self, args: &SourceArgs) -> Result<Self> {
        self.source_args.extend(args.sources.iter().cloned());
        if let Some(format) = args.format_kind()? {
            self.format = Some(format);
        }
        if let Some(encoding) = args.encoding()? {
            self.encoding = encoding;
        }
        if args.allow_empty {
            self.empty_sources = EmptySourcesPolicy::Ignore;
        }
        Ok(self)
    }

    pub fn build<T>(self) -> Result<MultiInputReader<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let mut specs = self.resolve_sources()?;
        specs.extend(self.source_specs);

        let format = resolve_format(self.format, &specs)?;
        debug!(
            sources = specs.len(),
            %format,
            encoding = %self.encoding,
            "building multi-source reader"
        );

        let providers: Vec<Arc<dyn InputProvider>> =
            specs.into_iter().map(|spec| spec.provider).collect();

        Ok(MultiSourceReader::new(providers, FormatReaderFactory::new(format))
            .with_encoding(self.encoding)
            .with_empty_sources_policy(self.empty_sources))
    }

    fn resolve_sources(&self) -> Result<Vec<SourceSpec>> {
        self.source_args
            .iter()
            .enumerate()
            .map(|(index, raw)| resolve_single_source(index, raw))
            .collect()
    }

    pub fn from_config(config: ReaderConfig) -> Result<Self> {
        let mut builder = MultiSourceBuilder::new();

        if let Some(format) = config.format.as_deref() {
            builder = builder.with_format(format.parse()?);
        }

        if let Some(encoding) = config.encoding.as_deref() {
            builder = builder.with_encoding(encoding.parse()?);
        }

        if let Some(policy) = config.empty_sources.as_deref() {
            builder = builder.with_empty_sources_policy(policy.parse()?);
        }

        for source_cfg in &config.sources {
            let spec = source_from_config(source_cfg)?;
            builder.source_specs.push(spec);
        }

        Ok(builder)
    }
}

fn resolve_single_source(index: usize, raw: &str) -> Result<SourceSpec> {
    if raw.is_empty() {
        return Err(ReaderError::invalid(format!(
            "source argument #{} is empty",
            index + 1
        )));
    }

    if raw == "-" {
        return Ok(SourceSpec::new(raw, Arc::new(StdinInput::new())));
    }

    if let Some(content) = raw.strip_prefix('=') {
        let provider = InMemorySource::from_string(format!("inline-{}", index + 1), content);
        return Ok(SourceSpec::new(raw, Arc::new(provider)));
    }

    let path = raw.strip_prefix('@').unwrap_or(raw);
    if path.is_empty() {
        return Err(ReaderError::invalid(format!(
            "source argument #{} has an empty path",
            index + 1
        )));
    }

    Ok(file_spec(raw, PathBuf::from(path)))
}

fn source_from_config(cfg: &SourceConfig) -> Result<SourceSpec> {
    match cfg.kind.as_str() {
        "stdin" | "-" => Ok(SourceSpec::new(&cfg.id, Arc::new(StdinInput::new()))),
        "file" => {
            let path = cfg.path.as_ref().ok_or_else(|| {
                ReaderError::invalid(format!("file source '{}' requires 'path' field", cfg.id))
            })?;
            Ok(file_spec(&cfg.id, PathBuf::from(path)))
        }
        "inline" => {
            let content = cfg.content.as_ref().ok_or_else(|| {
                ReaderError::invalid(format!(
                    "inline source '{}' requires 'content' field",
                    cfg.id
                ))
            })?;
            let provider = InMemorySource::from_string(&cfg.id, content.as_str());
            Ok(SourceSpec::new(&cfg.id, Arc::new(provider)))
        }
        other => Err(ReaderError::invalid(format!(
            "unknown source kind '{other}' for source '{}'",
            cfg.id
        ))),
    }
}

fn file_spec(raw: &str, path: PathBuf) -> SourceSpec {
    let inferred = infer_format_from_path(&path);
    let spec = SourceSpec::new(raw, Arc::new(FileInput::new(path)));
    match inferred {
        Some(kind) => spec.with_format(kind),
        None => spec,
    }
}

fn infer_format_from_path(path: &Path) -> Option<FormatKind> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(FormatKind::from_extension)
}

fn resolve_format(explicit: Option<FormatKind>, specs: &[SourceSpec]) -> Result<FormatKind> {
    let format = match explicit {
        Some(kind) => kind,
        None => {
            let mut inferred = specs
                .iter()
                .filter_map(|s| s.inferred_format.map(|kind| (s, kind)));
            match inferred.next() {
                Some((first, kind)) => {
                    if let Some((other, other_kind)) = inferred.find(|(_, k)| *k != kind) {
                        return Err(ReaderError::invalid(format!(
                            "sources have mixed formats: '{}' is {kind} but '{}' is {other_kind}",
                            first.raw, other.raw
                        )));
                    }
                    kind
                }
                None => FormatKind::Plaintext,
            }
        }
    };

    if !format.is_available() {
        return Err(ReaderError::invalid(format!(
            "format '{format}' is not enabled, enable the corresponding feature"
        )));
    }

    Ok(format)
}
