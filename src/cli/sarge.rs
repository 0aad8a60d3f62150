use std::convert::Infallible;

use sarge::ArgumentType;

use super::split_source_tokens;

/// Source tokens collected from repeated `--input` flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTokens(pub Vec<String>);

impl ArgumentType for SourceTokens {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let tokens = match val {
            None => vec!["-".to_string()],
            Some(v) => split_source_tokens(v),
        };

        Some(Ok(SourceTokens(tokens)))
    }

    fn default_value() -> Option<Self> {
        Some(SourceTokens::default())
    }
}
