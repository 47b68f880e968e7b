use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(pgtypes::io_error),
        help("check the path passed to --config, or omit it to use ./pgtypes.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pgtypes.toml")]
    #[diagnostic(code(pgtypes::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pgtypes::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no database connection string")]
    #[diagnostic(
        code(pgtypes::missing_connection),
        help("pass --db, set [database] url in pgtypes.toml, or export {env}")
    )]
    MissingConnection { env: String },

    #[error("no output directory")]
    #[diagnostic(
        code(pgtypes::missing_output),
        help("pass --output or set [output] path in pgtypes.toml")
    )]
    MissingOutput,

    #[error("table '{table}' is both included and excluded")]
    #[diagnostic(
        code(pgtypes::filter_conflict),
        help("remove '{table}' from one of the include/exclude lists")
    )]
    FilterConflict { table: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}

/// Find the span of a quoted string value in TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|offset| SourceSpan::from((offset, quoted.len())))
}
