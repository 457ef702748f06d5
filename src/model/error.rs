//! Error types for catgrid.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping all domain-specific failures
//!   - [`InputError`] - Feed file/stdin reading failures (file not found, IO)
//!   - [`ParseError`] - Feed JSON failures (malformed JSON, bad timestamps)
//!   - [`ValidationError`] - Layout configuration rejected by the validator
//!   - [`ConfigError`] - Configuration file unreadable or malformed
//!   - [`LoggingError`] - Log file or subscriber setup failures
//!   - [`InvalidOrigin`] - Link origin that is not a hierarchical URL
//!   - [`TuiError`] - Terminal/TUI rendering failures
//!   - `serde_json::Error` - `--plan` output serialization
//!
//! # Error Recovery Strategy
//!
//! Invalid configuration is a hard stop: no partial layout is produced.
//! Unparseable timestamps on individual items are **non-fatal**: they are logged
//! and the item is kept without a publish date. Unsupported layout names are not
//! errors at all; planning yields an empty layout instead.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::presentation::InvalidOrigin;
use crate::validation::ValidationError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the item feed from file or stdin.
    ///
    /// **Recovery**: Display error to user and exit.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The item feed is not valid JSON of a recognized shape.
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] ParseError),

    /// The layout configuration violates its variant's constraints.
    ///
    /// The message lists every offending field.
    #[error("Invalid layout configuration: {0}")]
    Validation(#[from] ValidationError),

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// The configured origin cannot anchor item links.
    #[error("Invalid link origin: {0}")]
    Origin(#[from] InvalidOrigin),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),

    /// The `--plan` report could not be serialized.
    #[error("Failed to write plan: {0}")]
    Output(#[from] serde_json::Error),
}

/// Errors encountered when reading the item feed from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified feed file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use catgrid::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided and stdin is a terminal.
    ///
    /// **Recovery**: Display usage help showing both invocation modes:
    /// - `catgrid /path/to/feed.json` (file mode)
    /// - `cat feed.json | catgrid` (stdin mode)
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing the item feed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The feed is not syntactically valid JSON, or does not match either the
    /// bare item array or the response envelope.
    ///
    /// # Examples
    ///
    /// ```
    /// use catgrid::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 3,
    ///     column: 15,
    ///     message: "expected value".to_string()
    /// };
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.to_string().contains("expected value"));
    /// ```
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        /// 1-based line reported by the JSON parser.
        line: usize,
        /// 1-based column reported by the JSON parser.
        column: usize,
        /// Parser error message.
        message: String,
    },

    /// The document is valid JSON but neither an item array nor a response
    /// envelope.
    #[error("Unexpected feed shape: expected an array, found {found}")]
    UnexpectedShape {
        /// JSON type of the top-level value.
        found: &'static str,
    },

    /// An item's `publishedDate` is present but cannot be parsed.
    ///
    /// Non-fatal: logged, and the item is kept without a date.
    #[error("Invalid publishedDate '{raw}' on item {index}")]
    InvalidTimestamp {
        /// 0-based position of the item in the feed.
        index: usize,
        /// The raw value that failed to parse.
        raw: String,
    },
}
