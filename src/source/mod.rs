//! Feed input sources.
//!
//! A feed is one JSON document, read either from a file argument or from
//! piped stdin, and handed to [`crate::parser::parse_feed`].

use crate::model::error::InputError;
use crate::model::AppError;
use crate::parser::{self, Feed};
use std::io;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Where the feed comes from.
#[derive(Debug)]
pub enum InputSource {
    /// Feed file given on the command line.
    File(FileSource),
    /// Feed piped through stdin.
    Stdin(StdinSource<io::Stdin>),
}

impl InputSource {
    /// Read the whole document.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O failures.
    pub fn read(&mut self) -> Result<String, InputError> {
        match self {
            InputSource::File(f) => f.read(),
            InputSource::Stdin(s) => s.read_to_end(),
        }
    }

    /// Human-readable origin, for logging.
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }

    /// Read and parse the feed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InputRead` when the document cannot be read and
    /// `AppError::Parse` when it is not a feed.
    pub fn load_feed(&mut self) -> Result<Feed, AppError> {
        let raw = self.read()?;
        let feed = parser::parse_feed(&raw)?;
        info!(
            source = %self.describe(),
            items = feed.items.len(),
            "Loaded feed"
        );
        Ok(feed)
    }
}

/// Pick the input source.
///
/// A file path wins; otherwise stdin is used when it is piped.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist and
/// `InputError::NoInput` if no file is given and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
