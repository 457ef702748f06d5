//! Stdin-based feed source for piped input.

use crate::model::error::InputError;
use std::io::{self, IsTerminal, Read};

/// Feed piped through stdin, e.g. `curl ... | catgrid`.
///
/// Generic over the reader so tests can substitute an in-memory buffer.
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<io::Stdin> {
    /// Create a source reading the process's stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal, so
    /// the program does not block waiting for a feed that will never come.
    pub fn new() -> Result<Self, InputError> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create a source from any reader (for testing).
    #[cfg(test)]
    pub(crate) fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures, including invalid UTF-8.
    pub fn read_to_end(&mut self) -> Result<String, InputError> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;
        Ok(content)
    }
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}
