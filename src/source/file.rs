//! File-based feed source.

use crate::model::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Feed stored in a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the feed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be read (including when it
    /// was removed after the source was created).
    pub fn read(&self) -> Result<String, InputError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn missing_file_is_reported_with_path() {
        let path = env::temp_dir().join("catgrid_file_source_missing.json");
        let _ = fs::remove_file(&path);

        match FileSource::new(&path) {
            Err(InputError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn read_returns_file_contents() {
        let path = env::temp_dir().join("catgrid_file_source_read.json");
        fs::write(&path, "[]").unwrap();

        let source = FileSource::new(&path).unwrap();
        let content = source.read();
        let _ = fs::remove_file(&path);

        assert_eq!(content.unwrap(), "[]");
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn read_after_removal_is_io_error() {
        let path = env::temp_dir().join("catgrid_file_source_removed.json");
        fs::write(&path, "[]").unwrap();
        let source = FileSource::new(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(matches!(source.read(), Err(InputError::Io(_))));
    }
}
