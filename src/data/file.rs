//! Read-only file access.
//!
//! Data loading goes through [`FileAccess`] so tests can serve documents from
//! memory and observe which files were read.

use std::path::Path;

use super::DataError;

/// Source of file contents.
pub trait FileAccess {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, DataError>;
}

/// Reads from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskFileAccess;

impl FileAccess for DiskFileAccess {
    fn read_to_string(&self, path: &Path) -> Result<String, DataError> {
        std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<F: FileAccess + ?Sized> FileAccess for &F {
    fn read_to_string(&self, path: &Path) -> Result<String, DataError> {
        (**self).read_to_string(path)
    }
}
