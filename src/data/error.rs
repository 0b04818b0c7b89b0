//! Data loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::UnknownName;

/// A game data document could not be turned into domain values.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Malformed JSON, a negative or non-numeric coordinate, or an unknown name.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Malformed XML or a value of the wrong type.
    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),

    /// A direction or move name that does not exist.
    #[error(transparent)]
    Name(#[from] UnknownName),
}

/// Loading a settings or moves file failed.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No provider handles this file's extension.
    #[error("no data provider for `{extension}` files (`{}`)", .path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The path has no extension to pick a provider by.
    #[error("`{}` has no file extension", .0.display())]
    MissingExtension(PathBuf),

    /// The file was read but its contents are invalid.
    #[error("invalid game data in `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl DataError {
    /// Path of the file involved.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataError::Io { path, .. }
            | DataError::UnsupportedExtension { path, .. }
            | DataError::Parse { path, .. }
            | DataError::MissingExtension(path) => path,
        }
    }
}
