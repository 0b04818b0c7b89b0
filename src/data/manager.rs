//! Game data loading by file path.

use std::path::Path;

use tracing::{debug, instrument};

use super::{DataError, DataProvider, DiskFileAccess, FileAccess, ProviderRegistry};
use crate::core::{GameSettings, Sequence};

/// Loads settings and sequences from files.
///
/// The provider is chosen by each file's extension; the file contents come
/// from a [`FileAccess`] (the filesystem by default).
#[derive(Debug)]
pub struct GameDataManager<F = DiskFileAccess> {
    registry: ProviderRegistry,
    files: F,
}

impl GameDataManager<DiskFileAccess> {
    /// Manager reading from disk with the JSON and XML providers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(ProviderRegistry::with_defaults(), DiskFileAccess)
    }
}

impl Default for GameDataManager<DiskFileAccess> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileAccess> GameDataManager<F> {
    /// Manager with an explicit registry and file source.
    #[must_use]
    pub fn with_parts(registry: ProviderRegistry, files: F) -> Self {
        Self { registry, files }
    }

    /// The provider registry in use.
    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Load game settings.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn settings(&self, path: &Path) -> Result<GameSettings, DataError> {
        let provider = self.provider_for(path)?;
        let text = self.files.read_to_string(path)?;
        let settings = provider.parse_settings(&text).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(board = %settings.board, mines = settings.mines.len(), "settings loaded");
        Ok(settings)
    }

    /// Load move sequences, in file order.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn sequences(&self, path: &Path) -> Result<Vec<Sequence>, DataError> {
        let provider = self.provider_for(path)?;
        let text = self.files.read_to_string(path)?;
        let sequences = provider.parse_sequences(&text).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(count = sequences.len(), "sequences loaded");
        Ok(sequences)
    }

    fn provider_for(&self, path: &Path) -> Result<&dyn DataProvider, DataError> {
        let extension = path
            .extension()
            .ok_or_else(|| DataError::MissingExtension(path.to_path_buf()))?
            .to_string_lossy();

        self.registry
            .get(&extension)
            .ok_or_else(|| DataError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: format!(".{extension}"),
            })
    }
}
