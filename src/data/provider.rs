//! Data provider seam.
//!
//! A provider turns the text of a settings or moves document into domain
//! values for one file format. Providers are looked up by file extension in
//! a [`super::ProviderRegistry`].

use super::FormatError;
use crate::core::{GameSettings, Sequence};

/// Parser for one game data format.
pub trait DataProvider: Send + Sync {
    /// File extension handled, with the leading dot (`".json"`).
    fn extension(&self) -> &'static str;

    /// Parse a settings document.
    fn parse_settings(&self, text: &str) -> Result<GameSettings, FormatError>;

    /// Parse a moves document into sequences, in document order.
    fn parse_sequences(&self, text: &str) -> Result<Vec<Sequence>, FormatError>;
}
