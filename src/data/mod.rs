//! Game data loading: file formats, provider lookup, file access.
//!
//! The engine never touches files. This module turns a settings file and a
//! moves file into [`GameSettings`](crate::core::GameSettings) and
//! [`Sequence`](crate::core::Sequence) values:
//!
//! - [`DataProvider`]: one per file format ([`JsonProvider`], [`XmlProvider`])
//! - [`ProviderRegistry`]: extension → provider, built once and passed in
//! - [`FileAccess`]: where file contents come from
//! - [`GameDataManager`]: picks the provider by extension and parses
//!
//! ## Example
//!
//! ```
//! use turtle_challenge::data::{DataProvider, JsonProvider};
//!
//! let sequences = JsonProvider
//!     .parse_sequences(r#"[{ "name": "s1", "moves": ["move", "rotate"] }]"#)
//!     .unwrap();
//! assert_eq!(sequences[0].len(), 2);
//! ```

mod error;
mod file;
mod json;
mod manager;
mod provider;
mod registry;
mod xml;

pub use error::{DataError, FormatError};
pub use file::{DiskFileAccess, FileAccess};
pub use json::JsonProvider;
pub use manager::GameDataManager;
pub use provider::DataProvider;
pub use registry::ProviderRegistry;
pub use xml::XmlProvider;
