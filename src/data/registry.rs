//! Provider registry keyed by file extension.

use rustc_hash::FxHashMap;

use super::{DataProvider, JsonProvider, XmlProvider};

/// Maps file extensions to data providers.
///
/// Extensions are stored with a leading dot and compared without regard to
/// ASCII case, so `"JSON"`, `"json"` and `".json"` all find the JSON provider.
///
/// ## Example
///
/// ```
/// use turtle_challenge::data::ProviderRegistry;
///
/// let registry = ProviderRegistry::with_defaults();
/// assert!(registry.get(".json").is_some());
/// assert!(registry.get("XML").is_some());
/// assert!(registry.get(".yaml").is_none());
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
    providers: FxHashMap<String, Box<dyn DataProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the JSON and XML providers.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonProvider::new());
        registry.register(XmlProvider::new());
        registry
    }

    /// Register a provider under its extension.
    ///
    /// Replaces any provider already registered for that extension.
    pub fn register(&mut self, provider: impl DataProvider + 'static) {
        let key = normalize(provider.extension());
        self.providers.insert(key, Box::new(provider));
    }

    /// Find the provider for an extension.
    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&dyn DataProvider> {
        self.providers.get(&normalize(extension)).map(|p| &**p)
    }

    /// Registered extensions, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<_> = self.providers.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}

fn normalize(extension: &str) -> String {
    let trimmed = extension.trim_start_matches('.');
    format!(".{}", trimmed.to_ascii_lowercase())
}
