use std::path::{Path, PathBuf};

use crate::storage::{JsonFileBackend, MemoryBackend, StorageBackend};
use crate::store::LocalRecipeStore;

/// Builder for configuring a [`LocalRecipeStore`]
///
/// # Example
/// ```no_run
/// use openrecipe::LocalRecipeStore;
///
/// let store = LocalRecipeStore::builder()
///     .storage_path("my_recipes.json")
///     .seed_on_empty(false)
///     .build();
/// ```
#[derive(Default)]
pub struct StoreBuilder {
    backend: Option<Box<dyn StorageBackend>>,
    storage_path: Option<PathBuf>,
    seed_on_empty: Option<bool>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the file backend with the given document path.
    pub fn storage_path(mut self, path: impl AsRef<Path>) -> Self {
        self.storage_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory backend; nothing survives the session.
    pub fn in_memory(mut self) -> Self {
        self.backend = Some(Box::new(MemoryBackend::new()));
        self
    }

    /// Inject a custom backend. Takes precedence over `storage_path`.
    pub fn backend(mut self, backend: Box<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Whether an empty store seeds itself with the built-in sample
    /// recipes on first read (default: true).
    pub fn seed_on_empty(mut self, seed: bool) -> Self {
        self.seed_on_empty = Some(seed);
        self
    }

    pub fn build(self) -> LocalRecipeStore {
        let backend: Box<dyn StorageBackend> = match (self.backend, self.storage_path) {
            (Some(backend), _) => backend,
            (None, Some(path)) => Box::new(JsonFileBackend::new(path)),
            (None, None) => Box::new(JsonFileBackend::new(
                crate::config::StoreConfig::default().storage_path,
            )),
        };
        let mut store = LocalRecipeStore::new(backend);
        store.set_seed_on_empty(self.seed_on_empty.unwrap_or(true));
        store
    }
}
