mod file;
mod memory;

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;

use crate::config::{BackendKind, StoreConfig};
use crate::error::StorageError;

/// Key-value style persistence seam: the whole recipe collection is one
/// serialized document under a single logical key.
///
/// This is the only suspension point of every store operation. Writes are
/// whole-document replacements; there are no partial or incremental writes,
/// so concurrent writers racing on read-modify-write lose updates. The store
/// assumes a single logical writer per session.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the stored document. `None` means nothing has been stored yet,
    /// which the store treats as first use.
    async fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored document.
    async fn write(&self, document: &str) -> Result<(), StorageError>;
}

/// Create the backend named by configuration.
pub fn backend_for(config: &StoreConfig) -> Box<dyn StorageBackend> {
    match config.backend {
        BackendKind::File => Box::new(JsonFileBackend::new(&config.storage_path)),
        BackendKind::Memory => Box::new(MemoryBackend::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_backend_for_memory() {
        let config = StoreConfig {
            backend: BackendKind::Memory,
            ..StoreConfig::default()
        };
        let backend = backend_for(&config);
        assert!(backend.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_backend_for_file_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let config = StoreConfig {
            backend: BackendKind::File,
            storage_path: path.clone(),
            ..StoreConfig::default()
        };
        let backend = backend_for(&config);
        backend.write("[]").await.unwrap();
        assert!(path.exists());
    }
}
