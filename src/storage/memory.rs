use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::storage::StorageBackend;

/// In-process storage used by tests and as a throwaway backend. Substitutes
/// for the file backend anywhere a `StorageBackend` is injected.
#[derive(Default)]
pub struct MemoryBackend {
    document: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose reads succeed but whose writes always fail; exercises
    /// the persistence-failure paths.
    pub fn failing_writes() -> Self {
        Self {
            document: Mutex::new(None),
            fail_writes: true,
        }
    }

    /// Backend pre-loaded with a document, bypassing `write`.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
            fail_writes: false,
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.document.lock().await.clone())
    }

    async fn write(&self, document: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "write disabled",
            )));
        }
        *self.document.lock().await = Some(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let backend = MemoryBackend::new();
        backend.write("[]").await.unwrap();
        assert_eq!(backend.read().await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_failing_writes_reject() {
        let backend = MemoryBackend::failing_writes();
        assert!(backend.write("[]").await.is_err());
        assert!(backend.read().await.unwrap().is_none());
    }
}
