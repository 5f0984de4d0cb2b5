//! Local-first recipe store.
//!
//! The crate has two halves. [`RecipeStore`] is the persistence side: a
//! recipe collection stored as one JSON document behind an injectable
//! [`storage::StorageBackend`], with create/read/update/delete plus search
//! and category filtering. [`editor`] is the form side: the in-memory list
//! and tag models that back multi-item editors between reads and saves.
//!
//! ```no_run
//! use openrecipe::{LocalRecipeStore, RecipeDraft, RecipeStore};
//!
//! # async fn run() -> Result<(), openrecipe::StoreError> {
//! let store = LocalRecipeStore::builder()
//!     .storage_path("recipes.json")
//!     .build();
//!
//! let recipe = store
//!     .create(RecipeDraft {
//!         title: "Tea".to_string(),
//!         description: "Brew tea".to_string(),
//!         ingredients: vec!["tea bag".to_string(), "water".to_string()],
//!         instructions: vec!["boil water".to_string(), "steep".to_string()],
//!         servings: 1,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let found = store.search("tea").await;
//! assert_eq!(found[0].id, recipe.id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod samples;
pub mod storage;
pub mod store;

pub use config::{BackendKind, StoreConfig};
pub use editor::{EditableList, TagList};
pub use error::{StorageError, StoreError, TagError, ValidationError};
pub use model::{format_minutes, Difficulty, Recipe, RecipeDraft};
pub use store::{LocalRecipeStore, RecipeStore, StoreBuilder};

/// Open the store described by `openrecipe.toml` and `OPENRECIPE__*`
/// environment variables, falling back to defaults when neither is set.
pub fn open_configured_store() -> Result<LocalRecipeStore, StoreError> {
    let config = StoreConfig::load()?;
    Ok(LocalRecipeStore::from_config(&config))
}
