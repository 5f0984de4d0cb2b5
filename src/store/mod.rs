mod builder;

pub use builder::StoreBuilder;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use log::{debug, error};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{Recipe, RecipeDraft};
use crate::samples::sample_recipes;
use crate::storage::{backend_for, StorageBackend};

/// The injected store abstraction: single source of truth for the recipe
/// collection. UI code talks to `dyn RecipeStore`; tests substitute a fake
/// or run the real implementation over [`crate::storage::MemoryBackend`].
///
/// Read operations fail open (empty result on storage trouble); mutating
/// operations propagate failures and never partially apply.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Full collection, newest first. Never fails: corrupt or unreadable
    /// storage yields an empty list.
    async fn list_all(&self) -> Vec<Recipe>;

    /// Look up one recipe by id.
    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError>;

    /// Validate, assign id and creation time, prepend and persist.
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// Replace the record with `id`, keeping its id and original creation
    /// time no matter what the draft says.
    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// Remove the record if present; deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Case-insensitive substring search over title, description,
    /// ingredients, tags and category. An empty query matches everything.
    async fn search(&self, query: &str) -> Vec<Recipe>;

    /// Case-insensitive exact match on category.
    async fn filter_by_category(&self, category: &str) -> Vec<Recipe>;
}

/// Store implementation over a single-document [`StorageBackend`].
///
/// Every mutation rewrites the whole collection as one JSON array. That
/// makes mutations non-atomic across concurrent callers; the design assumes
/// one logical writer per session, and racing read-modify-write sessions
/// silently lose updates.
pub struct LocalRecipeStore {
    backend: Box<dyn StorageBackend>,
    seed_on_empty: bool,
    last_id: AtomicU64,
}

impl LocalRecipeStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            seed_on_empty: true,
            last_id: AtomicU64::new(0),
        }
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Build a store from configuration (backend choice, storage path,
    /// seeding toggle).
    pub fn from_config(config: &StoreConfig) -> Self {
        let mut store = Self::new(backend_for(config));
        store.seed_on_empty = config.seed_on_empty;
        store
    }

    pub(crate) fn set_seed_on_empty(&mut self, seed: bool) {
        self.seed_on_empty = seed;
    }

    /// Millisecond clock, bumped past the last issued value so ids stay
    /// distinct within a session even when calls land on the same tick.
    fn next_id(&self) -> String {
        let now = now_millis();
        let mut last = self.last_id.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last_id.compare_exchange(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(observed) => last = observed,
            }
        }
    }

    /// Load the collection, seeding samples on first use. Fails open: any
    /// read or parse problem yields an empty collection.
    async fn load(&self) -> Vec<Recipe> {
        let document = match self.backend.read().await {
            Ok(doc) => doc,
            Err(e) => {
                error!("Error loading recipes: {}", e);
                return Vec::new();
            }
        };

        match document {
            Some(doc) => match serde_json::from_str(&doc) {
                Ok(recipes) => recipes,
                Err(e) => {
                    error!("Error loading recipes: {}", e);
                    Vec::new()
                }
            },
            None if self.seed_on_empty => {
                debug!("No stored recipes, seeding samples");
                let samples = sample_recipes(now_millis());
                // First use must not come up empty, so the samples are
                // returned even when persisting them fails.
                if let Err(e) = self.persist(&samples).await {
                    error!("Error seeding sample recipes: {}", e);
                }
                samples
            }
            None => Vec::new(),
        }
    }

    async fn persist(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let document = serde_json::to_string(recipes).map_err(crate::error::StorageError::from)?;
        self.backend.write(&document).await?;
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for LocalRecipeStore {
    async fn list_all(&self) -> Vec<Recipe> {
        self.load().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError> {
        self.load()
            .await
            .into_iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        draft.validate()?;

        let mut recipes = self.load().await;
        let recipe = draft.into_recipe(self.next_id(), now_millis());
        recipes.insert(0, recipe.clone());
        self.persist(&recipes).await?;

        debug!("Created recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        draft.validate()?;

        let mut recipes = self.load().await;
        let index = recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        // Full replacement, but id and creation time stay with the record
        let created_at = recipes[index].created_at;
        let recipe = draft.into_recipe(id.to_string(), created_at);
        recipes[index] = recipe.clone();
        self.persist(&recipes).await?;

        debug!("Updated recipe {}", id);
        Ok(recipe)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut recipes = self.load().await;
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);
        if recipes.len() == before {
            debug!("Delete of unknown recipe {} is a no-op", id);
            return Ok(());
        }
        self.persist(&recipes).await?;

        debug!("Deleted recipe {}", id);
        Ok(())
    }

    async fn search(&self, query: &str) -> Vec<Recipe> {
        let needle = query.to_lowercase();
        self.load()
            .await
            .into_iter()
            .filter(|recipe| recipe.searchable_text().contains(&needle))
            .collect()
    }

    async fn filter_by_category(&self, category: &str) -> Vec<Recipe> {
        let wanted = category.to_lowercase();
        self.load()
            .await
            .into_iter()
            .filter(|recipe| recipe.category.to_lowercase() == wanted)
            .collect()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
