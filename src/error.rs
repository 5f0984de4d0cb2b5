use thiserror::Error;

/// Errors surfaced by recipe store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Operation referenced a recipe id that does not exist
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// The supplied recipe payload failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The underlying storage read or write failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Reasons a recipe payload is rejected before it reaches storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    MissingTitle,

    #[error("Description must not be empty")]
    MissingDescription,

    #[error("At least one ingredient is required")]
    NoIngredients,

    #[error("At least one instruction step is required")]
    NoInstructions,

    #[error("Servings must be at least 1")]
    ZeroServings,
}

/// Failures from the persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be parsed or the collection could not
    /// be serialized
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Rejections from tag editing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Input was empty after trimming
    #[error("Tag must not be empty")]
    Empty,

    /// The normalized tag is already present
    #[error("Tag already added: {0}")]
    Duplicate(String),
}
