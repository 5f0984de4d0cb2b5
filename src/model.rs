use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A recipe as persisted in the store.
///
/// Field names serialize in camelCase so the stored JSON document keeps the
/// layout the web client wrote (`prepTime`, `imageUrl`, `createdAt`, ...).
/// Fields missing from older records deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, assigned at creation and immutable afterwards.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered; at least one entry after a successful save.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered; sequence order is execution order.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: String,
    /// Lowercase, no duplicates; insertion order kept for display.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Unix epoch milliseconds, set once at creation and preserved across edits.
    #[serde(default)]
    pub created_at: u64,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Concatenated lowercase text used by substring search: title, description,
    /// ingredients, tags and category.
    pub(crate) fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title,
            self.description,
            self.ingredients.join(" "),
            self.tags.join(" "),
            self.category
        )
        .to_lowercase()
    }
}

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Caller-supplied payload for create and update operations.
///
/// Everything a [`Recipe`] carries except `id` and `created_at`, which the
/// store assigns and protects. Updates replace the full record; there are no
/// partial updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
}

impl RecipeDraft {
    /// Check the draft against the save-time invariants: non-blank title and
    /// description, at least one non-blank ingredient and instruction, and a
    /// positive serving count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if !self.ingredients.iter().any(|i| !i.trim().is_empty()) {
            return Err(ValidationError::NoIngredients);
        }
        if !self.instructions.iter().any(|i| !i.trim().is_empty()) {
            return Err(ValidationError::NoInstructions);
        }
        if self.servings == 0 {
            return Err(ValidationError::ZeroServings);
        }
        Ok(())
    }

    pub(crate) fn into_recipe(self, id: String, created_at: u64) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            category: self.category,
            tags: self.tags,
            image_url: self.image_url,
            notes: self.notes,
            created_at,
        }
    }
}

/// Format a duration in minutes for display: "N/A", "45m", "2h", "1h 30m".
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 0 {
        return "N/A".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}
