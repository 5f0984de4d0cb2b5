//! In-memory models backing the multi-item form sections.
//!
//! [`EditableList`] holds the ordered ingredient/instruction rows while the
//! user edits; [`TagList`] holds the unique tag set. Both are UI-agnostic:
//! the presentation layer calls a mutation, checks whether anything changed
//! and re-renders. Nothing here is persisted directly; on submit the caller
//! materializes the lists into a [`crate::RecipeDraft`].

use crate::error::TagError;

/// An ordered, mutable sequence of free-text rows.
///
/// `min_items` is the floor below which removal refuses: ingredient and
/// instruction editors use a floor of 1 so the user always has an editable
/// row left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableList {
    items: Vec<String>,
    min_items: usize,
}

impl EditableList {
    /// Empty list with the given removal floor.
    pub fn new(min_items: usize) -> Self {
        Self {
            items: Vec::new(),
            min_items,
        }
    }

    /// List seeded from existing values, e.g. when editing a saved recipe.
    pub fn from_items(items: Vec<String>, min_items: usize) -> Self {
        Self { items, min_items }
    }

    /// Ingredient/instruction editor: starts with one blank row and refuses
    /// to drop below one row.
    pub fn with_blank_row() -> Self {
        Self {
            items: vec![String::new()],
            min_items: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    /// Add a row at the end. Always succeeds.
    pub fn append(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the row at `position`. Refuses (returns false) when the
    /// position is out of range or removal would drop below the floor.
    pub fn remove_at(&mut self, position: usize) -> bool {
        if position >= self.items.len() || self.items.len() <= self.min_items {
            return false;
        }
        self.items.remove(position);
        true
    }

    /// Relocate the row at `from` to `to`, shifting the rows in between.
    /// Backs drag-and-drop reordering. No-op when the positions are equal
    /// or either is out of range.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Overwrite the row at `position` in place; backs live text-input
    /// edits. Length never changes. No-op when out of range.
    pub fn set_at(&mut self, position: usize, value: impl Into<String>) -> bool {
        match self.items.get_mut(position) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Submit-time view: rows with only whitespace are dropped. The list
    /// itself may keep blank placeholder rows while editing continues.
    pub fn non_blank(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .map(|item| item.trim().to_string())
            .collect()
    }
}

/// A unique-value tag collection with display order.
///
/// Values are normalized (trimmed, lowercased) on entry; duplicates and
/// blank input are rejected. Tags are not reorderable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from stored tags; values are re-normalized and deduplicated so
    /// hand-edited storage cannot smuggle duplicates back in.
    pub fn from_tags(tags: impl IntoIterator<Item = String>) -> Self {
        let mut list = Self::new();
        for tag in tags {
            let _ = list.add(&tag);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contains(&self, raw: &str) -> bool {
        let normalized = normalize(raw);
        self.tags.iter().any(|t| *t == normalized)
    }

    /// Normalize and add a tag. Blank input and already-present values are
    /// rejected so the caller can surface the reason to the user.
    pub fn add(&mut self, raw: &str) -> Result<(), TagError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(TagError::Empty);
        }
        if self.tags.contains(&normalized) {
            return Err(TagError::Duplicate(normalized));
        }
        self.tags.push(normalized);
        Ok(())
    }

    /// Remove the normalized value if present; returns whether it was.
    pub fn remove(&mut self, raw: &str) -> bool {
        let normalized = normalize(raw);
        let before = self.tags.len();
        self.tags.retain(|t| *t != normalized);
        self.tags.len() != before
    }

    /// Remove by display position. Unlike [`EditableList::remove_at`] there
    /// is no floor: a one-element tag list empties.
    pub fn remove_at(&mut self, position: usize) -> bool {
        if position >= self.tags.len() {
            return false;
        }
        self.tags.remove(position);
        true
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> EditableList {
        EditableList::from_items(items.iter().map(|s| s.to_string()).collect(), 1)
    }

    #[test]
    fn test_append_always_succeeds() {
        let mut ingredients = EditableList::with_blank_row();
        ingredients.append("flour");
        ingredients.append("");
        assert_eq!(ingredients.len(), 3);
    }

    #[test]
    fn test_remove_at_keeps_last_row() {
        let mut ingredients = list(&["flour"]);
        assert!(!ingredients.remove_at(0));
        assert_eq!(ingredients.len(), 1);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut ingredients = list(&["flour", "sugar"]);
        assert!(!ingredients.remove_at(5));
        assert_eq!(ingredients.len(), 2);
    }

    #[test]
    fn test_remove_at_middle() {
        let mut ingredients = list(&["a", "b", "c"]);
        assert!(ingredients.remove_at(1));
        assert_eq!(ingredients.items(), ["a", "c"]);
    }

    #[test]
    fn test_move_to_shifts_intervening_items() {
        let mut ingredients = list(&["a", "b", "c"]);
        assert!(ingredients.move_to(0, 2));
        assert_eq!(ingredients.items(), ["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_backwards() {
        let mut steps = list(&["a", "b", "c"]);
        assert!(steps.move_to(2, 0));
        assert_eq!(steps.items(), ["c", "a", "b"]);
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let mut steps = list(&["a", "b"]);
        assert!(!steps.move_to(1, 1));
        assert_eq!(steps.items(), ["a", "b"]);
    }

    #[test]
    fn test_move_to_out_of_range_is_noop() {
        let mut steps = list(&["a", "b"]);
        assert!(!steps.move_to(0, 2));
        assert_eq!(steps.items(), ["a", "b"]);
    }

    #[test]
    fn test_set_at_overwrites_without_resizing() {
        let mut ingredients = list(&["flour", ""]);
        assert!(ingredients.set_at(1, "sugar"));
        assert_eq!(ingredients.items(), ["flour", "sugar"]);
        assert!(!ingredients.set_at(9, "salt"));
    }

    #[test]
    fn test_non_blank_filters_placeholder_rows() {
        let ingredients = EditableList::from_items(
            vec![
                "flour".to_string(),
                "   ".to_string(),
                String::new(),
                " sugar ".to_string(),
            ],
            1,
        );
        assert_eq!(ingredients.non_blank(), ["flour", "sugar"]);
    }

    #[test]
    fn test_tag_add_normalizes() {
        let mut tags = TagList::new();
        tags.add("  Pasta ").unwrap();
        assert_eq!(tags.tags(), ["pasta"]);
    }

    #[test]
    fn test_tag_duplicate_rejected_case_insensitively() {
        let mut tags = TagList::new();
        tags.add("Pasta").unwrap();
        let err = tags.add("pasta").unwrap_err();
        assert_eq!(err, TagError::Duplicate("pasta".to_string()));
        assert_eq!(tags.tags(), ["pasta"]);
    }

    #[test]
    fn test_tag_empty_rejected() {
        let mut tags = TagList::new();
        assert_eq!(tags.add("   "), Err(TagError::Empty));
    }

    #[test]
    fn test_tag_remove_by_value() {
        let mut tags = TagList::new();
        tags.add("quick").unwrap();
        assert!(tags.remove(" QUICK "));
        assert!(!tags.remove("quick"));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_list_may_empty_completely() {
        let mut tags = TagList::from_tags(vec!["solo".to_string()]);
        assert!(tags.remove_at(0));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_from_tags_deduplicates() {
        let tags = TagList::from_tags(vec![
            "Pasta".to_string(),
            "pasta".to_string(),
            "quick".to_string(),
        ]);
        assert_eq!(tags.tags(), ["pasta", "quick"]);
    }
}
