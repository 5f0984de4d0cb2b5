//! End-to-end flow of the form models feeding the store: edit lists, build
//! a draft on submit, save, reload for editing.

use openrecipe::{
    EditableList, LocalRecipeStore, RecipeDraft, RecipeStore, TagList,
};

#[tokio::test]
async fn test_edit_session_submit_and_reopen() {
    let store = LocalRecipeStore::builder()
        .in_memory()
        .seed_on_empty(false)
        .build();

    // User fills the create form: one blank row appended per "add" click
    let mut ingredients = EditableList::with_blank_row();
    ingredients.set_at(0, "2 eggs");
    ingredients.append("");
    ingredients.set_at(1, "butter");
    ingredients.append(""); // left blank, filtered at submit

    let mut instructions = EditableList::with_blank_row();
    instructions.set_at(0, "melt butter");
    instructions.append("");
    instructions.set_at(1, "scramble eggs");

    // Drag step 2 above step 1
    instructions.move_to(1, 0);

    let mut tags = TagList::new();
    tags.add("Breakfast").unwrap();
    tags.add("Quick").unwrap();
    assert!(tags.add("quick").is_err());

    let created = store
        .create(RecipeDraft {
            title: "Scrambled Eggs".to_string(),
            description: "Fast breakfast eggs".to_string(),
            ingredients: ingredients.non_blank(),
            instructions: instructions.non_blank(),
            servings: 1,
            category: "Breakfast".to_string(),
            tags: tags.into_tags(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.ingredients, ["2 eggs", "butter"]);
    assert_eq!(created.instructions, ["scramble eggs", "melt butter"]);
    assert_eq!(created.tags, ["breakfast", "quick"]);

    // Edit session: lists are rebuilt from the stored record
    let stored = store.get_by_id(&created.id).await.unwrap();
    let mut ingredients = EditableList::from_items(stored.ingredients.clone(), 1);
    let mut tags = TagList::from_tags(stored.tags.clone());

    // The last remaining row refuses to disappear
    ingredients.remove_at(1);
    assert!(!ingredients.remove_at(0));
    assert_eq!(ingredients.len(), 1);

    // Tags have no such floor
    tags.remove("breakfast");
    tags.remove("quick");
    assert!(tags.is_empty());

    let updated = store
        .update(
            &created.id,
            RecipeDraft {
                title: stored.title,
                description: stored.description,
                ingredients: ingredients.non_blank(),
                instructions: stored.instructions,
                servings: stored.servings,
                category: stored.category,
                tags: tags.into_tags(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.ingredients, ["2 eggs"]);
    assert!(updated.tags.is_empty());
}
