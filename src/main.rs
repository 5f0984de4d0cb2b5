use std::env;

use openrecipe::{format_minutes, open_configured_store, Recipe, RecipeStore};

const USAGE: &str = "Usage: openrecipe <command>

Commands:
  list                 List all recipes
  show <id>            Show one recipe in full
  search <query>       Search titles, descriptions, ingredients, tags
  category <name>      List recipes in a category
  delete <id>          Delete a recipe";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("list");

    let store = open_configured_store()?;

    match command {
        "list" => {
            for recipe in store.list_all().await {
                print_summary(&recipe);
            }
        }
        "show" => {
            let id = args.get(2).ok_or(USAGE)?;
            let recipe = store.get_by_id(id).await?;
            print_full(&recipe);
        }
        "search" => {
            let query = args.get(2).map(String::as_str).unwrap_or("");
            for recipe in store.search(query).await {
                print_summary(&recipe);
            }
        }
        "category" => {
            let category = args.get(2).ok_or(USAGE)?;
            for recipe in store.filter_by_category(category).await {
                print_summary(&recipe);
            }
        }
        "delete" => {
            let id = args.get(2).ok_or(USAGE)?;
            store.delete(id).await?;
            println!("Deleted {}", id);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_summary(recipe: &Recipe) {
    println!(
        "{}  {} [{}] prep {} / cook {} / serves {}",
        recipe.id,
        recipe.title,
        recipe.difficulty,
        format_minutes(recipe.prep_time),
        format_minutes(recipe.cook_time),
        recipe.servings,
    );
}

fn print_full(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("{}", recipe.description);
    println!(
        "\nCategory: {}  Difficulty: {}  Prep: {}  Cook: {}  Serves: {}",
        recipe.category,
        recipe.difficulty,
        format_minutes(recipe.prep_time),
        format_minutes(recipe.cook_time),
        recipe.servings,
    );
    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!("\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    if !recipe.tags.is_empty() {
        println!("\nTags: {}", recipe.tags.join(", "));
    }
    if let Some(notes) = &recipe.notes {
        println!("\nNotes: {}", notes);
    }
}
