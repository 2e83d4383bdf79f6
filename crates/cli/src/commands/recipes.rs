//! `sazon recipes` command.

use sazon_client::api::MealApi;

use super::CommandContext;

/// List the available recipes.
pub async fn list(context: &CommandContext) -> Result<(), Box<dyn std::error::Error>> {
    let recipes = context.api.recipes(&context.session).await?;

    if recipes.is_empty() {
        println!("No recipes available.");
        return Ok(());
    }

    for recipe in recipes {
        match recipe.calories {
            Some(calories) => println!("  [{}] {} ({calories} kcal)", recipe.id, recipe.title),
            None => println!("  [{}] {}", recipe.id, recipe.title),
        }
    }

    Ok(())
}
