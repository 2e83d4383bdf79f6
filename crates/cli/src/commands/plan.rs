//! `sazon plan` commands.

use sazon_client::api::MealApi;
use sazon_client::stores::PlannerStore;
use sazon_client::stores::planner::mutation_message;
use sazon_core::{PlanEntryId, RecipeId};

use super::{CliError, CommandContext};

/// Load a planner store synced to today's plan.
async fn loaded_planner(
    context: &CommandContext,
) -> Result<PlannerStore<sazon_client::api::ApiClient>, CliError> {
    let mut planner = PlannerStore::new(context.api.clone());
    planner.load(&context.session).await;
    if let Some(message) = planner.error() {
        return Err(CliError::Command(message.to_owned()));
    }
    Ok(planner)
}

/// Show today's plan.
pub async fn show(context: &CommandContext) -> Result<(), Box<dyn std::error::Error>> {
    let planner = loaded_planner(context).await?;

    if planner.entries().is_empty() {
        println!("Today's plan is empty.");
        return Ok(());
    }

    println!("Today's plan:");
    for entry in planner.entries() {
        match entry.calories {
            Some(calories) => println!("  [{}] {} ({calories} kcal)", entry.id, entry.title),
            None => println!("  [{}] {}", entry.id, entry.title),
        }
    }

    Ok(())
}

/// Add a recipe to today's plan.
pub async fn add(
    context: &CommandContext,
    recipe_id: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = context
        .api
        .recipe(&context.session, RecipeId::new(recipe_id))
        .await?;

    let mut planner = loaded_planner(context).await?;
    let entry = planner
        .add_entry(&context.session, &recipe)
        .await
        .map_err(|e| CliError::Command(mutation_message(&e, false)))?;

    println!("Added \"{}\" to today's plan (entry {}).", entry.title, entry.id);
    Ok(())
}

/// Remove an entry from today's plan by entry id.
pub async fn remove(
    context: &CommandContext,
    entry_id: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner = loaded_planner(context).await?;
    planner
        .remove_entry(&context.session, PlanEntryId::new(entry_id))
        .await
        .map_err(|e| CliError::Command(mutation_message(&e, true)))?;

    println!("Removed entry {entry_id} from today's plan.");
    Ok(())
}
