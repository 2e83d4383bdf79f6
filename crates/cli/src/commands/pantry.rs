//! `sazon pantry` commands.

use sazon_client::stores::ProfileEditor;
use sazon_core::Ingredient;

use super::{CliError, CommandContext};

/// Print the current pantry.
pub async fn show(context: &CommandContext) -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = ProfileEditor::new(context.api.clone());
    editor.refresh(&context.session).await;

    if editor.pantry().is_empty() {
        println!("The pantry is empty.");
        return Ok(());
    }

    println!("Pantry:");
    for ingredient in editor.pantry() {
        println!("  {}", ingredient.name);
    }

    Ok(())
}

/// Replace the pantry wholesale with the given ingredient names.
pub async fn set(
    context: &CommandContext,
    ingredients: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if ingredients.is_empty() {
        return Err(CliError::Command("no ingredients given".to_owned()).into());
    }

    let ingredients: Vec<Ingredient> = ingredients.into_iter().map(Ingredient::new).collect();

    let mut editor = ProfileEditor::new(context.api.clone());
    let result = editor.update_pantry(&context.session, ingredients).await;
    if result.is_err() {
        let message = editor
            .save_error()
            .unwrap_or("Could not save the pantry.")
            .to_owned();
        return Err(CliError::Command(message).into());
    }

    println!("Pantry saved ({} ingredients).", editor.pantry().len());
    Ok(())
}
