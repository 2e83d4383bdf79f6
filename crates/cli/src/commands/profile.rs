//! `sazon profile` commands.

use sazon_client::error::ProfileError;
use sazon_client::stores::ProfileEditor;
use sazon_core::ProfileField;

use super::{CliError, CommandContext};

/// Optional per-field updates from the command line.
pub struct FieldUpdates {
    pub name: Option<String>,
    pub calorie_goal: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub id_number: Option<String>,
}

impl FieldUpdates {
    fn into_pairs(self) -> Vec<(ProfileField, String)> {
        [
            (ProfileField::Name, self.name),
            (ProfileField::CalorieGoal, self.calorie_goal),
            (ProfileField::Phone, self.phone),
            (ProfileField::Address, self.address),
            (ProfileField::IdNumber, self.id_number),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Print the current profile.
pub fn show(context: &CommandContext) {
    let Some(profile) = context.session.profile() else {
        println!("Not logged in.");
        return;
    };

    println!("Profile:");
    println!("  name:         {}", profile.name);
    if let Some(email) = &profile.email {
        println!("  email:        {email}");
    }
    println!("  calorie goal: {}", profile.calorie_goal);
    println!("  phone:        {}", profile.phone);
    println!("  address:      {}", profile.address);
    println!("  id number:    {}", profile.id_number);
}

/// Apply field updates and save the profile.
pub async fn set(
    mut context: CommandContext,
    updates: FieldUpdates,
) -> Result<(), Box<dyn std::error::Error>> {
    let pairs = updates.into_pairs();
    if pairs.is_empty() {
        return Err(CliError::Command("no fields to update".to_owned()).into());
    }

    let mut editor = ProfileEditor::new(context.api.clone());
    editor.refresh(&context.session).await;

    for (field, value) in pairs {
        editor.set_field(field, value);
    }

    match editor.save(&mut context.session).await {
        Ok(updated) => {
            println!("Profile saved for {}.", updated.name);
            Ok(())
        }
        Err(ProfileError::Invalid(errors)) => {
            for (field, message) in &errors {
                println!("  {field}: {message}");
            }
            Err(CliError::Command("profile validation failed".to_owned()).into())
        }
        Err(ProfileError::Api(err)) => {
            let message = editor
                .save_error()
                .map_or_else(|| err.to_string(), ToOwned::to_owned);
            Err(CliError::Command(message).into())
        }
    }
}
