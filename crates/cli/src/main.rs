//! Sazón CLI - Command-line frontend for the meal-planning API.
//!
//! # Usage
//!
//! ```bash
//! # Show today's plan
//! sazon plan show
//!
//! # Add recipe 9 to today's plan
//! sazon plan add --recipe 9
//!
//! # Remove plan entry 101 (the entry id, not the recipe id)
//! sazon plan remove --entry 101
//!
//! # Show or edit the profile
//! sazon profile show
//! sazon profile set --name "Ana María" --calorie-goal 1900
//!
//! # Show or replace the pantry
//! sazon pantry show
//! sazon pantry set rice beans salt
//!
//! # Browse recipes
//! sazon recipes
//! ```
//!
//! Credentials come from `SAZON_EMAIL` and `SAZON_PASSWORD`; the API base
//! URL from `SAZON_API_BASE_URL`. Each invocation logs in once and runs a
//! single command against that session.

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's job is to print.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sazon")]
#[command(author, version, about = "Sazón meal-planning CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit today's plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Inspect and edit the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Inspect and replace the pantry
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },
    /// List available recipes
    Recipes,
}

#[derive(Subcommand)]
enum PlanAction {
    /// Show today's plan
    Show,
    /// Add a recipe to today's plan
    Add {
        /// Recipe id to add
        #[arg(short, long)]
        recipe: i64,
    },
    /// Remove an entry from today's plan
    Remove {
        /// Plan entry id to remove (not the recipe id)
        #[arg(short, long)]
        entry: i64,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the current profile
    Show,
    /// Update profile fields and save
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Daily calorie goal
        #[arg(long)]
        calorie_goal: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Street address
        #[arg(long)]
        address: Option<String>,

        /// Identification number
        #[arg(long)]
        id_number: Option<String>,
    },
}

#[derive(Subcommand)]
enum PantryAction {
    /// Show the current pantry
    Show,
    /// Replace the pantry with the given ingredients
    Set {
        /// Ingredient names
        ingredients: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let context = commands::CommandContext::login_from_env().await?;

    match cli.command {
        Commands::Plan { action } => match action {
            PlanAction::Show => commands::plan::show(&context).await?,
            PlanAction::Add { recipe } => commands::plan::add(&context, recipe).await?,
            PlanAction::Remove { entry } => commands::plan::remove(&context, entry).await?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&context),
            ProfileAction::Set {
                name,
                calorie_goal,
                phone,
                address,
                id_number,
            } => {
                let updates = commands::profile::FieldUpdates {
                    name,
                    calorie_goal,
                    phone,
                    address,
                    id_number,
                };
                commands::profile::set(context, updates).await?;
            }
        },
        Commands::Pantry { action } => match action {
            PantryAction::Show => commands::pantry::show(&context).await?,
            PantryAction::Set { ingredients } => {
                commands::pantry::set(&context, ingredients).await?;
            }
        },
        Commands::Recipes => commands::recipes::list(&context).await?,
    }

    Ok(())
}
