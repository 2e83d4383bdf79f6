//! CLI command implementations.

pub mod pantry;
pub mod plan;
pub mod profile;
pub mod recipes;

use thiserror::Error;

use sazon_client::api::{ApiClient, MealApi};
use sazon_client::config::ClientConfig;
use sazon_client::session::Session;
use sazon_core::LoginCredentials;

/// Errors specific to CLI setup.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("{0}")]
    Command(String),
}

/// Shared state for a single CLI invocation: an authenticated session and
/// the API client it was authenticated against.
pub struct CommandContext {
    pub api: ApiClient,
    pub session: Session,
}

impl CommandContext {
    /// Build the client from the environment and log in with
    /// `SAZON_EMAIL` / `SAZON_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration or credentials are missing or the
    /// login is rejected.
    pub async fn login_from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = ClientConfig::from_env()?;
        let api = ApiClient::new(&config)?;

        let email = std::env::var("SAZON_EMAIL")
            .map_err(|_| CliError::MissingEnvVar("SAZON_EMAIL".to_owned()))?;
        let password = std::env::var("SAZON_PASSWORD")
            .map_err(|_| CliError::MissingEnvVar("SAZON_PASSWORD".to_owned()))?;

        let mut session = Session::new();
        let profile = api.login(&LoginCredentials::new(email, password)).await?;
        tracing::debug!(user_id = %profile.id, "authenticated");
        session.login(profile);

        Ok(Self { api, session })
    }
}
