//! Integration tests for Sazón.
//!
//! # Running Tests
//!
//! These tests need a live API server and a test account:
//!
//! ```bash
//! export SAZON_API_BASE_URL=http://localhost:3000/api
//! export SAZON_TEST_EMAIL=test@example.com
//! export SAZON_TEST_PASSWORD=test-password
//!
//! cargo test -p sazon-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `planner_flow` - load/add/remove against today's plan
//! - `profile_flow` - profile save and pantry replacement

#![cfg_attr(not(test), forbid(unsafe_code))]

use sazon_client::api::{ApiClient, MealApi};
use sazon_client::config::ClientConfig;
use sazon_client::session::Session;
use sazon_core::LoginCredentials;

/// An authenticated client + session against the configured test server.
pub struct TestContext {
    pub api: ApiClient,
    pub session: Session,
}

impl TestContext {
    /// Connect and log in with the test account from the environment.
    ///
    /// # Panics
    ///
    /// Panics (failing the test) when configuration or credentials are
    /// missing or the server rejects the login.
    pub async fn login() -> Self {
        let config = ClientConfig::from_env().expect("valid client configuration");
        let api = ApiClient::new(&config).expect("client builds");

        let email = std::env::var("SAZON_TEST_EMAIL").expect("SAZON_TEST_EMAIL set");
        let password = std::env::var("SAZON_TEST_PASSWORD").expect("SAZON_TEST_PASSWORD set");

        let profile = api
            .login(&LoginCredentials::new(email, password))
            .await
            .expect("test account logs in");

        let mut session = Session::new();
        session.login(profile);

        Self { api, session }
    }
}
