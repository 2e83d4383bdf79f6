//! Sazón client library.
//!
//! Talks to the meal-planning API and keeps session-scoped state reconciled
//! with it:
//!
//! - [`config`] - Environment-sourced client configuration
//! - [`api`] - The [`MealApi`](api::MealApi) trait and its reqwest
//!   implementation, [`ApiClient`](api::ApiClient)
//! - [`session`] - The per-session [`Session`](session::Session) container
//!   holding the canonical profile
//! - [`stores`] - Planner, profile, and login state containers
//! - [`error`] - Error types
//!
//! # Synchronization model
//!
//! Every mutation is confirm-then-apply: a store method calls the API, and
//! only a successful response patches in-memory state, using the server's
//! returned representation. A failed call leaves local state untouched and
//! surfaces a single user-facing message. At rest (no call in flight) store
//! state therefore always equals the server's authoritative state.
//!
//! # Lifecycle
//!
//! Nothing here is global. A [`Session`](session::Session) and the stores are
//! constructed at session start and dropped at logout; every API call takes
//! the session explicitly, so request tagging is visible at the call site.
//!
//! # Example
//!
//! ```no_run
//! use sazon_client::api::ApiClient;
//! use sazon_client::config::ClientConfig;
//! use sazon_client::session::Session;
//! use sazon_client::stores::PlannerStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(&config)?;
//! let session = Session::new();
//!
//! let mut planner = PlannerStore::new(api);
//! planner.load(&session).await;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod stores;
