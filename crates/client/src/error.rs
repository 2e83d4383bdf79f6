//! Error types for the client library.
//!
//! Two classes of failure exist and never mix: local validation errors
//! (field-keyed, synchronous, block submission, never reach the network) and
//! transport errors (network or API failure, surfaced as a single
//! user-facing message).

use std::collections::BTreeMap;

use sazon_core::{FieldErrors, LoginField};
use thiserror::Error;

/// Errors that can occur when talking to the meal-planning API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    ///
    /// The status is preserved for callers that care, but the stores fold
    /// 4xx and 5xx into the same user-facing message.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The single user-facing message for this failure.
    ///
    /// Prefers the server-provided message; falls back to the given generic
    /// string for failures with nothing presentable in them.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Errors surfaced by [`PlannerStore`](crate::stores::PlannerStore) mutations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A mutation was attempted before the plan was loaded. Nothing was sent
    /// to the network.
    #[error("plan not loaded")]
    PlanNotLoaded,

    /// The API call failed; store state is unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors surfaced by [`ProfileEditor`](crate::stores::ProfileEditor).
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The draft failed validation; submission was blocked and nothing was
    /// sent to the network.
    #[error("profile draft failed validation")]
    Invalid(FieldErrors),

    /// The API call failed; session and store state are unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors surfaced by [`LoginForm`](crate::stores::LoginForm).
#[derive(Debug, Error)]
pub enum LoginError {
    /// The credentials failed validation; nothing was sent to the network.
    #[error("login form failed validation")]
    Invalid(BTreeMap<LoginField, String>),

    /// The API rejected the login or the request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}
