//! Login form state.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use sazon_core::{LoginCredentials, LoginField, Profile, validate_login};

use crate::api::MealApi;
use crate::error::LoginError;
use crate::session::Session;

/// Fallback message when the server rejects a login without a message.
const LOGIN_FALLBACK: &str = "Something went wrong. Try again.";

/// Buffered credentials and field-keyed errors for the login screen.
pub struct LoginForm<A> {
    api: A,
    email: String,
    password: String,
    errors: BTreeMap<LoginField, String>,
    /// Transport-level error from the last submit, if any.
    api_error: Option<String>,
}

impl<A: MealApi> LoginForm<A> {
    /// Create an empty form.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            email: String::new(),
            password: String::new(),
            errors: BTreeMap::new(),
            api_error: None,
        }
    }

    /// Current email buffer.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Update the email buffer.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Update the password buffer.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Field-keyed validation errors from the last submit attempt.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<LoginField, String> {
        &self.errors
    }

    /// Transport error from the last submit attempt, if any.
    #[must_use]
    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    /// Validate and submit the credentials.
    ///
    /// Validation failures block submission locally; nothing reaches the
    /// network. On success the returned profile replaces the session profile
    /// wholesale. On transport failure the session is unchanged and the
    /// user-facing message lands in [`api_error`](Self::api_error).
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Invalid` with field errors, or `LoginError::Api`
    /// when the request fails or the server rejects the credentials.
    #[instrument(skip(self, session))]
    pub async fn submit(&mut self, session: &mut Session) -> Result<Profile, LoginError> {
        self.errors.clear();
        self.api_error = None;

        let credentials = LoginCredentials::new(self.email.clone(), self.password.clone());
        let errors = validate_login(&credentials);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(LoginError::Invalid(errors));
        }

        match self.api.login(&credentials).await {
            Ok(profile) => {
                debug!(user_id = %profile.id, "login accepted");
                session.login(profile.clone());
                Ok(profile)
            }
            Err(err) => {
                self.api_error = Some(err.user_message(LOGIN_FALLBACK));
                Err(LoginError::Api(err))
            }
        }
    }
}
