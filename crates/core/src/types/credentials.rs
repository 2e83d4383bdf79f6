//! Login credentials and their validation.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::ser::SerializeStruct;

use super::email::Email;

/// Credentials for `POST /login`.
///
/// The password is held as a [`SecretString`] and only exposed at
/// serialization time, when it has to go on the wire. `Debug` is redacted.
#[derive(Clone)]
pub struct LoginCredentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: SecretString,
}

impl LoginCredentials {
    /// Create credentials from an email and password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Serialize for LoginCredentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("LoginCredentials", 2)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", self.password.expose_secret())?;
        state.end()
    }
}

/// Fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    /// The form name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate login form input before it is allowed near the network.
///
/// Returns an empty map when the input is submittable.
#[must_use]
pub fn validate_login(credentials: &LoginCredentials) -> BTreeMap<LoginField, String> {
    let mut errors = BTreeMap::new();

    if let Err(e) = Email::parse(&credentials.email) {
        errors.insert(LoginField::Email, e.to_string());
    }

    if credentials.password.expose_secret().is_empty() {
        errors.insert(LoginField::Password, "Password is required.".to_owned());
    }

    errors
}
