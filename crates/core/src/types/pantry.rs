//! Pantry types.
//!
//! The pantry is the user's declared set of available ingredients. It is
//! replaced wholesale on every save, never merged.

use serde::{Deserialize, Serialize};

/// A single pantry ingredient.
///
/// Ordered and hashable so callers can treat the pantry as a set; the API
/// itself returns a plain list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
}

impl Ingredient {
    /// Create an ingredient from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request body for `PUT /users/me/pantry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryUpdate {
    pub ingredients: Vec<Ingredient>,
}
