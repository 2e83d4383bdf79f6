//! Core types for Sazón.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credentials;
pub mod email;
pub mod id;
pub mod pantry;
pub mod plan;
pub mod profile;

pub use credentials::{LoginCredentials, LoginField, validate_login};
pub use email::{Email, EmailError};
pub use id::*;
pub use pantry::{Ingredient, PantryUpdate};
pub use plan::{DailyPlan, PlanEntry, Recipe};
pub use profile::{FieldErrors, Profile, ProfileDraft, ProfileField, validate_profile};
