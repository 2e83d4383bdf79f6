//! User profile types and form validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// The canonical profile of an authenticated user, as returned by the API.
///
/// Replaced wholesale on login and after every profile save; never merged
/// field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    pub calorie_goal: i32,
    pub phone: String,
    pub address: String,
    pub id_number: String,
}

/// Editable fields of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Name,
    CalorieGoal,
    Phone,
    Address,
    IdNumber,
}

impl ProfileField {
    /// The wire/form name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CalorieGoal => "calorieGoal",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::IdNumber => "idNumber",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation errors.
pub type FieldErrors = BTreeMap<ProfileField, String>;

/// An in-progress edit of the profile form.
///
/// All fields are strings because this is a form buffer: the calorie goal is
/// only parsed during validation. Sent as the full `PUT /users/me` body, so
/// it serializes with wire names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub calorie_goal: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
}

impl ProfileDraft {
    /// Read the current value of a field.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::CalorieGoal => &self.calorie_goal,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
            ProfileField::IdNumber => &self.id_number,
        }
    }

    /// Overwrite the value of a field.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::CalorieGoal => self.calorie_goal = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Address => self.address = value,
            ProfileField::IdNumber => self.id_number = value,
        }
    }
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            calorie_goal: profile.calorie_goal.to_string(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            id_number: profile.id_number.clone(),
        }
    }
}

/// Validate a profile draft.
///
/// Pure function with required-field and positivity rules only. Returns an
/// empty map when the draft is submittable; callers run this on every field
/// change for immediate feedback and once more as the gate before submission.
#[must_use]
pub fn validate_profile(draft: &ProfileDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(ProfileField::Name, "Name is required.".to_owned());
    }

    if draft.calorie_goal.trim().is_empty() {
        errors.insert(
            ProfileField::CalorieGoal,
            "Calorie goal is required.".to_owned(),
        );
    } else {
        match draft.calorie_goal.trim().parse::<i64>() {
            Ok(goal) if goal > 0 => {}
            _ => {
                errors.insert(
                    ProfileField::CalorieGoal,
                    "Calorie goal must be a positive number.".to_owned(),
                );
            }
        }
    }

    if draft.phone.trim().is_empty() {
        errors.insert(ProfileField::Phone, "Phone is required.".to_owned());
    }

    if draft.address.trim().is_empty() {
        errors.insert(ProfileField::Address, "Address is required.".to_owned());
    }

    if draft.id_number.trim().is_empty() {
        errors.insert(ProfileField::IdNumber, "ID number is required.".to_owned());
    }

    errors
}
