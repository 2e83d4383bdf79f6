//! Daily plan and recipe wire types.
//!
//! These mirror the JSON shapes returned by the planner API. Field names are
//! camelCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::{PlanEntryId, PlanId, RecipeId};

/// A recipe as returned by the recipe endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One recipe placement within a daily plan.
///
/// Identified by its own entry id, not the recipe id: the same recipe may
/// appear in a plan more than once, each time as a distinct entry. The
/// recipe fields are denormalized onto the entry by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub id: PlanEntryId,
    pub recipe_id: RecipeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The server-side plan for one calendar day.
///
/// Lazily created by the server on first fetch, so a fresh plan may come
/// back without an `entries` field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub id: PlanId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}
