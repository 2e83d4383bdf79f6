//! Planner synchronization store.

use tracing::{debug, instrument};

use sazon_core::{PlanEntry, PlanEntryId, PlanId, Recipe};

use crate::api::MealApi;
use crate::error::PlannerError;
use crate::session::Session;

/// Fallback message when loading fails without a server-provided message.
const LOAD_FALLBACK: &str = "Could not load the planner.";
/// Fallback message for a failed add.
const ADD_FALLBACK: &str = "Could not add the recipe.";
/// Fallback message for a failed removal.
const REMOVE_FALLBACK: &str = "Could not remove the recipe.";

/// Holds the current day's plan and mediates every mutation through the API.
///
/// Entries are insertion-ordered and identified by entry id (a recipe may
/// appear in multiple entries). No operation touches `entries` before its
/// network call resolves; on failure, prior state is left exactly as it was.
pub struct PlannerStore<A> {
    api: A,
    plan_id: Option<PlanId>,
    entries: Vec<PlanEntry>,
    is_loading: bool,
    error: Option<String>,
}

impl<A: MealApi> PlannerStore<A> {
    /// Create a store with no plan loaded yet.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            plan_id: None,
            entries: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    /// The id of the loaded plan, if any.
    #[must_use]
    pub const fn plan_id(&self) -> Option<PlanId> {
        self.plan_id
    }

    /// The plan's entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Whether a load is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last load error, if the most recent load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch today's plan and sync the store to it.
    ///
    /// On success, `plan_id` and `entries` are replaced atomically and any
    /// previous error is cleared. On failure, prior plan state is left
    /// untouched and the error message is stored. Idempotent: repeated calls
    /// simply re-sync.
    #[instrument(skip(self, session))]
    pub async fn load(&mut self, session: &Session) {
        self.is_loading = true;
        self.error = None;

        match self.api.today_plan(session).await {
            Ok(plan) => {
                debug!(plan_id = %plan.id, entries = plan.entries.len(), "planner synced");
                self.plan_id = Some(plan.id);
                self.entries = plan.entries;
                self.is_loading = false;
            }
            Err(err) => {
                self.error = Some(err.user_message(LOAD_FALLBACK));
                self.is_loading = false;
            }
        }
    }

    /// Add a recipe to the loaded plan.
    ///
    /// Fails fast with [`PlannerError::PlanNotLoaded`], without touching the
    /// network, when no plan is loaded. On success the server-returned entry
    /// is appended to the end of the list; existing entries are never
    /// reordered. On failure the store is unchanged and the error goes to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotLoaded` before `load` has succeeded, or
    /// the API error when the call fails.
    #[instrument(skip(self, session, recipe), fields(recipe_id = %recipe.id))]
    pub async fn add_entry(
        &mut self,
        session: &Session,
        recipe: &Recipe,
    ) -> Result<PlanEntry, PlannerError> {
        let Some(plan_id) = self.plan_id else {
            return Err(PlannerError::PlanNotLoaded);
        };

        let entry = self
            .api
            .create_plan_entry(session, plan_id, recipe.id)
            .await?;
        debug!(entry_id = %entry.id, "entry confirmed by server");

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove a plan entry by its entry id (not the recipe id).
    ///
    /// On success, exactly the matching entry is removed. On failure the
    /// store is unchanged and the error goes to the caller.
    ///
    /// # Errors
    ///
    /// Returns the API error when the delete fails.
    #[instrument(skip(self, session), fields(entry_id = %entry_id))]
    pub async fn remove_entry(
        &mut self,
        session: &Session,
        entry_id: PlanEntryId,
    ) -> Result<(), PlannerError> {
        self.api.delete_plan_entry(session, entry_id).await?;
        debug!("removal confirmed by server");

        self.entries.retain(|entry| entry.id != entry_id);
        Ok(())
    }
}

/// User-facing message for a failed planner mutation.
#[must_use]
pub fn mutation_message(err: &PlannerError, removing: bool) -> String {
    match err {
        PlannerError::PlanNotLoaded => "Cannot add recipes, plan not loaded.".to_owned(),
        PlannerError::Api(api) => {
            api.user_message(if removing { REMOVE_FALLBACK } else { ADD_FALLBACK })
        }
    }
}
