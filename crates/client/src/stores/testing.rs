//! Programmable [`MealApi`] double for store tests.
//!
//! Each endpoint has a queue of canned results, popped in order, plus call
//! counters and captured request arguments so tests can assert exactly what
//! reached the "network".

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use sazon_core::{
    DailyPlan, Ingredient, LoginCredentials, PlanEntry, PlanEntryId, PlanId, Profile,
    ProfileDraft, Recipe, RecipeId, UserId,
};

use crate::api::MealApi;
use crate::error::ApiError;
use crate::session::Session;

#[derive(Default)]
struct MockState {
    login_results: VecDeque<Result<Profile, ApiError>>,
    plan_results: VecDeque<Result<DailyPlan, ApiError>>,
    create_results: VecDeque<Result<PlanEntry, ApiError>>,
    delete_results: VecDeque<Result<(), ApiError>>,
    profile_results: VecDeque<Result<Profile, ApiError>>,
    pantry_results: VecDeque<Result<Vec<Ingredient>, ApiError>>,
    replace_pantry_results: VecDeque<Result<(), ApiError>>,

    login_calls: usize,
    create_entry_calls: usize,
    update_profile_calls: usize,
    replace_pantry_calls: usize,

    last_create_request: Option<(PlanId, RecipeId)>,
    last_delete_request: Option<PlanEntryId>,
    last_profile_draft: Option<ProfileDraft>,
    last_pantry_put: Option<Vec<Ingredient>>,
    last_tagged_user: Option<Option<UserId>>,
}

/// A programmable in-memory [`MealApi`].
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    pub fn push_login(&self, result: Result<Profile, ApiError>) {
        self.lock().login_results.push_back(result);
    }

    pub fn push_plan(&self, result: Result<DailyPlan, ApiError>) {
        self.lock().plan_results.push_back(result);
    }

    pub fn push_create(&self, result: Result<PlanEntry, ApiError>) {
        self.lock().create_results.push_back(result);
    }

    pub fn push_delete(&self, result: Result<(), ApiError>) {
        self.lock().delete_results.push_back(result);
    }

    pub fn push_profile(&self, result: Result<Profile, ApiError>) {
        self.lock().profile_results.push_back(result);
    }

    pub fn push_pantry(&self, result: Result<Vec<Ingredient>, ApiError>) {
        self.lock().pantry_results.push_back(result);
    }

    pub fn push_replace_pantry(&self, result: Result<(), ApiError>) {
        self.lock().replace_pantry_results.push_back(result);
    }

    pub fn login_calls(&self) -> usize {
        self.lock().login_calls
    }

    pub fn create_entry_calls(&self) -> usize {
        self.lock().create_entry_calls
    }

    pub fn update_profile_calls(&self) -> usize {
        self.lock().update_profile_calls
    }

    pub fn replace_pantry_calls(&self) -> usize {
        self.lock().replace_pantry_calls
    }

    pub fn last_create_request(&self) -> Option<(PlanId, RecipeId)> {
        self.lock().last_create_request
    }

    pub fn last_delete_request(&self) -> Option<PlanEntryId> {
        self.lock().last_delete_request
    }

    pub fn last_profile_draft(&self) -> Option<ProfileDraft> {
        self.lock().last_profile_draft.clone()
    }

    pub fn last_pantry_put(&self) -> Option<Vec<Ingredient>> {
        self.lock().last_pantry_put.clone()
    }

    /// The user id the most recent session-scoped call was tagged with.
    pub fn last_tagged_user(&self) -> Option<Option<UserId>> {
        self.lock().last_tagged_user
    }
}

#[async_trait]
impl MealApi for MockApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<Profile, ApiError> {
        let mut state = self.lock();
        state.login_calls += 1;
        state.login_results.pop_front().expect("no login result queued")
    }

    async fn today_plan(&self, session: &Session) -> Result<DailyPlan, ApiError> {
        let mut state = self.lock();
        state.last_tagged_user = Some(session.user_id());
        state.plan_results.pop_front().expect("no plan result queued")
    }

    async fn create_plan_entry(
        &self,
        session: &Session,
        plan_id: PlanId,
        recipe_id: RecipeId,
    ) -> Result<PlanEntry, ApiError> {
        let mut state = self.lock();
        state.create_entry_calls += 1;
        state.last_tagged_user = Some(session.user_id());
        state.last_create_request = Some((plan_id, recipe_id));
        state
            .create_results
            .pop_front()
            .expect("no create result queued")
    }

    async fn delete_plan_entry(
        &self,
        session: &Session,
        entry_id: PlanEntryId,
    ) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.last_tagged_user = Some(session.user_id());
        state.last_delete_request = Some(entry_id);
        state
            .delete_results
            .pop_front()
            .expect("no delete result queued")
    }

    async fn update_profile(
        &self,
        session: &Session,
        draft: &ProfileDraft,
    ) -> Result<Profile, ApiError> {
        let mut state = self.lock();
        state.update_profile_calls += 1;
        state.last_tagged_user = Some(session.user_id());
        state.last_profile_draft = Some(draft.clone());
        state
            .profile_results
            .pop_front()
            .expect("no profile result queued")
    }

    async fn pantry(&self, session: &Session) -> Result<Vec<Ingredient>, ApiError> {
        let mut state = self.lock();
        state.last_tagged_user = Some(session.user_id());
        state
            .pantry_results
            .pop_front()
            .expect("no pantry result queued")
    }

    async fn replace_pantry(
        &self,
        session: &Session,
        ingredients: &[Ingredient],
    ) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.replace_pantry_calls += 1;
        state.last_tagged_user = Some(session.user_id());
        state.last_pantry_put = Some(ingredients.to_vec());
        state
            .replace_pantry_results
            .pop_front()
            .expect("no replace-pantry result queued")
    }

    // The stores never browse the catalog themselves, so these return fixed
    // shapes rather than queued results.
    async fn recipes(&self, session: &Session) -> Result<Vec<Recipe>, ApiError> {
        let mut state = self.lock();
        state.last_tagged_user = Some(session.user_id());
        Ok(Vec::new())
    }

    async fn recipe(&self, session: &Session, id: RecipeId) -> Result<Recipe, ApiError> {
        let mut state = self.lock();
        state.last_tagged_user = Some(session.user_id());
        Ok(recipe(id.as_i64(), "Recipe"))
    }
}

/// Test fixture: a plan with the given id and entries.
pub fn plan(id: i64, entries: Vec<PlanEntry>) -> DailyPlan {
    DailyPlan {
        id: PlanId::new(id),
        date: None,
        entries,
    }
}

/// Test fixture: a plan entry.
pub fn entry(id: i64, recipe_id: i64, title: &str) -> PlanEntry {
    PlanEntry {
        id: PlanEntryId::new(id),
        recipe_id: RecipeId::new(recipe_id),
        title: title.to_owned(),
        calories: None,
        image_url: None,
    }
}

/// Test fixture: a recipe.
pub fn recipe(id: i64, title: &str) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: title.to_owned(),
        description: None,
        calories: None,
        image_url: None,
    }
}

/// Test fixture: a complete profile.
pub fn profile(id: i64, name: &str) -> Profile {
    Profile {
        id: UserId::new(id),
        name: name.to_owned(),
        email: None,
        calorie_goal: 2000,
        phone: "555-0100".to_owned(),
        address: "1 Market St".to_owned(),
        id_number: "A-123".to_owned(),
    }
}
