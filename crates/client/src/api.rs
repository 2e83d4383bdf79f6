//! Meal-planning API client.
//!
//! [`MealApi`] is the seam the stores are built against; [`ApiClient`] is the
//! reqwest implementation. Recipe reads are cached with `moka` (5-minute
//! TTL); planner, profile, and pantry state is never cached, since the
//! stores must stay authoritative against the server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use sazon_core::{
    DailyPlan, Ingredient, LoginCredentials, PantryUpdate, PlanEntry, PlanEntryId, PlanId,
    Profile, ProfileDraft, Recipe, RecipeId,
};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Recipe cache TTL.
const RECIPE_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Remote API surface consumed by the stores.
///
/// Every session-scoped method takes the [`Session`] explicitly; nothing
/// reads identity from ambient state. Stores are generic over this trait so
/// tests can substitute a programmable double.
#[async_trait]
pub trait MealApi {
    /// `POST /login`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Profile, ApiError>;

    /// `GET /planner/today`. The server lazily creates today's plan on
    /// first fetch.
    async fn today_plan(&self, session: &Session) -> Result<DailyPlan, ApiError>;

    /// `POST /planner/entries`. Returns the created entry, denormalized by
    /// the server.
    async fn create_plan_entry(
        &self,
        session: &Session,
        plan_id: PlanId,
        recipe_id: RecipeId,
    ) -> Result<PlanEntry, ApiError>;

    /// `DELETE /planner/entries/:id`.
    async fn delete_plan_entry(
        &self,
        session: &Session,
        entry_id: PlanEntryId,
    ) -> Result<(), ApiError>;

    /// `PUT /users/me` with the full draft. Returns the updated canonical
    /// profile.
    async fn update_profile(
        &self,
        session: &Session,
        draft: &ProfileDraft,
    ) -> Result<Profile, ApiError>;

    /// `GET /users/me/pantry`.
    async fn pantry(&self, session: &Session) -> Result<Vec<Ingredient>, ApiError>;

    /// `PUT /users/me/pantry`, replacing the pantry wholesale.
    async fn replace_pantry(
        &self,
        session: &Session,
        ingredients: &[Ingredient],
    ) -> Result<(), ApiError>;

    /// `GET /recipes`.
    async fn recipes(&self, session: &Session) -> Result<Vec<Recipe>, ApiError>;

    /// `GET /recipes/:id`.
    async fn recipe(&self, session: &Session, id: RecipeId) -> Result<Recipe, ApiError>;
}

/// Cache key for recipe reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Recipes,
    Recipe(RecipeId),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Recipes(Arc<Vec<Recipe>>),
    Recipe(Arc<Recipe>),
}

/// Client for the meal-planning REST API.
///
/// Cheaply cloneable; all clones share one HTTP connection pool and recipe
/// cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash, e.g. `http://localhost:3000/api`.
    base: String,
    recipe_cache: Cache<CacheKey, CacheValue>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let recipe_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(RECIPE_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base: config.base_url.as_str().trim_end_matches('/').to_owned(),
                recipe_cache,
            }),
        })
    }

    /// Build a request with the standard headers.
    ///
    /// `X-User-ID` is attached only when the session holds a profile;
    /// `X-Request-ID` is attached to every request.
    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base);
        let mut builder = self
            .inner
            .client
            .request(method, url)
            .header("X-Request-ID", Uuid::new_v4().to_string());

        if let Some(user_id) = session.and_then(Session::user_id) {
            builder = builder.header("X-User-ID", user_id.to_string());
        }

        builder
    }

    /// Send a request and decode a JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "API returned non-success status");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a request whose success response carries no meaningful body.
    async fn send_no_body(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "API returned non-success status");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl MealApi for ApiClient {
    #[instrument(skip(self, credentials))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<Profile, ApiError> {
        let profile: Profile = self
            .send_json(self.request(Method::POST, "/login", None).json(credentials))
            .await?;
        debug!(user_id = %profile.id, "logged in");
        Ok(profile)
    }

    #[instrument(skip(self, session))]
    async fn today_plan(&self, session: &Session) -> Result<DailyPlan, ApiError> {
        let plan: DailyPlan = self
            .send_json(self.request(Method::GET, "/planner/today", Some(session)))
            .await?;
        debug!(plan_id = %plan.id, entries = plan.entries.len(), "fetched today's plan");
        Ok(plan)
    }

    #[instrument(skip(self, session), fields(plan_id = %plan_id, recipe_id = %recipe_id))]
    async fn create_plan_entry(
        &self,
        session: &Session,
        plan_id: PlanId,
        recipe_id: RecipeId,
    ) -> Result<PlanEntry, ApiError> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateEntry {
            recipe_id: RecipeId,
            plan_id: PlanId,
        }

        let entry: PlanEntry = self
            .send_json(
                self.request(Method::POST, "/planner/entries", Some(session))
                    .json(&CreateEntry { recipe_id, plan_id }),
            )
            .await?;
        debug!(entry_id = %entry.id, "created plan entry");
        Ok(entry)
    }

    #[instrument(skip(self, session), fields(entry_id = %entry_id))]
    async fn delete_plan_entry(
        &self,
        session: &Session,
        entry_id: PlanEntryId,
    ) -> Result<(), ApiError> {
        self.send_no_body(self.request(
            Method::DELETE,
            &format!("/planner/entries/{entry_id}"),
            Some(session),
        ))
        .await?;
        debug!("deleted plan entry");
        Ok(())
    }

    #[instrument(skip(self, session, draft))]
    async fn update_profile(
        &self,
        session: &Session,
        draft: &ProfileDraft,
    ) -> Result<Profile, ApiError> {
        let profile: Profile = self
            .send_json(
                self.request(Method::PUT, "/users/me", Some(session))
                    .json(draft),
            )
            .await?;
        debug!(user_id = %profile.id, "updated profile");
        Ok(profile)
    }

    #[instrument(skip(self, session))]
    async fn pantry(&self, session: &Session) -> Result<Vec<Ingredient>, ApiError> {
        self.send_json(self.request(Method::GET, "/users/me/pantry", Some(session)))
            .await
    }

    #[instrument(skip(self, session, ingredients), fields(count = ingredients.len()))]
    async fn replace_pantry(
        &self,
        session: &Session,
        ingredients: &[Ingredient],
    ) -> Result<(), ApiError> {
        let body = PantryUpdate {
            ingredients: ingredients.to_vec(),
        };
        self.send_no_body(
            self.request(Method::PUT, "/users/me/pantry", Some(session))
                .json(&body),
        )
        .await?;
        debug!("replaced pantry");
        Ok(())
    }

    #[instrument(skip(self, session))]
    async fn recipes(&self, session: &Session) -> Result<Vec<Recipe>, ApiError> {
        if let Some(CacheValue::Recipes(recipes)) =
            self.inner.recipe_cache.get(&CacheKey::Recipes).await
        {
            debug!("recipe list cache hit");
            return Ok(recipes.as_ref().clone());
        }

        let recipes: Vec<Recipe> = self
            .send_json(self.request(Method::GET, "/recipes", Some(session)))
            .await?;

        self.inner
            .recipe_cache
            .insert(
                CacheKey::Recipes,
                CacheValue::Recipes(Arc::new(recipes.clone())),
            )
            .await;

        Ok(recipes)
    }

    #[instrument(skip(self, session), fields(recipe_id = %id))]
    async fn recipe(&self, session: &Session, id: RecipeId) -> Result<Recipe, ApiError> {
        if let Some(CacheValue::Recipe(recipe)) =
            self.inner.recipe_cache.get(&CacheKey::Recipe(id)).await
        {
            debug!("recipe cache hit");
            return Ok(recipe.as_ref().clone());
        }

        let recipe: Recipe = self
            .send_json(self.request(Method::GET, &format!("/recipes/{id}"), Some(session)))
            .await?;

        self.inner
            .recipe_cache
            .insert(
                CacheKey::Recipe(id),
                CacheValue::Recipe(Arc::new(recipe.clone())),
            )
            .await;

        Ok(recipe)
    }
}

/// Error response body shape.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the server-provided `message` out of an error body, if any.
///
/// Returns an empty string when the body is not JSON or carries no message;
/// callers fall back to their own generic text via
/// [`ApiError::user_message`](crate::error::ApiError::user_message).
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_default()
}
