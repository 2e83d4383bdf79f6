//! Profile editor state.
//!
//! Holds the copy-on-edit form buffer for the user profile plus the pantry
//! buffer. The session profile stays canonical: the draft is seeded from it,
//! restored from it on cancel, and only a confirmed save response replaces
//! it (wholesale, via [`Session::login`]).

use tracing::{debug, instrument, warn};

use sazon_core::{
    FieldErrors, Ingredient, Profile, ProfileDraft, ProfileField, validate_profile,
};

use crate::api::MealApi;
use crate::error::ProfileError;
use crate::session::Session;

/// Fallback message for a failed profile save.
const SAVE_FALLBACK: &str = "Could not save the profile.";
/// Message for a failed pantry save.
const PANTRY_FALLBACK: &str = "Could not save the pantry. Try again.";

/// Form-state container for the profile/pantry editor.
pub struct ProfileEditor<A> {
    api: A,
    draft: ProfileDraft,
    editing_field: Option<ProfileField>,
    field_errors: FieldErrors,
    is_saving: bool,
    save_error: Option<String>,
    pantry: Vec<Ingredient>,
}

impl<A: MealApi> ProfileEditor<A> {
    /// Create an editor with an empty draft.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            draft: ProfileDraft {
                name: String::new(),
                calorie_goal: String::new(),
                phone: String::new(),
                address: String::new(),
                id_number: String::new(),
            },
            editing_field: None,
            field_errors: FieldErrors::new(),
            is_saving: false,
            save_error: None,
            pantry: Vec::new(),
        }
    }

    /// The current form buffer.
    #[must_use]
    pub const fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// The field currently being edited, if any.
    #[must_use]
    pub const fn editing_field(&self) -> Option<ProfileField> {
        self.editing_field
    }

    /// Validation errors from the last field change or submit attempt.
    #[must_use]
    pub const fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Whether a save is in progress.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// The last transport error message, if the most recent save failed.
    #[must_use]
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// The pantry buffer, in server order.
    #[must_use]
    pub fn pantry(&self) -> &[Ingredient] {
        &self.pantry
    }

    /// Sync the editor with the session: seed the draft from the canonical
    /// profile and load the pantry.
    ///
    /// A pantry load failure is logged and leaves the previous buffer in
    /// place; it does not block editing the profile.
    #[instrument(skip(self, session))]
    pub async fn refresh(&mut self, session: &Session) {
        let Some(profile) = session.profile() else {
            return;
        };
        self.draft = ProfileDraft::from(profile);
        self.field_errors.clear();

        match self.api.pantry(session).await {
            Ok(pantry) => {
                debug!(count = pantry.len(), "pantry loaded");
                self.pantry = pantry;
            }
            Err(err) => {
                warn!(error = %err, "failed to load pantry");
            }
        }
    }

    /// Begin editing a field. Clears any stale save error.
    pub fn edit_field(&mut self, field: ProfileField) {
        self.editing_field = Some(field);
        self.save_error = None;
    }

    /// Abandon the edit and restore the draft from the canonical profile.
    pub fn cancel(&mut self, session: &Session) {
        self.editing_field = None;
        if let Some(profile) = session.profile() {
            self.draft = ProfileDraft::from(profile);
        }
        self.field_errors.clear();
    }

    /// Update one field of the draft, re-validating for immediate feedback.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.field_errors = validate_profile(&self.draft);
    }

    /// Validate and submit the draft as the full `PUT /users/me` body.
    ///
    /// Validation is the authoritative gate: a non-empty result blocks
    /// submission and nothing reaches the network. On success the returned
    /// profile becomes the new canonical session profile, wholesale. On
    /// transport failure the session and draft are unchanged and
    /// `save_error` carries the user-facing message.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Invalid` with the field errors when validation
    /// fails, or `ProfileError::Api` when the request does.
    #[instrument(skip(self, session))]
    pub async fn save(&mut self, session: &mut Session) -> Result<Profile, ProfileError> {
        self.save_error = None;

        let errors = validate_profile(&self.draft);
        self.field_errors = errors.clone();
        if !errors.is_empty() {
            return Err(ProfileError::Invalid(errors));
        }

        self.is_saving = true;
        let result = self.api.update_profile(session, &self.draft).await;
        self.is_saving = false;

        match result {
            Ok(updated) => {
                debug!(user_id = %updated.id, "profile saved");
                session.login(updated.clone());
                self.editing_field = None;
                Ok(updated)
            }
            Err(err) => {
                self.save_error = Some(err.user_message(SAVE_FALLBACK));
                Err(ProfileError::Api(err))
            }
        }
    }

    /// Replace the pantry wholesale.
    ///
    /// Confirm-then-apply: the local buffer is only updated after the server
    /// acknowledges the `PUT`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Api` when the request fails; the local buffer
    /// is unchanged in that case.
    #[instrument(skip(self, session, ingredients), fields(count = ingredients.len()))]
    pub async fn update_pantry(
        &mut self,
        session: &Session,
        ingredients: Vec<Ingredient>,
    ) -> Result<(), ProfileError> {
        self.save_error = None;
        self.is_saving = true;
        let result = self.api.replace_pantry(session, &ingredients).await;
        self.is_saving = false;

        match result {
            Ok(()) => {
                debug!("pantry replaced");
                self.pantry = ingredients;
                Ok(())
            }
            Err(err) => {
                self.save_error = Some(err.user_message(PANTRY_FALLBACK));
                Err(ProfileError::Api(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sazon_core::UserId;

    use super::*;
    use crate::error::ApiError;
    use crate::stores::testing::{MockApi, profile};

    async fn seeded_editor(api: MockApi) -> (ProfileEditor<MockApi>, Session) {
        let mut session = Session::new();
        session.login(profile(1, "Ana"));
        api.push_pantry(Ok(vec![Ingredient::new("rice")]));
        let mut editor = ProfileEditor::new(api);
        editor.refresh(&session).await;
        (editor, session)
    }

    #[tokio::test]
    async fn refresh_seeds_draft_and_pantry() {
        let (editor, _session) = seeded_editor(MockApi::new()).await;
        assert_eq!(editor.draft().name, "Ana");
        assert_eq!(editor.draft().calorie_goal, "2000");
        assert_eq!(editor.pantry(), &[Ingredient::new("rice")]);
    }

    #[tokio::test]
    async fn refresh_without_profile_is_a_no_op() {
        let api = MockApi::new();
        let mut editor = ProfileEditor::new(api);
        editor.refresh(&Session::new()).await;
        assert!(editor.draft().name.is_empty());
        assert!(editor.pantry().is_empty());
    }

    #[tokio::test]
    async fn pantry_load_failure_does_not_block_editing() {
        let api = MockApi::new();
        let mut session = Session::new();
        session.login(profile(1, "Ana"));
        api.push_pantry(Err(ApiError::Parse("bad json".to_owned())));

        let mut editor = ProfileEditor::new(api);
        editor.refresh(&session).await;

        assert_eq!(editor.draft().name, "Ana");
        assert!(editor.pantry().is_empty());
    }

    #[tokio::test]
    async fn set_field_validates_live() {
        let (mut editor, _session) = seeded_editor(MockApi::new()).await;

        editor.set_field(ProfileField::CalorieGoal, "-5");
        assert!(editor.field_errors().contains_key(&ProfileField::CalorieGoal));

        editor.set_field(ProfileField::CalorieGoal, "1800");
        assert!(editor.field_errors().is_empty());
    }

    #[tokio::test]
    async fn cancel_restores_canonical_draft() {
        let (mut editor, session) = seeded_editor(MockApi::new()).await;

        editor.edit_field(ProfileField::Name);
        editor.set_field(ProfileField::Name, "");
        assert!(!editor.field_errors().is_empty());

        editor.cancel(&session);
        assert_eq!(editor.draft().name, "Ana");
        assert!(editor.editing_field().is_none());
        assert!(editor.field_errors().is_empty());
    }

    #[tokio::test]
    async fn invalid_draft_blocks_submission() {
        let api = MockApi::new();
        let (mut editor, mut session) = seeded_editor(api.clone()).await;

        editor.set_field(ProfileField::Name, "   ");
        let result = editor.save(&mut session).await;

        assert!(matches!(result, Err(ProfileError::Invalid(_))));
        assert!(editor.field_errors().contains_key(&ProfileField::Name));
        // Nothing reached the network.
        assert_eq!(api.update_profile_calls(), 0);
        // Session profile untouched.
        assert_eq!(session.profile().map(|p| p.name.as_str()), Some("Ana"));
    }

    #[tokio::test]
    async fn save_replaces_session_profile_wholesale() {
        let api = MockApi::new();
        let (mut editor, mut session) = seeded_editor(api.clone()).await;

        editor.edit_field(ProfileField::Name);
        editor.set_field(ProfileField::Name, "Ana María");
        let mut updated = profile(1, "Ana María");
        updated.calorie_goal = 1900;
        api.push_profile(Ok(updated.clone()));

        let saved = editor.save(&mut session).await.expect("save succeeds");
        assert_eq!(saved, updated);

        // The save response is the new canonical profile, exactly.
        assert_eq!(session.profile(), Some(&updated));
        assert!(editor.editing_field().is_none());
        assert!(!editor.is_saving());
        assert!(editor.save_error().is_none());
        // The full draft went on the wire.
        assert_eq!(
            api.last_profile_draft().map(|d| d.name),
            Some("Ana María".to_owned())
        );
    }

    #[tokio::test]
    async fn save_failure_keeps_session_and_sets_message() {
        let api = MockApi::new();
        let (mut editor, mut session) = seeded_editor(api.clone()).await;

        editor.set_field(ProfileField::Name, "Luis");
        api.push_profile(Err(ApiError::Api {
            status: 500,
            message: String::new(),
        }));

        let result = editor.save(&mut session).await;

        assert!(matches!(result, Err(ProfileError::Api(_))));
        assert_eq!(editor.save_error(), Some("Could not save the profile."));
        assert!(!editor.is_saving());
        // Session still holds the pre-save profile.
        assert_eq!(session.user_id(), Some(UserId::new(1)));
        assert_eq!(session.profile().map(|p| p.name.as_str()), Some("Ana"));
    }

    #[tokio::test]
    async fn pantry_update_is_confirm_then_apply() {
        let api = MockApi::new();
        let (mut editor, session) = seeded_editor(api.clone()).await;

        let new_pantry = vec![Ingredient::new("beans"), Ingredient::new("salt")];
        api.push_replace_pantry(Ok(()));

        editor
            .update_pantry(&session, new_pantry.clone())
            .await
            .expect("pantry update succeeds");

        assert_eq!(editor.pantry(), new_pantry.as_slice());
        assert_eq!(api.last_pantry_put(), Some(new_pantry));
    }

    #[tokio::test]
    async fn pantry_update_failure_keeps_old_pantry() {
        let api = MockApi::new();
        let (mut editor, session) = seeded_editor(api.clone()).await;

        api.push_replace_pantry(Err(ApiError::Api {
            status: 502,
            message: String::new(),
        }));

        let result = editor
            .update_pantry(&session, vec![Ingredient::new("beans")])
            .await;

        assert!(result.is_err());
        // The request did go out; only the local apply was skipped.
        assert_eq!(api.replace_pantry_calls(), 1);
        assert_eq!(editor.pantry(), &[Ingredient::new("rice")]);
        assert_eq!(
            editor.save_error(),
            Some("Could not save the pantry. Try again.")
        );
    }
}
