//! Session-scoped profile state.
//!
//! A [`Session`] holds the authenticated user's canonical profile, or its
//! absence when logged out. It is constructed explicitly at session start
//! and dropped (or cleared) at logout; every API call takes it by reference,
//! so request tagging is explicit rather than read from ambient state.

use sazon_core::{Profile, UserId};

/// The current session: the canonical [`Profile`], or logged-out.
///
/// Source of truth for identity. The profile is replaced wholesale on login
/// and after every profile save (the save response is the new canonical
/// profile); it is never merged field-by-field.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<Profile>,
}

impl Session {
    /// Create a logged-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { profile: None }
    }

    /// Replace the stored profile wholesale.
    ///
    /// Used both at authentication time and after a profile save.
    pub fn login(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Clear the profile, returning to the logged-out state.
    pub fn logout(&mut self) {
        self.profile = None;
    }

    /// The canonical profile, when authenticated.
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Whether a profile is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// The authenticated user's id, used to tag outgoing requests.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.profile.as_ref().map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use sazon_core::UserId;

    use super::*;

    fn profile(id: i64, name: &str) -> Profile {
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

    #[test]
    fn starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user_id().is_none());
    }

    #[test]
    fn login_replaces_wholesale() {
        let mut session = Session::new();
        session.login(profile(1, "Ana"));
        session.login(profile(2, "Luis"));

        let current = session.profile().expect("profile present");
        assert_eq!(current.id, UserId::new(2));
        assert_eq!(current.name, "Luis");
        assert_eq!(session.user_id(), Some(UserId::new(2)));
    }

    #[test]
    fn logout_clears() {
        let mut session = Session::new();
        session.login(profile(1, "Ana"));
        session.logout();
        assert!(session.profile().is_none());
    }
}
