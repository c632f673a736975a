//! AuthState - Session and Current User

use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::helpers;

/// Persisted session, token encrypted at rest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<User>,
    /// AES-256-GCM encrypted auth token, Base64-encoded
    pub token: Option<String>,
}

/// State for the authenticated session
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// Current user, if signed in
    user: Option<User>,
    /// Raw backend auth token
    token: Option<String>,
    /// Whether a sign-in request is in flight
    pub signing_in: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    // ==================== Setters ====================

    /// Record a successful sign-in
    pub fn sign_in(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.signing_in = false;
    }

    /// Drop the session
    pub fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
        self.signing_in = false;
    }

    pub fn set_signing_in(&mut self, signing_in: bool) {
        self.signing_in = signing_in;
    }

    // ==================== Persistence ====================

    /// Snapshot for disk storage, with the token encrypted
    pub fn to_persisted(&self) -> crate::error::Result<PersistedSession> {
        let token = match &self.token {
            Some(t) => Some(helpers::encrypt(t)?),
            None => None,
        };
        Ok(PersistedSession {
            user: self.user.clone(),
            token,
        })
    }

    /// Restore a session from disk storage
    ///
    /// A session whose token fails to decrypt is treated as signed out.
    pub fn from_persisted(persisted: PersistedSession) -> Self {
        let token = persisted
            .token
            .as_deref()
            .and_then(|t| helpers::decrypt(t).ok());
        Self {
            user: if token.is_some() { persisted.user } else { None },
            token,
            signing_in: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "usr_01".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sign_in_then_out() {
        let mut state = AuthState::new();
        assert!(!state.is_authenticated());

        state.sign_in(test_user(), "token-abc".to_string());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("token-abc"));

        state.sign_out();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn persisted_round_trip_keeps_session() {
        let mut state = AuthState::new();
        state.sign_in(test_user(), "token-abc".to_string());

        let persisted = state.to_persisted().expect("persist");
        // Token must not be stored in the clear
        assert_ne!(persisted.token.as_deref(), Some("token-abc"));

        let restored = AuthState::from_persisted(persisted);
        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("token-abc"));
    }

    #[test]
    fn corrupt_persisted_token_signs_out() {
        let persisted = PersistedSession {
            user: Some(test_user()),
            token: Some("garbage".to_string()),
        };
        let restored = AuthState::from_persisted(persisted);
        assert!(!restored.is_authenticated());
    }
}
