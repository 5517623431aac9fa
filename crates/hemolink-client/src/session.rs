//! Client-side session state.

use hemolink_core::model::AuthResponse;

/// The signed-in user and their token, held for the life of the client.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    current_user: Option<AuthResponse>,
}

impl Session {
    /// Store the issued token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// The current token, if signed in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Store the signed-in user.
    pub fn set_current_user(&mut self, user: AuthResponse) {
        self.current_user = Some(user);
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&AuthResponse> {
        self.current_user.as_ref()
    }

    /// Sign out: drop the token and the user.
    pub fn clear(&mut self) {
        self.token = None;
        self.current_user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_response() -> AuthResponse {
        AuthResponse {
            token: "tok".to_string(),
            user_id: 1,
            full_name: "Sarah".to_string(),
            email: "sarah@example.com".to_string(),
            role: "Donor".to_string(),
            blood_type: None,
            rhesus: None,
            home_address: None,
        }
    }

    #[test]
    fn test_session_starts_empty() {
        let session = Session::default();
        assert!(session.token().is_none());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_clear_resets_both_fields() {
        let mut session = Session::default();
        session.set_token("tok");
        session.set_current_user(auth_response());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.current_user().unwrap().user_id, 1);

        session.clear();
        assert!(session.token().is_none());
        assert!(session.current_user().is_none());
    }
}
