use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in user's credentials and profile fields.
///
/// Serialized with the same camelCase keys the web dashboard keeps under its
/// `user` storage entry, so a session file can be shared with it.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub salary: Option<Decimal>,
}

impl Session {
    pub fn new(token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Session {
            token: token.into(),
            refresh_token,
            email: None,
            is_admin: false,
            salary: None,
        }
    }

    /// Returns a copy carrying a freshly issued token pair.
    pub fn with_tokens(&self, token: String, refresh_token: String) -> Self {
        Session {
            token,
            refresh_token: Some(refresh_token),
            ..self.clone()
        }
    }
}

// Tokens never reach logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("email", &self.email)
            .field("is_admin", &self.is_admin)
            .field("salary", &self.salary)
            .finish()
    }
}

/// Change notifications published by every session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEvent {
    /// A session was stored where there was none.
    SignedIn,
    /// An existing session was overwritten, e.g. after a token refresh.
    Updated,
    /// The session was removed.
    SignedOut,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_debug_redacts_tokens() {
        let session = Session::new("secret-token", Some("secret-refresh".to_string()));
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-token"));
        assert!(!printed.contains("secret-refresh"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_with_tokens_keeps_profile_fields() {
        let mut session = Session::new("old", Some("old-refresh".to_string()));
        session.email = Some("user@example.com".to_string());
        session.is_admin = true;

        let refreshed = session.with_tokens("new".to_string(), "new-refresh".to_string());
        assert_eq!(refreshed.token, "new");
        assert_eq!(refreshed.refresh_token.as_deref(), Some("new-refresh"));
        assert_eq!(refreshed.email, session.email);
        assert!(refreshed.is_admin);
    }

    #[test]
    fn test_deserializes_dashboard_user_entry() {
        let session: Session = serde_json::from_value(json!({
            "token": "t",
            "refreshToken": "r",
            "email": "admin@admin.com",
            "isAdmin": true
        }))
        .unwrap();
        assert_eq!(session.refresh_token.as_deref(), Some("r"));
        assert!(session.is_admin);
        assert_eq!(session.salary, None);
    }
}
