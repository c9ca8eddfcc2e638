//! Session and user profile types.

use serde::{Deserialize, Serialize};

// ============================================================================
// User Profile
// ============================================================================

/// Profile of the signed-in user, as returned by the backend.
///
/// The aliases absorb the field-name drift between backend revisions
/// (`fullName` vs `full_name`, `id_number` vs `nationalId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    #[serde(alias = "fullName")]
    pub full_name: String,
    /// Email address used to sign in.
    pub email: String,
    /// National ID number, collected at signup.
    #[serde(default, alias = "id_number", alias = "nationalId")]
    pub national_id: Option<String>,
}

// ============================================================================
// Session
// ============================================================================

/// An authenticated session: the bearer token plus the user it belongs to.
///
/// Created on successful login or signup, cleared on logout. There is no
/// client-side expiry; a stale token simply fails its next request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent with every authenticated request.
    pub token: String,
    /// Profile of the signed-in user, when the backend supplied one.
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates a session from a token and optional profile.
    #[must_use]
    pub fn new(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Name to greet the user with: full name if known, otherwise the part
    /// of the email before the `@`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.user {
            Some(user) if !user.full_name.is_empty() => &user.full_name,
            Some(user) => user.email.split('@').next().unwrap_or(&user.email),
            None => "there",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_camel_case_aliases() {
        let json = r#"{"id":"u1","fullName":"Jane Doe","email":"jane@example.com","nationalId":"12345678"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.national_id.as_deref(), Some("12345678"));
    }

    #[test]
    fn test_profile_accepts_snake_case_fields() {
        let json = r#"{"id":"u2","full_name":"John Doe","email":"john@example.com","id_number":"87654321"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "John Doe");
        assert_eq!(profile.national_id.as_deref(), Some("87654321"));
    }

    #[test]
    fn test_display_name_falls_back_to_email_prefix() {
        let session = Session::new(
            "tok",
            Some(UserProfile {
                id: "u1".to_string(),
                full_name: String::new(),
                email: "jane@example.com".to_string(),
                national_id: None,
            }),
        );
        assert_eq!(session.display_name(), "jane");
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session::new("tok123", None);
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}
