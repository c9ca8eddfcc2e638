//! Auth flow controller: login/signup form state and local validation.
//!
//! Validation failures never reach the network; the submit action in
//! `app_actions` checks here first and only spawns a request when the form
//! passes. Server and connectivity errors land back in [`AuthFlow::notice`]
//! as inline text, exactly once, with no automatic retry.

use crate::domain::ApiError;

// ============================================================================
// View & Notice
// ============================================================================

/// Which auth form is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
}

impl AuthView {
    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Severity of the inline message under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// Inline message under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNotice {
    pub kind: NoticeKind,
    pub text: String,
}

// ============================================================================
// Auth Flow
// ============================================================================

/// Login form field order.
const LOGIN_FIELDS: usize = 2;
/// Signup form field order: full name, national ID, email, password, confirm.
const SIGNUP_FIELDS: usize = 5;

/// State of the login/signup flow.
#[derive(Debug, Default)]
pub struct AuthFlow {
    /// Active form.
    pub view: AuthView,

    // === Shared fields ===
    pub email: String,
    pub password: String,

    // === Signup-only fields ===
    pub full_name: String,
    pub national_id: String,
    pub confirm_password: String,

    /// Index of the focused field within the active view's field order.
    pub focus: usize,
    /// Whether password fields render their text.
    pub show_password: bool,
    /// In-flight guard: a submit is outstanding.
    pub submitting: bool,
    /// Inline message under the form.
    pub notice: Option<AuthNotice>,
}

impl AuthFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields in the active view.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        match self.view {
            AuthView::Login => LOGIN_FIELDS,
            AuthView::Signup => SIGNUP_FIELDS,
        }
    }

    /// Switches between login and signup, keeping typed values but
    /// resetting focus and any message.
    pub fn switch_view(&mut self) {
        self.view = self.view.toggled();
        self.focus = 0;
        self.notice = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + count - 1) % count;
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Mutable access to the focused field's text.
    fn focused_field_mut(&mut self) -> &mut String {
        match (self.view, self.focus) {
            (AuthView::Login, 0) => &mut self.email,
            (AuthView::Login, _) => &mut self.password,
            (AuthView::Signup, 0) => &mut self.full_name,
            (AuthView::Signup, 1) => &mut self.national_id,
            (AuthView::Signup, 2) => &mut self.email,
            (AuthView::Signup, 3) => &mut self.password,
            (AuthView::Signup, _) => &mut self.confirm_password,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if !c.is_control() {
            self.focused_field_mut().push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    // ========================================================================
    // Notices
    // ========================================================================

    pub fn notice_success(&mut self, text: impl Into<String>) {
        self.notice = Some(AuthNotice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    pub fn notice_error(&mut self, error: &ApiError) {
        let kind = match error {
            ApiError::Connectivity { detail } => {
                tracing::warn!(%detail, "auth request failed to connect");
                NoticeKind::Warning
            }
            _ => NoticeKind::Error,
        };
        self.notice = Some(AuthNotice {
            kind,
            text: error.to_string(),
        });
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validates the active form without touching the network.
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), ApiError> {
        match self.view {
            AuthView::Login => validate_login(&self.email, &self.password),
            AuthView::Signup => validate_signup(
                &self.full_name,
                &self.national_id,
                &self.email,
                &self.password,
                &self.confirm_password,
            ),
        }
    }
}

/// Login constraints: both fields non-empty, email syntactically valid.
///
/// # Errors
///
/// `ApiError::Validation` on the first failed constraint.
pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }
    if !is_valid_email(email) {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    Ok(())
}

/// Signup constraints. The password/confirmation comparison happens here,
/// before any request is built.
///
/// # Errors
///
/// `ApiError::Validation` on the first failed constraint.
pub fn validate_signup(
    full_name: &str,
    national_id: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    if full_name.trim().is_empty()
        || national_id.trim().is_empty()
        || email.trim().is_empty()
        || password.is_empty()
    {
        return Err(ApiError::validation("All fields are required"));
    }
    if !is_valid_email(email) {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    if password != confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }
    Ok(())
}

/// Minimal syntactic email check: one `@`, non-empty local part, and a
/// dotted domain with no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jane@example.com", true)]
    #[case("a@b.co", true)]
    #[case("", false)]
    #[case("no-at-sign.com", false)]
    #[case("@example.com", false)]
    #[case("jane@", false)]
    #[case("jane@example", false)]
    #[case("jane doe@example.com", false)]
    #[case("jane@ex@ample.com", false)]
    fn test_email_syntax(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid, "{email}");
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("", "pw").is_err());
        assert!(validate_login("jane@example.com", "").is_err());
        assert!(validate_login("jane@example.com", "pw").is_ok());
    }

    #[test]
    fn test_signup_password_mismatch_is_local_error() {
        let err = validate_signup("Jane", "123", "jane@example.com", "pw1", "pw2").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_signup_all_fields_required() {
        assert!(validate_signup("", "123", "jane@example.com", "pw", "pw").is_err());
        assert!(validate_signup("Jane", "", "jane@example.com", "pw", "pw").is_err());
        assert!(validate_signup("Jane", "123", "jane@example.com", "pw", "pw").is_ok());
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut flow = AuthFlow::new();
        flow.type_char('a');
        flow.focus_next();
        flow.type_char('b');

        assert_eq!(flow.email, "a");
        assert_eq!(flow.password, "b");
    }

    #[test]
    fn test_focus_wraps_per_view() {
        let mut flow = AuthFlow::new();
        assert_eq!(flow.field_count(), 2);
        flow.focus_next();
        flow.focus_next();
        assert_eq!(flow.focus, 0);

        flow.switch_view();
        assert_eq!(flow.field_count(), 5);
        flow.focus_prev();
        assert_eq!(flow.focus, 4);
    }

    #[test]
    fn test_switch_view_keeps_values_and_clears_notice() {
        let mut flow = AuthFlow::new();
        flow.type_char('x');
        flow.notice_success("Login successful");
        flow.switch_view();

        assert_eq!(flow.email, "x");
        assert!(flow.notice.is_none());
        assert_eq!(flow.view, AuthView::Signup);
    }

    #[test]
    fn test_connectivity_notice_is_warning() {
        let mut flow = AuthFlow::new();
        flow.notice_error(&ApiError::connectivity("refused"));
        let notice = flow.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.text, "Error connecting to server");
    }
}
