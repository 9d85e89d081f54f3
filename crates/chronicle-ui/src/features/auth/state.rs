//! Authentication slice: the cached session plus login/register status.
//!
//! # Design
//! - The persisted session blob is the only durable state; everything here
//!   is a mirror of it.
//! - Parsing the stored blob is tolerant: malformed JSON means "logged out",
//!   never an error at startup.
//! - Permission checks go through the session's single `full_access`
//!   boolean, normalized once when a bundle enters the slice.

use chronicle_api_models::Session;

/// Authentication slice of the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Active session, if any.
    pub session: Option<Session>,
    /// Whether the persisted blob has been read this page load; gated
    /// routes wait for it to avoid a spurious login redirect.
    pub bootstrapped: bool,
    /// Whether a login/register call is in flight.
    pub loading: bool,
    /// Display message for the last failed auth operation.
    pub error: Option<String>,
}

impl AuthState {
    /// Whether a session is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Seed the slice from the persisted blob read at startup.
    pub fn bootstrap(&mut self, stored: Option<&str>) {
        self.session = stored.and_then(parse_stored_session);
        self.bootstrapped = true;
    }

    /// Enter the pending state for a login/register call.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed auth operation.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Install a fresh session bundle (login, register or refresh).
    pub fn sign_in(&mut self, session: Session) {
        self.loading = false;
        self.error = None;
        self.session = Some(session.normalized());
    }

    /// Drop the session (logout or irrecoverable refresh failure).
    pub fn sign_out(&mut self) {
        self.session = None;
        self.loading = false;
        self.error = None;
    }
}

/// Decode a persisted session blob, treating malformed JSON as absent.
#[must_use]
pub fn parse_stored_session(raw: &str) -> Option<Session> {
    serde_json::from_str::<Session>(raw)
        .ok()
        .map(Session::normalized)
}

/// Outcome of evaluating a gated route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the gated content.
    Allow,
    /// No session: send the visitor to the login page.
    RedirectToLogin,
    /// Authenticated but lacking the permission: render access denied.
    Denied,
}

/// Evaluate a gated route: unauthenticated visitors are redirected,
/// authenticated ones lacking the required permission see access denied.
#[must_use]
pub fn gate(session: Option<&Session>, required: Option<&str>) -> GateOutcome {
    let Some(session) = session else {
        return GateOutcome::RedirectToLogin;
    };
    match required {
        Some(slug) if !session.has_permission(slug) => GateOutcome::Denied,
        _ => GateOutcome::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthState, GateOutcome, gate, parse_stored_session};
    use chronicle_api_models::Session;

    const STORED: &str = r#"{
        "accessToken": "acc", "refreshToken": "ref", "tokenType": "Bearer",
        "expiresIn": 3600, "id": 9, "name": "Ada", "email": "ada@example.com",
        "permissions": ["POST_READ"], "roles": ["EDITOR"]
    }"#;

    fn session() -> Session {
        parse_stored_session(STORED).expect("fixture parses")
    }

    #[test]
    fn bootstrap_with_valid_blob_authenticates() {
        let mut state = AuthState::default();
        state.bootstrap(Some(STORED));
        assert!(state.bootstrapped);
        assert!(state.is_authenticated());
        let session = state.session.expect("session present");
        assert_eq!(session.id, 9);
        assert_eq!(session.name, "Ada");
    }

    #[test]
    fn bootstrap_tolerates_missing_and_malformed_blobs() {
        let mut state = AuthState::default();
        state.bootstrap(None);
        assert!(!state.is_authenticated());
        state.bootstrap(Some("{not json"));
        assert!(!state.is_authenticated());
        state.bootstrap(Some(r#"{"accessToken": "only"}"#));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn sign_in_normalizes_the_sentinel_permission() {
        let mut state = AuthState::default();
        let mut bundle = session();
        bundle.permissions.push("FULL_ACCESS".to_string());
        state.sign_in(bundle);
        let session = state.session.as_ref().expect("session present");
        assert!(session.full_access);
        assert!(session.has_permission("USER_DELETE"));
    }

    #[test]
    fn sign_in_replaces_a_stale_bundle() {
        let mut state = AuthState::default();
        state.sign_in(session());
        let mut refreshed = session();
        refreshed.access_token = "acc2".to_string();
        refreshed.permissions.push("POST_WRITE".to_string());
        state.sign_in(refreshed);
        let session = state.session.as_ref().expect("session present");
        assert_eq!(session.access_token, "acc2");
        assert!(session.has_permission("POST_WRITE"));
    }

    #[test]
    fn sign_out_clears_everything() {
        let mut state = AuthState::default();
        state.sign_in(session());
        state.fail("stale".to_string());
        state.sign_out();
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn gate_redirects_then_denies_then_allows() {
        assert_eq!(gate(None, None), GateOutcome::RedirectToLogin);
        assert_eq!(
            gate(None, Some("USER_READ")),
            GateOutcome::RedirectToLogin
        );
        let session = session();
        assert_eq!(
            gate(Some(&session), Some("USER_READ")),
            GateOutcome::Denied
        );
        assert_eq!(
            gate(Some(&session), Some("POST_READ")),
            GateOutcome::Allow
        );
        assert_eq!(gate(Some(&session), None), GateOutcome::Allow);
    }

    #[test]
    fn gate_honours_full_access() {
        let mut session = session();
        session.full_access = true;
        assert_eq!(
            gate(Some(&session), Some("ANYTHING")),
            GateOutcome::Allow
        );
    }
}
