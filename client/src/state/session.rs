//! Session state for the current browser user, with named transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session container is provided as an `RwSignal` context at the App
//! root and lives for the browser tab. Route guards and identity-aware
//! components read it; the transitions below are the only writers.
//!
//! ERROR HANDLING
//! ==============
//! The passive session fetch degrades to anonymous on any failure;
//! sign-in/sign-up rejections are returned verbatim so forms can render
//! the backend's message.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use leptos::prelude::*;

use gate::{Principal, Role};

/// Session state tracking the current principal and loading status.
///
/// Three logical states: unknown (`loading`), anonymous (no principal),
/// authenticated (principal present). Profile existence is not tracked in
/// the browser; the server guard owns completion redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub principal: Option<Principal>,
    pub loading: bool,
}

impl Default for SessionState {
    /// The initial state is unknown until the first session fetch completes.
    fn default() -> Self {
        Self { principal: None, loading: true }
    }
}

impl SessionState {
    /// Role of the signed-in principal, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().map(|p| p.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

/// Fetch the current principal from the backend. Any failure degrades to
/// anonymous.
pub async fn load(session: RwSignal<SessionState>) {
    session.update(|s| s.loading = true);
    let principal = crate::net::api::fetch_current_principal().await;
    session.set(SessionState { principal, loading: false });
}

/// Re-derive the session from the backend; same operation as [`load`].
pub async fn refresh(session: RwSignal<SessionState>) {
    load(session).await;
}

/// Exchange credentials for a session. On success the bearer credential is
/// persisted and the signed-in role returned so the caller can navigate.
///
/// # Errors
///
/// Returns the backend's rejection message verbatim.
pub async fn sign_in(session: RwSignal<SessionState>, email: &str, password: &str) -> Result<Role, String> {
    let grant = crate::net::api::login(email, password).await?;
    crate::util::auth::store_bearer(&grant.token);
    let role = grant.user.role;
    session.set(SessionState { principal: Some(grant.user), loading: false });
    Ok(role)
}

/// Create an account and establish a session in one step.
///
/// # Errors
///
/// Returns the backend's rejection message verbatim.
pub async fn sign_up(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    role: Role,
) -> Result<Role, String> {
    let grant = crate::net::api::signup(email, password, role).await?;
    crate::util::auth::store_bearer(&grant.token);
    let role = grant.user.role;
    session.set(SessionState { principal: Some(grant.user), loading: false });
    Ok(role)
}

/// Best-effort logout: local state and the stored credential are cleared
/// regardless of the backend call's outcome.
pub async fn sign_out(session: RwSignal<SessionState>) {
    crate::net::api::logout().await;
    crate::util::auth::clear_bearer();
    session.set(SessionState { principal: None, loading: false });
}
