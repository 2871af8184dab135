//! Session routing and bearer-credential helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior by driving the same
//! `gate::decide` rules the server guard uses. The bearer credential is
//! persisted in `localStorage` and attached to API calls; it is the only
//! session data that outlives a page load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use gate::{Decision, Role};

use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
const BEARER_STORAGE_KEY: &str = "medmatch_bearer";

// =============================================================================
// BEARER CREDENTIAL STORAGE
// =============================================================================

/// Read the stored bearer credential, if any. Browser-only; SSR returns
/// `None`.
#[must_use]
pub fn read_bearer() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(BEARER_STORAGE_KEY).ok()?.filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer credential. Best-effort browser-only behavior.
pub fn store_bearer(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(BEARER_STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored bearer credential.
pub fn clear_bearer() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(BEARER_STORAGE_KEY);
            }
        }
    }
}

// =============================================================================
// PASSIVE ROUTE GUARD
// =============================================================================

/// Decide the client-side redirect for a path and session state, or `None`
/// to stay put.
///
/// Profile existence is not tracked in the browser, so a profile-lookup
/// request resolves to no redirect here; the server guard owns completion
/// redirects on full page loads.
#[must_use]
pub fn passive_redirect(path: &str, state: &SessionState) -> Option<String> {
    if state.loading {
        return None;
    }
    match gate::decide(path, state.role(), None) {
        Decision::CheckProfile { .. } => None,
        decision => decision.target(),
    }
}

/// Install the passive route guard: on every path or session change, apply
/// the same decision rules the server guard uses.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let state = session.get();
        let path = location.pathname.get();
        if let Some(target) = passive_redirect(&path, &state) {
            navigate(&target, NavigateOptions::default());
        }
    });
}

// =============================================================================
// QUERY PLUMBING
// =============================================================================

/// Raw query string of the current page, without the leading `?`.
fn current_query() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        Some(search.trim_start_matches('?').to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Reject values that could leave the app so `next` is never an open
/// redirect: only rooted, non-protocol-relative paths survive.
#[must_use]
pub fn sanitize_next(raw: Option<String>) -> Option<String> {
    raw.filter(|next| next.starts_with('/') && !next.starts_with("//"))
}

/// The sanitized `next` query parameter of the current page, if present.
#[must_use]
pub fn next_param() -> Option<String> {
    sanitize_next(current_query().as_deref().and_then(|query| gate::query_param(query, "next")))
}

/// Target to continue to after sign-in or profile completion: the `next`
/// parameter when safe, else the role's dashboard.
#[must_use]
pub fn continue_target(role: Role) -> String {
    next_param().unwrap_or_else(|| role.dashboard_path().to_owned())
}

/// One-time bearer token delivered on the OAuth callback URL, if present.
#[must_use]
pub fn consume_callback_token() -> Option<String> {
    current_query()
        .as_deref()
        .and_then(|query| gate::query_param(query, "token"))
        .filter(|token| !token.is_empty())
}
