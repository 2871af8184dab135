//! Edge router guard — request-time authorization and profile-completion gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs as middleware in front of every page route, before rendering.
//! Consults the backend for the session principal and, when needed, for
//! role-profile existence, then applies the shared [`gate::decide`] rules.
//!
//! ERROR HANDLING
//! ==============
//! The guard never raises. Upstream failures degrade to "anonymous" or
//! "no profile", so every request resolves into pass-through or a
//! redirect: protected routes fail closed (to login), public routes fail
//! open (stay put).

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use gate::{Decision, RouteClass};

use crate::services::backend::{Backend, ForwardedAuth};
use crate::state::AppState;

/// Axum middleware applying the gate to every page request.
pub async fn edge_guard(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    // Unclassified paths pass through without any upstream calls.
    if gate::classify(&path) == RouteClass::Unclassified {
        return next.run(req).await;
    }

    let auth = ForwardedAuth::from_headers(req.headers());
    let decision = resolve(state.backend.as_ref(), &path, &auth).await;
    match decision.target() {
        None => next.run(req).await,
        Some(target) => {
            tracing::debug!(%path, %target, "edge guard redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// Evaluate the gate for one request: fetch the principal, then profile
/// existence only when the decision requires it.
pub(crate) async fn resolve(backend: &dyn Backend, path: &str, auth: &ForwardedAuth) -> Decision {
    let principal = backend.current_principal(auth).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, %path, "principal fetch failed; treating request as anonymous");
        None
    });
    let role = principal.map(|p| p.role);

    match gate::decide(path, role, None) {
        Decision::CheckProfile { role } => {
            let exists = backend.profile_exists(role, auth).await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, %path, "profile fetch failed; treating profile as missing");
                false
            });
            gate::decide(path, Some(role), Some(exists))
        }
        decision => decision,
    }
}
