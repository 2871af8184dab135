//! Upstream marketplace-backend client used by the edge guard.
//!
//! DESIGN
//! ======
//! The guard only ever reads two things from the backend: the current
//! session principal and whether a role profile exists. Both sit behind
//! the [`Backend`] trait so guard tests can substitute an in-memory stub
//! instead of a live HTTP server.

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use async_trait::async_trait;
use axum::http::{HeaderMap, header};

use gate::{Envelope, Principal, Role};

const ME_ENDPOINT: &str = "/user-auth/me";
const DOCTOR_PROFILE_ENDPOINT: &str = "/doctor-profiles/user";
const EMPLOYER_PROFILE_ENDPOINT: &str = "/employer-profiles/user";

/// Credentials forwarded verbatim from the incoming browser request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardedAuth {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
}

impl ForwardedAuth {
    /// Pull the `Cookie` and `Authorization` headers off a request.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        Self { cookie: get(header::COOKIE), authorization: get(header::AUTHORIZATION) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(String),
    #[error("backend returned malformed body: {0}")]
    Malformed(String),
}

/// Read operations the guard performs against the backend. Both degrade
/// at the call site: the guard treats any error as "no data".
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the session principal for the forwarded credentials, or
    /// `None` when the backend reports no valid session.
    async fn current_principal(&self, auth: &ForwardedAuth) -> Result<Option<Principal>, BackendError>;

    /// Whether a role profile record exists for the forwarded session.
    async fn profile_exists(&self, role: Role, auth: &ForwardedAuth) -> Result<bool, BackendError>;
}

/// Profile collection consulted for a role. Candidate and doctor share the
/// doctor collection; roles without a collection are never gated.
pub(crate) fn profile_endpoint(role: Role) -> Option<&'static str> {
    match role {
        Role::Candidate | Role::Doctor => Some(DOCTOR_PROFILE_ENDPOINT),
        Role::Employer => Some(EMPLOYER_PROFILE_ENDPOINT),
        Role::Admin | Role::Unknown => None,
    }
}

/// Production [`Backend`] over HTTP.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn get(&self, endpoint: &str, auth: &ForwardedAuth) -> reqwest::RequestBuilder {
        let mut request = self.http.get(format!("{}{endpoint}", self.base_url));
        if let Some(cookie) = &auth.cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(authorization) = &auth.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }
        request
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn current_principal(&self, auth: &ForwardedAuth) -> Result<Option<Principal>, BackendError> {
        let response = self
            .get(ME_ENDPOINT, auth)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let envelope: Envelope<Principal> = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        // An error envelope means "not signed in", not a guard failure.
        Ok(envelope.into_result().ok().flatten())
    }

    async fn profile_exists(&self, role: Role, auth: &ForwardedAuth) -> Result<bool, BackendError> {
        let Some(endpoint) = profile_endpoint(role) else {
            // No profile collection for this role; nothing to gate.
            return Ok(true);
        };
        let response = self
            .get(endpoint, auth)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        // Existence is the presence of non-null data in a success envelope.
        Ok(matches!(envelope.into_result(), Ok(Some(_))))
    }
}
