//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, through the
//! server's same-origin `/api` proxy, attaching the stored bearer
//! credential when present.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The passive session fetch returns `Option` and swallows failures so
//! the controller can degrade to anonymous; mutations return the backend
//! envelope's message verbatim for the calling form to render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gate::{AuthGrant, Principal, Role};

use super::types::{DoctorProfileDraft, EmployerProfileDraft, JobSummary};

pub(crate) const ME_URL: &str = "/api/user-auth/me";
pub(crate) const LOGIN_URL: &str = "/api/user-auth/login";
pub(crate) const SIGNUP_URL: &str = "/api/user-auth/signup";
pub(crate) const LOGOUT_URL: &str = "/api/user-auth/logout";
pub(crate) const DOCTOR_PROFILES_URL: &str = "/api/doctor-profiles";
pub(crate) const EMPLOYER_PROFILES_URL: &str = "/api/employer-profiles";
pub(crate) const JOBS_URL: &str = "/api/jobs";

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth::read_bearer() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn parse_envelope<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<Option<T>, String> {
    let status = resp.status();
    let envelope: gate::Envelope<T> = resp.json().await.map_err(|_| request_failed_message(status))?;
    envelope.into_result().map_err(|rejection| rejection.to_string())
}

/// Fetch the currently authenticated principal from `/api/user-auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_principal() -> Option<Principal> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(ME_URL)).send().await.ok()?;
        parse_envelope::<Principal>(resp).await.ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/user-auth/login`, returning the grant (principal
/// plus bearer credential).
///
/// # Errors
///
/// Returns the backend's rejection message, or a transport description.
pub async fn login(email: &str, password: &str) -> Result<AuthGrant, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_URL)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        parse_envelope::<AuthGrant>(resp)
            .await?
            .ok_or_else(|| request_failed_message(status))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Create an account via `POST /api/user-auth/signup`, returning the grant.
///
/// # Errors
///
/// Returns the backend's rejection message, or a transport description.
pub async fn signup(email: &str, password: &str, role: Role) -> Result<AuthGrant, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "role": role });
        let resp = gloo_net::http::Request::post(SIGNUP_URL)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        parse_envelope::<AuthGrant>(resp)
            .await?
            .ok_or_else(|| request_failed_message(status))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, role);
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Log out via `POST /api/user-auth/logout`. Best-effort: the outcome is
/// ignored; callers clear local state regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = with_auth(gloo_net::http::Request::post(LOGOUT_URL)).send().await;
    }
}

/// Create the signed-in doctor's profile via `POST /api/doctor-profiles`.
///
/// # Errors
///
/// Returns the backend's rejection message, or a transport description.
pub async fn create_doctor_profile(draft: &DoctorProfileDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(DOCTOR_PROFILES_URL))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_envelope::<serde_json::Value>(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Create the signed-in employer's profile via `POST /api/employer-profiles`.
///
/// # Errors
///
/// Returns the backend's rejection message, or a transport description.
pub async fn create_employer_profile(draft: &EmployerProfileDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(EMPLOYER_PROFILES_URL))
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_envelope::<serde_json::Value>(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(NOT_AVAILABLE.to_owned())
    }
}

/// Fetch open job postings from `/api/jobs`.
///
/// # Errors
///
/// Returns the backend's rejection message, or a transport description.
pub async fn fetch_jobs() -> Result<Vec<JobSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(JOBS_URL))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(parse_envelope::<Vec<JobSummary>>(resp).await?.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NOT_AVAILABLE.to_owned())
    }
}
