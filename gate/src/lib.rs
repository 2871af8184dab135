//! Shared session model and route-authorization decision logic.
//!
//! This crate owns the wire representation of the backend envelope and the
//! session principal, plus the path-classification and role-mapping tables
//! used on both sides of the app. The `server` edge guard and the `client`
//! session controller both call the same [`decide`] function, so the two
//! layers cannot drift apart.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// Login form route.
pub const LOGIN_PATH: &str = "/auth/login";
/// Signup form route.
pub const SIGNUP_PATH: &str = "/auth/signup";
/// OAuth provider return route.
pub const CALLBACK_PATH: &str = "/auth/callback";
/// Authenticated landing for candidates and doctors.
pub const CANDIDATE_DASHBOARD: &str = "/dashboard/candidate";
/// Authenticated landing for employers.
pub const EMPLOYER_DASHBOARD: &str = "/dashboard/employer";
/// Profile-completion route for candidates and doctors.
pub const DOCTOR_COMPLETION: &str = "/profile/doctor/complete";
/// Profile-completion route for employers.
pub const EMPLOYER_COMPLETION: &str = "/profile/employer/complete";

const AUTH_PREFIX: &str = "/auth";
const APP_PREFIXES: [&str; 5] = ["/dashboard", "/jobs", "/applications", "/saved-jobs", "/profile"];

/// Access classification of a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session (home, login, signup, OAuth callback).
    Public,
    /// Requires a session and a completed role profile.
    App,
    /// Not governed by the gate (assets, health checks, unknown paths).
    Unclassified,
}

/// Prefix match on path-segment boundaries, so `/jobs` and `/jobs/42`
/// match the `/jobs` prefix but `/jobsearch` does not.
fn has_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Classify a request path against the public and app route tables.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if path == "/" || has_prefix(path, AUTH_PREFIX) {
        return RouteClass::Public;
    }
    if APP_PREFIXES.iter().any(|prefix| has_prefix(path, prefix)) {
        return RouteClass::App;
    }
    RouteClass::Unclassified
}

// =============================================================================
// ROLES
// =============================================================================

/// Platform role carried by the session principal.
///
/// `candidate` and `doctor` are distinct wire values that share one
/// dashboard and one profile collection. Unrecognized wire values parse to
/// [`Role::Unknown`] instead of failing the whole envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Doctor,
    Employer,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Dashboard route for this role.
    ///
    /// Admin and unrecognized roles deliberately fall back to the candidate
    /// dashboard; this is the single place that default is encoded.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Employer => EMPLOYER_DASHBOARD,
            Self::Candidate | Self::Doctor | Self::Admin | Self::Unknown => CANDIDATE_DASHBOARD,
        }
    }

    /// Profile-completion route for this role. Roles without a profile
    /// collection (admin, unrecognized) return `None` and are exempt from
    /// profile gating.
    #[must_use]
    pub fn completion_path(self) -> Option<&'static str> {
        match self {
            Self::Candidate | Self::Doctor => Some(DOCTOR_COMPLETION),
            Self::Employer => Some(EMPLOYER_COMPLETION),
            Self::Admin | Self::Unknown => None,
        }
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// Outcome of evaluating the gate for one request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Serve the requested path.
    Pass,
    /// The caller must look up role-profile existence and re-invoke
    /// [`decide`] with `profile_exists` filled in.
    CheckProfile {
        /// Role whose profile collection must be consulted.
        role: Role,
    },
    /// Redirect to the login form, carrying the original path.
    Login {
        /// Path to return to after sign-in.
        next: String,
    },
    /// Redirect to the dashboard for `role`.
    Dashboard {
        /// Role whose dashboard is the target.
        role: Role,
    },
    /// Redirect to the profile-completion form for `role`.
    Completion {
        /// Role whose completion form is the target.
        role: Role,
        /// Path to return to after completing the profile.
        next: String,
    },
}

impl Decision {
    /// Redirect location for this decision, or `None` when the request
    /// should be served as-is. `next` values are carried as a
    /// percent-encoded query parameter.
    #[must_use]
    pub fn target(&self) -> Option<String> {
        match self {
            Self::Pass | Self::CheckProfile { .. } => None,
            Self::Login { next } => Some(with_next(LOGIN_PATH, next)),
            Self::Dashboard { role } => Some(role.dashboard_path().to_owned()),
            Self::Completion { role, next } => role.completion_path().map(|path| with_next(path, next)),
        }
    }
}

fn with_next(base: &str, next: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();
    format!("{base}?{query}")
}

/// Extract a query parameter from a raw query string (no leading `?`).
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Evaluate the gate for `path` given what is known about the session.
///
/// `session` is `None` for anonymous requests (including failed principal
/// fetches). `profile_exists` is `None` until the caller has consulted the
/// role-profile collection; when a lookup is required the function returns
/// [`Decision::CheckProfile`] and the caller re-invokes with `Some(bool)`.
/// Profile-fetch failures degrade to `Some(false)`.
///
/// The function is pure: identical inputs always produce the identical
/// decision.
#[must_use]
pub fn decide(path: &str, session: Option<Role>, profile_exists: Option<bool>) -> Decision {
    match (classify(path), session) {
        (RouteClass::Unclassified, _) | (RouteClass::Public, None) => Decision::Pass,
        (RouteClass::Public, Some(role)) => Decision::Dashboard { role },
        (RouteClass::App, None) => Decision::Login { next: path.to_owned() },
        (RouteClass::App, Some(role)) => {
            if let Some(completion) = role.completion_path() {
                match profile_exists {
                    None => return Decision::CheckProfile { role },
                    Some(false) if !has_prefix(path, completion) => {
                        return Decision::Completion { role, next: path.to_owned() };
                    }
                    _ => {}
                }
            }
            ownership_redirect(path, role)
        }
    }
}

/// Cross-role dashboard check: a request under one role's dashboard prefix
/// from a principal whose dashboard is elsewhere is sent home. Comparing
/// mapped dashboards (never raw roles) keeps the admin/unknown fallback
/// from redirecting to the page it is already on.
fn ownership_redirect(path: &str, role: Role) -> Decision {
    let dashboard = role.dashboard_path();
    let crossed = (has_prefix(path, CANDIDATE_DASHBOARD) && dashboard != CANDIDATE_DASHBOARD)
        || (has_prefix(path, EMPLOYER_DASHBOARD) && dashboard != EMPLOYER_DASHBOARD);
    if crossed { Decision::Dashboard { role } } else { Decision::Pass }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Uniform response wrapper returned by every backend call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// HTTP-style status code echoed in the body.
    pub status_code: u16,
    /// Payload; absent or `null` on errors and empty lookups.
    #[serde(default)]
    pub data: Option<T>,
    /// Whether the backend classified this response as a failure.
    pub is_error: bool,
    /// Human-readable failure description, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-oriented failure detail, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A backend envelope that reported failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Rejection {
    /// Status code from the envelope.
    pub status_code: u16,
    /// Message to surface to the caller, verbatim from the envelope.
    pub message: String,
}

impl<T> Envelope<T> {
    /// Split the envelope into payload or rejection. Successful envelopes
    /// with `null` data yield `Ok(None)` (used for existence probes).
    ///
    /// # Errors
    ///
    /// Returns [`Rejection`] carrying the envelope's message (falling back
    /// to its `error` field, then to a generic status line) when the
    /// backend flagged the response as an error.
    pub fn into_result(self) -> Result<Option<T>, Rejection> {
        if self.is_error {
            let message = self
                .message
                .or(self.error)
                .unwrap_or_else(|| format!("request failed: {}", self.status_code));
            return Err(Rejection { status_code: self.status_code, message });
        }
        Ok(self.data)
    }
}

/// The authenticated identity returned by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Unique user identifier.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Platform role.
    pub role: Role,
    /// Whether the account is active.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the account's email is verified.
    #[serde(default)]
    pub is_verified: bool,
}

/// Payload returned by the login and signup mutations: the principal plus
/// an opaque bearer credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthGrant {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
    /// The signed-in principal.
    pub user: Principal,
}
