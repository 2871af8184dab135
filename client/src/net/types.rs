//! Client-only wire DTOs for the marketplace backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase payloads so serde
//! round-trips stay lossless. Session and auth DTOs are shared with the
//! server and live in the `gate` crate instead.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A job posting as rendered in list views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Unique posting identifier.
    pub id: String,
    /// Posting title.
    pub title: String,
    /// Practice location.
    pub location: String,
    /// Medical specialty, when the employer set one.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Display name of the posting employer.
    #[serde(default)]
    pub employer_name: Option<String>,
    /// Advertised salary range, free-form.
    #[serde(default)]
    pub salary_range: Option<String>,
}

/// Fields submitted to create a doctor profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileDraft {
    pub specialty: String,
    pub registration_number: String,
    pub city: String,
}

/// Fields submitted to create an employer profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfileDraft {
    pub organization_name: String,
    pub city: String,
}
