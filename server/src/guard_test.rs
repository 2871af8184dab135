use super::*;
use gate::Role;

use crate::state::test_helpers::StubBackend;

async fn resolve_with(backend: &StubBackend, path: &str) -> Decision {
    resolve(backend, path, &ForwardedAuth::default()).await
}

// =============================================================================
// anonymous requests
// =============================================================================

#[tokio::test]
async fn anonymous_app_route_redirects_to_login_with_next() {
    let backend = StubBackend::anonymous();
    let decision = resolve_with(&backend, "/jobs/42").await;
    assert_eq!(decision.target().as_deref(), Some("/auth/login?next=%2Fjobs%2F42"));
}

#[tokio::test]
async fn anonymous_public_route_passes() {
    let backend = StubBackend::anonymous();
    assert_eq!(resolve_with(&backend, "/").await, Decision::Pass);
    assert_eq!(resolve_with(&backend, "/auth/signup").await, Decision::Pass);
}

// =============================================================================
// authenticated requests
// =============================================================================

#[tokio::test]
async fn authenticated_home_redirects_to_role_dashboard() {
    let backend = StubBackend::signed_in(Role::Candidate, true);
    let decision = resolve_with(&backend, "/").await;
    assert_eq!(decision.target().as_deref(), Some("/dashboard/candidate"));

    let backend = StubBackend::signed_in(Role::Employer, true);
    let decision = resolve_with(&backend, "/auth/login").await;
    assert_eq!(decision.target().as_deref(), Some("/dashboard/employer"));
}

#[tokio::test]
async fn missing_profile_redirects_to_completion_with_next() {
    let backend = StubBackend::signed_in(Role::Employer, false);
    let decision = resolve_with(&backend, "/dashboard/employer").await;
    assert_eq!(
        decision.target().as_deref(),
        Some("/profile/employer/complete?next=%2Fdashboard%2Femployer")
    );
}

#[tokio::test]
async fn missing_profile_on_completion_path_passes() {
    let backend = StubBackend::signed_in(Role::Candidate, false);
    assert_eq!(resolve_with(&backend, "/profile/doctor/complete").await, Decision::Pass);
}

#[tokio::test]
async fn existing_profile_passes_app_routes() {
    let backend = StubBackend::signed_in(Role::Doctor, true);
    assert_eq!(resolve_with(&backend, "/jobs").await, Decision::Pass);
}

#[tokio::test]
async fn cross_role_dashboard_requests_are_sent_home() {
    let backend = StubBackend::signed_in(Role::Employer, true);
    let decision = resolve_with(&backend, "/dashboard/candidate/saved").await;
    assert_eq!(decision.target().as_deref(), Some("/dashboard/employer"));

    let backend = StubBackend::signed_in(Role::Candidate, true);
    let decision = resolve_with(&backend, "/dashboard/employer").await;
    assert_eq!(decision.target().as_deref(), Some("/dashboard/candidate"));
}

// =============================================================================
// upstream failure semantics
// =============================================================================

#[tokio::test]
async fn principal_fetch_failure_behaves_like_anonymous() {
    let backend = StubBackend { fail_principal: true, ..StubBackend::default() };
    let decision = resolve_with(&backend, "/jobs/42").await;
    assert_eq!(decision.target().as_deref(), Some("/auth/login?next=%2Fjobs%2F42"));
    assert_eq!(resolve_with(&backend, "/").await, Decision::Pass);
}

#[tokio::test]
async fn profile_fetch_failure_behaves_like_missing_profile() {
    let backend = StubBackend {
        fail_profile: true,
        ..StubBackend::signed_in(Role::Candidate, true)
    };
    let decision = resolve_with(&backend, "/saved-jobs").await;
    assert_eq!(
        decision.target().as_deref(),
        Some("/profile/doctor/complete?next=%2Fsaved-jobs")
    );
}

// =============================================================================
// idempotence
// =============================================================================

#[tokio::test]
async fn repeated_requests_yield_identical_decisions() {
    let backend = StubBackend::signed_in(Role::Employer, false);
    let first = resolve_with(&backend, "/dashboard/employer").await;
    let second = resolve_with(&backend, "/dashboard/employer").await;
    assert_eq!(first, second);
}
