use super::*;

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_home_and_auth_routes_are_public() {
    assert_eq!(classify("/"), RouteClass::Public);
    assert_eq!(classify("/auth/login"), RouteClass::Public);
    assert_eq!(classify("/auth/signup"), RouteClass::Public);
    assert_eq!(classify("/auth/callback"), RouteClass::Public);
    assert_eq!(classify("/auth"), RouteClass::Public);
}

#[test]
fn classify_app_prefixes() {
    for path in [
        "/dashboard",
        "/dashboard/candidate",
        "/jobs",
        "/jobs/42",
        "/applications",
        "/applications/7/withdraw",
        "/saved-jobs",
        "/profile",
        "/profile/doctor/complete",
    ] {
        assert_eq!(classify(path), RouteClass::App, "expected app class for {path:?}");
    }
}

#[test]
fn classify_prefix_matching_respects_segment_boundaries() {
    assert_eq!(classify("/jobsearch"), RouteClass::Unclassified);
    assert_eq!(classify("/authenticate"), RouteClass::Unclassified);
    assert_eq!(classify("/dashboards"), RouteClass::Unclassified);
}

#[test]
fn classify_everything_else_is_unclassified() {
    assert_eq!(classify("/about"), RouteClass::Unclassified);
    assert_eq!(classify("/healthz"), RouteClass::Unclassified);
    assert_eq!(classify("/pkg/medmatch.css"), RouteClass::Unclassified);
}

// =============================================================================
// role tables
// =============================================================================

#[test]
fn candidate_and_doctor_share_dashboard_and_completion() {
    assert_eq!(Role::Candidate.dashboard_path(), CANDIDATE_DASHBOARD);
    assert_eq!(Role::Doctor.dashboard_path(), CANDIDATE_DASHBOARD);
    assert_eq!(Role::Candidate.completion_path(), Some(DOCTOR_COMPLETION));
    assert_eq!(Role::Doctor.completion_path(), Some(DOCTOR_COMPLETION));
}

#[test]
fn employer_has_its_own_dashboard_and_completion() {
    assert_eq!(Role::Employer.dashboard_path(), EMPLOYER_DASHBOARD);
    assert_eq!(Role::Employer.completion_path(), Some(EMPLOYER_COMPLETION));
}

#[test]
fn admin_and_unknown_fall_back_to_candidate_dashboard_without_gating() {
    assert_eq!(Role::Admin.dashboard_path(), CANDIDATE_DASHBOARD);
    assert_eq!(Role::Unknown.dashboard_path(), CANDIDATE_DASHBOARD);
    assert_eq!(Role::Admin.completion_path(), None);
    assert_eq!(Role::Unknown.completion_path(), None);
}

#[test]
fn role_unrecognized_wire_value_parses_to_unknown() {
    let role: Role = serde_json::from_str(r#""recruiter""#).unwrap();
    assert_eq!(role, Role::Unknown);
    let role: Role = serde_json::from_str(r#""doctor""#).unwrap();
    assert_eq!(role, Role::Doctor);
}

// =============================================================================
// decide — anonymous
// =============================================================================

#[test]
fn anonymous_app_path_redirects_to_login_with_next() {
    let decision = decide("/jobs/42", None, None);
    assert_eq!(decision, Decision::Login { next: "/jobs/42".to_owned() });
    assert_eq!(decision.target().as_deref(), Some("/auth/login?next=%2Fjobs%2F42"));
}

#[test]
fn anonymous_public_path_passes() {
    assert_eq!(decide("/", None, None), Decision::Pass);
    assert_eq!(decide("/auth/login", None, None), Decision::Pass);
}

#[test]
fn anonymous_unclassified_path_passes() {
    assert_eq!(decide("/about", None, None), Decision::Pass);
}

// =============================================================================
// decide — authenticated on public routes
// =============================================================================

#[test]
fn authenticated_home_redirects_to_role_dashboard() {
    let decision = decide("/", Some(Role::Candidate), None);
    assert_eq!(decision, Decision::Dashboard { role: Role::Candidate });
    assert_eq!(decision.target().as_deref(), Some(CANDIDATE_DASHBOARD));

    let decision = decide("/", Some(Role::Employer), None);
    assert_eq!(decision.target().as_deref(), Some(EMPLOYER_DASHBOARD));
}

#[test]
fn authenticated_auth_routes_redirect_to_dashboard() {
    for path in ["/auth/login", "/auth/signup", "/auth/callback"] {
        let decision = decide(path, Some(Role::Doctor), None);
        assert_eq!(decision.target().as_deref(), Some(CANDIDATE_DASHBOARD), "for {path:?}");
    }
}

#[test]
fn unknown_role_defaults_to_candidate_dashboard() {
    let decision = decide("/", Some(Role::Unknown), None);
    assert_eq!(decision.target().as_deref(), Some(CANDIDATE_DASHBOARD));
}

// =============================================================================
// decide — profile gating
// =============================================================================

#[test]
fn authenticated_app_path_requires_profile_lookup_first() {
    assert_eq!(
        decide("/dashboard/candidate", Some(Role::Candidate), None),
        Decision::CheckProfile { role: Role::Candidate }
    );
    assert_eq!(
        decide("/jobs", Some(Role::Employer), None),
        Decision::CheckProfile { role: Role::Employer }
    );
}

#[test]
fn missing_profile_redirects_to_completion_with_next() {
    let decision = decide("/dashboard/employer", Some(Role::Employer), Some(false));
    assert_eq!(
        decision,
        Decision::Completion { role: Role::Employer, next: "/dashboard/employer".to_owned() }
    );
    assert_eq!(
        decision.target().as_deref(),
        Some("/profile/employer/complete?next=%2Fdashboard%2Femployer")
    );
}

#[test]
fn missing_profile_on_completion_path_passes_without_loop() {
    assert_eq!(decide("/profile/doctor/complete", Some(Role::Candidate), Some(false)), Decision::Pass);
    assert_eq!(decide("/profile/employer/complete", Some(Role::Employer), Some(false)), Decision::Pass);
}

#[test]
fn missing_profile_on_completion_subpath_passes() {
    assert_eq!(
        decide("/profile/doctor/complete/step-2", Some(Role::Doctor), Some(false)),
        Decision::Pass
    );
}

#[test]
fn missing_profile_redirects_to_other_roles_completion_path() {
    // A candidate parked on the employer completion form is still gated.
    let decision = decide("/profile/employer/complete", Some(Role::Candidate), Some(false));
    assert_eq!(
        decision,
        Decision::Completion { role: Role::Candidate, next: "/profile/employer/complete".to_owned() }
    );
}

#[test]
fn existing_profile_passes_app_routes() {
    assert_eq!(decide("/jobs/42", Some(Role::Candidate), Some(true)), Decision::Pass);
    assert_eq!(decide("/dashboard/employer", Some(Role::Employer), Some(true)), Decision::Pass);
}

#[test]
fn admin_skips_profile_lookup_entirely() {
    assert_eq!(decide("/jobs", Some(Role::Admin), None), Decision::Pass);
}

// =============================================================================
// decide — dashboard ownership
// =============================================================================

#[test]
fn employer_on_candidate_dashboard_is_sent_home() {
    let decision = decide("/dashboard/candidate/saved", Some(Role::Employer), Some(true));
    assert_eq!(decision, Decision::Dashboard { role: Role::Employer });
    assert_eq!(decision.target().as_deref(), Some(EMPLOYER_DASHBOARD));
}

#[test]
fn candidate_on_employer_dashboard_is_sent_home() {
    let decision = decide("/dashboard/employer", Some(Role::Candidate), Some(true));
    assert_eq!(decision.target().as_deref(), Some(CANDIDATE_DASHBOARD));
}

#[test]
fn admin_fallback_never_self_redirects_on_candidate_dashboard() {
    assert_eq!(decide("/dashboard/candidate", Some(Role::Admin), None), Decision::Pass);
}

// =============================================================================
// decide — idempotence
// =============================================================================

#[test]
fn identical_inputs_yield_identical_decisions() {
    let inputs: [(&str, Option<Role>, Option<bool>); 4] = [
        ("/jobs/42", None, None),
        ("/", Some(Role::Candidate), None),
        ("/dashboard/employer", Some(Role::Employer), Some(false)),
        ("/profile/doctor/complete", Some(Role::Candidate), Some(false)),
    ];
    for (path, session, profile) in inputs {
        assert_eq!(decide(path, session, profile), decide(path, session, profile));
    }
}

// =============================================================================
// query helpers
// =============================================================================

#[test]
fn query_param_decodes_percent_encoding() {
    assert_eq!(query_param("next=%2Fjobs%2F42", "next").as_deref(), Some("/jobs/42"));
    assert_eq!(query_param("a=1&token=abc123", "token").as_deref(), Some("abc123"));
    assert_eq!(query_param("a=1", "token"), None);
}

// =============================================================================
// wire types
// =============================================================================

#[test]
fn envelope_success_splits_into_data() {
    let envelope: Envelope<Principal> = serde_json::from_value(serde_json::json!({
        "statusCode": 200,
        "data": {
            "id": "u1",
            "email": "doc@example.com",
            "role": "doctor",
            "isActive": true,
            "isVerified": false,
        },
        "isError": false,
    }))
    .unwrap();
    let principal = envelope.into_result().unwrap().unwrap();
    assert_eq!(principal.role, Role::Doctor);
    assert!(principal.is_active);
    assert!(!principal.is_verified);
}

#[test]
fn envelope_null_data_is_ok_none() {
    let envelope: Envelope<serde_json::Value> = serde_json::from_value(serde_json::json!({
        "statusCode": 200,
        "data": null,
        "isError": false,
    }))
    .unwrap();
    assert_eq!(envelope.into_result(), Ok(None));
}

#[test]
fn envelope_error_surfaces_message_verbatim() {
    let envelope: Envelope<AuthGrant> = serde_json::from_value(serde_json::json!({
        "statusCode": 401,
        "data": null,
        "isError": true,
        "message": "Invalid credentials",
    }))
    .unwrap();
    let rejection = envelope.into_result().unwrap_err();
    assert_eq!(rejection.status_code, 401);
    assert_eq!(rejection.to_string(), "Invalid credentials");
}

#[test]
fn envelope_error_falls_back_to_error_field_then_status() {
    let envelope: Envelope<()> = serde_json::from_value(serde_json::json!({
        "statusCode": 500,
        "isError": true,
        "error": "internal",
    }))
    .unwrap();
    assert_eq!(envelope.into_result().unwrap_err().message, "internal");

    let envelope: Envelope<()> = serde_json::from_value(serde_json::json!({
        "statusCode": 502,
        "isError": true,
    }))
    .unwrap();
    assert_eq!(envelope.into_result().unwrap_err().message, "request failed: 502");
}
