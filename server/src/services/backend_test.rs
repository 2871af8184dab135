use super::*;
use axum::http::HeaderValue;

#[test]
fn profile_endpoint_maps_candidate_and_doctor_to_doctor_collection() {
    assert_eq!(profile_endpoint(Role::Candidate), Some("/doctor-profiles/user"));
    assert_eq!(profile_endpoint(Role::Doctor), Some("/doctor-profiles/user"));
}

#[test]
fn profile_endpoint_maps_employer_to_employer_collection() {
    assert_eq!(profile_endpoint(Role::Employer), Some("/employer-profiles/user"));
}

#[test]
fn profile_endpoint_has_no_collection_for_admin_or_unknown() {
    assert_eq!(profile_endpoint(Role::Admin), None);
    assert_eq!(profile_endpoint(Role::Unknown), None);
}

#[test]
fn forwarded_auth_reads_cookie_and_authorization() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));

    let auth = ForwardedAuth::from_headers(&headers);
    assert_eq!(auth.cookie.as_deref(), Some("session=abc"));
    assert_eq!(auth.authorization.as_deref(), Some("Bearer xyz"));
}

#[test]
fn forwarded_auth_is_empty_without_credential_headers() {
    let headers = HeaderMap::new();
    assert_eq!(ForwardedAuth::from_headers(&headers), ForwardedAuth::default());
}

#[tokio::test]
async fn http_backend_profile_exists_short_circuits_for_ungated_roles() {
    // No collection means no HTTP call at all; the unroutable base URL
    // would otherwise fail the request.
    let backend = HttpBackend::new(reqwest::Client::new(), "http://127.0.0.1:1".to_owned());
    let exists = backend
        .profile_exists(Role::Admin, &ForwardedAuth::default())
        .await
        .unwrap();
    assert!(exists);
}
