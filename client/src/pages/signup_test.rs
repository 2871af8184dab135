use super::*;

#[test]
fn parse_role_choice_maps_select_values() {
    assert_eq!(parse_role_choice("candidate"), Some(Role::Candidate));
    assert_eq!(parse_role_choice("employer"), Some(Role::Employer));
    assert_eq!(parse_role_choice("admin"), None);
    assert_eq!(parse_role_choice(""), None);
}

#[test]
fn validate_signup_input_accepts_complete_input() {
    assert_eq!(
        validate_signup_input(" doc@example.com ", "longenough", "candidate"),
        Ok(("doc@example.com".to_owned(), "longenough".to_owned(), Role::Candidate))
    );
}

#[test]
fn validate_signup_input_requires_fields_and_length() {
    assert_eq!(
        validate_signup_input("", "longenough", "candidate"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_signup_input("doc@example.com", "short", "candidate"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(
        validate_signup_input("doc@example.com", "longenough", "manager"),
        Err("Choose whether you are hiring or looking for work.")
    );
}

#[test]
fn post_signup_target_is_the_completion_form() {
    assert_eq!(post_signup_target(Role::Candidate), "/profile/doctor/complete");
    assert_eq!(post_signup_target(Role::Employer), "/profile/employer/complete");
}
