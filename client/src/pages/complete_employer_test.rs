use super::*;

#[test]
fn validate_employer_profile_trims_fields() {
    let draft = validate_employer_profile(" Northside Clinic ", " Leeds ").unwrap();
    assert_eq!(draft.organization_name, "Northside Clinic");
    assert_eq!(draft.city, "Leeds");
}

#[test]
fn validate_employer_profile_requires_every_field() {
    let err = Err("Fill in organization name and city.");
    assert_eq!(validate_employer_profile("", "Leeds"), err);
    assert_eq!(validate_employer_profile("Northside Clinic", "   "), err);
}
