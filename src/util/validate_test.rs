use super::*;

// =============================================================
// check_credentials
// =============================================================

#[test]
fn credentials_reject_empty_email() {
    assert!(check_credentials("", "secret").is_err());
    assert!(check_credentials("   ", "secret").is_err());
}

#[test]
fn credentials_reject_empty_password() {
    assert!(check_credentials("a@b.cc", "").is_err());
}

#[test]
fn credentials_accept_filled_fields() {
    assert!(check_credentials("a@b.cc", "secret").is_ok());
}

// =============================================================
// check_registration
// =============================================================

#[test]
fn registration_rejects_missing_fields() {
    assert!(check_registration("", "secret1").is_err());
    assert!(check_registration("a@b.cc", "").is_err());
}

#[test]
fn registration_rejects_short_password() {
    let err = check_registration("a@b.cc", "12345").unwrap_err();
    assert!(err.contains("at least 6"));
}

#[test]
fn registration_accepts_six_char_password() {
    assert!(check_registration("a@b.cc", "123456").is_ok());
}

// =============================================================
// non_empty
// =============================================================

#[test]
fn non_empty_trims_and_maps_blank_to_none() {
    assert_eq!(non_empty("  "), None);
    assert_eq!(non_empty(""), None);
    assert_eq!(non_empty(" Ada "), Some("Ada".to_owned()));
}
