use super::*;

// =============================================================
// classify_status
// =============================================================

#[test]
fn status_401_is_unauthorized_even_with_detail() {
    assert_eq!(
        classify_status(401, Some("bad token".to_owned())),
        ApiError::Unauthorized
    );
    assert_eq!(classify_status(401, None), ApiError::Unauthorized);
}

#[test]
fn other_statuses_keep_the_server_detail() {
    let err = classify_status(400, Some("Title is required".to_owned()));
    assert_eq!(
        err,
        ApiError::Rejected {
            detail: Some("Title is required".to_owned())
        }
    );

    let err = classify_status(500, None);
    assert_eq!(err, ApiError::Rejected { detail: None });
}

// =============================================================
// ApiError display and fallbacks
// =============================================================

#[test]
fn message_or_prefers_the_server_detail() {
    let err = ApiError::Rejected {
        detail: Some("Email already registered".to_owned()),
    };
    assert_eq!(err.message_or("fallback"), "Email already registered");
}

#[test]
fn message_or_uses_fallback_without_detail() {
    let err = ApiError::Rejected { detail: None };
    assert_eq!(err.message_or("Login failed"), "Login failed");
    assert_eq!(ApiError::Unauthorized.message_or("Login failed"), "Login failed");
}

#[test]
fn message_or_maps_network_to_connectivity_text() {
    let msg = ApiError::Network.message_or("fallback");
    assert!(msg.contains("connection"));
}

#[test]
fn rejected_display_uses_detail() {
    let err = ApiError::Rejected {
        detail: Some("nope".to_owned()),
    };
    assert_eq!(err.to_string(), "nope");

    let err = ApiError::Rejected { detail: None };
    assert_eq!(err.to_string(), "request rejected by the server");
}

// =============================================================
// bearer
// =============================================================

#[test]
fn bearer_formats_the_header_value() {
    assert_eq!(bearer("t-123"), "Bearer t-123");
}
