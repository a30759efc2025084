use super::*;

#[test]
fn kinds_classify_every_variant() {
    assert_eq!(ApiError::MissingCredential.kind(), ErrorKind::Auth);
    assert_eq!(ApiError::AuthExpired.kind(), ErrorKind::Auth);
    assert_eq!(ApiError::from_status(400, "").kind(), ErrorKind::Validation);
    assert_eq!(ApiError::Network("down".to_owned()).kind(), ErrorKind::Network);
    assert_eq!(ApiError::Parse("bad".to_owned()).kind(), ErrorKind::Parse);
}

#[test]
fn auth_failure_statuses() {
    assert!(is_auth_failure(401));
    assert!(is_auth_failure(403));
    assert!(!is_auth_failure(400));
    assert!(!is_auth_failure(500));
}

#[test]
fn server_message_reads_known_keys() {
    assert_eq!(server_message(r#"{"msg":"Token has expired"}"#).as_deref(), Some("Token has expired"));
    assert_eq!(server_message(r#"{"error":"Room not found"}"#).as_deref(), Some("Room not found"));
    assert_eq!(server_message(r#"{"message":"nope"}"#).as_deref(), Some("nope"));
}

#[test]
fn server_message_skips_blank_and_non_json() {
    assert_eq!(server_message(r#"{"msg":"  ","error":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
    assert_eq!(server_message("<html>502</html>"), None);
    assert_eq!(server_message(r#"{"error": 42}"#), None);
}

#[test]
fn from_status_falls_back_to_status_message() {
    assert_eq!(
        ApiError::from_status(500, "oops"),
        ApiError::Validation { status: 500, message: "request failed: 500".to_owned() }
    );
}

#[test]
fn validation_display_is_the_message() {
    let err = ApiError::from_status(400, r#"{"error":"Missing required fields: title"}"#);
    assert_eq!(err.to_string(), "Missing required fields: title");
}
