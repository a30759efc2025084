use super::*;
use crate::net::error::CONNECTION_ERROR_MESSAGE;

#[test]
fn validate_login_input_trims_username_only() {
    assert_eq!(
        validate_login_input("  admin  ", " secret "),
        Ok(("admin".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("admin", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn login_error_message_prefers_server_text() {
    let rejected = ApiError::Validation { status: 401, message: "Identifiants invalides".to_owned() };
    assert_eq!(login_error_message(&rejected), "Identifiants invalides");

    let offline = ApiError::Network(CONNECTION_ERROR_MESSAGE.to_owned());
    assert_eq!(login_error_message(&offline), CONNECTION_ERROR_MESSAGE);
}

#[test]
fn login_error_message_localizes_parse_failures() {
    let garbled = ApiError::Parse("expected value".to_owned());
    assert_eq!(login_error_message(&garbled), "Réponse inattendue du serveur.");
}
