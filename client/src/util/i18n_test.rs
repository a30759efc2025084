use super::*;

#[test]
fn translates_into_each_language() {
    assert_eq!(t(Language::Fr, "nav.rooms"), "Salles");
    assert_eq!(t(Language::En, "nav.rooms"), "Rooms");
    assert_eq!(t(Language::Wo, "nav.rooms"), "Këri yi");
}

#[test]
fn unknown_key_falls_back_to_key() {
    assert_eq!(t(Language::En, "nope.missing"), "nope.missing");
}

#[test]
fn dictionary_ids_are_unique_and_filled() {
    let mut seen = std::collections::HashSet::new();
    for (id, texts) in DICTIONARY {
        assert!(seen.insert(*id), "duplicate id {id}");
        assert!(texts.iter().all(|text| !text.is_empty()), "empty entry for {id}");
    }
}

#[test]
fn validation_errors_keep_server_message() {
    let err = ApiError::Validation { status: 400, message: "Titre requis".to_owned() };
    assert_eq!(describe_error(Language::En, &err), "Titre requis");
}

#[test]
fn other_errors_are_localized() {
    assert_eq!(describe_error(Language::Fr, &ApiError::AuthExpired), t(Language::Fr, "errors.auth"));
    assert_eq!(
        describe_error(Language::En, &ApiError::Network("timeout".to_owned())),
        "Unable to reach the server."
    );
    assert_eq!(describe_error(Language::Wo, &ApiError::Parse("x".to_owned())), t(Language::Wo, "errors.parse"));
}

#[test]
fn preference_defaults_to_french_outside_browser() {
    assert_eq!(read_preference(), Language::Fr);
}
