use super::*;

// =============================================================
// Language
// =============================================================

#[test]
fn language_codes_round_trip() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}

#[test]
fn language_from_code_is_case_insensitive_and_rejects_unknown() {
    assert_eq!(Language::from_code(" EN "), Some(Language::En));
    assert_eq!(Language::from_code("de"), None);
}

#[test]
fn language_defaults_to_french() {
    assert_eq!(Language::default(), Language::Fr);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_admin_role_is_detected() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1, "username": "curator", "email": "", "role": "admin"
    }))
    .unwrap();
    assert!(user.is_admin());
}

#[test]
fn user_without_role_is_not_admin() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 2, "username": "guest" })).unwrap();
    assert!(!user.is_admin());
    assert_eq!(user.email, None);
}

#[test]
fn login_response_decodes_token_and_user() {
    let body: LoginResponse = serde_json::from_value(serde_json::json!({
        "access_token": "tok-1",
        "user": { "id": 1, "username": "curator", "role": "admin" }
    }))
    .unwrap();
    assert_eq!(body.access_token, "tok-1");
    assert_eq!(body.user.username, "curator");
}

// =============================================================
// Rooms
// =============================================================

#[test]
fn public_room_uses_backend_localized_name() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Salle des masques",
        "description": "Masques cérémoniels",
        "theme": "Rites",
        "accessibility_level": "facile",
        "has_audio": true,
        "has_interactive": false,
        "created_at": null
    }))
    .unwrap();
    assert_eq!(room.name_in(Language::En), "Salle des masques");
    assert_eq!(room.description_in(Language::Wo), "Masques cérémoniels");
    assert!(room.has_audio);
}

#[test]
fn admin_room_prefers_language_column() {
    let room = Room {
        id: 1,
        name_fr: Some("Salle".to_owned()),
        name_en: Some("Room".to_owned()),
        ..Room::default()
    };
    assert_eq!(room.name_in(Language::En), "Room");
    assert_eq!(room.name_in(Language::Wo), "Salle");
}

#[test]
fn empty_language_column_falls_back() {
    let room = Room {
        id: 1,
        name_fr: Some("Salle".to_owned()),
        name_wo: Some(String::new()),
        ..Room::default()
    };
    assert_eq!(room.name_in(Language::Wo), "Salle");
}

#[test]
fn room_flags_accept_sqlite_integers_and_null() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "id": "4", "has_audio": 1, "has_interactive": null
    }))
    .unwrap();
    assert_eq!(room.id, 4);
    assert!(room.has_audio);
    assert!(!room.has_interactive);
}

#[test]
fn room_flag_rejects_garbage() {
    let result = serde_json::from_value::<Room>(serde_json::json!({ "id": 1, "has_audio": "maybe" }));
    assert!(result.is_err());
}

// =============================================================
// Artworks
// =============================================================

#[test]
fn artwork_optional_numbers_accept_null_and_floats() {
    let artwork: Artwork = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Masque Dan",
        "room_id": 2.0,
        "popularity": null,
        "view_count": 12
    }))
    .unwrap();
    assert_eq!(artwork.room_id, Some(2));
    assert_eq!(artwork.popularity, None);
    assert_eq!(artwork.view_count, Some(12));
}

#[test]
fn artwork_accepts_qr_code_data_alias() {
    let artwork: Artwork = serde_json::from_value(serde_json::json!({
        "id": 1, "title": "t", "qr_code_data": "/static/qr/1.png"
    }))
    .unwrap();
    assert_eq!(artwork.qr_code_url.as_deref(), Some("/static/qr/1.png"));
}

#[test]
fn artwork_description_prefers_language_column() {
    let artwork = Artwork {
        id: 1,
        description: Some("générique".to_owned()),
        description_en: Some("english".to_owned()),
        ..Artwork::default()
    };
    assert_eq!(artwork.description_in(Language::En), "english");
    assert_eq!(artwork.description_in(Language::Fr), "générique");
}

#[test]
fn artwork_rejects_fractional_id() {
    let result = serde_json::from_value::<Artwork>(serde_json::json!({ "id": 1.5, "title": "t" }));
    assert!(result.is_err());
}

// =============================================================
// Search + stats
// =============================================================

#[test]
fn search_results_default_missing_lists() {
    let results: SearchResults = serde_json::from_value(serde_json::json!({ "total": 0 })).unwrap();
    assert!(results.is_empty());
}

#[test]
fn admin_stats_label_counts_accept_grouping_names() {
    let stats: AdminStats = serde_json::from_value(serde_json::json!({
        "overview": { "total_rooms": 4, "total_artworks": 20, "avg_popularity": 71.5 },
        "artworks": {
            "by_category": [{ "category": "Masque", "count": 6 }],
            "by_origin": [{ "origin": "Mali", "count": 3 }],
            "top_popular": [{ "title": "Masque Dan", "popularity": 95, "room_name": "Salle 1" }]
        },
        "rooms": { "by_theme": [{ "theme": "Rites", "count": 2 }] }
    }))
    .unwrap();
    assert_eq!(stats.overview.total_artworks, 20);
    assert_eq!(stats.artworks.by_category[0].label, "Masque");
    assert_eq!(stats.artworks.by_origin[0].label, "Mali");
    assert_eq!(stats.rooms.by_theme[0].label, "Rites");
    assert_eq!(stats.artworks.top_popular[0].popularity, 95);
    assert!(stats.artworks.by_period.is_empty());
}
