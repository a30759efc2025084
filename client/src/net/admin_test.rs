use futures::executor::block_on;

use super::*;
use crate::net::http::{Method, RequestBody};
use crate::net::testing::MockClient;
use crate::state::session::MemoryTokenStore;

fn session(client: &MockClient) -> Session<MockClient, MemoryTokenStore> {
    Session::new(client.clone(), MemoryTokenStore::with_token("jwt"))
}

fn valid_room_form() -> RoomForm {
    RoomForm {
        name_fr: "Salle des masques".to_owned(),
        description_fr: "Masques rituels".to_owned(),
        theme: "Art sacré africain".to_owned(),
        accessibility_level: "facile".to_owned(),
        ..RoomForm::default()
    }
}

fn valid_artwork_form() -> ArtworkForm {
    ArtworkForm {
        room_id: "2".to_owned(),
        title: "Masque Dan".to_owned(),
        category: "Masque".to_owned(),
        period: "XIXe siècle".to_owned(),
        origin: "Côte d'Ivoire".to_owned(),
        popularity: "75".to_owned(),
        ..ArtworkForm::default()
    }
}

fn multipart(request: &ApiRequest) -> &[FormField] {
    match &request.body {
        RequestBody::Multipart(fields) => fields,
        other => panic!("expected multipart body, got {other:?}"),
    }
}

fn names(fields: &[FormField]) -> Vec<&str> {
    fields.iter().map(FormField::name).collect()
}

// =============================================================
// RoomForm
// =============================================================

#[test]
fn room_form_accepts_complete_input() {
    assert_eq!(valid_room_form().validate(), Ok(()));
}

#[test]
fn room_form_reports_first_missing_field() {
    let form = RoomForm { name_fr: "  ".to_owned(), theme: String::new(), ..valid_room_form() };
    assert_eq!(form.validate(), Err(FormError::MissingName));

    let form = RoomForm { description_fr: String::new(), ..valid_room_form() };
    assert_eq!(form.validate(), Err(FormError::MissingDescription));

    let form = RoomForm { theme: String::new(), ..valid_room_form() };
    assert_eq!(form.validate(), Err(FormError::MissingTheme));
}

#[test]
fn room_form_rejects_unknown_accessibility_level() {
    let form = RoomForm { accessibility_level: "expert".to_owned(), ..valid_room_form() };
    assert_eq!(form.validate(), Err(FormError::InvalidAccessibility));
}

#[test]
fn room_form_prefills_from_room() {
    let room = Room {
        id: 4,
        name: Some("Masks".to_owned()),
        name_en: Some("Masks".to_owned()),
        description_fr: Some("Masques".to_owned()),
        theme: Some("Ethnologie".to_owned()),
        accessibility_level: Some("modéré".to_owned()),
        has_audio: true,
        ..Room::default()
    };

    let form = RoomForm::from_room(&room);

    assert_eq!(form.name_fr, "Masks");
    assert_eq!(form.name_en, "Masks");
    assert_eq!(form.description_fr, "Masques");
    assert_eq!(form.hotspots, "[]");
    assert!(form.has_audio);
    assert!(!form.has_interactive);
    assert!(form.panorama_file.is_none());
}

#[test]
fn room_fields_skip_panorama_when_not_selected() {
    let fields = valid_room_form().fields();
    assert!(!names(&fields).contains(&"panorama_file"));
    assert!(fields.contains(&FormField::text("has_audio", "false")));
    assert!(fields.contains(&FormField::text("hotspots", "[]")));
}

#[test]
fn room_fields_include_selected_panorama() {
    let form = RoomForm { panorama_file: Some(FileUpload::named("salle.jpg")), ..valid_room_form() };
    let fields = form.fields();
    assert_eq!(names(&fields).last(), Some(&"panorama_file"));
}

// =============================================================
// ArtworkForm
// =============================================================

#[test]
fn artwork_form_accepts_complete_input() {
    assert_eq!(valid_artwork_form().validate(), Ok(()));
}

#[test]
fn artwork_form_requires_room_first() {
    let form = ArtworkForm { room_id: String::new(), title: String::new(), ..valid_artwork_form() };
    assert_eq!(form.validate(), Err(FormError::MissingRoom));
}

#[test]
fn artwork_form_checks_each_required_selection() {
    let cases = [
        (ArtworkForm { title: " ".to_owned(), ..valid_artwork_form() }, FormError::MissingTitle),
        (ArtworkForm { category: String::new(), ..valid_artwork_form() }, FormError::MissingCategory),
        (ArtworkForm { period: String::new(), ..valid_artwork_form() }, FormError::MissingPeriod),
        (ArtworkForm { origin: String::new(), ..valid_artwork_form() }, FormError::MissingOrigin),
    ];
    for (form, expected) in cases {
        assert_eq!(form.validate(), Err(expected));
    }
}

#[test]
fn artwork_popularity_must_be_non_negative_integer() {
    for bad in ["-1", "abc", "1.5"] {
        let form = ArtworkForm { popularity: bad.to_owned(), ..valid_artwork_form() };
        assert_eq!(form.validate(), Err(FormError::InvalidPopularity), "input {bad}");
    }
    let form = ArtworkForm { popularity: String::new(), ..valid_artwork_form() };
    assert_eq!(form.popularity_value(), Ok(0));
}

#[test]
fn artwork_form_prefills_from_artwork() {
    let artwork = Artwork {
        id: 8,
        title: "Statue".to_owned(),
        room_id: Some(3),
        popularity: None,
        description: Some("Statue en bois".to_owned()),
        ..Artwork::default()
    };

    let form = ArtworkForm::from_artwork(&artwork);

    assert_eq!(form.room_id, "3");
    assert_eq!(form.popularity, "0");
    assert_eq!(form.description_fr, "Statue en bois");
}

#[test]
fn artwork_fields_attach_only_selected_files() {
    let form = ArtworkForm { audio_file: Some(FileUpload::named("chant.mp3")), ..valid_artwork_form() };
    let fields = form.fields();
    let names = names(&fields);
    assert!(names.contains(&"audio_file"));
    assert!(!names.contains(&"image_file"));
    assert!(!names.contains(&"video_file"));
    assert!(fields.contains(&FormField::text("popularity", "75")));
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn list_rooms_uses_bearer_and_decodes() {
    let client = MockClient::new();
    client.reply(200, serde_json::json!([{ "id": 1, "name_fr": "Salle 1" }]));

    let rooms = block_on(list_rooms(&session(&client))).unwrap();

    assert_eq!(rooms.len(), 1);
    let sent = &client.requests()[0];
    assert_eq!(sent.path, "/api/admin/rooms");
    assert_eq!(sent.bearer.as_deref(), Some("jwt"));
}

#[test]
fn create_room_posts_multipart() {
    let client = MockClient::new();
    client.reply(201, serde_json::json!({ "id": 9 }));

    block_on(create_room(&session(&client), &valid_room_form())).unwrap();

    let sent = &client.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, "/api/admin/rooms");
    assert!(names(multipart(sent)).contains(&"name_fr"));
}

#[test]
fn update_artwork_puts_to_item_path() {
    let client = MockClient::new();
    client.reply(200, serde_json::json!({ "message": "ok" }));

    block_on(update_artwork(&session(&client), 12, &valid_artwork_form())).unwrap();

    let sent = &client.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.path, "/api/admin/artworks/12");
}

#[test]
fn delete_room_surfaces_server_error() {
    let client = MockClient::new();
    client.reply(409, serde_json::json!({ "error": "La salle contient des œuvres" }));

    let err = block_on(delete_room(&session(&client), 3)).unwrap_err();

    assert_eq!(err, ApiError::Validation { status: 409, message: "La salle contient des œuvres".to_owned() });
    assert_eq!(client.requests()[0].method, Method::Delete);
}

#[test]
fn admin_call_without_token_sends_nothing() {
    let client = MockClient::new();
    let session = Session::new(client.clone(), MemoryTokenStore::default());

    let err = block_on(fetch_stats(&session)).unwrap_err();

    assert_eq!(err, ApiError::MissingCredential);
    assert_eq!(client.request_count(), 0);
}

#[test]
fn fetch_stats_decodes_grouped_counts() {
    let client = MockClient::new();
    client.reply(
        200,
        serde_json::json!({
            "overview": { "total_rooms": 4, "total_artworks": 20, "avg_popularity": 61.5 },
            "artworks": { "by_origin": [{ "origin": "Mali", "count": 5 }] },
            "rooms": { "by_theme": [{ "theme": "Ethnologie", "count": 2 }] }
        }),
    );

    let stats = block_on(fetch_stats(&session(&client))).unwrap();

    assert_eq!(stats.overview.total_artworks, 20);
    assert_eq!(stats.artworks.by_origin[0].label, "Mali");
    assert_eq!(stats.rooms.by_theme[0].count, 2);
}

#[test]
fn share_of_total_handles_zero_total() {
    assert!((share_of_total(5, 20) - 25.0).abs() < f64::EPSILON);
    assert!(share_of_total(5, 0).abs() < f64::EPSILON);
}
