use super::*;

#[test]
fn room_choices_start_with_placeholder_and_follow_id_order() {
    let rooms = vec![
        Room { id: 5, name_fr: Some("Textiles".to_owned()), ..Room::default() },
        Room { id: 2, name: Some("Masques".to_owned()), ..Room::default() },
    ];

    let choices = room_choices(&rooms, "Sélectionner une salle");

    assert_eq!(
        choices,
        vec![
            (String::new(), "Sélectionner une salle".to_owned()),
            ("2".to_owned(), "Masques".to_owned()),
            ("5".to_owned(), "Textiles".to_owned()),
        ]
    );
}

#[test]
fn stored_media_copies_urls() {
    let artwork = Artwork {
        image_url: Some("/uploads/masque.jpg".to_owned()),
        audio_url: None,
        video_url: Some("https://cdn.example.org/v.mp4".to_owned()),
        ..Artwork::default()
    };

    let media = StoredMedia::of(&artwork);

    assert_eq!(media.image.as_deref(), Some("/uploads/masque.jpg"));
    assert!(media.audio.is_none());
    assert_eq!(media.video.as_deref(), Some("https://cdn.example.org/v.mp4"));
}
