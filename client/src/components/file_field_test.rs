use super::*;

#[test]
fn stored_file_link_keeps_real_urls() {
    assert_eq!(
        stored_file_link(Some("http://localhost:5000/media/masque.jpg".to_owned())).as_deref(),
        Some("http://localhost:5000/media/masque.jpg")
    );
}

#[test]
fn stored_file_link_drops_missing_and_blank_urls() {
    assert_eq!(stored_file_link(None), None);
    assert_eq!(stored_file_link(Some(String::new())), None);
    assert_eq!(stored_file_link(Some("  ".to_owned())), None);
}

#[test]
fn props_accept_optional_stored_url() {
    let stored: Option<String> = Some("/media/salle.jpg".to_owned());
    let _with_file = FileFieldProps::builder()
        .label("Panorama")
        .accept("image/*")
        .current(stored)
        .on_pick(Callback::new(|_: Option<FileUpload>| {}))
        .build();
    let _without_file = FileFieldProps::builder()
        .label("Audio")
        .accept("audio/*")
        .on_pick(Callback::new(|_: Option<FileUpload>| {}))
        .build();
}
