use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ClientConfig::new("https://api.museum.sn/", Some("https://museum.sn//"));
    assert_eq!(config.api_base_url(), "https://api.museum.sn");
    assert_eq!(config.frontend_url(), Some("https://museum.sn"));
}

#[test]
fn empty_values_fall_back() {
    let config = ClientConfig::new("  ", Some(""));
    assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(config.frontend_url(), None);
}

#[test]
fn media_url_joins_relative_paths() {
    let config = ClientConfig::new("http://localhost:5000", None);
    assert_eq!(config.media_url("/uploads/masque.jpg"), "http://localhost:5000/uploads/masque.jpg");
    assert_eq!(config.media_url("uploads/a.mp3"), "http://localhost:5000/uploads/a.mp3");
}

#[test]
fn media_url_keeps_absolute_urls() {
    let config = ClientConfig::default();
    assert_eq!(config.media_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
    assert_eq!(config.media_url("data:image/png;base64,AAA"), "data:image/png;base64,AAA");
}

#[test]
fn public_url_uses_frontend_when_configured() {
    let with = ClientConfig::new(DEFAULT_API_BASE_URL, Some("https://museum.sn"));
    assert_eq!(with.public_url("/artworks/4"), "https://museum.sn/artworks/4");
    let without = ClientConfig::default();
    assert_eq!(without.public_url("/artworks/4"), "/artworks/4");
}
