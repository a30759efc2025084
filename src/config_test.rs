use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.frontend_url, None);
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("MUSEUM_API_BASE_URL", "https://api.musee.sn/"),
        ("MUSEUM_FRONTEND_URL", "https://musee.sn"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://api.musee.sn");
    assert_eq!(cfg.frontend_url.as_deref(), Some("https://musee.sn"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " "), ("MUSEUM_FRONTEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.frontend_url, None);
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn non_http_api_url_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("MUSEUM_API_BASE_URL", "ftp://files")])).unwrap_err();
    assert_eq!(err.to_string(), "MUSEUM_API_BASE_URL must be an http(s) URL, got 'ftp://files'");
}

#[test]
fn client_config_carries_urls() {
    let cfg = ServerConfig::from_lookup(lookup(&[("MUSEUM_FRONTEND_URL", "https://musee.sn")])).unwrap();
    let client = cfg.client_config();
    assert_eq!(client.api_base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(client.frontend_url(), Some("https://musee.sn"));
}
