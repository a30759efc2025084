//! Public REST endpoints: rooms, artworks and search.
//!
//! These calls need no credentials and are generic over the transport so the
//! request shapes can be asserted in tests.
//!
//! ERROR HANDLING
//! ==============
//! Each helper returns `Result<_, ApiError>`; pages render the error inline
//! with a retry prompt and never touch session state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiRequest, HttpClient};
use super::types::{Artwork, Language, Room, SearchResults};

fn room_endpoint(room_id: i64) -> String {
    format!("/api/rooms/{room_id}")
}

fn room_artworks_endpoint(room_id: i64) -> String {
    format!("/api/rooms/{room_id}/artworks")
}

fn artwork_endpoint(artwork_id: i64) -> String {
    format!("/api/artworks/{artwork_id}")
}

/// `GET /api/rooms?lang=`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_rooms<C: HttpClient>(client: &C, lang: Language) -> Result<Vec<Room>, ApiError> {
    let req = ApiRequest::get("/api/rooms").query("lang", lang.code());
    client.send(req).await?.json()
}

/// `GET /api/rooms/:id?lang=`
///
/// # Errors
///
/// Returns an [`ApiError`]; an unknown room is a 404 validation error.
pub async fn fetch_room<C: HttpClient>(client: &C, room_id: i64, lang: Language) -> Result<Room, ApiError> {
    let req = ApiRequest::get(room_endpoint(room_id)).query("lang", lang.code());
    client.send(req).await?.json()
}

/// `GET /api/rooms/:id/artworks?lang=`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_room_artworks<C: HttpClient>(
    client: &C,
    room_id: i64,
    lang: Language,
) -> Result<Vec<Artwork>, ApiError> {
    let req = ApiRequest::get(room_artworks_endpoint(room_id)).query("lang", lang.code());
    client.send(req).await?.json()
}

/// `GET /api/artworks?lang=`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_artworks<C: HttpClient>(client: &C, lang: Language) -> Result<Vec<Artwork>, ApiError> {
    let req = ApiRequest::get("/api/artworks").query("lang", lang.code());
    client.send(req).await?.json()
}

/// `GET /api/artworks/:id?lang=`
///
/// # Errors
///
/// Returns an [`ApiError`]; an unknown artwork is a 404 validation error.
pub async fn fetch_artwork<C: HttpClient>(client: &C, artwork_id: i64, lang: Language) -> Result<Artwork, ApiError> {
    let req = ApiRequest::get(artwork_endpoint(artwork_id)).query("lang", lang.code());
    client.send(req).await?.json()
}

/// `GET /api/search?q=&lang=`
///
/// A blank query short-circuits to empty results without a request.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn search<C: HttpClient>(client: &C, query: &str, lang: Language) -> Result<SearchResults, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchResults::default());
    }
    let req = ApiRequest::get("/api/search").query("q", query).query("lang", lang.code());
    client.send(req).await?.json()
}
