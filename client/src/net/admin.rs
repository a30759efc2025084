//! Back-office endpoints and the room/artwork edit forms.
//!
//! Every call goes through [`Session::authenticated_request`], so a 401/403
//! here ends the session and the route guard sends the user back to login.
//! Create and update send `multipart/form-data`: text fields always, file
//! fields only when a file was picked.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::error::ApiError;
use super::http::{ApiRequest, FileUpload, FormField, HttpClient};
use super::types::{AdminStats, Artwork, Room};
use crate::state::session::{Session, TokenStore};

/// Accessibility levels accepted for a room.
pub const ACCESSIBILITY_LEVELS: [&str; 3] = ["facile", "modéré", "avancé"];

/// Room themes offered by the back-office.
pub const THEMES: [&str; 9] = [
    "Histoire des civilisations",
    "Art sacré africain",
    "Art contemporain",
    "Traditions et coutumes",
    "Archéologie",
    "Ethnologie",
    "Art textile",
    "Musique et instruments",
    "Autre",
];

pub const CATEGORIES: [&str; 8] = [
    "Masque",
    "Sculpture",
    "Peinture",
    "Bijou",
    "Textile",
    "Poterie",
    "Instrument",
    "Autre",
];

pub const PERIODS: [&str; 10] = [
    "Préhistorique",
    "Antique",
    "Moyen Âge",
    "XVe siècle",
    "XVIe siècle",
    "XVIIe siècle",
    "XVIIIe siècle",
    "XIXe siècle",
    "XXe siècle",
    "Contemporain",
];

pub const ORIGINS: [&str; 13] = [
    "Sénégal",
    "Mali",
    "Côte d'Ivoire",
    "Bénin",
    "Ghana",
    "Nigeria",
    "Burkina Faso",
    "Cameroun",
    "République démocratique du Congo",
    "Égypte",
    "Éthiopie",
    "Afrique du Sud",
    "Autre",
];

/// A form that cannot be submitted yet. Messages are shown as-is in the
/// (French) back-office.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Veuillez saisir le nom en français")]
    MissingName,
    #[error("Veuillez saisir la description en français")]
    MissingDescription,
    #[error("Veuillez sélectionner un thème")]
    MissingTheme,
    #[error("Veuillez sélectionner un niveau d'accessibilité valide")]
    InvalidAccessibility,
    #[error("Veuillez sélectionner une salle")]
    MissingRoom,
    #[error("Veuillez saisir un titre")]
    MissingTitle,
    #[error("Veuillez sélectionner une catégorie")]
    MissingCategory,
    #[error("Veuillez sélectionner une période")]
    MissingPeriod,
    #[error("Veuillez sélectionner une origine")]
    MissingOrigin,
    #[error("La popularité doit être un entier positif ou nul")]
    InvalidPopularity,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn flag_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// =============================================================================
// ROOM FORM
// =============================================================================

/// Editable copy of a room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomForm {
    pub name_fr: String,
    pub name_en: String,
    pub name_wo: String,
    pub description_fr: String,
    pub description_en: String,
    pub description_wo: String,
    pub theme: String,
    pub accessibility_level: String,
    pub hotspots: String,
    pub has_audio: bool,
    pub has_interactive: bool,
    pub panorama_file: Option<FileUpload>,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            name_fr: String::new(),
            name_en: String::new(),
            name_wo: String::new(),
            description_fr: String::new(),
            description_en: String::new(),
            description_wo: String::new(),
            theme: String::new(),
            accessibility_level: String::new(),
            hotspots: "[]".to_owned(),
            has_audio: false,
            has_interactive: false,
            panorama_file: None,
        }
    }
}

impl RoomForm {
    pub fn from_room(room: &Room) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name_fr: room.name_fr.clone().or_else(|| room.name.clone()).unwrap_or_default(),
            name_en: text(&room.name_en),
            name_wo: text(&room.name_wo),
            description_fr: room.description_fr.clone().or_else(|| room.description.clone()).unwrap_or_default(),
            description_en: text(&room.description_en),
            description_wo: text(&room.description_wo),
            theme: text(&room.theme),
            accessibility_level: text(&room.accessibility_level),
            hotspots: room.hotspots.clone().filter(|h| !h.is_empty()).unwrap_or_else(|| "[]".to_owned()),
            has_audio: room.has_audio,
            has_interactive: room.has_interactive,
            panorama_file: None,
        }
    }

    /// # Errors
    ///
    /// Returns the first [`FormError`] found, in field order.
    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.name_fr) {
            return Err(FormError::MissingName);
        }
        if blank(&self.description_fr) {
            return Err(FormError::MissingDescription);
        }
        if blank(&self.theme) {
            return Err(FormError::MissingTheme);
        }
        if !ACCESSIBILITY_LEVELS.contains(&self.accessibility_level.as_str()) {
            return Err(FormError::InvalidAccessibility);
        }
        Ok(())
    }

    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("name_fr", self.name_fr.trim()),
            FormField::text("name_en", self.name_en.trim()),
            FormField::text("name_wo", self.name_wo.trim()),
            FormField::text("description_fr", self.description_fr.trim()),
            FormField::text("description_en", self.description_en.trim()),
            FormField::text("description_wo", self.description_wo.trim()),
            FormField::text("hotspots", self.hotspots.clone()),
            FormField::text("theme", self.theme.clone()),
            FormField::text("has_audio", flag_text(self.has_audio)),
            FormField::text("has_interactive", flag_text(self.has_interactive)),
            FormField::text("accessibility_level", self.accessibility_level.clone()),
        ];
        if let Some(file) = &self.panorama_file {
            fields.push(FormField::file("panorama_file", file.clone()));
        }
        fields
    }
}

// =============================================================================
// ARTWORK FORM
// =============================================================================

/// Editable copy of an artwork. `room_id` and `popularity` hold the raw
/// input text.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkForm {
    pub room_id: String,
    pub title: String,
    pub description_fr: String,
    pub description_en: String,
    pub description_wo: String,
    pub category: String,
    pub period: String,
    pub origin: String,
    pub popularity: String,
    pub image_file: Option<FileUpload>,
    pub audio_file: Option<FileUpload>,
    pub video_file: Option<FileUpload>,
}

impl Default for ArtworkForm {
    fn default() -> Self {
        Self {
            room_id: String::new(),
            title: String::new(),
            description_fr: String::new(),
            description_en: String::new(),
            description_wo: String::new(),
            category: String::new(),
            period: String::new(),
            origin: String::new(),
            popularity: "0".to_owned(),
            image_file: None,
            audio_file: None,
            video_file: None,
        }
    }
}

impl ArtworkForm {
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            room_id: artwork.room_id.map(|id| id.to_string()).unwrap_or_default(),
            title: artwork.title.clone(),
            description_fr: artwork.description_fr.clone().or_else(|| artwork.description.clone()).unwrap_or_default(),
            description_en: text(&artwork.description_en),
            description_wo: text(&artwork.description_wo),
            category: text(&artwork.category),
            period: text(&artwork.period),
            origin: text(&artwork.origin),
            popularity: artwork.popularity.unwrap_or(0).to_string(),
            image_file: None,
            audio_file: None,
            video_file: None,
        }
    }

    /// # Errors
    ///
    /// Returns the first [`FormError`] found, in field order.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.room_id.trim().parse::<i64>().is_err() {
            return Err(FormError::MissingRoom);
        }
        if blank(&self.title) {
            return Err(FormError::MissingTitle);
        }
        if blank(&self.category) {
            return Err(FormError::MissingCategory);
        }
        if blank(&self.period) {
            return Err(FormError::MissingPeriod);
        }
        if blank(&self.origin) {
            return Err(FormError::MissingOrigin);
        }
        self.popularity_value().map(drop)
    }

    /// Parsed popularity; an empty input counts as 0.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidPopularity`] for non-integers and negatives.
    pub fn popularity_value(&self) -> Result<i64, FormError> {
        let raw = self.popularity.trim();
        if raw.is_empty() {
            return Ok(0);
        }
        raw.parse::<i64>()
            .ok()
            .filter(|value| *value >= 0)
            .ok_or(FormError::InvalidPopularity)
    }

    pub fn fields(&self) -> Vec<FormField> {
        let popularity = self.popularity_value().unwrap_or(0);
        let mut fields = vec![
            FormField::text("room_id", self.room_id.trim()),
            FormField::text("title", self.title.trim()),
            FormField::text("description_fr", self.description_fr.trim()),
            FormField::text("description_en", self.description_en.trim()),
            FormField::text("description_wo", self.description_wo.trim()),
            FormField::text("category", self.category.clone()),
            FormField::text("period", self.period.clone()),
            FormField::text("origin", self.origin.clone()),
            FormField::text("popularity", popularity.to_string()),
        ];
        for (name, file) in [
            ("image_file", &self.image_file),
            ("audio_file", &self.audio_file),
            ("video_file", &self.video_file),
        ] {
            if let Some(file) = file {
                fields.push(FormField::file(name, file.clone()));
            }
        }
        fields
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn admin_room_endpoint(room_id: i64) -> String {
    format!("/api/admin/rooms/{room_id}")
}

fn admin_artwork_endpoint(artwork_id: i64) -> String {
    format!("/api/admin/artworks/{artwork_id}")
}

/// `GET /api/admin/rooms`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn list_rooms<C: HttpClient, S: TokenStore>(session: &Session<C, S>) -> Result<Vec<Room>, ApiError> {
    session.authenticated_json(ApiRequest::get("/api/admin/rooms")).await
}

/// `GET /api/admin/rooms/:id`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn get_room<C: HttpClient, S: TokenStore>(session: &Session<C, S>, room_id: i64) -> Result<Room, ApiError> {
    session.authenticated_json(ApiRequest::get(admin_room_endpoint(room_id))).await
}

/// `POST /api/admin/rooms`
///
/// # Errors
///
/// Returns an [`ApiError`]; the form is assumed already validated.
pub async fn create_room<C: HttpClient, S: TokenStore>(session: &Session<C, S>, form: &RoomForm) -> Result<(), ApiError> {
    log::info!("creating room {}", form.name_fr.trim());
    session
        .authenticated_send(ApiRequest::post("/api/admin/rooms").multipart(form.fields()))
        .await
}

/// `PUT /api/admin/rooms/:id`
///
/// # Errors
///
/// Returns an [`ApiError`]; the form is assumed already validated.
pub async fn update_room<C: HttpClient, S: TokenStore>(
    session: &Session<C, S>,
    room_id: i64,
    form: &RoomForm,
) -> Result<(), ApiError> {
    log::info!("updating room {room_id}");
    session
        .authenticated_send(ApiRequest::put(admin_room_endpoint(room_id)).multipart(form.fields()))
        .await
}

/// `DELETE /api/admin/rooms/:id`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn delete_room<C: HttpClient, S: TokenStore>(session: &Session<C, S>, room_id: i64) -> Result<(), ApiError> {
    log::info!("deleting room {room_id}");
    session.authenticated_send(ApiRequest::delete(admin_room_endpoint(room_id))).await
}

/// `GET /api/admin/artworks`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn list_artworks<C: HttpClient, S: TokenStore>(session: &Session<C, S>) -> Result<Vec<Artwork>, ApiError> {
    session.authenticated_json(ApiRequest::get("/api/admin/artworks")).await
}

/// `GET /api/admin/artworks/:id`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn get_artwork<C: HttpClient, S: TokenStore>(
    session: &Session<C, S>,
    artwork_id: i64,
) -> Result<Artwork, ApiError> {
    session.authenticated_json(ApiRequest::get(admin_artwork_endpoint(artwork_id))).await
}

/// `POST /api/admin/artworks`
///
/// # Errors
///
/// Returns an [`ApiError`]; the form is assumed already validated.
pub async fn create_artwork<C: HttpClient, S: TokenStore>(
    session: &Session<C, S>,
    form: &ArtworkForm,
) -> Result<(), ApiError> {
    log::info!("creating artwork {}", form.title.trim());
    session
        .authenticated_send(ApiRequest::post("/api/admin/artworks").multipart(form.fields()))
        .await
}

/// `PUT /api/admin/artworks/:id`
///
/// # Errors
///
/// Returns an [`ApiError`]; the form is assumed already validated.
pub async fn update_artwork<C: HttpClient, S: TokenStore>(
    session: &Session<C, S>,
    artwork_id: i64,
    form: &ArtworkForm,
) -> Result<(), ApiError> {
    log::info!("updating artwork {artwork_id}");
    session
        .authenticated_send(ApiRequest::put(admin_artwork_endpoint(artwork_id)).multipart(form.fields()))
        .await
}

/// `DELETE /api/admin/artworks/:id`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn delete_artwork<C: HttpClient, S: TokenStore>(
    session: &Session<C, S>,
    artwork_id: i64,
) -> Result<(), ApiError> {
    log::info!("deleting artwork {artwork_id}");
    session.authenticated_send(ApiRequest::delete(admin_artwork_endpoint(artwork_id))).await
}

/// `GET /api/admin/stats`
///
/// # Errors
///
/// Returns an [`ApiError`]; auth failures end the session first.
pub async fn fetch_stats<C: HttpClient, S: TokenStore>(session: &Session<C, S>) -> Result<AdminStats, ApiError> {
    session.authenticated_json(ApiRequest::get("/api/admin/stats")).await
}

/// Percentage of `count` in `total`, 0 when `total` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn share_of_total(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
