//! Wire DTOs for the museum REST API.
//!
//! DESIGN
//! ======
//! The backend serves two shapes of the same entity: public endpoints return
//! text already localized into `name`/`description`, while admin endpoints
//! return every language column (`name_fr`, `name_en`, ...). Both decode into
//! the same structs with every text column optional, and the localized
//! accessors pick whichever is present.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Role string the backend assigns to back-office users.
pub const ADMIN_ROLE: &str = "admin";

// =============================================================================
// LANGUAGE
// =============================================================================

/// Content language supported by the museum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Wo,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Wo];

    /// Code sent as the `lang` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Wo => "wo",
        }
    }

    /// Parse a language code; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            "wo" => Some(Self::Wo),
            _ => None,
        }
    }

    /// Name of the language in that language, for the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
            Self::Wo => "Wolof",
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// An authenticated user as returned by `/api/me` and `/api/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Successful `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

// =============================================================================
// ROOMS
// =============================================================================

/// An exhibition room.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_fr: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_wo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_fr: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_wo: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub accessibility_level: Option<String>,
    #[serde(default)]
    pub panorama_url: Option<String>,
    #[serde(default)]
    pub hotspots: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub has_audio: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub has_interactive: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Room {
    /// Room name in `lang`, falling back to the backend-localized name, then French.
    pub fn name_in(&self, lang: Language) -> &str {
        let specific = match lang {
            Language::Fr => &self.name_fr,
            Language::En => &self.name_en,
            Language::Wo => &self.name_wo,
        };
        pick_text([specific, &self.name, &self.name_fr])
    }

    /// Room description in `lang`, with the same fallback order as [`Room::name_in`].
    pub fn description_in(&self, lang: Language) -> &str {
        let specific = match lang {
            Language::Fr => &self.description_fr,
            Language::En => &self.description_en,
            Language::Wo => &self.description_wo,
        };
        pick_text([specific, &self.description, &self.description_fr])
    }
}

// =============================================================================
// ARTWORKS
// =============================================================================

/// A single artwork on display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_fr: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_wo: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, alias = "qr_code_data")]
    pub qr_code_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub popularity: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Artwork {
    /// Artwork description in `lang`, falling back to the localized field, then French.
    pub fn description_in(&self, lang: Language) -> &str {
        let specific = match lang {
            Language::Fr => &self.description_fr,
            Language::En => &self.description_en,
            Language::Wo => &self.description_wo,
        };
        pick_text([specific, &self.description, &self.description_fr])
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// `GET /api/search` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
    #[serde(default)]
    pub total: usize,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.artworks.is_empty()
    }
}

// =============================================================================
// ADMIN STATISTICS
// =============================================================================

/// `GET /api/admin/stats` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub overview: StatsOverview,
    pub artworks: ArtworkStats,
    pub rooms: RoomStats,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsOverview {
    pub total_rooms: u64,
    pub total_artworks: u64,
    pub audio_rooms: u64,
    pub interactive_rooms: u64,
    pub recent_artworks: u64,
    pub recent_rooms: u64,
    pub avg_popularity: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArtworkStats {
    pub with_image: u64,
    pub with_audio: u64,
    pub with_video: u64,
    pub by_category: Vec<LabelCount>,
    pub by_period: Vec<LabelCount>,
    pub by_origin: Vec<LabelCount>,
    pub top_popular: Vec<PopularArtwork>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoomStats {
    pub by_theme: Vec<LabelCount>,
    pub with_audio: u64,
    pub with_interactive: u64,
}

/// One bucket of a grouped count. The backend names the label after the
/// grouping column (`category`, `period`, `origin` or `theme`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LabelCount {
    #[serde(alias = "category", alias = "period", alias = "origin", alias = "theme")]
    pub label: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PopularArtwork {
    pub title: String,
    #[serde(default)]
    pub popularity: i64,
    #[serde(default)]
    pub room_name: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

fn pick_text<const N: usize>(candidates: [&Option<String>; N]) -> &str {
    candidates
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|text| !text.is_empty())
        .unwrap_or("")
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from_value(&value).ok_or_else(|| D::Error::custom("expected integer-compatible value"))
}

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    integer_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected integer-compatible value or null"))
}

/// Accepts JSON booleans, `0`/`1` integers (SQLite columns), their string
/// forms, and `null` (false).
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        serde_json::Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("unexpected flag value {other:?}"))),
        },
        _ => Err(D::Error::custom("expected boolean-compatible value")),
    }
}

fn integer_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            let float = number.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)?;
            #[allow(clippy::cast_precision_loss)]
            let in_range = float >= i64::MIN as f64 && float <= i64::MAX as f64;
            #[allow(clippy::cast_possible_truncation)]
            let int = float as i64;
            in_range.then_some(int)
        }
        serde_json::Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}
