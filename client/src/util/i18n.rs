//! Interface strings in French, English and Wolof, plus the persisted
//! language preference.
//!
//! Lookups are by string id; an unknown id renders as the id itself so a
//! missing entry is visible without breaking the page. The preference is
//! best-effort browser-only behavior and no-ops during SSR.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::net::error::ApiError;
use crate::net::types::Language;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "museum_language";

/// `(id, [fr, en, wo])`
const DICTIONARY: &[(&str, [&str; 3])] = &[
    // Shell
    ("museum.name", ["Musée Virtuel", "Virtual Museum", "Musée Virtuel"]),
    ("nav.home", ["Accueil", "Home", "Dalal"]),
    ("nav.rooms", ["Salles", "Rooms", "Këri yi"]),
    ("nav.artworks", ["Œuvres", "Artworks", "Jëf yi"]),
    ("nav.about", ["À propos", "About", "Mbiru"]),
    ("nav.search", ["Rechercher", "Search", "Seet"]),
    ("nav.search_placeholder", ["Rechercher salles et œuvres...", "Search rooms and artworks...", "Seet këri ak jëf yi..."]),
    ("nav.language", ["Langue", "Language", "Làkk"]),
    ("footer.tagline", [
        "Art et culture africaine, partout et pour tous.",
        "African art and culture, everywhere and for everyone.",
        "Art ak aada Afrik, fépp te ngir ñépp.",
    ]),
    ("footer.admin", ["Administration", "Administration", "Saytu"]),
    // Common
    ("common.loading", ["Chargement...", "Loading...", "Xeuy..."]),
    ("common.error", ["Une erreur est survenue", "An error occurred", "Jafe-jafe am na"]),
    ("common.retry", ["Réessayer", "Try again", "Jéemal"]),
    ("common.not_found", ["Page introuvable", "Page not found", "Xët wi amul"]),
    // Home
    ("home.hero_title", [
        "Découvrez l'Art et la Culture Africaine",
        "Discover African Art and Culture",
        "Xam Art ak Aada Afrik",
    ]),
    ("home.hero_subtitle", [
        "Explorez des œuvres exceptionnelles et plongez dans une expérience virtuelle immersive",
        "Explore exceptional artworks and immerse yourself in a virtual experience",
        "Seetal jëf yu rafet yi te dugg ci am xam-xam bu dëgër",
    ]),
    ("home.start_tour", ["Commencer la visite", "Start the tour", "Tàmbali wër"]),
    ("home.rooms_title", ["Salles d'exposition", "Exhibition Rooms", "Kër yi"]),
    ("home.see_all_rooms", ["Voir toutes les salles", "See all rooms", "Xool kër yëpp"]),
    ("home.artworks_title", ["Œuvres remarquables", "Notable artworks", "Jëf yu rafet"]),
    ("home.see_all_artworks", ["Voir toutes les œuvres", "See all artworks", "Xool jëf yëpp"]),
    ("home.artwork_count", ["œuvres", "artworks", "jëf"]),
    ("home.multilingual", [
        "Contenus disponibles en français, anglais et wolof",
        "Content available in French, English and Wolof",
        "Am na ci faraañse, angale ak wolof",
    ]),
    // Listings
    ("filters.title", ["Filtres", "Filters", "Yomba"]),
    ("filters.reset", ["Réinitialiser", "Reset", "Jottali"]),
    ("filters.search_placeholder", ["Rechercher...", "Search...", "Seet..."]),
    ("filters.sort_by", ["Trier par", "Sort by", "Jëme ci"]),
    ("filters.results", ["résultats", "results", "lu ñu gis"]),
    ("filters.no_results", ["Aucun résultat trouvé", "No results found", "Amul seet"]),
    ("filters.clear_search", ["Effacer la recherche", "Clear search", "Far seet bi"]),
    ("rooms.title", ["Salles d'exposition", "Exhibition Rooms", "Kër yi"]),
    ("rooms.theme", ["Thème", "Theme", "Kéneen"]),
    ("rooms.all_themes", ["Tous thèmes", "All themes", "Kéneen yépp"]),
    ("rooms.accessibility", ["Accessibilité", "Accessibility", "Jëfandikoo"]),
    ("rooms.all_levels", ["Tous niveaux", "All levels", "Nianal yépp"]),
    ("rooms.audio", ["Audio Guide", "Audio Guide", "Xol bi"]),
    ("rooms.all_rooms", ["Toutes salles", "All rooms", "Kër yépp"]),
    ("rooms.with_audio", ["Avec audio guide", "With audio guide", "Ak xol bi"]),
    ("rooms.without_audio", ["Sans audio guide", "Without audio guide", "Amul xol"]),
    ("rooms.interactive", ["Interactivité", "Interactive", "Jëfandikoo"]),
    ("rooms.interactive_panorama", ["Panorama interactif", "Interactive panorama", "Panorama bu jëfandikoo"]),
    ("rooms.simple_panorama", ["Panorama simple", "Simple panorama", "Panorama bu yarr"]),
    ("rooms.sort_number", ["Numéro (1-N)", "Number (1-N)", "Nimero (1-N)"]),
    ("rooms.sort_theme", ["Par thème", "By theme", "Ci kéneen"]),
    ("rooms.sort_recent", ["Plus récentes", "Most recent", "Yi gën-gën"]),
    ("rooms.view", ["Voir la salle", "View Room", "Gis kër"]),
    ("rooms.back", ["Retour aux salles", "Back to rooms", "Dellu ci këri yi"]),
    ("artworks.title", ["Collection d'œuvres", "Artwork collection", "Jëf yi"]),
    ("artworks.category", ["Catégorie", "Category", "Xeet"]),
    ("artworks.all_categories", ["Toutes catégories", "All categories", "Xeet yépp"]),
    ("artworks.period", ["Période", "Period", "Jamono"]),
    ("artworks.all_periods", ["Toutes périodes", "All periods", "Jamono yépp"]),
    ("artworks.origin", ["Origine", "Origin", "Fu mu bawoo"]),
    ("artworks.all_origins", ["Toutes origines", "All origins", "Fépp"]),
    ("artworks.room", ["Salle", "Room", "Kër"]),
    ("artworks.all_rooms", ["Toutes salles", "All rooms", "Kër yépp"]),
    ("artworks.sort_title", ["Titre (A-Z)", "Title (A-Z)", "Tur (A-Z)"]),
    ("artworks.sort_popularity", ["Popularité", "Popularity", "Siiw"]),
    ("artworks.sort_views", ["Plus vues", "Most viewed", "Yi ñu gën a xool"]),
    ("artworks.sort_recent", ["Plus récentes", "Most recent", "Yi gën-gën"]),
    ("artworks.view", ["Voir l'œuvre", "View Artwork", "Gis jëf"]),
    ("artworks.back", ["Retour aux œuvres", "Back to artworks", "Dellu ci jëf yi"]),
    ("artworks.in_room", ["dans", "in", "ci"]),
    // Details
    ("detail.audio_guide", ["Guide audio", "Audio guide", "Jiitu ci dégg"]),
    ("detail.no_audio", [
        "Pas de guide audio pour cette œuvre",
        "No audio guide for this artwork",
        "Amul jiitu ci dégg ngir jëf bi",
    ]),
    ("detail.video", ["Vidéo", "Video", "Nataal ju dox"]),
    ("detail.description", ["Description", "Description", "Seetal"]),
    ("detail.qr_code", ["QR Code", "QR Code", "QR Code"]),
    ("detail.scan_qr", [
        "Scannez le code pour voir l'œuvre sur votre téléphone",
        "Scan the code to view the artwork on your phone",
        "Scanne code bi ngir gis jëf bi ci sa telefon",
    ]),
    ("detail.share", ["Partager", "Share", "Waxale"]),
    ("detail.share_link", ["Lien de partage", "Share link", "Lëkkalekaay"]),
    ("detail.panorama", ["Vue panoramique", "Panoramic view", "Xool kër bi"]),
    ("detail.technical_info", ["Informations techniques", "Technical information", "Xibaar bu teknik"]),
    ("detail.popularity", ["Popularité", "Popularity", "Siiw"]),
    ("detail.views", ["Vues", "Views", "Xool"]),
    // Search
    ("search.title", ["Résultats de recherche", "Search Results", "Seet yi am"]),
    ("search.results_for", ["Résultats de recherche pour", "Search results for", "Seet yi am ci"]),
    ("search.prompt", [
        "Saisissez un terme pour lancer la recherche",
        "Type a term to start searching",
        "Bindal baat ngir tàmbali seet",
    ]),
    // About
    ("about.title", ["À propos du musée", "About the museum", "Mbiru musée bi"]),
    ("about.body", [
        "Le Musée Virtuel rend accessibles les collections d'art africain grâce à des visites en ligne, des guides audio et des contenus en trois langues.",
        "The Virtual Museum makes African art collections accessible through online tours, audio guides and content in three languages.",
        "Musée Virtuel bi dafay tax ñépp mën a gis ndàkk art Afrik ci internet, ak ndiimantal dégg ak ñetti làkk.",
    ]),
    ("about.languages", ["Langues disponibles", "Available languages", "Làkk yi am"]),
    // Museum map
    ("map.title", ["Visite des salles", "Museum Map", "Natalu Musée bi"]),
    ("map.instructions", [
        "Cliquez sur une salle pour plus d'informations",
        "Click on a room for more information",
        "Clikal ci kër bi ngir am xibaar yu gëna bari",
    ]),
    ("map.entrance", ["Entrée", "Entrance", "Bunt"]),
    ("map.visit", ["Visiter cette salle", "Visit this room", "Seetal kër bi"]),
    ("map.masks", ["Salle des Masques", "Masks Room", "Kër Maske"]),
    ("map.masks_description", [
        "Salle dédiée aux masques traditionnels africains",
        "Room dedicated to African traditional masks",
        "Kër bu dëgg maske Afrik yi",
    ]),
    ("map.sculptures", ["Salle des Sculptures", "Sculpture Room", "Kër Loxo"]),
    ("map.sculptures_description", [
        "Sculptures en bois et bronze d'Afrique de l'Ouest",
        "Wood and bronze sculptures from West Africa",
        "Loxo ak naaj bu nekk Afrik Sowwu ji",
    ]),
    ("map.gallery", ["Galerie Principale", "Main Gallery", "Kër bu Mag"]),
    ("map.gallery_description", [
        "Expositions temporaires et œuvres majeures",
        "Temporary exhibitions and major artworks",
        "Woneg yu yées ak jëf yu mag",
    ]),
    // Errors
    ("errors.auth", [
        "Votre session a expiré. Veuillez vous reconnecter.",
        "Your session has expired. Please sign in again.",
        "Sa jotaay jeex na. Duggaatal.",
    ]),
    ("errors.network", [
        "Impossible de joindre le serveur.",
        "Unable to reach the server.",
        "Mënuñu jot serwëer bi.",
    ]),
    ("errors.parse", [
        "Réponse inattendue du serveur.",
        "Unexpected response from the server.",
        "Tontu bu ñu séenul.",
    ]),
];

fn column(lang: Language) -> usize {
    match lang {
        Language::Fr => 0,
        Language::En => 1,
        Language::Wo => 2,
    }
}

/// Translate `key` into `lang`. Unknown keys come back unchanged.
pub fn t(lang: Language, key: &'static str) -> &'static str {
    DICTIONARY
        .iter()
        .find(|(id, _)| *id == key)
        .map_or(key, |(_, texts)| texts[column(lang)])
}

/// Human-readable message for a failed call.
///
/// Server-supplied validation messages are shown as sent.
pub fn describe_error(lang: Language, err: &ApiError) -> String {
    match err {
        ApiError::Validation { message, .. } => message.clone(),
        ApiError::MissingCredential | ApiError::AuthExpired => t(lang, "errors.auth").to_owned(),
        ApiError::Network(_) => t(lang, "errors.network").to_owned(),
        ApiError::Parse(_) => t(lang, "errors.parse").to_owned(),
    }
}

/// Read the persisted language, defaulting to French.
pub fn read_preference() -> Language {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

/// Persist `lang` and mirror it on `<html lang>`.
pub fn store_preference(lang: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, lang.code());
            }
            if let Some(el) = window.document().and_then(|d| d.document_element()) {
                let _ = el.set_attribute("lang", lang.code());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}
