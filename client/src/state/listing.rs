//! Client-side filtering and sorting for the room and artwork listings.
//!
//! DESIGN
//! ======
//! One pure reducer, [`apply`], maps `(items, criteria, language)` to the
//! visible list. Pages keep a [`Criteria`] in a signal and derive the list
//! with a `Memo`; nothing here touches the DOM or the network.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::net::types::{Artwork, Language, Room};

/// Entity field a listing can be narrowed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Category,
    Period,
    Origin,
    Room,
    Theme,
    AccessibilityLevel,
    HasAudio,
    HasInteractive,
}

impl FilterKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Period => "period",
            Self::Origin => "origin",
            Self::Room => "room",
            Self::Theme => "theme",
            Self::AccessibilityLevel => "accessibility_level",
            Self::HasAudio => "has_audio",
            Self::HasInteractive => "has_interactive",
        }
    }
}

/// Listing order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive ascending.
    #[default]
    Title,
    /// Descending; absent counts as 0.
    Popularity,
    /// Descending; absent counts as 0.
    ViewCount,
    /// Newest first; absent last.
    CreatedAt,
    /// Ascending.
    Id,
    /// Ascending; absent last.
    Theme,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Popularity => "popularity",
            Self::ViewCount => "view_count",
            Self::CreatedAt => "created_at",
            Self::Id => "id",
            Self::Theme => "theme",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "title" | "name" => Some(Self::Title),
            "popularity" => Some(Self::Popularity),
            "view_count" | "views" => Some(Self::ViewCount),
            "created_at" | "date" => Some(Self::CreatedAt),
            "id" => Some(Self::Id),
            "theme" => Some(Self::Theme),
            _ => None,
        }
    }
}

/// Search term, field filters and sort order for one listing.
///
/// An empty value never constrains: setting a filter to `""` removes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    filters: BTreeMap<FilterKey, String>,
    pub sort: SortKey,
}

impl Criteria {
    pub fn with_sort(sort: SortKey) -> Self {
        Self { sort, ..Self::default() }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
    }

    /// Selected value for `key`, or `""` when unconstrained.
    pub fn get(&self, key: FilterKey) -> &str {
        self.filters.get(&key).map_or("", String::as_str)
    }

    /// Drop the search term and every field filter. The sort order stays.
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.filters.is_empty()
    }

    pub fn active_filters(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.filters.iter().map(|(key, value)| (*key, value.as_str()))
    }

    fn matches<T: Listable>(&self, item: &T, needle: &str, lang: Language) -> bool {
        let text_hit = needle.is_empty()
            || item.title(lang).to_lowercase().contains(needle)
            || item.description(lang).to_lowercase().contains(needle);
        text_hit
            && self
                .filters
                .iter()
                .all(|(key, wanted)| item.field(*key).is_some_and(|actual| actual == wanted.as_str()))
    }
}

/// What the reducer needs to know about a listed entity.
pub trait Listable {
    fn id(&self) -> i64;
    fn title(&self, lang: Language) -> &str;
    fn description(&self, lang: Language) -> &str;
    /// Textual form of a filterable field, `None` when absent or not applicable.
    fn field(&self, key: FilterKey) -> Option<Cow<'_, str>>;
    fn created_at(&self) -> Option<&str>;

    fn popularity(&self) -> Option<i64> {
        None
    }

    fn view_count(&self) -> Option<i64> {
        None
    }
}

fn non_empty(value: Option<&String>) -> Option<Cow<'_, str>> {
    value.map(String::as_str).filter(|v| !v.is_empty()).map(Cow::Borrowed)
}

fn flag(value: bool) -> Option<Cow<'static, str>> {
    Some(Cow::Borrowed(if value { "true" } else { "false" }))
}

impl Listable for Room {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self, lang: Language) -> &str {
        self.name_in(lang)
    }

    fn description(&self, lang: Language) -> &str {
        self.description_in(lang)
    }

    fn field(&self, key: FilterKey) -> Option<Cow<'_, str>> {
        match key {
            FilterKey::Theme => non_empty(self.theme.as_ref()),
            FilterKey::AccessibilityLevel => non_empty(self.accessibility_level.as_ref()),
            FilterKey::HasAudio => flag(self.has_audio),
            FilterKey::HasInteractive => flag(self.has_interactive),
            FilterKey::Category | FilterKey::Period | FilterKey::Origin | FilterKey::Room => None,
        }
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Listable for Artwork {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self, _lang: Language) -> &str {
        &self.title
    }

    fn description(&self, lang: Language) -> &str {
        self.description_in(lang)
    }

    fn field(&self, key: FilterKey) -> Option<Cow<'_, str>> {
        match key {
            FilterKey::Category => non_empty(self.category.as_ref()),
            FilterKey::Period => non_empty(self.period.as_ref()),
            FilterKey::Origin => non_empty(self.origin.as_ref()),
            FilterKey::Room => self.room_id.map(|id| Cow::Owned(id.to_string())),
            FilterKey::Theme
            | FilterKey::AccessibilityLevel
            | FilterKey::HasAudio
            | FilterKey::HasInteractive => None,
        }
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn popularity(&self) -> Option<i64> {
        self.popularity
    }

    fn view_count(&self) -> Option<i64> {
        self.view_count
    }
}

/// Filter `items` by `criteria` and sort the survivors.
///
/// Search is a case-insensitive substring match on title and the
/// `lang` description; every field filter must match exactly. The sort is
/// stable, so ties keep their input order.
pub fn apply<T: Listable + Clone>(items: &[T], criteria: &Criteria, lang: Language) -> Vec<T> {
    let needle = criteria.search.to_lowercase();
    let mut visible: Vec<T> = items
        .iter()
        .filter(|item| criteria.matches(*item, &needle, lang))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(a, b, criteria.sort, lang));
    visible
}

fn compare<T: Listable>(a: &T, b: &T, sort: SortKey, lang: Language) -> Ordering {
    match sort {
        SortKey::Title => a.title(lang).to_lowercase().cmp(&b.title(lang).to_lowercase()),
        SortKey::Popularity => b.popularity().unwrap_or(0).cmp(&a.popularity().unwrap_or(0)),
        SortKey::ViewCount => b.view_count().unwrap_or(0).cmp(&a.view_count().unwrap_or(0)),
        SortKey::CreatedAt => absent_last(a.created_at(), b.created_at(), |x, y| y.cmp(x)),
        SortKey::Id => a.id().cmp(&b.id()),
        SortKey::Theme => absent_last(
            a.field(FilterKey::Theme).as_deref(),
            b.field(FilterKey::Theme).as_deref(),
            |x, y| x.to_lowercase().cmp(&y.to_lowercase()),
        ),
    }
}

fn absent_last(a: Option<&str>, b: Option<&str>, present: impl Fn(&str, &str) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Distinct non-empty values of `key` across `items`, for filter drop-downs.
///
/// Numeric values (room ids) sort numerically and come before text.
pub fn distinct_values<T: Listable>(items: &[T], key: FilterKey) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.field(key))
        .filter(|value| !value.is_empty())
        .map(|value| {
            let number = value.parse::<i64>().ok();
            (number.is_none(), number.unwrap_or(0), value.into_owned())
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|(_, _, value)| value)
        .collect()
}
