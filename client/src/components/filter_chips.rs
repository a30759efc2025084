//! Removable chips summarizing the active search term and field filters.

#[cfg(test)]
#[path = "filter_chips_test.rs"]
mod filter_chips_test;

use leptos::prelude::*;

use crate::net::types::Language;
use crate::state::listing::{Criteria, FilterKey};
use crate::util::i18n::t;

/// Display text for one active filter. Room ids resolve through `room_names`
/// (`(id, name)` pairs) when the name is known.
pub(crate) fn chip_label(lang: Language, key: FilterKey, value: &str, room_names: &[(String, String)]) -> String {
    let flag = |yes: &'static str, no: &'static str| t(lang, if value == "true" { yes } else { no }).to_owned();
    match key {
        FilterKey::HasAudio => flag("rooms.with_audio", "rooms.without_audio"),
        FilterKey::HasInteractive => flag("rooms.interactive_panorama", "rooms.simple_panorama"),
        FilterKey::Room => room_names
            .iter()
            .find(|(id, _)| id == value)
            .map_or_else(|| format!("{} {value}", t(lang, "artworks.room")), |(_, name)| name.clone()),
        _ => value.to_owned(),
    }
}

#[component]
pub fn FilterChips(
    criteria: RwSignal<Criteria>,
    #[prop(optional)] room_names: Option<Signal<Vec<(String, String)>>>,
) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <Show when=move || criteria.with(Criteria::is_active)>
            <div class="filter-chips">
                {move || {
                    let search = criteria.with(|c| c.search.clone());
                    (!search.is_empty())
                        .then(|| {
                            view! {
                                <button
                                    class="filter-chip filter-chip--search"
                                    on:click=move |_| criteria.update(|c| c.search.clear())
                                >
                                    {format!("\u{201c}{search}\u{201d}")}
                                    " ×"
                                </button>
                            }
                        })
                }}
                {move || {
                    let lang = lang.get();
                    let names = room_names.map(|names| names.get()).unwrap_or_default();
                    let active: Vec<(FilterKey, String)> = criteria
                        .with(|c| c.active_filters().map(|(key, value)| (key, value.to_owned())).collect());
                    active
                        .into_iter()
                        .map(|(key, value)| {
                            let label = chip_label(lang, key, &value, &names);
                            view! {
                                <button
                                    class=format!("filter-chip filter-chip--{}", key.as_str())
                                    on:click=move |_| criteria.update(|c| c.set(key, ""))
                                >
                                    {label}
                                    " ×"
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
