//! Artwork collection with search, category/period/origin/room filters and
//! sort. `?room=<id>` preselects the room filter.

#[cfg(test)]
#[path = "artworks_test.rs"]
mod artworks_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::artwork_card::ArtworkCard;
use crate::components::filter_chips::FilterChips;
use crate::components::filter_select::{FilterSelect, options_with_all};
use crate::components::layout::PublicLayout;
use crate::components::load_error::{LoadError, Loading};
use crate::net::types::{Artwork, Language, Room};
use crate::state::listing::{self, Criteria, FilterKey, SortKey};
use crate::state::remote::Remote;
use crate::state::session::use_client;
use crate::util::i18n::t;

const SORTS: [(SortKey, &str); 4] = [
    (SortKey::Title, "artworks.sort_title"),
    (SortKey::Popularity, "artworks.sort_popularity"),
    (SortKey::ViewCount, "artworks.sort_views"),
    (SortKey::CreatedAt, "artworks.sort_recent"),
];

#[derive(Clone, Debug, Default, PartialEq)]
struct Collection {
    artworks: Vec<Artwork>,
    rooms: Vec<Room>,
}

/// Room filter choices: every room id present in the collection, labelled
/// with the room name when known.
fn room_options(collection: &Collection, lang: Language) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), t(lang, "artworks.all_rooms").to_owned())];
    for id in listing::distinct_values(&collection.artworks, FilterKey::Room) {
        let label = collection
            .rooms
            .iter()
            .find(|room| room.id.to_string() == id)
            .map_or_else(|| format!("{} {id}", t(lang, "artworks.room")), |room| room.name_in(lang).to_owned());
        options.push((id, label));
    }
    options
}

/// Criteria seeded from the page URL.
fn initial_criteria(room: Option<&str>) -> Criteria {
    let mut criteria = Criteria::default();
    if let Some(room) = room.filter(|id| id.parse::<i64>().is_ok()) {
        criteria.set(FilterKey::Room, room);
    }
    criteria
}

#[component]
pub fn ArtworksPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let client = use_client();
    let query = use_query_map();
    let collection = RwSignal::new(Remote::<Collection>::Loading);
    let criteria = RwSignal::new(initial_criteria(query.with_untracked(|q| q.get("room")).as_deref()));

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        let current = lang.get_untracked();
        collection.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let (artworks, rooms) = futures::join!(
                    crate::net::api::fetch_artworks(&client, current),
                    crate::net::api::fetch_rooms(&client, current),
                );
                // Room names only label the room filter; the page still works without them.
                let rooms = rooms.unwrap_or_else(|e| {
                    log::warn!("room names unavailable: {e}");
                    Vec::new()
                });
                let result = artworks.map(|artworks| Collection { artworks, rooms });
                if lang.get_untracked() == current {
                    collection.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(current, e)));
                }
            });
        }
    });

    Effect::new(move || {
        lang.track();
        load.run(());
    });

    let visible = Memo::new(move |_| {
        collection.with(|c| {
            c.ready()
                .map(|loaded| criteria.with(|crit| listing::apply(&loaded.artworks, crit, lang.get())))
                .unwrap_or_default()
        })
    });
    let distinct = move |key: FilterKey| {
        collection.with(|c| c.ready().map(|loaded| listing::distinct_values(&loaded.artworks, key)).unwrap_or_default())
    };
    let set_filter = move |key: FilterKey| Callback::new(move |value: String| criteria.update(|c| c.set(key, value)));
    let current_filter = move |key: FilterKey| Signal::derive(move || criteria.with(|c| c.get(key).to_owned()));

    view! {
        <PublicLayout>
            <h1 class="page-title">{move || t(lang.get(), "artworks.title")}</h1>
            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder=move || t(lang.get(), "filters.search_placeholder")
                    prop:value=move || criteria.with(|c| c.search.clone())
                    on:input=move |ev| criteria.update(|c| c.search = event_target_value(&ev))
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "artworks.category").to_owned())
                    value=current_filter(FilterKey::Category)
                    options=Signal::derive(move || {
                        options_with_all(t(lang.get(), "artworks.all_categories"), distinct(FilterKey::Category))
                    })
                    on_change=set_filter(FilterKey::Category)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "artworks.period").to_owned())
                    value=current_filter(FilterKey::Period)
                    options=Signal::derive(move || {
                        options_with_all(t(lang.get(), "artworks.all_periods"), distinct(FilterKey::Period))
                    })
                    on_change=set_filter(FilterKey::Period)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "artworks.origin").to_owned())
                    value=current_filter(FilterKey::Origin)
                    options=Signal::derive(move || {
                        options_with_all(t(lang.get(), "artworks.all_origins"), distinct(FilterKey::Origin))
                    })
                    on_change=set_filter(FilterKey::Origin)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "artworks.room").to_owned())
                    value=current_filter(FilterKey::Room)
                    options=Signal::derive(move || {
                        let lang = lang.get();
                        collection.with(|c| c.ready().map(|loaded| room_options(loaded, lang)).unwrap_or_default())
                    })
                    on_change=set_filter(FilterKey::Room)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "filters.sort_by").to_owned())
                    value=Signal::derive(move || criteria.with(|c| c.sort.as_str().to_owned()))
                    options=Signal::derive(move || {
                        SORTS.iter().map(|&(key, label)| (key.as_str().to_owned(), t(lang.get(), label).to_owned())).collect()
                    })
                    on_change=Callback::new(move |raw: String| {
                        if let Some(sort) = SortKey::parse(&raw) {
                            criteria.update(|c| c.sort = sort);
                        }
                    })
                />
                <button
                    class="btn"
                    disabled=move || !criteria.with(Criteria::is_active)
                    on:click=move |_| criteria.update(Criteria::clear)
                >
                    {move || t(lang.get(), "filters.reset")}
                </button>
            </div>
            <FilterChips
                criteria=criteria
                room_names=Signal::derive(move || {
                    let lang = lang.get();
                    collection.with(|c| c.ready().map(|loaded| room_options(loaded, lang)).unwrap_or_default())
                })
            />
            {move || match collection.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(_) => {
                    let shown = visible.get();
                    if shown.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>{move || t(lang.get(), "filters.no_results")}</p>
                                <button class="btn" on:click=move |_| criteria.update(Criteria::clear)>
                                    {move || t(lang.get(), "filters.reset")}
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="result-count">{shown.len()} " " {move || t(lang.get(), "filters.results")}</p>
                            <div class="card-grid">
                                {shown.into_iter().map(|artwork| view! { <ArtworkCard artwork=artwork/> }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </PublicLayout>
    }
}
