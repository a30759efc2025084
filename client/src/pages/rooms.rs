//! Room listing with search, theme/accessibility/feature filters and sort.

use leptos::prelude::*;

use crate::components::filter_chips::FilterChips;
use crate::components::filter_select::{FilterSelect, options_with_all};
use crate::components::layout::PublicLayout;
use crate::components::load_error::{LoadError, Loading};
use crate::components::room_card::RoomCard;
use crate::net::types::{Language, Room};
use crate::state::listing::{self, Criteria, FilterKey, SortKey};
use crate::state::remote::Remote;
use crate::state::session::use_client;
use crate::util::i18n::t;

const SORTS: [(SortKey, &str); 3] = [
    (SortKey::Id, "rooms.sort_number"),
    (SortKey::Theme, "rooms.sort_theme"),
    (SortKey::CreatedAt, "rooms.sort_recent"),
];

fn flag_options(lang: Language, all: &'static str, yes: &'static str, no: &'static str) -> Vec<(String, String)> {
    vec![
        (String::new(), t(lang, all).to_owned()),
        ("true".to_owned(), t(lang, yes).to_owned()),
        ("false".to_owned(), t(lang, no).to_owned()),
    ]
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let client = use_client();
    let rooms = RwSignal::new(Remote::<Vec<Room>>::Loading);
    let criteria = RwSignal::new(Criteria::with_sort(SortKey::Id));

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        let current = lang.get_untracked();
        rooms.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_rooms(&client, current).await;
                if lang.get_untracked() == current {
                    rooms.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(current, e)));
                }
            });
        }
    });

    Effect::new(move || {
        lang.track();
        load.run(());
    });

    let visible = Memo::new(move |_| {
        rooms.with(|r| {
            r.ready()
                .map(|list| criteria.with(|c| listing::apply(list, c, lang.get())))
                .unwrap_or_default()
        })
    });
    let themes = Memo::new(move |_| {
        rooms.with(|r| r.ready().map(|list| listing::distinct_values(list, FilterKey::Theme)).unwrap_or_default())
    });

    let set_filter = move |key: FilterKey| Callback::new(move |value: String| criteria.update(|c| c.set(key, value)));

    view! {
        <PublicLayout>
            <h1 class="page-title">{move || t(lang.get(), "rooms.title")}</h1>
            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder=move || t(lang.get(), "filters.search_placeholder")
                    prop:value=move || criteria.with(|c| c.search.clone())
                    on:input=move |ev| criteria.update(|c| c.search = event_target_value(&ev))
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "rooms.theme").to_owned())
                    value=Signal::derive(move || criteria.with(|c| c.get(FilterKey::Theme).to_owned()))
                    options=Signal::derive(move || options_with_all(t(lang.get(), "rooms.all_themes"), themes.get()))
                    on_change=set_filter(FilterKey::Theme)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "rooms.accessibility").to_owned())
                    value=Signal::derive(move || criteria.with(|c| c.get(FilterKey::AccessibilityLevel).to_owned()))
                    options=Signal::derive(move || {
                        options_with_all(
                            t(lang.get(), "rooms.all_levels"),
                            crate::net::admin::ACCESSIBILITY_LEVELS.iter().map(|level| (*level).to_owned()),
                        )
                    })
                    on_change=set_filter(FilterKey::AccessibilityLevel)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "rooms.audio").to_owned())
                    value=Signal::derive(move || criteria.with(|c| c.get(FilterKey::HasAudio).to_owned()))
                    options=Signal::derive(move || {
                        flag_options(lang.get(), "rooms.all_rooms", "rooms.with_audio", "rooms.without_audio")
                    })
                    on_change=set_filter(FilterKey::HasAudio)
                />
                <FilterSelect
                    label=Signal::derive(move || t(lang.get(), "rooms.interactive").to_owned())
                    value=Signal::derive(move || criteria.with(|c| c.get(FilterKey::HasInteractive).to_owned()))
                    options=Signal::derive(move || {
                        flag_options(
                            lang.get(),
                            "rooms.all_rooms",
                            "rooms.interactive_panorama",
                            "rooms.simple_panorama",
                        )
                    })
                    on_change=set_filter(FilterKey::HasInteractive)
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
            <FilterChips criteria=criteria/>
            {move || match rooms.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(_) => {
                    let shown = visible.get();
                    if shown.is_empty() {
                        view! { <p class="empty-state">{move || t(lang.get(), "filters.no_results")}</p> }.into_any()
                    } else {
                        view! {
                            <p class="result-count">{shown.len()} " " {move || t(lang.get(), "filters.results")}</p>
                            <div class="card-grid">
                                {shown.into_iter().map(|room| view! { <RoomCard room=room/> }).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </PublicLayout>
    }
}
