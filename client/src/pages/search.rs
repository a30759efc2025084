//! Cross-collection search driven by the `?q=` query parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::artwork_card::ArtworkCard;
use crate::components::layout::PublicLayout;
use crate::components::load_error::{LoadError, Loading};
use crate::components::room_card::RoomCard;
use crate::net::types::{Language, SearchResults};
use crate::state::remote::Remote;
use crate::state::session::use_client;
use crate::util::i18n::t;

#[component]
pub fn SearchPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let client = use_client();
    let query = use_query_map();
    let term = Memo::new(move |_| query.with(|q| q.get("q")).unwrap_or_default().trim().to_owned());
    let results = RwSignal::new(Remote::<SearchResults>::Loading);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        let current = lang.get_untracked();
        let wanted = term.get_untracked();
        if wanted.is_empty() {
            results.set(Remote::Ready(SearchResults::default()));
            return;
        }
        results.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::search(&client, &wanted, current).await;
                if lang.get_untracked() == current && term.get_untracked() == wanted {
                    results.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(current, e)));
                }
            });
        }
    });

    Effect::new(move || {
        lang.track();
        term.track();
        load.run(());
    });

    view! {
        <PublicLayout>
            <h1 class="page-title">
                {move || {
                    let current = lang.get();
                    let wanted = term.get();
                    if wanted.is_empty() {
                        t(current, "search.title").to_owned()
                    } else {
                        format!("{} « {wanted} »", t(current, "search.results_for"))
                    }
                }}
            </h1>
            {move || match results.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(_) if term.get().is_empty() => {
                    view! { <p class="empty-state">{move || t(lang.get(), "search.prompt")}</p> }.into_any()
                }
                Remote::Ready(found) if found.is_empty() => {
                    view! { <p class="empty-state">{move || t(lang.get(), "filters.no_results")}</p> }.into_any()
                }
                Remote::Ready(SearchResults { rooms, artworks, total }) => {
                    view! {
                        <p class="result-count">{total} " " {move || t(lang.get(), "filters.results")}</p>
                        {(!rooms.is_empty())
                            .then(|| {
                                view! {
                                    <section class="search-section">
                                        <h2>{move || t(lang.get(), "nav.rooms")} " (" {rooms.len()} ")"</h2>
                                        <div class="card-grid">
                                            {rooms.clone().into_iter().map(|room| view! { <RoomCard room=room/> }).collect_view()}
                                        </div>
                                    </section>
                                }
                            })}
                        {(!artworks.is_empty())
                            .then(|| {
                                view! {
                                    <section class="search-section">
                                        <h2>{move || t(lang.get(), "nav.artworks")} " (" {artworks.len()} ")"</h2>
                                        <div class="card-grid">
                                            {artworks
                                                .clone()
                                                .into_iter()
                                                .map(|artwork| view! { <ArtworkCard artwork=artwork/> })
                                                .collect_view()}
                                        </div>
                                    </section>
                                }
                            })}
                    }
                        .into_any()
                }
            }}
        </PublicLayout>
    }
}
