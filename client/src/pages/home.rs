//! Landing page: hero, a selection of rooms and the most popular artworks.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::artwork_card::ArtworkCard;
use crate::components::layout::PublicLayout;
use crate::components::load_error::{LoadError, Loading};
use crate::components::room_card::RoomCard;
use crate::net::types::{Artwork, Language, Room};
use crate::state::listing::{self, Criteria, SortKey};
use crate::state::remote::Remote;
use crate::state::session::use_client;
use crate::util::i18n::t;

const FEATURED_ROOMS: usize = 6;
const FEATURED_ARTWORKS: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
struct Showcase {
    rooms: Vec<(Room, usize)>,
    artworks: Vec<Artwork>,
}

fn showcase(rooms: &[Room], artworks: &[Artwork], lang: Language) -> Showcase {
    let rooms = listing::apply(rooms, &Criteria::with_sort(SortKey::Id), lang)
        .into_iter()
        .take(FEATURED_ROOMS)
        .map(|room| {
            let count = artworks.iter().filter(|a| a.room_id == Some(room.id)).count();
            (room, count)
        })
        .collect();
    let artworks = listing::apply(artworks, &Criteria::with_sort(SortKey::Popularity), lang)
        .into_iter()
        .take(FEATURED_ARTWORKS)
        .collect();
    Showcase { rooms, artworks }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let client = use_client();
    let content = RwSignal::new(Remote::<Showcase>::Loading);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        let current = lang.get_untracked();
        content.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let (rooms, artworks) = futures::join!(
                    crate::net::api::fetch_rooms(&client, current),
                    crate::net::api::fetch_artworks(&client, current),
                );
                let result = rooms.and_then(|rooms| artworks.map(|artworks| showcase(&rooms, &artworks, current)));
                if lang.get_untracked() == current {
                    content.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(current, e)));
                }
            });
        }
    });

    Effect::new(move || {
        lang.track();
        load.run(());
    });

    view! {
        <PublicLayout>
            <section class="hero">
                <h1 class="hero__title">{move || t(lang.get(), "home.hero_title")}</h1>
                <p class="hero__subtitle">{move || t(lang.get(), "home.hero_subtitle")}</p>
                <a class="btn btn--primary" href="/rooms">
                    {move || t(lang.get(), "home.start_tour")}
                </a>
                <p class="hero__languages">{move || t(lang.get(), "home.multilingual")}</p>
            </section>
            {move || match content.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(Showcase { rooms, artworks }) => {
                    view! {
                        <section class="home-section">
                            <header class="home-section__header">
                                <h2>{move || t(lang.get(), "home.rooms_title")}</h2>
                                <a href="/rooms">{move || t(lang.get(), "home.see_all_rooms")}</a>
                            </header>
                            <div class="card-grid">
                                {rooms
                                    .into_iter()
                                    .map(|(room, count)| view! { <RoomCard room=room artwork_count=count/> })
                                    .collect_view()}
                            </div>
                        </section>
                        <section class="home-section">
                            <header class="home-section__header">
                                <h2>{move || t(lang.get(), "home.artworks_title")}</h2>
                                <a href="/artworks">{move || t(lang.get(), "home.see_all_artworks")}</a>
                            </header>
                            <div class="card-grid">
                                {artworks
                                    .into_iter()
                                    .map(|artwork| view! { <ArtworkCard artwork=artwork/> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                        .into_any()
                }
            }}
        </PublicLayout>
    }
}
