//! Single room: panorama, description and the artworks on display.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::artwork_card::ArtworkCard;
use crate::components::layout::PublicLayout;
use crate::components::load_error::{LoadError, Loading};
use crate::config::ClientConfig;
use crate::net::types::{Artwork, Language, Room};
use crate::state::remote::Remote;
use crate::state::session::use_client;
use crate::util::i18n::t;

#[component]
pub fn RoomDetailPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let config = expect_context::<ClientConfig>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let client = use_client();
    let params = use_params_map();
    let room_id = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok()));
    let content = RwSignal::new(Remote::<(Room, Vec<Artwork>)>::Loading);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        let current = lang.get_untracked();
        let Some(id) = room_id.get_untracked() else {
            content.set(Remote::Failed(t(current, "common.not_found").to_owned()));
            return;
        };
        content.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let (room, artworks) = futures::join!(
                    crate::net::api::fetch_room(&client, id, current),
                    crate::net::api::fetch_room_artworks(&client, id, current),
                );
                let result = room.and_then(|room| artworks.map(|artworks| (room, artworks)));
                if lang.get_untracked() == current && room_id.get_untracked() == Some(id) {
                    content.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(current, e)));
                }
            });
        }
    });

    Effect::new(move || {
        lang.track();
        room_id.track();
        load.run(());
    });

    view! {
        <PublicLayout>
            <a class="back-link" href="/rooms">
                "← "
                {move || t(lang.get(), "rooms.back")}
            </a>
            {move || match content.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready((room, artworks)) => {
                    let current = lang.get();
                    let panorama = room
                        .panorama_url
                        .as_deref()
                        .filter(|url| !url.is_empty())
                        .map(|url| config.media_url(url));
                    let all_artworks_href = format!("/artworks?room={}", room.id);
                    view! {
                        <article class="room-detail">
                            <h1 class="page-title">{room.name_in(current).to_owned()}</h1>
                            {room.theme.clone().map(|theme| view! { <p class="room-detail__theme">{theme}</p> })}
                            {panorama
                                .map(|src| {
                                    view! {
                                        <figure class="room-detail__panorama">
                                            <img src=src alt=t(current, "detail.panorama")/>
                                            <figcaption>{t(current, "detail.panorama")}</figcaption>
                                        </figure>
                                    }
                                })}
                            <section class="room-detail__description">
                                <h2>{t(current, "detail.description")}</h2>
                                <p>{room.description_in(current).to_owned()}</p>
                            </section>
                            <div class="room-detail__badges">
                                {room.accessibility_level.clone().map(|level| view! { <span class="badge">{level}</span> })}
                                {room.has_audio.then(|| view! { <span class="badge">"🎧 " {t(current, "rooms.audio")}</span> })}
                                {room
                                    .has_interactive
                                    .then(|| view! { <span class="badge">"🌐 " {t(current, "rooms.interactive")}</span> })}
                            </div>
                            <section class="room-detail__artworks">
                                <header class="home-section__header">
                                    <h2>{t(current, "nav.artworks")} " (" {artworks.len()} ")"</h2>
                                    <a href=all_artworks_href>{t(current, "home.see_all_artworks")}</a>
                                </header>
                                <div class="card-grid">
                                    {artworks.into_iter().map(|artwork| view! { <ArtworkCard artwork=artwork/> }).collect_view()}
                                </div>
                            </section>
                        </article>
                    }
                        .into_any()
                }
            }}
        </PublicLayout>
    }
}
