//! Card linking to a room detail page.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{Language, Room};
use crate::util::i18n::t;

#[component]
pub fn RoomCard(room: Room, #[prop(optional)] artwork_count: Option<usize>) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let config = expect_context::<ClientConfig>();

    let href = format!("/rooms/{}", room.id);
    let panorama = room.panorama_url.as_deref().filter(|p| !p.is_empty()).map(|p| config.media_url(p));
    let theme = room.theme.clone();
    let has_audio = room.has_audio;
    let has_interactive = room.has_interactive;
    let title_room = room.clone();
    let description_room = room;

    view! {
        <a class="room-card" href=href>
            {panorama.map(|src| view! { <img class="room-card__image" src=src alt="" loading="lazy"/> })}
            <div class="room-card__body">
                <h3 class="room-card__title">{move || title_room.name_in(lang.get()).to_owned()}</h3>
                {theme.map(|theme| view! { <span class="room-card__theme">{theme}</span> })}
                <p class="room-card__description">
                    {move || description_room.description_in(lang.get()).to_owned()}
                </p>
                <div class="room-card__badges">
                    <Show when=move || has_audio>
                        <span class="badge">"🎧 " {move || t(lang.get(), "rooms.audio")}</span>
                    </Show>
                    <Show when=move || has_interactive>
                        <span class="badge">"🌐 " {move || t(lang.get(), "rooms.interactive")}</span>
                    </Show>
                    {artwork_count
                        .map(|count| {
                            view! {
                                <span class="badge badge--count">
                                    {count} " " {move || t(lang.get(), "home.artwork_count")}
                                </span>
                            }
                        })}
                </div>
            </div>
        </a>
    }
}
