//! Card linking to an artwork detail page.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{Artwork, Language};
use crate::util::i18n::t;

#[component]
pub fn ArtworkCard(artwork: Artwork) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let config = expect_context::<ClientConfig>();

    let href = format!("/artworks/{}", artwork.id);
    let image = artwork.image_url.as_deref().filter(|p| !p.is_empty()).map(|p| config.media_url(p));
    let meta: Vec<String> = [&artwork.category, &artwork.period, &artwork.origin]
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();
    let room_name = artwork.room_name.clone().filter(|name| !name.is_empty());
    let title = artwork.title.clone();

    view! {
        <a class="artwork-card" href=href>
            {image.map(|src| view! { <img class="artwork-card__image" src=src alt=title.clone() loading="lazy"/> })}
            <div class="artwork-card__body">
                <h3 class="artwork-card__title">{artwork.title.clone()}</h3>
                <p class="artwork-card__meta">{meta.join(" · ")}</p>
                {room_name
                    .map(|name| {
                        view! {
                            <p class="artwork-card__room">
                                {move || t(lang.get(), "artworks.in_room")} " " {name}
                            </p>
                        }
                    })}
                {artwork.popularity.map(|p| view! { <span class="badge">"★ " {p}</span> })}
            </div>
        </a>
    }
}
