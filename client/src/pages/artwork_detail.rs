//! Single artwork: media, localized description, QR code and share link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::PublicLayout;
use crate::components::load_error::{LoadError, Loading};
use crate::config::ClientConfig;
use crate::net::types::{Artwork, Language};
use crate::state::remote::Remote;
use crate::state::session::use_client;
use crate::util::i18n::t;

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

#[component]
pub fn ArtworkDetailPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let config = expect_context::<ClientConfig>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let client = use_client();
    let params = use_params_map();
    let artwork_id = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok()));
    let artwork = RwSignal::new(Remote::<Artwork>::Loading);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        let current = lang.get_untracked();
        let Some(id) = artwork_id.get_untracked() else {
            artwork.set(Remote::Failed(t(current, "common.not_found").to_owned()));
            return;
        };
        artwork.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_artwork(&client, id, current).await;
                if lang.get_untracked() == current && artwork_id.get_untracked() == Some(id) {
                    artwork.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(current, e)));
                }
            });
        }
    });

    Effect::new(move || {
        lang.track();
        artwork_id.track();
        load.run(());
    });

    view! {
        <PublicLayout>
            <a class="back-link" href="/artworks">
                "← "
                {move || t(lang.get(), "artworks.back")}
            </a>
            {move || match artwork.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(item) => {
                    let current = lang.get();
                    let image = present(item.image_url.as_ref()).map(|url| config.media_url(url));
                    let audio = present(item.audio_url.as_ref()).map(|url| config.media_url(url));
                    let video = present(item.video_url.as_ref()).map(|url| config.media_url(url));
                    let qr = present(item.qr_code_url.as_ref()).map(|url| config.media_url(url));
                    let share = config.public_url(&format!("/artworks/{}", item.id));
                    let room_link = item
                        .room_id
                        .map(|id| (format!("/rooms/{id}"), item.room_name.clone().unwrap_or_else(|| id.to_string())));
                    let facts: Vec<(&'static str, String)> = [
                        ("artworks.category", item.category.clone()),
                        ("artworks.period", item.period.clone()),
                        ("artworks.origin", item.origin.clone()),
                        ("detail.popularity", item.popularity.map(|p| p.to_string())),
                        ("detail.views", item.view_count.map(|v| v.to_string())),
                    ]
                    .into_iter()
                    .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
                    .collect();
                    view! {
                        <article class="artwork-detail">
                            <div class="artwork-detail__media">
                                {image.map(|src| view! { <img class="artwork-detail__image" src=src alt=item.title.clone()/> })}
                                {video
                                    .map(|src| {
                                        view! {
                                            <section>
                                                <h2>{t(current, "detail.video")}</h2>
                                                <video controls=true src=src></video>
                                            </section>
                                        }
                                    })}
                            </div>
                            <div class="artwork-detail__info">
                                <h1 class="page-title">{item.title.clone()}</h1>
                                {room_link
                                    .map(|(href, name)| {
                                        view! {
                                            <p class="artwork-detail__room">
                                                {t(current, "artworks.room")} ": " <a href=href>{name}</a>
                                            </p>
                                        }
                                    })}
                                <section>
                                    <h2>{t(current, "detail.description")}</h2>
                                    <p>{item.description_in(current).to_owned()}</p>
                                </section>
                                <section class="artwork-detail__audio">
                                    <h2>{t(current, "detail.audio_guide")}</h2>
                                    {match audio {
                                        Some(src) => view! { <audio controls=true src=src></audio> }.into_any(),
                                        None => view! { <p class="muted">{t(current, "detail.no_audio")}</p> }.into_any(),
                                    }}
                                </section>
                                <section class="artwork-detail__facts">
                                    <h2>{t(current, "detail.technical_info")}</h2>
                                    <dl>
                                        {facts
                                            .into_iter()
                                            .map(|(label, value)| view! { <dt>{t(current, label)}</dt><dd>{value}</dd> })
                                            .collect_view()}
                                    </dl>
                                </section>
                                {qr
                                    .map(|src| {
                                        view! {
                                            <section class="artwork-detail__qr">
                                                <h2>{t(current, "detail.qr_code")}</h2>
                                                <img src=src alt=t(current, "detail.qr_code")/>
                                                <p class="muted">{t(current, "detail.scan_qr")}</p>
                                            </section>
                                        }
                                    })}
                                <section class="artwork-detail__share">
                                    <h2>{t(current, "detail.share")}</h2>
                                    <label>
                                        {t(current, "detail.share_link")}
                                        <input type="text" readonly=true prop:value=share/>
                                    </label>
                                </section>
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </PublicLayout>
    }
}
