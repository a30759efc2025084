//! Artwork management: list with room filter, create/edit form with media
//! uploads, and delete confirmation.

#[cfg(test)]
#[path = "admin_artworks_test.rs"]
mod admin_artworks_test;

use leptos::prelude::*;

use super::admin_rooms::EditTarget;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::file_field::FileField;
use crate::components::filter_select::{FilterSelect, options_with_all};
use crate::components::form_field::TextField;
use crate::components::load_error::LoadError;
use crate::components::notice::{Notice, NoticeBanner, flash};
use crate::config::ClientConfig;
use crate::net::admin::{ArtworkForm, CATEGORIES, ORIGINS, PERIODS};
use crate::net::http::FileUpload;
use crate::net::types::{Artwork, Language, Room};
use crate::state::listing::{self, Criteria, FilterKey, SortKey};
use crate::state::remote::Remote;
use crate::state::session::SessionHandle;

#[derive(Clone, Debug, Default, PartialEq)]
struct Inventory {
    artworks: Vec<Artwork>,
    rooms: Vec<Room>,
}

/// `(id, name)` choices for the room select, in room id order.
fn room_choices(rooms: &[Room], placeholder: &str) -> Vec<(String, String)> {
    let mut sorted: Vec<&Room> = rooms.iter().collect();
    sorted.sort_by_key(|room| room.id);
    std::iter::once((String::new(), placeholder.to_owned()))
        .chain(sorted.into_iter().map(|room| (room.id.to_string(), room.name_in(Language::Fr).to_owned())))
        .collect()
}

/// Media already stored for the artwork being edited.
#[derive(Clone, Debug, Default, PartialEq)]
struct StoredMedia {
    image: Option<String>,
    audio: Option<String>,
    video: Option<String>,
}

impl StoredMedia {
    fn of(artwork: &Artwork) -> Self {
        Self {
            image: artwork.image_url.clone(),
            audio: artwork.audio_url.clone(),
            video: artwork.video_url.clone(),
        }
    }
}

#[component]
pub fn AdminArtworksPage() -> impl IntoView {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let inventory = RwSignal::new(Remote::<Inventory>::Loading);
    let criteria = RwSignal::new(Criteria::with_sort(SortKey::Id));
    let notice = RwSignal::new(None::<Notice>);

    let editing = RwSignal::new(None::<EditTarget>);
    let form = RwSignal::new_local(ArtworkForm::default());
    let stored_media = RwSignal::new(StoredMedia::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<(i64, String)>);
    let deleting = RwSignal::new(false);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        inventory.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let (artworks, rooms) = futures::join!(
                    crate::net::admin::list_artworks(&session),
                    crate::net::admin::list_rooms(&session),
                );
                let result = artworks.and_then(|artworks| rooms.map(|rooms| Inventory { artworks, rooms }));
                inventory.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(Language::Fr, e)));
            });
        }
    });
    Effect::new(move || load.run(()));

    let visible = Memo::new(move |_| {
        inventory.with(|inv| {
            inv.ready()
                .map(|loaded| criteria.with(|c| listing::apply(&loaded.artworks, c, Language::Fr)))
                .unwrap_or_default()
        })
    });
    let rooms = Memo::new(move |_| inventory.with(|inv| inv.ready().map(|loaded| loaded.rooms.clone()).unwrap_or_default()));

    let open_create = move |_| {
        let mut draft = ArtworkForm::default();
        if let Ok(room) = criteria.with_untracked(|c| c.get(FilterKey::Room).parse::<i64>()) {
            draft.room_id = room.to_string();
        }
        form.set(draft);
        stored_media.set(StoredMedia::default());
        form_error.set(None);
        editing.set(Some(EditTarget::Create));
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let open_edit = move |artwork_id: i64| {
        form_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::admin::get_artwork(&session, artwork_id).await {
                    Ok(artwork) => {
                        form.set(ArtworkForm::from_artwork(&artwork));
                        stored_media.set(StoredMedia::of(&artwork));
                        editing.set(Some(EditTarget::Edit(artwork_id)));
                    }
                    Err(e) if e.is_auth() => {}
                    Err(e) => flash(notice, Notice::Error(crate::util::i18n::describe_error(Language::Fr, &e))),
                }
            });
        }
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let draft = form.get_untracked();
        if let Err(e) = draft.validate() {
            form_error.set(Some(e.to_string()));
            return;
        }
        form_error.set(None);
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = match target {
                    EditTarget::Create => crate::net::admin::create_artwork(&session, &draft).await,
                    EditTarget::Edit(id) => crate::net::admin::update_artwork(&session, id, &draft).await,
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        let message = match target {
                            EditTarget::Create => "Œuvre créée avec succès",
                            EditTarget::Edit(_) => "Œuvre mise à jour avec succès",
                        };
                        flash(notice, Notice::Success(message.to_owned()));
                        editing.set(None);
                        load.run(());
                    }
                    Err(e) if e.is_auth() => {}
                    Err(e) => form_error.set(Some(crate::util::i18n::describe_error(Language::Fr, &e))),
                }
            });
        }
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let confirm_delete = Callback::new(move |()| {
        let Some((artwork_id, _)) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::admin::delete_artwork(&session, artwork_id).await;
                deleting.set(false);
                pending_delete.set(None);
                match result {
                    Ok(()) => {
                        flash(notice, Notice::Success("Œuvre supprimée".to_owned()));
                        load.run(());
                    }
                    Err(e) if e.is_auth() => {}
                    Err(e) => flash(notice, Notice::Error(crate::util::i18n::describe_error(Language::Fr, &e))),
                }
            });
        }
    });

    let text = move |label: &'static str,
                     get: fn(&ArtworkForm) -> &String,
                     set: fn(&mut ArtworkForm, String),
                     multiline: bool,
                     required: bool| {
        view! {
            <TextField
                label=label
                value=Signal::derive(move || form.with(|f| get(f).clone()))
                on_input=Callback::new(move |value: String| form.update(|f| set(f, value)))
                multiline=multiline
                required=required
            />
        }
    };
    let choice = move |label: &'static str,
                       choices: &'static [&'static str],
                       get: fn(&ArtworkForm) -> &String,
                       set: fn(&mut ArtworkForm, String)| {
        view! {
            <FilterSelect
                label=Signal::derive(move || format!("{label} *"))
                value=Signal::derive(move || form.with(|f| get(f).clone()))
                options=Signal::derive(move || options_with_all("Sélectionner", choices.iter().map(|c| (*c).to_owned())))
                on_change=Callback::new(move |value: String| form.update(|f| set(f, value)))
            />
        }
    };
    let media = move |label: &'static str,
                      accept: &'static str,
                      stored: fn(&StoredMedia) -> Option<String>,
                      set: fn(&mut ArtworkForm, Option<FileUpload>)| {
        let config = config.clone();
        move || {
            view! {
                <FileField
                    label=label
                    accept=accept
                    current=stored_media.with(stored).map(|url| config.media_url(&url))
                    on_pick=Callback::new(move |file: Option<FileUpload>| form.update(|f| set(f, file)))
                />
            }
        }
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Gestion des œuvres"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "Nouvelle œuvre"
                </button>
            </header>
            <NoticeBanner notice=notice/>
            <div class="filter-bar">
                <input
                    class="admin-page__search"
                    type="search"
                    placeholder="Rechercher une œuvre..."
                    prop:value=move || criteria.with(|c| c.search.clone())
                    on:input=move |ev| criteria.update(|c| c.search = event_target_value(&ev))
                />
                <FilterSelect
                    label=Signal::derive(|| "Salle".to_owned())
                    value=Signal::derive(move || criteria.with(|c| c.get(FilterKey::Room).to_owned()))
                    options=Signal::derive(move || rooms.with(|list| room_choices(list, "Toutes les salles")))
                    on_change=Callback::new(move |value: String| criteria.update(|c| c.set(FilterKey::Room, value)))
                />
            </div>
            <Show when=move || editing.get().is_some()>
                <form class="admin-form" on:submit=on_save>
                    <h2>
                        {move || match editing.get() {
                            Some(EditTarget::Edit(_)) => "Modifier l'œuvre",
                            _ => "Nouvelle œuvre",
                        }}
                    </h2>
                    <FilterSelect
                        label=Signal::derive(|| "Salle *".to_owned())
                        value=Signal::derive(move || form.with(|f| f.room_id.clone()))
                        options=Signal::derive(move || rooms.with(|list| room_choices(list, "Sélectionner une salle")))
                        on_change=Callback::new(move |value: String| form.update(|f| f.room_id = value))
                    />
                    {text("Titre", |f| &f.title, |f, v| f.title = v, false, true)}
                    {text("Description (français)", |f| &f.description_fr, |f, v| f.description_fr = v, true, false)}
                    {text("Description (anglais)", |f| &f.description_en, |f, v| f.description_en = v, true, false)}
                    {text("Description (wolof)", |f| &f.description_wo, |f, v| f.description_wo = v, true, false)}
                    {choice("Catégorie", &CATEGORIES, |f| &f.category, |f, v| f.category = v)}
                    {choice("Période", &PERIODS, |f| &f.period, |f, v| f.period = v)}
                    {choice("Origine", &ORIGINS, |f| &f.origin, |f, v| f.origin = v)}
                    {text("Popularité", |f| &f.popularity, |f, v| f.popularity = v, false, false)}
                    {media("Image", "image/*", |m| m.image.clone(), |f, file| f.image_file = file)}
                    {media("Guide audio", "audio/*", |m| m.audio.clone(), |f, file| f.audio_file = file)}
                    {media("Vidéo", "video/*", |m| m.video.clone(), |f, file| f.video_file = file)}
                    {move || form_error.get().map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| editing.set(None)>
                            "Annuler"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                        </button>
                    </div>
                </form>
            </Show>
            {move || match inventory.get() {
                Remote::Loading => view! { <p class="loading">"Chargement des œuvres..."</p> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(_) => {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Titre"</th>
                                    <th>"Salle"</th>
                                    <th>"Catégorie"</th>
                                    <th>"Période"</th>
                                    <th>"Origine"</th>
                                    <th>"Popularité"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible
                                    .get()
                                    .into_iter()
                                    .map(|artwork| {
                                        let id = artwork.id;
                                        let title = artwork.title.clone();
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{artwork.title}</td>
                                                <td>{artwork.room_name.unwrap_or_default()}</td>
                                                <td>{artwork.category.unwrap_or_default()}</td>
                                                <td>{artwork.period.unwrap_or_default()}</td>
                                                <td>{artwork.origin.unwrap_or_default()}</td>
                                                <td>{artwork.popularity.unwrap_or(0)}</td>
                                                <td class="admin-table__actions">
                                                    <button class="btn" on:click=move |_| open_edit(id)>
                                                        "Modifier"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| pending_delete.set(Some((id, title.clone())))
                                                    >
                                                        "Supprimer"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            {move || {
                pending_delete
                    .get()
                    .map(|(_, title)| {
                        view! {
                            <ConfirmDialog
                                message=format!("Supprimer l'œuvre « {title} » ? Cette action est irréversible.")
                                busy=deleting
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                                on_confirm=confirm_delete
                            />
                        }
                    })
            }}
        </div>
    }
}
