//! Room management: list, search, create/edit form and delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! All calls go through the session's authenticated wrapper. When one comes
//! back as an auth failure the session ends and the route guard takes over,
//! so the handlers here ignore `ApiError::is_auth` failures.

#[cfg(test)]
#[path = "admin_rooms_test.rs"]
mod admin_rooms_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::file_field::FileField;
use crate::components::filter_select::{FilterSelect, options_with_all};
use crate::components::form_field::{CheckboxField, TextField};
use crate::components::load_error::LoadError;
use crate::components::notice::{Notice, NoticeBanner, flash};
use crate::config::ClientConfig;
use crate::net::admin::{ACCESSIBILITY_LEVELS, RoomForm, THEMES};
use crate::net::http::FileUpload;
use crate::net::types::{Language, Room};
use crate::state::listing::{self, Criteria, SortKey};
use crate::state::remote::Remote;
use crate::state::session::SessionHandle;

/// Which record the edit panel is working on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Create,
    Edit(i64),
}

/// Back-office table order: by id, narrowed by the search box.
pub(crate) fn table_criteria(search: String) -> Criteria {
    let mut criteria = Criteria::with_sort(SortKey::Id);
    criteria.search = search;
    criteria
}

fn yes_no(value: bool) -> &'static str {
    if value { "Oui" } else { "Non" }
}

#[component]
pub fn AdminRoomsPage() -> impl IntoView {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<ClientConfig>();
    let rooms = RwSignal::new(Remote::<Vec<Room>>::Loading);
    let search = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    let editing = RwSignal::new(None::<EditTarget>);
    let form = RwSignal::new_local(RoomForm::default());
    let current_panorama = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<(i64, String)>);
    let deleting = RwSignal::new(false);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        rooms.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::admin::list_rooms(&session).await;
                rooms.set(Remote::from_result(result, |e| crate::util::i18n::describe_error(Language::Fr, e)));
            });
        }
    });
    Effect::new(move || load.run(()));

    let visible = Memo::new(move |_| {
        let criteria = table_criteria(search.get());
        rooms.with(|r| r.ready().map(|list| listing::apply(list, &criteria, Language::Fr)).unwrap_or_default())
    });

    let open_create = move |_| {
        form.set(RoomForm::default());
        current_panorama.set(None);
        form_error.set(None);
        editing.set(Some(EditTarget::Create));
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let open_edit = move |room_id: i64| {
        form_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::admin::get_room(&session, room_id).await {
                    Ok(room) => {
                        form.set(RoomForm::from_room(&room));
                        current_panorama.set(room.panorama_url.clone());
                        editing.set(Some(EditTarget::Edit(room_id)));
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
                    EditTarget::Create => crate::net::admin::create_room(&session, &draft).await,
                    EditTarget::Edit(id) => crate::net::admin::update_room(&session, id, &draft).await,
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        let message = match target {
                            EditTarget::Create => "Salle créée avec succès",
                            EditTarget::Edit(_) => "Salle mise à jour avec succès",
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
        let Some((room_id, _)) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::admin::delete_room(&session, room_id).await;
                deleting.set(false);
                pending_delete.set(None);
                match result {
                    Ok(()) => {
                        flash(notice, Notice::Success("Salle supprimée".to_owned()));
                        load.run(());
                    }
                    Err(e) if e.is_auth() => {}
                    Err(e) => flash(notice, Notice::Error(crate::util::i18n::describe_error(Language::Fr, &e))),
                }
            });
        }
    });

    let text = move |label: &'static str, get: fn(&RoomForm) -> &String, set: fn(&mut RoomForm, String), multiline: bool, required: bool| {
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

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Gestion des salles"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "Nouvelle salle"
                </button>
            </header>
            <NoticeBanner notice=notice/>
            <input
                class="admin-page__search"
                type="search"
                placeholder="Rechercher une salle..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || editing.get().is_some()>
                <form class="admin-form" on:submit=on_save>
                    <h2>
                        {move || match editing.get() {
                            Some(EditTarget::Edit(_)) => "Modifier la salle",
                            _ => "Nouvelle salle",
                        }}
                    </h2>
                    {text("Nom (français)", |f| &f.name_fr, |f, v| f.name_fr = v, false, true)}
                    {text("Nom (anglais)", |f| &f.name_en, |f, v| f.name_en = v, false, false)}
                    {text("Nom (wolof)", |f| &f.name_wo, |f, v| f.name_wo = v, false, false)}
                    {text("Description (français)", |f| &f.description_fr, |f, v| f.description_fr = v, true, true)}
                    {text("Description (anglais)", |f| &f.description_en, |f, v| f.description_en = v, true, false)}
                    {text("Description (wolof)", |f| &f.description_wo, |f, v| f.description_wo = v, true, false)}
                    <FilterSelect
                        label=Signal::derive(|| "Thème *".to_owned())
                        value=Signal::derive(move || form.with(|f| f.theme.clone()))
                        options=Signal::derive(|| {
                            options_with_all("Sélectionner un thème", THEMES.iter().map(|theme| (*theme).to_owned()))
                        })
                        on_change=Callback::new(move |value: String| form.update(|f| f.theme = value))
                    />
                    <FilterSelect
                        label=Signal::derive(|| "Accessibilité *".to_owned())
                        value=Signal::derive(move || form.with(|f| f.accessibility_level.clone()))
                        options=Signal::derive(|| {
                            options_with_all(
                                "Sélectionner un niveau",
                                ACCESSIBILITY_LEVELS.iter().map(|level| (*level).to_owned()),
                            )
                        })
                        on_change=Callback::new(move |value: String| form.update(|f| f.accessibility_level = value))
                    />
                    {text("Points d'intérêt (JSON)", |f| &f.hotspots, |f, v| f.hotspots = v, true, false)}
                    <CheckboxField
                        label="Guide audio disponible"
                        checked=Signal::derive(move || form.with(|f| f.has_audio))
                        on_toggle=Callback::new(move |value: bool| form.update(|f| f.has_audio = value))
                    />
                    <CheckboxField
                        label="Panorama interactif"
                        checked=Signal::derive(move || form.with(|f| f.has_interactive))
                        on_toggle=Callback::new(move |value: bool| form.update(|f| f.has_interactive = value))
                    />
                    {
                        let config = config.clone();
                        move || {
                            view! {
                                <FileField
                                    label="Image panoramique"
                                    accept="image/*"
                                    current=current_panorama.get().map(|url| config.media_url(&url))
                                    on_pick=Callback::new(move |file: Option<FileUpload>| form.update(|f| f.panorama_file = file))
                                />
                            }
                        }
                    }
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
            {move || match rooms.get() {
                Remote::Loading => view! { <p class="loading">"Chargement des salles..."</p> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(_) => {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Nom"</th>
                                    <th>"Thème"</th>
                                    <th>"Accessibilité"</th>
                                    <th>"Audio"</th>
                                    <th>"Interactif"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible
                                    .get()
                                    .into_iter()
                                    .map(|room| {
                                        let id = room.id;
                                        let name = room.name_in(Language::Fr).to_owned();
                                        let delete_name = name.clone();
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{name}</td>
                                                <td>{room.theme.clone().unwrap_or_default()}</td>
                                                <td>{room.accessibility_level.clone().unwrap_or_default()}</td>
                                                <td>{yes_no(room.has_audio)}</td>
                                                <td>{yes_no(room.has_interactive)}</td>
                                                <td class="admin-table__actions">
                                                    <button class="btn" on:click=move |_| open_edit(id)>
                                                        "Modifier"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| pending_delete.set(Some((id, delete_name.clone())))
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
                    .map(|(_, name)| {
                        view! {
                            <ConfirmDialog
                                message=format!("Supprimer la salle « {name} » ? Cette action est irréversible.")
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
