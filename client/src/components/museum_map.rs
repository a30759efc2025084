//! Floor plan of the exhibition rooms. Picking a room shows its summary and
//! a link to its detail page.

#[cfg(test)]
#[path = "museum_map_test.rs"]
mod museum_map_test;

use leptos::prelude::*;

use crate::net::types::Language;
use crate::util::i18n::t;

/// One room drawn on the plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MapRoom {
    pub room_id: i64,
    pub name_key: &'static str,
    pub description_key: &'static str,
}

impl MapRoom {
    pub(crate) fn href(self) -> String {
        format!("/rooms/{}", self.room_id)
    }
}

pub(crate) const MAP_ROOMS: [MapRoom; 3] = [
    MapRoom { room_id: 1, name_key: "map.masks", description_key: "map.masks_description" },
    MapRoom { room_id: 2, name_key: "map.sculptures", description_key: "map.sculptures_description" },
    MapRoom { room_id: 3, name_key: "map.gallery", description_key: "map.gallery_description" },
];

pub(crate) fn map_room(room_id: i64) -> Option<MapRoom> {
    MAP_ROOMS.into_iter().find(|room| room.room_id == room_id)
}

#[component]
pub fn MuseumMap() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let active = RwSignal::new(None::<i64>);

    view! {
        <div class="museum-map-container">
            <h2 class="map-title">{move || t(lang.get(), "map.title")}</h2>
            <p class="map-instruction">{move || t(lang.get(), "map.instructions")}</p>
            <div class="museum-map">
                {MAP_ROOMS
                    .into_iter()
                    .map(|room| {
                        view! {
                            <button
                                class=format!("map-room room{}", room.room_id)
                                title=move || t(lang.get(), room.name_key)
                                data-active=move || (active.get() == Some(room.room_id)).to_string()
                                on:click=move |_| active.set(Some(room.room_id))
                            >
                                <span>{room.room_id}</span>
                            </button>
                        }
                    })
                    .collect_view()}
                <div class="map-corridor horizontal-corridor-1"></div>
                <div class="map-corridor vertical-corridor-1"></div>
                <div class="map-entrance">
                    <span>{move || t(lang.get(), "map.entrance")}</span>
                </div>
            </div>
            {move || {
                active
                    .get()
                    .and_then(map_room)
                    .map(|room| {
                        view! {
                            <div class="room-info">
                                <h3>{move || t(lang.get(), room.name_key)}</h3>
                                <p>{move || t(lang.get(), room.description_key)}</p>
                                <a class="visit-room-btn" href=room.href()>
                                    {move || t(lang.get(), "map.visit")}
                                </a>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
