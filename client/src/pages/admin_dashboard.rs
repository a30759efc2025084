//! Back-office overview: totals, media coverage and grouped counts.

use leptos::prelude::*;

use crate::components::load_error::LoadError;
use crate::net::admin::share_of_total;
use crate::net::types::{AdminStats, LabelCount};
use crate::state::remote::Remote;
use crate::state::session::SessionHandle;

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

/// Horizontal bar list for one grouping.
#[component]
fn Breakdown(title: &'static str, rows: Vec<LabelCount>, total: u64) -> impl IntoView {
    view! {
        <section class="breakdown">
            <h3>{title}</h3>
            {if rows.is_empty() {
                view! { <p class="muted">"Aucune donnée"</p> }.into_any()
            } else {
                rows.into_iter()
                    .map(|row| {
                        let share = share_of_total(row.count, total);
                        view! {
                            <div class="breakdown__row">
                                <span class="breakdown__label">{row.label}</span>
                                <span class="breakdown__bar" style=format!("width: {share:.1}%")></span>
                                <span class="breakdown__count">{row.count} " (" {format!("{share:.0}")} "%)"</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let session = expect_context::<SessionHandle>();
    let stats = RwSignal::new(Remote::<AdminStats>::Loading);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let load = Callback::new(move |()| {
        stats.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::admin::fetch_stats(&session).await;
                stats.set(Remote::from_result(result, |e| {
                    crate::util::i18n::describe_error(crate::net::types::Language::Fr, e)
                }));
            });
        }
    });

    Effect::new(move || load.run(()));

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Tableau de bord"</h1>
                <button class="btn" on:click=move |_| load.run(())>
                    "Actualiser"
                </button>
            </header>
            {move || match stats.get() {
                Remote::Loading => view! { <p class="loading">"Chargement des statistiques..."</p> }.into_any(),
                Remote::Failed(message) => view! { <LoadError message=message on_retry=load/> }.into_any(),
                Remote::Ready(AdminStats { overview, artworks, rooms }) => {
                    let total_artworks = overview.total_artworks;
                    let total_rooms = overview.total_rooms;
                    view! {
                        <div class="stat-grid">
                            <StatCard label="Salles" value=total_rooms.to_string()/>
                            <StatCard label="Œuvres" value=total_artworks.to_string()/>
                            <StatCard label="Salles avec audio" value=overview.audio_rooms.to_string()/>
                            <StatCard label="Salles interactives" value=overview.interactive_rooms.to_string()/>
                            <StatCard label="Œuvres ajoutées (30 j)" value=overview.recent_artworks.to_string()/>
                            <StatCard label="Salles ajoutées (30 j)" value=overview.recent_rooms.to_string()/>
                            <StatCard label="Popularité moyenne" value=format!("{:.1}", overview.avg_popularity)/>
                        </div>
                        <section class="media-coverage">
                            <h2>"Médias des œuvres"</h2>
                            <ul>
                                <li>
                                    "Avec image : " {artworks.with_image} " ("
                                    {format!("{:.0}", share_of_total(artworks.with_image, total_artworks))} "%)"
                                </li>
                                <li>
                                    "Avec audio : " {artworks.with_audio} " ("
                                    {format!("{:.0}", share_of_total(artworks.with_audio, total_artworks))} "%)"
                                </li>
                                <li>
                                    "Avec vidéo : " {artworks.with_video} " ("
                                    {format!("{:.0}", share_of_total(artworks.with_video, total_artworks))} "%)"
                                </li>
                            </ul>
                        </section>
                        <div class="breakdown-grid">
                            <Breakdown title="Par catégorie" rows=artworks.by_category total=total_artworks/>
                            <Breakdown title="Par période" rows=artworks.by_period total=total_artworks/>
                            <Breakdown title="Par origine" rows=artworks.by_origin total=total_artworks/>
                            <Breakdown title="Salles par thème" rows=rooms.by_theme total=total_rooms/>
                        </div>
                        <section class="top-popular">
                            <h2>"Œuvres les plus populaires"</h2>
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Titre"</th>
                                        <th>"Salle"</th>
                                        <th>"Popularité"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {artworks
                                        .top_popular
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <tr>
                                                    <td>{item.title}</td>
                                                    <td>{item.room_name.unwrap_or_default()}</td>
                                                    <td>{item.popularity}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
