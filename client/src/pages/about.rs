use leptos::prelude::*;

use crate::components::layout::PublicLayout;
use crate::components::museum_map::MuseumMap;
use crate::net::types::Language;
use crate::util::i18n::t;

#[component]
pub fn AboutPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <PublicLayout>
            <article class="about">
                <h1 class="page-title">{move || t(lang.get(), "about.title")}</h1>
                <p>{move || t(lang.get(), "about.body")}</p>
                <h2>{move || t(lang.get(), "about.languages")}</h2>
                <ul class="about__languages">
                    {Language::ALL
                        .into_iter()
                        .map(|option| view! { <li>{option.native_name()} " (" {option.code()} ")"</li> })
                        .collect_view()}
                </ul>
                <MuseumMap/>
            </article>
        </PublicLayout>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <PublicLayout>
            <div class="not-found">
                <h1 class="page-title">"404"</h1>
                <p>{move || t(lang.get(), "common.not_found")}</p>
                <a class="btn btn--primary" href="/">
                    {move || t(lang.get(), "nav.home")}
                </a>
            </div>
        </PublicLayout>
    }
}
