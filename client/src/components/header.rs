//! Public site header: navigation, search box and language switch.

use leptos::prelude::*;
use leptos_router::components::{A, Form};

use crate::net::types::Language;
use crate::util::i18n::{store_preference, t};

#[component]
pub fn Header() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                {move || t(lang.get(), "museum.name")}
            </A>
            <nav class="site-header__nav">
                <A href="/">{move || t(lang.get(), "nav.home")}</A>
                <A href="/rooms">{move || t(lang.get(), "nav.rooms")}</A>
                <A href="/artworks">{move || t(lang.get(), "nav.artworks")}</A>
                <A href="/about">{move || t(lang.get(), "nav.about")}</A>
            </nav>
            <Form action="/search" method="get">
                <input
                    class="site-header__search"
                    type="search"
                    name="q"
                    placeholder=move || t(lang.get(), "nav.search_placeholder")
                    aria-label=move || t(lang.get(), "nav.search")
                />
            </Form>
            <div class="site-header__languages" role="group" aria-label=move || t(lang.get(), "nav.language")>
                {Language::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="lang-btn"
                                class=("lang-btn--active", move || lang.get() == option)
                                title=option.native_name()
                                on:click=move |_| {
                                    lang.set(option);
                                    store_preference(option);
                                }
                            >
                                {option.code().to_uppercase()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
