//! Inline failure message with a retry button, shown when a page load fails.

use leptos::prelude::*;

use crate::net::types::Language;
use crate::util::i18n::t;

#[component]
pub fn LoadError(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <div class="load-error" role="alert">
            <p class="load-error__title">{move || t(lang.get(), "common.error")}</p>
            <p class="load-error__message">{message}</p>
            <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                {move || t(lang.get(), "common.retry")}
            </button>
        </div>
    }
}

/// Neutral placeholder while data is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! { <div class="loading" aria-busy="true">{move || t(lang.get(), "common.loading")}</div> }
}
