//! Back-office sign-in.
//!
//! After a successful login the page leaves for the `?from=` target (when it
//! is a safe admin path) or the dashboard. Visiting it with a live admin
//! session redirects immediately.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::error::ApiError;
use crate::net::types::Language;
use crate::state::auth::AuthState;
use crate::state::session::SessionHandle;
use crate::util::auth::install_login_redirect;
use crate::util::i18n::describe_error;

const MISSING_CREDENTIALS: &str = "Veuillez saisir votre identifiant et votre mot de passe.";
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const ADMIN_ONLY: &str = "Accès réservé aux administrateurs.";

/// Trim the username and require both fields.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Message shown under the form for a failed login.
pub(crate) fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Validation { message, .. } | ApiError::Network(message) => message.clone(),
        other => describe_error(Language::Fr, other),
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let session = expect_context::<SessionHandle>();
    let query = use_query_map();
    let from = Signal::derive(move || query.with(|q| q.get("from")));
    install_login_redirect(auth, from, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, secret) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                match session.login(&name, &secret).await {
                    Ok(user) if !user.is_admin() => {
                        session.logout().await;
                        info.set(ADMIN_ONLY.to_owned());
                    }
                    Ok(_) => password.set(String::new()),
                    Err(e) => info.set(login_error_message(&e)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Musée Virtuel"</h1>
                <p class="login-card__subtitle">"Administration"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Identifiant"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Mot de passe"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
                <a class="login-card__back" href="/">"← Retour au musée"</a>
            </div>
        </div>
    }
}
