//! Back-office chrome around the nested admin routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use super::protected_route::ProtectedRoute;
use crate::state::auth::AuthState;
use crate::state::session::SessionHandle;
use crate::util::auth::LOGIN_PATH;

/// Route view for `/admin/*`: the guard wrapping the admin layout.
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <AdminLayout/>
        </ProtectedRoute>
    }
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                session.logout().await;
                navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <h2 class="admin-layout__title">"Administration"</h2>
                <nav class="admin-layout__nav">
                    <A href="/admin/dashboard">"Tableau de bord"</A>
                    <A href="/admin/rooms">"Salles"</A>
                    <A href="/admin/artworks">"Œuvres"</A>
                    <A href="/">"Voir le site"</A>
                </nav>
                <div class="admin-layout__user">
                    <span>{move || auth.get().username().unwrap_or_default().to_owned()}</span>
                    <button class="btn" on:click=on_logout>
                        "Déconnexion"
                    </button>
                </div>
            </aside>
            <section class="admin-layout__content">
                <Outlet/>
            </section>
        </div>
    }
}
