//! Gate for admin routes.
//!
//! While the session is still validating a neutral indicator is shown, so a
//! reload on an admin page never bounces through the login screen. Once
//! resolved, non-admins are sent to login with the current path remembered.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = Memo::new(move |_| guard_decision(&auth.get(), &location.pathname.get()));

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="route-guard__loading" aria-busy="true">
                "Vérification de la session..."
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(path) => {
            log::debug!("admin route blocked, redirecting to {path}");
            view! { <Redirect path=path options=NavigateOptions { replace: true, ..NavigateOptions::default() }/> }
                .into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}
