//! Frame shared by every public page.

use leptos::prelude::*;

use super::header::Header;
use crate::net::types::Language;
use crate::util::auth::LOGIN_PATH;
use crate::util::i18n::t;

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="public-layout">
            <Header/>
            <main class="public-layout__main">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();

    view! {
        <footer class="site-footer">
            <p>{move || t(lang.get(), "museum.name")} " · " {move || t(lang.get(), "footer.tagline")}</p>
            <a class="site-footer__admin" href=LOGIN_PATH>
                {move || t(lang.get(), "footer.admin")}
            </a>
        </footer>
    }
}
