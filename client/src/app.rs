//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::admin_layout::AdminShell;
use crate::config::{API_BASE_URL_META, ClientConfig, FRONTEND_URL_META};
use crate::net::http::BrowserClient;
use crate::net::types::Language;
use crate::pages::{
    about::{AboutPage, NotFoundPage},
    admin_artworks::AdminArtworksPage,
    admin_dashboard::AdminDashboardPage,
    admin_login::AdminLoginPage,
    admin_rooms::AdminRoomsPage,
    artwork_detail::ArtworkDetailPage,
    artworks::ArtworksPage,
    home::HomePage,
    room_detail::RoomDetailPage,
    rooms::RoomsPage,
    search::SearchPage,
};
use crate::state::auth::AuthState;
use crate::state::session::{AppSession, BrowserTokenStore};
use crate::util::auth::DEFAULT_ADMIN_PATH;
use crate::util::i18n::{read_preference, store_preference};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is echoed into meta tags so the browser build picks up the same
/// API base URL the server was started with.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let frontend_url = config.frontend_url().map(str::to_owned);
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_URL_META content=config.api_base_url().to_owned()/>
                {frontend_url.map(|url| view! { <meta name=FRONTEND_URL_META content=url/> })}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth, language, config and the session through context, then
/// starts validating any persisted token.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    let auth = RwSignal::new(AuthState::initializing());
    let lang = RwSignal::new(Language::default());

    let session = AppSession::new(BrowserClient::new(config.api_base_url()), BrowserTokenStore::default());
    session.subscribe(move |state| auth.set(state.clone()));

    provide_context(auth);
    provide_context(lang);
    provide_context(config);
    provide_context(StoredValue::new_local(session.clone()));

    // SSR always renders French; the stored preference is applied after hydration.
    Effect::new(move || {
        let preferred = read_preference();
        if preferred != lang.get_untracked() {
            lang.set(preferred);
            store_preference(preferred);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            session.initialize().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/museum.css"/>
        <Title text="Musée Virtuel"/>
        <Meta name="description" content="Musée virtuel d'art et de culture africaine"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("rooms") view=RoomsPage/>
                <Route path=(StaticSegment("rooms"), ParamSegment("id")) view=RoomDetailPage/>
                <Route path=StaticSegment("artworks") view=ArtworksPage/>
                <Route path=(StaticSegment("artworks"), ParamSegment("id")) view=ArtworkDetailPage/>
                <Route path=StaticSegment("search") view=SearchPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminShell>
                    <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                    <Route path=StaticSegment("rooms") view=AdminRoomsPage/>
                    <Route path=StaticSegment("artworks") view=AdminArtworksPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_ADMIN_PATH/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
