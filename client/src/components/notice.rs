//! Transient success/error banner for admin actions.

use leptos::prelude::*;

/// How long a notice stays on screen.
#[cfg(feature = "hydrate")]
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "notice notice--success",
            Self::Error(_) => "notice notice--error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Show `notice`, clearing it after a few seconds unless replaced meanwhile.
pub fn flash(slot: RwSignal<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice.clone()));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
            if slot.get_untracked().as_ref() == Some(&notice) {
                slot.set(None);
            }
        });
    }
}

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|current| {
            view! {
                <div class=current.class() role="status" on:click=move |_| notice.set(None)>
                    {current.text().to_owned()}
                </div>
            }
        })
    }
}
