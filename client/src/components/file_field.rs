//! File input for admin media uploads.

#[cfg(test)]
#[path = "file_field_test.rs"]
mod file_field_test;

use leptos::prelude::*;

use crate::net::http::FileUpload;

/// Link target for the file already stored on the item. Blank URLs count as
/// no file.
pub(crate) fn stored_file_link(current: Option<String>) -> Option<String> {
    current.filter(|url| !url.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn picked_file(ev: &leptos::ev::Event) -> Option<FileUpload> {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .map(FileUpload::from_file)
}

#[cfg(not(feature = "hydrate"))]
fn picked_file(_ev: &leptos::ev::Event) -> Option<FileUpload> {
    None
}

/// Reports the picked file (or `None` when the selection is cleared).
/// `current` is the URL already stored for the item, if any.
#[component]
pub fn FileField(
    #[prop(into)] label: String,
    accept: &'static str,
    #[prop(default = None)] current: Option<String>,
    on_pick: Callback<Option<FileUpload>>,
) -> impl IntoView {
    let picked = RwSignal::new(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        let upload = picked_file(&ev);
        picked.set(upload.as_ref().map(|file| file.name().to_owned()));
        on_pick.run(upload);
    };

    view! {
        <label class="file-field">
            <span class="file-field__label">{label}</span>
            <input type="file" accept=accept on:change=on_change/>
            {move || {
                picked
                    .get()
                    .map(|name| view! { <span class="file-field__picked">{name}</span> })
            }}
            {stored_file_link(current)
                .map(|url| {
                    view! {
                        <a class="file-field__current" href=url target="_blank" rel="noopener">
                            "Fichier actuel"
                        </a>
                    }
                })}
        </label>
    }
}
