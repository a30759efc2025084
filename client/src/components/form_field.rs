//! Labelled inputs for the admin edit forms.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                class="form-field__input"
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form-field__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">
                {label}
                {required.then_some(" *")}
            </span>
            {input}
        </label>
    }
}

#[component]
pub fn CheckboxField(#[prop(into)] label: String, #[prop(into)] checked: Signal<bool>, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <label class="form-field form-field--checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="form-field__label">{label}</span>
        </label>
    }
}
