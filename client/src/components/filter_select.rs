//! Labelled `<select>` used by the listing filter bars and admin forms.

use leptos::prelude::*;

/// `options` are `(value, label)` pairs; the first entry is usually the
/// empty "all" choice.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{move || label.get()}</span>
            <select class="filter-select__input" on:change=move |ev| on_change.run(event_target_value(&ev))>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = option_value == current;
                            view! {
                                <option value=option_value selected=selected>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Prepend the empty "all" choice to `values`, using each value as its label.
pub fn options_with_all(all_label: &str, values: impl IntoIterator<Item = String>) -> Vec<(String, String)> {
    std::iter::once((String::new(), all_label.to_owned()))
        .chain(values.into_iter().map(|value| (value.clone(), value)))
        .collect()
}
