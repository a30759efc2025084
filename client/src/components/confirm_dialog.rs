//! Modal confirmation for destructive admin actions.

use leptos::prelude::*;

/// Backdrop click and "Annuler" both cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    #[prop(into, default = "Supprimer".to_owned())] confirm_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--confirm" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
