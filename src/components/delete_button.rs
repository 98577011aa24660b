//! Delete control for favorite cards.

use leptos::prelude::*;

use crate::util::dialog;

/// A button that asks for confirmation and only then invokes the removal
/// callback. Declining the prompt has no side effect at all.
#[component]
pub fn DeleteButton(on_delete: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="book-card__delete"
            on:click=move |_| {
                if dialog::confirm("Are you sure you want to delete this book?") {
                    on_delete.run(());
                }
            }
        >
            "🗑️ Delete"
        </button>
    }
}
