//! Character browser page.
//!
//! Fetches one fixed page of characters at startup and renders the first
//! nine as cards. A failed fetch is logged and the grid simply stays empty;
//! there is no persistence and no retry.

use leptos::prelude::*;

use crate::components::character_card::CharacterCard;
use crate::state::characters::CharactersState;
#[cfg(feature = "hydrate")]
use crate::state::characters::visible_characters;

/// Character browser — a fixed grid of cards from the remote listing.
#[component]
pub fn CharactersPage() -> impl IntoView {
    let characters = expect_context::<RwSignal<CharactersState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_characters().await {
            Ok(page) => characters.update(|s| s.characters = visible_characters(page)),
            Err(err) => log::error!("character fetch failed: {err}"),
        }
    });

    view! {
        <div class="characters-page">
            <header class="characters-page__header">
                <h1>"Character Browser"</h1>
            </header>
            <div class="character-list">
                {move || {
                    characters
                        .get()
                        .characters
                        .into_iter()
                        .map(|character| view! { <CharacterCard character=character/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
