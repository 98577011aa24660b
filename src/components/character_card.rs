//! Card renderer for the character browser.

use leptos::prelude::*;

use crate::state::characters::Character;

/// One character card. Renders whatever the source provided; missing fields
/// are simply omitted.
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let image = character.image.clone().map(|src| {
        view! { <img class="character-card__image" src=src alt=character.name.clone()/> }
    });
    let status = character.status.clone().map(|status| {
        view! { <p class="character-card__status">{status}</p> }
    });
    let species = character.species.clone().map(|species| {
        view! { <p class="character-card__species">{species}</p> }
    });

    view! {
        <div class="character-card">
            {image}
            <h3 class="character-card__name">{character.name.clone()}</h3>
            {status}
            {species}
        </div>
    }
}
