//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{characters::CharactersPage, library::LibraryPage};
use crate::state::books::BooksState;
use crate::state::characters::CharactersState;

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing:
/// the library at `/` and the character browser at `/characters`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let books = RwSignal::new(BooksState::default());
    let characters = RwSignal::new(CharactersState::default());
    provide_context(books);
    provide_context(characters);

    view! {
        // The stylesheet is injected by the Trunk build via index.html.
        <Title text="Virtual Library"/>

        <Router>
            <nav class="app-nav">
                <a href="/">"Library"</a>
                <a href="/characters">"Characters"</a>
            </nav>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LibraryPage/>
                <Route path=StaticSegment("characters") view=CharactersPage/>
            </Routes>
        </Router>
    }
}
