//! Library page: the merged catalog list, the favorites list, and the
//! add-book modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the state holder. At startup it hydrates both persisted
//! lists from storage and issues one catalog search; afterwards every list
//! mutation flows through the pure helpers in `state::books` and is written
//! back through `util::storage`. Loading ends when the catalog fetch
//! settles, success or failure, so the UI never hangs on network trouble.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use leptos::prelude::*;

use crate::components::add_book_form::AddBookForm;
use crate::components::book_list::{BookList, ListMode};
use crate::state::books::{Book, BookOrigin, BooksState, push_favorite, remove_favorite_at};
#[cfg(feature = "hydrate")]
use crate::state::books::merge_catalog;
use crate::util::storage;

/// Library page — catalog section, favorites section, and the add-book
/// modal, all backed by the shared [`BooksState`] context.
#[component]
pub fn LibraryPage() -> impl IntoView {
    let books = expect_context::<RwSignal<BooksState>>();
    let show_add_modal = RwSignal::new(false);

    // Startup: persisted lists first, then the one-shot catalog fetch.
    #[cfg(feature = "hydrate")]
    {
        let favorites = storage::load_favorites();
        let manual = storage::load_manual_books();
        books.update(|s| {
            s.favorites = favorites;
            s.books = manual;
        });

        leptos::task::spawn_local(async move {
            match crate::net::api::search_books(
                crate::net::api::CATALOG_QUERY,
                crate::net::api::CATALOG_LIMIT,
            )
            .await
            {
                Ok(incoming) => books.update(|s| {
                    merge_catalog(&mut s.books, incoming);
                    s.loading = false;
                }),
                Err(err) => {
                    log::error!("catalog fetch failed: {err}");
                    books.update(|s| s.loading = false);
                }
            }
        });
    }

    // The manual subset is re-persisted whenever the book list changes.
    Effect::new(move || {
        let snapshot = books.get().books;
        storage::save_manual_books(&snapshot);
    });

    let on_add_favorite = Callback::new(move |book: Book| {
        books.update(|s| {
            if push_favorite(&mut s.favorites, &book) {
                let _ = storage::save_favorites(&s.favorites);
            }
        });
    });

    let on_delete_favorite = Callback::new(move |index: usize| {
        books.update(|s| {
            remove_favorite_at(&mut s.favorites, index);
            let _ = storage::save_favorites(&s.favorites);
        });
    });

    let on_add_book = Callback::new(move |book: Book| {
        let manual = tag_manual(book);
        books.update(|s| {
            s.books.push(manual.clone());
            if push_favorite(&mut s.favorites, &manual) {
                let _ = storage::save_favorites(&s.favorites);
            }
        });
        show_add_modal.set(false);
    });

    let on_modal_cancel = Callback::new(move |()| show_add_modal.set(false));

    view! {
        <div class="library-page">
            <header class="library-page__header">
                <h1>"🏛️ Virtual Library"</h1>
                <button class="btn btn--primary" on:click=move |_| show_add_modal.set(true)>
                    "Add book manually"
                </button>
            </header>

            <Show
                when=move || !books.get().loading
                fallback=move || view! { <p class="library-page__loading">"Loading books…"</p> }
            >
                <section class="library-page__section">
                    <h3 class="library-page__intro">
                        "👓 Welcome to the Virtual Library, a place to discover, search, and \
                         save your favorite books. Browse a wide collection of titles fetched \
                         live from Open Library, see their authors, publication years, and \
                         details, or add your own books manually. 📚"
                    </h3>

                    <h2>"Available Books 📖"</h2>
                    {move || {
                        let state = books.get();
                        view! {
                            <BookList
                                books=state.books
                                favorites=state.favorites
                                mode=ListMode::Normal
                                on_add_favorite=on_add_favorite
                            />
                        }
                    }}
                </section>

                <section class="library-page__section">
                    <h2>"My Favorites ❤️"</h2>
                    {move || {
                        view! {
                            <BookList
                                books=books.get().favorites
                                mode=ListMode::Favorites
                                on_delete=on_delete_favorite
                            />
                        }
                    }}
                </section>
            </Show>

            <Show when=move || show_add_modal.get()>
                <AddBookForm on_add=on_add_book on_cancel=on_modal_cancel/>
            </Show>
        </div>
    }
}

/// Force the manual origin tag onto a record arriving from the add-form.
fn tag_manual(book: Book) -> Book {
    Book {
        origin: BookOrigin::Manual,
        ..book
    }
}
