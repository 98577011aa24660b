//! Card list renderer for catalog and favorites sections.
//!
//! DESIGN
//! ======
//! The list is instantiated inside a reactive closure by the owning page, so
//! it takes plain `Vec` props and re-renders wholesale when either list
//! changes. Favorite status is a linear title scan per card; the lists are
//! small enough that this stays cheap.

#[cfg(test)]
#[path = "book_list_test.rs"]
mod book_list_test;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::delete_button::DeleteButton;
use crate::state::books::{Book, is_favorite};
use crate::util::dialog;

/// Rendering mode for [`BookList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    /// Covers and a favorite toggle per card.
    Normal,
    /// No covers; a delete control per card.
    Favorites,
}

/// A sequence of book cards, or a placeholder when there is nothing to show.
#[component]
pub fn BookList(
    books: Vec<Book>,
    #[prop(default = Vec::new())] favorites: Vec<Book>,
    mode: ListMode,
    #[prop(optional)] on_add_favorite: Option<Callback<Book>>,
    #[prop(optional)] on_delete: Option<Callback<usize>>,
) -> impl IntoView {
    if books.is_empty() {
        return Either::Left(view! { <p class="book-list__empty">"No books to show."</p> });
    }

    let cards = books
        .into_iter()
        .enumerate()
        .map(|(index, book)| {
            book_card(&book, index, mode, &favorites, on_add_favorite, on_delete)
        })
        .collect::<Vec<_>>();

    Either::Right(view! {
        <div class="book-list">
            <div class="book-list__cards">{cards}</div>
        </div>
    })
}

fn book_card(
    book: &Book,
    index: usize,
    mode: ListMode,
    favorites: &[Book],
    on_add_favorite: Option<Callback<Book>>,
    on_delete: Option<Callback<usize>>,
) -> impl IntoView + use<> {
    let cover = (mode == ListMode::Normal).then(|| match book.cover.clone() {
        Some(src) => Either::Left(view! {
            <img class="book-card__cover" src=src alt=format!("Cover of {}", book.title)/>
        }),
        None => Either::Right(view! { <div class="book-card__cover-fallback">"📕"</div> }),
    });

    let editions = (!book.editions.is_empty()).then(|| {
        view! { <p><strong>"Editions: "</strong>{book.editions.clone()}</p> }
    });

    let action = match mode {
        ListMode::Normal => {
            let already = is_favorite(favorites, &book.title);
            let clicked = book.clone();
            Either::Left(view! {
                <button
                    class="book-card__favorite"
                    class:book-card__favorite--active=already
                    on:click=move |_| {
                        if already {
                            dialog::alert(&already_favorite_message(&clicked.title));
                        } else {
                            if let Some(on_add_favorite) = on_add_favorite.as_ref() {
                                on_add_favorite.run(clicked.clone());
                            }
                            dialog::alert(&added_favorite_message(&clicked.title));
                        }
                    }
                >
                    {favorite_toggle_label(already)}
                </button>
            })
        }
        ListMode::Favorites => {
            let on_delete_here = Callback::new(move |()| {
                if let Some(on_delete) = on_delete.as_ref() {
                    on_delete.run(index);
                }
            });
            Either::Right(view! { <DeleteButton on_delete=on_delete_here/> })
        }
    };

    let favorites_mode = mode == ListMode::Favorites;
    view! {
        <div class="book-card" class:book-card--favorites=favorites_mode>
            {cover}
            <div class="book-card__body">
                <h3 class="book-card__title">{book.title.clone()}</h3>
                <p><strong>"Author: "</strong>{book.author.clone()}</p>
                <p><strong>"Year: "</strong>{book.year.clone()}</p>
                {editions}
                {action}
            </div>
        </div>
    }
}

fn favorite_toggle_label(already: bool) -> &'static str {
    if already { "✅ Favorite" } else { "⭐ Add to Favorites" }
}

fn added_favorite_message(title: &str) -> String {
    format!("📚 \"{title}\" was added to favorites")
}

fn already_favorite_message(title: &str) -> String {
    format!("👁️ \"{title}\" is already in your favorites")
}
