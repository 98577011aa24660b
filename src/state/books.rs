//! Book records and the reconciliation logic behind the library page.
//!
//! DESIGN
//! ======
//! The page component owns the signals; every list mutation goes through the
//! pure functions in this module so dedup, positional deletes, and the
//! persisted-subset derivation stay testable without a DOM or storage backend.
//!
//! Identity is the title string alone: dedup and favorite membership both
//! compare titles, so two distinct books sharing a title collide. Catalog
//! records carry no stable key, so the title is the best handle available.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Where a book record came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookOrigin {
    /// Created through the add-book form; persisted across reloads.
    /// The serde default, so records saved before the tag existed load as manual.
    #[default]
    Manual,
    /// Fetched from the remote catalog; never persisted.
    Catalog,
}

/// A single book record.
///
/// `year` and `editions` carry `"N/A"` when the source had no value; `cover`
/// is either a remote image URL or an embedded `data:` URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default = "unknown_author")]
    pub author: String,
    #[serde(default = "not_available")]
    pub year: String,
    #[serde(default = "not_available")]
    pub editions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub origin: BookOrigin,
}

fn unknown_author() -> String {
    "Unknown".to_owned()
}

fn not_available() -> String {
    "N/A".to_owned()
}

/// Quota-fallback persistence shape for favorites. When the full favorites
/// write is rejected by storage, this trimmed record is written instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReducedFavorite {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl From<&Book> for ReducedFavorite {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
        }
    }
}

/// Shared library state: the merged book list, the favorites list, and the
/// initial loading flag.
#[derive(Clone, Debug)]
pub struct BooksState {
    pub books: Vec<Book>,
    pub favorites: Vec<Book>,
    pub loading: bool,
}

impl Default for BooksState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            favorites: Vec::new(),
            // Cleared when the catalog fetch settles, success or failure.
            loading: true,
        }
    }
}

/// True when `favorites` already holds a record with this title.
pub fn is_favorite(favorites: &[Book], title: &str) -> bool {
    favorites.iter().any(|f| f.title == title)
}

/// Clone of `book` with the cover dropped. Favorites are kept without covers
/// to control storage size.
pub fn without_cover(book: &Book) -> Book {
    Book {
        cover: None,
        ..book.clone()
    }
}

/// Append catalog results to `existing`, skipping any title already present.
/// Titles repeated within `incoming` itself are also collapsed to one entry.
pub fn merge_catalog(existing: &mut Vec<Book>, incoming: Vec<Book>) {
    let mut seen: HashSet<String> = existing.iter().map(|b| b.title.clone()).collect();
    for book in incoming {
        if seen.insert(book.title.clone()) {
            existing.push(book);
        }
    }
}

/// Append `book` to `favorites` (cover stripped) unless a favorite with the
/// same title already exists. Returns whether the list changed.
pub fn push_favorite(favorites: &mut Vec<Book>, book: &Book) -> bool {
    if is_favorite(favorites, &book.title) {
        return false;
    }
    favorites.push(without_cover(book));
    true
}

/// Remove the favorite at `index`. Deletion is positional, not by title;
/// out-of-range indices are ignored.
pub fn remove_favorite_at(favorites: &mut Vec<Book>, index: usize) {
    if index < favorites.len() {
        favorites.remove(index);
    }
}

/// The subset of `books` that gets written back to storage: manual-origin
/// records, with embedded `data:` covers stripped so a single book cannot
/// blow the storage quota. Remote cover URLs are kept.
pub fn manual_books_for_storage(books: &[Book]) -> Vec<Book> {
    books
        .iter()
        .filter(|b| b.origin == BookOrigin::Manual)
        .map(|b| {
            if b.cover.as_deref().is_some_and(|c| c.starts_with("data:")) {
                without_cover(b)
            } else {
                b.clone()
            }
        })
        .collect()
}

/// Reduced favorite records for the quota-fallback write.
pub fn reduced_favorites(favorites: &[Book]) -> Vec<ReducedFavorite> {
    favorites.iter().map(ReducedFavorite::from).collect()
}
