//! Browser localStorage persistence for favorites and manual books.
//!
//! These helpers centralize hydrate-only read/write behavior behind typed
//! load/save functions so the page logic never touches web-sys directly.
//!
//! ERROR HANDLING
//! ==============
//! Reads recover from missing or malformed blobs as empty lists (logged,
//! never fatal). Writes are best-effort: a rejected favorites write retries
//! with the reduced record shape, and a rejected retry leaves memory and
//! storage divergent with only a log trail. Concurrent tabs are not
//! coordinated; last write wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use thiserror::Error;

use crate::state::books::{Book, manual_books_for_storage, reduced_favorites};

/// Storage key holding the favorites JSON array.
pub const FAVORITES_KEY: &str = "library_favorites";
/// Storage key holding the manually added books JSON array.
pub const MANUAL_BOOKS_KEY: &str = "library_manual_books";

/// Why a storage operation failed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No browser storage in this environment (native builds, disabled storage).
    #[error("localStorage is not available")]
    Unavailable,
    /// The value could not be serialized to JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The browser rejected the write, typically on quota exhaustion.
    #[error("storage write rejected")]
    Write,
}

/// Which record shape a favorites write ended up persisting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavedShape {
    /// The full favorite records were written.
    Full,
    /// The fallback `{title, author, year}` records were written.
    Reduced,
    /// Both writes failed; storage is stale relative to memory.
    Unsaved,
}

/// Load the persisted favorites list. Missing or malformed data loads as
/// an empty list.
pub fn load_favorites() -> Vec<Book> {
    load_books(FAVORITES_KEY)
}

/// Load the persisted manually-added books. Records saved before the origin
/// tag existed deserialize as manual (see `Book`'s serde defaults).
pub fn load_manual_books() -> Vec<Book> {
    load_books(MANUAL_BOOKS_KEY)
}

fn load_books(key: &str) -> Vec<Book> {
    let Some(raw) = read_raw(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(books) => books,
        Err(err) => {
            log::warn!("discarding malformed records under {key}: {err}");
            Vec::new()
        }
    }
}

/// Persist the favorites list, retrying with the reduced shape when the full
/// write is rejected. The caller's in-memory list is never touched; under
/// sustained storage failure memory and storage are allowed to diverge.
pub fn save_favorites(favorites: &[Book]) -> SavedShape {
    save_favorites_with(favorites, |raw| write_raw(FAVORITES_KEY, raw))
}

fn save_favorites_with<W>(favorites: &[Book], mut write: W) -> SavedShape
where
    W: FnMut(&str) -> Result<(), StorageError>,
{
    match encode(&favorites).and_then(|raw| write(&raw)) {
        Ok(()) => return SavedShape::Full,
        Err(err) => {
            log::warn!("favorites write rejected ({err}); retrying with reduced records");
        }
    }

    let reduced = reduced_favorites(favorites);
    match encode(&reduced).and_then(|raw| write(&raw)) {
        Ok(()) => SavedShape::Reduced,
        Err(err) => {
            log::error!("reduced favorites write rejected: {err}");
            SavedShape::Unsaved
        }
    }
}

/// Persist the manual subset of `books` (embedded covers stripped). A
/// rejected write is logged and dropped; there is no fallback shape here.
pub fn save_manual_books(books: &[Book]) {
    let manual = manual_books_for_storage(books);
    if let Err(err) = encode(&manual).and_then(|raw| write_raw(MANUAL_BOOKS_KEY, &raw)) {
        log::warn!("manual books write rejected ({err}); persisted copy is stale");
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string(value)?)
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn write_raw(key: &str, raw: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        storage.set_item(key, raw).map_err(|_| StorageError::Write)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Err(StorageError::Unavailable)
    }
}
