//! Wire DTOs for the Open Library search and character listing endpoints.
//!
//! DESIGN
//! ======
//! Every external response passes through a mapping function here before the
//! rest of the app sees it: optional upstream fields are filled with the
//! `"Unknown"` / `"N/A"` placeholders the UI renders, and the cover image id
//! is turned into a concrete covers URL.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::state::books::{Book, BookOrigin};
use crate::state::characters::Character;

/// One result document from the catalog search endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchDoc {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    #[serde(default)]
    pub edition_count: Option<i64>,
    #[serde(default)]
    pub cover_i: Option<i64>,
}

/// Envelope of the catalog search endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

/// Envelope of the paginated character endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CharactersResponse {
    #[serde(default)]
    pub results: Vec<Character>,
}

/// Medium-size cover image URL for an Open Library cover id.
pub fn cover_url(cover_id: i64) -> String {
    format!("https://covers.openlibrary.org/b/id/{cover_id}-M.jpg")
}

/// Map one search document into a catalog-origin [`Book`].
///
/// Only the first author is kept; a missing author list maps to `"Unknown"`,
/// and missing year / edition counts map to `"N/A"`.
pub fn map_search_doc(doc: SearchDoc) -> Book {
    Book {
        title: doc.title,
        author: doc
            .author_name
            .into_iter()
            .next()
            .unwrap_or_else(|| "Unknown".to_owned()),
        year: doc
            .first_publish_year
            .map_or_else(|| "N/A".to_owned(), |y| y.to_string()),
        editions: doc
            .edition_count
            .map_or_else(|| "N/A".to_owned(), |c| c.to_string()),
        cover: doc.cover_i.map(cover_url),
        origin: BookOrigin::Catalog,
    }
}
