//! REST helpers for the catalog and character endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade UI behavior (loading ends, lists stay as they were)
//! without crashing the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::books::Book;
use crate::state::characters::Character;
#[cfg(feature = "hydrate")]
use crate::net::types::{CharactersResponse, SearchResponse, map_search_doc};

/// Catalog query issued once at startup to seed the book list.
pub const CATALOG_QUERY: &str = "programming";
/// Result limit for the startup catalog fetch.
pub const CATALOG_LIMIT: usize = 20;
/// Result limit for typeahead suggestion lookups.
pub const SUGGESTION_LIMIT: usize = 6;
/// Largest cover download that will be embedded as a `data:` URL. Anything
/// bigger keeps its remote URL so one image cannot blow the storage quota.
pub const MAX_EMBED_BYTES: usize = 300 * 1024;

#[cfg(any(test, feature = "hydrate"))]
const SEARCH_URL: &str = "https://openlibrary.org/search.json";
#[cfg(any(test, feature = "hydrate"))]
const CHARACTERS_URL: &str = "https://rickandmortyapi.com/api/character/?page=1";

#[cfg(any(test, feature = "hydrate"))]
// Keys stay borrowed; `gloo_net`'s query builder takes `(&str, impl AsRef<str>)` pairs.
fn search_query_pairs(term: &str, limit: usize) -> [(&'static str, String); 2] {
    [("q", term.to_owned()), ("limit", limit.to_string())]
}

#[cfg(any(test, feature = "hydrate"))]
fn search_failed_message(status: u16) -> String {
    format!("catalog search failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn characters_failed_message(status: u16) -> String {
    format!("character fetch failed: {status}")
}

/// Search the remote catalog and map the documents into catalog books.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn search_books(term: &str, limit: usize) -> Result<Vec<Book>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SEARCH_URL)
            .query(search_query_pairs(term, limit))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(search_failed_message(resp.status()));
        }
        let body: SearchResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.docs.into_iter().map(map_search_doc).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (term, limit);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the first page of the character listing.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn fetch_characters() -> Result<Vec<Character>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CHARACTERS_URL)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(characters_failed_message(resp.status()));
        }
        let body: CharactersResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// True when the value is a plain remote URL rather than an embedded image
/// or an empty field.
pub fn is_remote_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Build a `data:` URL for downloaded image bytes, refusing payloads over
/// [`MAX_EMBED_BYTES`].
pub fn embed_cover_bytes(content_type: &str, bytes: &[u8]) -> Option<String> {
    use base64::Engine as _;

    if bytes.len() > MAX_EMBED_BYTES {
        return None;
    }
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Some(format!("data:{content_type};base64,{encoded}"))
}

/// Best-effort conversion of a remote cover URL into an embedded `data:` URL.
///
/// Anything that is not a remote URL passes through untouched. Downloads that
/// fail or exceed the embed bound keep the original URL; both cases are
/// logged and never fatal.
pub async fn resolve_cover(url: String) -> String {
    #[cfg(feature = "hydrate")]
    {
        if !is_remote_url(&url) {
            return url;
        }
        match fetch_cover_data_url(&url).await {
            Some(data_url) => data_url,
            None => url,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        url
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_cover_data_url(url: &str) -> Option<String> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            log::warn!("cover download returned {}; keeping remote URL", resp.status());
            return None;
        }
        Err(err) => {
            log::warn!("cover download failed ({err}); keeping remote URL");
            return None;
        }
    };
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "image/jpeg".to_owned());
    let bytes = resp.binary().await.ok()?;
    let embedded = embed_cover_bytes(&content_type, &bytes);
    if embedded.is_none() {
        log::warn!("cover is {} bytes, over the embed bound; keeping remote URL", bytes.len());
    }
    embedded
}
