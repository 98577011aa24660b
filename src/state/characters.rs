//! Character records for the character browser route.

#[cfg(test)]
#[path = "characters_test.rs"]
mod characters_test;

use serde::{Deserialize, Serialize};

/// How many characters the browser shows, regardless of page size upstream.
pub const VISIBLE_CHARACTERS: usize = 9;

/// A character as delivered by the remote API.
///
/// Only the fields the card renders are typed; everything else the source
/// sends rides along opaquely in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Shared character browser state. There is no persistence and no error
/// surface; a failed fetch just leaves the list empty.
#[derive(Clone, Debug, Default)]
pub struct CharactersState {
    pub characters: Vec<Character>,
}

/// The first [`VISIBLE_CHARACTERS`] entries of a fetched page.
pub fn visible_characters(all: Vec<Character>) -> Vec<Character> {
    all.into_iter().take(VISIBLE_CHARACTERS).collect()
}
