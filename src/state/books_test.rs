use super::*;

fn book(title: &str, origin: BookOrigin) -> Book {
    Book {
        title: title.to_owned(),
        author: "Frank Herbert".to_owned(),
        year: "1965".to_owned(),
        editions: "52".to_owned(),
        cover: None,
        origin,
    }
}

#[test]
fn books_state_starts_loading_with_empty_lists() {
    let s = BooksState::default();
    assert!(s.books.is_empty());
    assert!(s.favorites.is_empty());
    assert!(s.loading);
}

#[test]
fn merge_catalog_skips_titles_already_present() {
    let mut existing = vec![book("Dune", BookOrigin::Manual)];
    merge_catalog(
        &mut existing,
        vec![book("Dune", BookOrigin::Catalog), book("Hyperion", BookOrigin::Catalog)],
    );
    assert_eq!(existing.len(), 2);
    assert_eq!(existing[0].title, "Dune");
    assert_eq!(existing[0].origin, BookOrigin::Manual);
    assert_eq!(existing[1].title, "Hyperion");
}

#[test]
fn merge_catalog_collapses_duplicate_incoming_titles() {
    let mut existing = Vec::new();
    merge_catalog(
        &mut existing,
        vec![book("Dune", BookOrigin::Catalog), book("Dune", BookOrigin::Catalog)],
    );
    assert_eq!(existing.iter().filter(|b| b.title == "Dune").count(), 1);
}

#[test]
fn push_favorite_strips_cover_and_rejects_duplicates() {
    let mut favorites = Vec::new();
    let mut dune = book("Dune", BookOrigin::Catalog);
    dune.cover = Some("https://covers.openlibrary.org/b/id/1-M.jpg".to_owned());

    assert!(push_favorite(&mut favorites, &dune));
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].cover, None);

    // Same title again is a no-op, even with different fields.
    let mut other_dune = book("Dune", BookOrigin::Manual);
    other_dune.author = "Someone Else".to_owned();
    assert!(!push_favorite(&mut favorites, &other_dune));
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].author, "Frank Herbert");
}

#[test]
fn is_favorite_matches_by_title_only() {
    let favorites = vec![book("Dune", BookOrigin::Manual)];
    assert!(is_favorite(&favorites, "Dune"));
    assert!(!is_favorite(&favorites, "Hyperion"));
}

#[test]
fn remove_favorite_at_is_positional_and_order_preserving() {
    let mut favorites = vec![
        book("A", BookOrigin::Manual),
        book("B", BookOrigin::Manual),
        book("C", BookOrigin::Manual),
    ];
    remove_favorite_at(&mut favorites, 1);
    let titles: Vec<&str> = favorites.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn remove_favorite_at_ignores_out_of_range_index() {
    let mut favorites = vec![book("A", BookOrigin::Manual)];
    remove_favorite_at(&mut favorites, 5);
    assert_eq!(favorites.len(), 1);
}

#[test]
fn manual_books_for_storage_drops_catalog_records() {
    let books = vec![book("Dune", BookOrigin::Manual), book("Hyperion", BookOrigin::Catalog)];
    let stored = manual_books_for_storage(&books);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Dune");
}

#[test]
fn manual_books_for_storage_strips_embedded_covers_only() {
    let mut embedded = book("Dune", BookOrigin::Manual);
    embedded.cover = Some("data:image/jpeg;base64,AAAA".to_owned());
    let mut remote = book("Hyperion", BookOrigin::Manual);
    remote.cover = Some("https://covers.openlibrary.org/b/id/2-M.jpg".to_owned());

    let stored = manual_books_for_storage(&[embedded, remote]);
    assert_eq!(stored[0].cover, None);
    assert_eq!(
        stored[1].cover.as_deref(),
        Some("https://covers.openlibrary.org/b/id/2-M.jpg")
    );
}

#[test]
fn reduced_favorites_keep_title_author_year_only() {
    let mut dune = book("Dune", BookOrigin::Manual);
    dune.cover = Some("https://example.org/cover.jpg".to_owned());
    let reduced = reduced_favorites(&[dune]);
    assert_eq!(
        reduced,
        vec![ReducedFavorite {
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            year: "1965".to_owned(),
        }]
    );
    let raw = serde_json::to_value(&reduced).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{ "title": "Dune", "author": "Frank Herbert", "year": "1965" }])
    );
}

#[test]
fn untagged_persisted_record_loads_as_manual() {
    let raw = serde_json::json!({ "title": "Dune", "author": "Frank Herbert", "year": "1965" });
    let loaded: Book = serde_json::from_value(raw).unwrap();
    assert_eq!(loaded.origin, BookOrigin::Manual);
    assert_eq!(loaded.editions, "N/A");
    assert_eq!(loaded.cover, None);
}

#[test]
fn manual_book_survives_a_persistence_round_trip() {
    let mut added = book("Dune", BookOrigin::Manual);
    added.cover = Some("data:image/jpeg;base64,AAAA".to_owned());

    // What gets written at save time, then read back on the next start.
    let stored = manual_books_for_storage(&[added]);
    let raw = serde_json::to_string(&stored).unwrap();
    let reloaded: Vec<Book> = serde_json::from_str(&raw).unwrap();

    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].title, "Dune");
    assert_eq!(reloaded[0].origin, BookOrigin::Manual);
    assert_eq!(reloaded[0].cover, None);
}

#[test]
fn origin_serializes_lowercase() {
    assert_eq!(serde_json::to_value(BookOrigin::Manual).unwrap(), "manual");
    assert_eq!(serde_json::to_value(BookOrigin::Catalog).unwrap(), "catalog");
}
