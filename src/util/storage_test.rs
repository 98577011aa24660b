use super::*;
use crate::state::books::BookOrigin;

fn favorite(title: &str) -> Book {
    Book {
        title: title.to_owned(),
        author: "Frank Herbert".to_owned(),
        year: "1965".to_owned(),
        editions: "52".to_owned(),
        cover: None,
        origin: BookOrigin::Manual,
    }
}

#[test]
fn storage_keys_are_independent() {
    assert_ne!(FAVORITES_KEY, MANUAL_BOOKS_KEY);
}

#[test]
fn save_favorites_with_writes_full_shape_first() {
    let favorites = vec![favorite("Dune")];
    let mut writes: Vec<String> = Vec::new();
    let shape = save_favorites_with(&favorites, |raw| {
        writes.push(raw.to_owned());
        Ok(())
    });
    assert_eq!(shape, SavedShape::Full);
    assert_eq!(writes.len(), 1);

    let written: Vec<Book> = serde_json::from_str(&writes[0]).unwrap();
    assert_eq!(written, favorites);
}

#[test]
fn rejected_write_retries_with_reduced_records() {
    let favorites = vec![favorite("Dune")];
    let mut writes: Vec<String> = Vec::new();
    let shape = save_favorites_with(&favorites, |raw| {
        writes.push(raw.to_owned());
        // First (full) write hits the quota; the retry succeeds.
        if writes.len() == 1 {
            Err(StorageError::Write)
        } else {
            Ok(())
        }
    });
    assert_eq!(shape, SavedShape::Reduced);
    assert_eq!(writes.len(), 2);

    let retried: serde_json::Value = serde_json::from_str(&writes[1]).unwrap();
    assert_eq!(
        retried,
        serde_json::json!([{ "title": "Dune", "author": "Frank Herbert", "year": "1965" }])
    );
    // The caller's list is untouched; memory keeps the full records.
    assert_eq!(favorites[0].editions, "52");
}

#[test]
fn sustained_write_failure_reports_unsaved() {
    let favorites = vec![favorite("Dune")];
    let shape = save_favorites_with(&favorites, |_| Err(StorageError::Write));
    assert_eq!(shape, SavedShape::Unsaved);
}

#[cfg(not(feature = "hydrate"))]
mod native_stubs {
    use super::super::*;

    #[test]
    fn loads_are_empty_without_a_browser() {
        assert!(load_favorites().is_empty());
        assert!(load_manual_books().is_empty());
    }

    #[test]
    fn writes_report_unavailable_without_a_browser() {
        assert!(matches!(
            write_raw(FAVORITES_KEY, "[]"),
            Err(StorageError::Unavailable)
        ));
    }
}
