use super::*;

#[test]
fn tag_manual_forces_the_origin_and_keeps_fields() {
    let book = Book {
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        year: "1965".to_owned(),
        editions: "52".to_owned(),
        cover: Some("https://covers.openlibrary.org/b/id/1-M.jpg".to_owned()),
        origin: BookOrigin::Catalog,
    };
    let tagged = tag_manual(book);
    assert_eq!(tagged.origin, BookOrigin::Manual);
    assert_eq!(tagged.title, "Dune");
    assert_eq!(
        tagged.cover.as_deref(),
        Some("https://covers.openlibrary.org/b/id/1-M.jpg")
    );
}
