//! Modal form for manually adding a book, assisted by catalog typeahead.
//!
//! CONCURRENCY
//! ===========
//! Suggestion lookups are debounced 300 ms and guarded by a lookup sequence
//! token: every keystroke bumps the token, and both the debounce wakeup and
//! the response apply step compare their issued token against the latest.
//! A mismatch means the lookup was superseded and its results are silently
//! dropped, so at most one lookup's results can ever land and they are
//! always the latest ones.

#[cfg(test)]
#[path = "add_book_form_test.rs"]
mod add_book_form_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api::{SUGGESTION_LIMIT, resolve_cover, search_books};
use crate::state::books::{Book, BookOrigin};
use crate::util::dialog;

/// Idle period after the last keystroke before a suggestion lookup fires.
const DEBOUNCE_MS: u64 = 300;
/// Minimum trimmed title length before suggestions are requested.
const MIN_LOOKUP_CHARS: usize = 3;

/// Modal dialog collecting a new manual book. Hands the finished record to
/// `on_add`; `on_cancel` closes the modal without side effects.
#[component]
pub fn AddBookForm(on_add: Callback<Book>, on_cancel: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let editions = RwSignal::new(String::new());
    let cover = RwSignal::new(String::new());

    let suggestions = RwSignal::new(Vec::<Book>::new());
    let searching = RwSignal::new(false);
    let lookup_error = RwSignal::new(None::<String>);
    let lookup_seq = RwSignal::new(0_u64);

    let on_title_input = move |value: String| {
        title.set(value.clone());
        // Bumping the token invalidates any pending or in-flight lookup.
        let seq = lookup_seq.get_untracked() + 1;
        lookup_seq.set(seq);

        let Some(term) = lookup_term(&value) else {
            suggestions.set(Vec::new());
            searching.set(false);
            lookup_error.set(None);
            return;
        };
        searching.set(true);
        lookup_error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(DEBOUNCE_MS)).await;
            if !is_current_lookup(seq, lookup_seq.get_untracked()) {
                return;
            }
            let result = search_books(&term, SUGGESTION_LIMIT).await;
            if !is_current_lookup(seq, lookup_seq.get_untracked()) {
                // Superseded while in flight; drop silently.
                return;
            }
            match result {
                Ok(items) => suggestions.set(items),
                Err(err) => {
                    log::error!("suggestion lookup failed: {err}");
                    lookup_error.set(Some("Could not load suggestions".to_owned()));
                    suggestions.set(Vec::new());
                }
            }
            searching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, term);
    };

    let select_suggestion = move |book: Book| {
        // A click also supersedes whatever lookup the last keystroke queued.
        lookup_seq.set(lookup_seq.get_untracked() + 1);
        title.set(book.title);
        author.set(book.author);
        year.set(book.year);
        editions.set(book.editions);
        cover.set(book.cover.unwrap_or_default());
        suggestions.set(Vec::new());
        searching.set(false);
        lookup_error.set(None);
    };

    let do_submit = move || {
        let title_value = title.get_untracked();
        let author_value = author.get_untracked();
        let year_value = year.get_untracked();
        let editions_value = editions.get_untracked();
        if let Err(message) = validate_fields(&title_value, &author_value, &year_value, &editions_value) {
            dialog::alert(message);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let chosen_cover = cover.get_untracked().trim().to_owned();
            leptos::task::spawn_local(async move {
                let resolved = resolve_submission_cover(&title_value, chosen_cover).await;
                on_add.run(Book {
                    title: title_value,
                    author: author_value,
                    year: year_value,
                    editions: editions_value,
                    cover: resolved,
                    origin: BookOrigin::Manual,
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let chosen_cover = cover.get_untracked().trim().to_owned();
            on_add.run(Book {
                title: title_value,
                author: author_value,
                year: year_value,
                editions: editions_value,
                cover: (!chosen_cover.is_empty()).then_some(chosen_cover),
                origin: BookOrigin::Manual,
            });
        }
    };

    let submit_on_enter = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_submit();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>"Add Book Manually"</h3>

                <div class="dialog__typeahead">
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Title"
                        aria-label="Book title"
                        prop:value=move || title.get()
                        on:input=move |ev| on_title_input(event_target_value(&ev))
                    />

                    <Show when=move || searching.get()>
                        <div class="suggestions__loading">"Searching…"</div>
                    </Show>

                    {move || {
                        let items = suggestions.get();
                        (!items.is_empty()).then(|| view! {
                            <ul class="suggestions" role="listbox">
                                {items
                                    .into_iter()
                                    .map(|s| {
                                        let meta = suggestion_meta(&s);
                                        let label = s.title.clone();
                                        let picked = s.clone();
                                        let picked_by_key = s;
                                        view! {
                                            <li
                                                class="suggestions__item"
                                                role="option"
                                                tabindex="0"
                                                on:click=move |_| select_suggestion(picked.clone())
                                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                                    if ev.key() == "Enter" {
                                                        select_suggestion(picked_by_key.clone());
                                                    }
                                                }
                                            >
                                                <strong>{label}</strong>
                                                <div class="suggestions__meta">{meta}</div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        })
                    }}

                    {move || {
                        lookup_error
                            .get()
                            .map(|message| view! { <div class="suggestions__error">{message}</div> })
                    }}
                </div>

                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Author"
                    aria-label="Book author"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                    on:keydown=submit_on_enter
                />
                <input
                    class="dialog__input"
                    type="number"
                    placeholder="Year"
                    aria-label="Publication year"
                    prop:value=move || year.get()
                    on:input=move |ev| year.set(event_target_value(&ev))
                    on:keydown=submit_on_enter
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Editions"
                    aria-label="Edition count"
                    prop:value=move || editions.get()
                    on:input=move |ev| editions.set(event_target_value(&ev))
                    on:keydown=submit_on_enter
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Cover URL (optional)"
                    aria-label="Cover URL"
                    prop:value=move || cover.get()
                    on:input=move |ev| cover.set(event_target_value(&ev))
                    on:keydown=submit_on_enter
                />

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| do_submit()>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Trimmed lookup term, or `None` when the input is too short to search.
fn lookup_term(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (trimmed.chars().count() >= MIN_LOOKUP_CHARS).then(|| trimmed.to_owned())
}

/// Superseded lookups must never apply their results.
#[cfg(any(test, feature = "hydrate"))]
fn is_current_lookup(issued: u64, latest: u64) -> bool {
    issued == latest
}

/// All four text fields must be non-empty after trimming.
fn validate_fields(title: &str, author: &str, year: &str, editions: &str) -> Result<(), &'static str> {
    if [title, author, year, editions].iter().any(|field| field.trim().is_empty()) {
        return Err("Please fill in all fields");
    }
    Ok(())
}

/// Secondary line of a suggestion row.
fn suggestion_meta(book: &Book) -> String {
    format!("{} • {}", book.author, book.year)
}

/// Resolve the cover for a submission: fall back to a one-shot exact-title
/// lookup when no cover was chosen, then try to embed remote URLs.
#[cfg(feature = "hydrate")]
async fn resolve_submission_cover(title: &str, chosen: String) -> Option<String> {
    let mut cover = chosen;
    if cover.is_empty() {
        match search_books(title.trim(), 1).await {
            Ok(results) => {
                if let Some(url) = results.into_iter().next().and_then(|b| b.cover) {
                    cover = url;
                }
            }
            Err(err) => log::warn!("automatic cover lookup failed: {err}"),
        }
    }
    if cover.is_empty() {
        return None;
    }
    Some(resolve_cover(cover).await)
}
