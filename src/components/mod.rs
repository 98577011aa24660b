//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, lists, and the add-book modal while receiving
//! data and callbacks as plain props from the owning page; shared state stays
//! in the Leptos context providers.

pub mod add_book_form;
pub mod book_list;
pub mod character_card;
pub mod delete_button;
