//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (localStorage,
//! blocking prompts) from page and component logic to improve reuse and
//! testability.

pub mod dialog;
pub mod storage;
