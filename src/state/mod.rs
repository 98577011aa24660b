//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`books`, `characters`) so individual pages and
//! components can depend on small focused models. Reconciliation logic lives
//! here as pure functions so it can be tested without a browser.

pub mod books;
pub mod characters;
