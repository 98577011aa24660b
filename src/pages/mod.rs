//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (startup loads, fetches, list
//! mutations) and delegates rendering details to `components`.

pub mod characters;
pub mod library;
