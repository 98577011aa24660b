//! Blocking browser prompts (`alert` / `confirm`).
//!
//! The library UI deliberately keeps the source behavior of synchronous
//! native prompts for favorite confirmations and deletes. Native builds
//! no-op (`alert`) or refuse (`confirm`) so nothing mutates during tests.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Show a blocking message prompt.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask for confirmation; true only on an explicit yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|window| window.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
