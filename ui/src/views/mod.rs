//! Routed page views. Platform crates mount these under their `Route` enum.

mod home;
pub use home::Home;

mod pages;
pub use pages::{About, Contact, Products, Services};

mod login;
pub use login::Login;

mod not_found;
pub use not_found::PageNotFound;

use dioxus::prelude::*;

/// Read the platform's global language signal (if provided) so the calling
/// view re-renders when the locale changes from the navbar.
pub(crate) fn use_lang_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.as_ref().map(|s| s()).unwrap_or_default()
}
