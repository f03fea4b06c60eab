//! Shared UI crate for MyApp. The navigation bar, its menu model and the
//! localized page views live here; platform crates only supply the router.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized, responsive application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}


/// Shared theme stylesheet, embedded so every platform can inline it.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
