//! Seam between the navbar and whatever performs route changes.

use dioxus::prelude::Navigator;
use tracing::{info, warn};

/// Something that can move the application to another route.
pub trait NavigationService {
    fn navigate(&mut self, path: &str);
}

/// Router-backed navigation.
///
/// Pushes the raw path so the shared crate never needs a platform's `Route`
/// enum; the router parses it against whatever table is mounted.
#[derive(Clone, Copy)]
pub struct RouterNavigation(pub Navigator);

impl NavigationService for RouterNavigation {
    fn navigate(&mut self, path: &str) {
        info!(path, "navigating");
        if self.0.push(path.to_string()).is_some() {
            warn!(path, "router rejected navigation");
        }
    }
}
