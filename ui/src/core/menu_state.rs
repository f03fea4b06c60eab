//! Open/closed state of the mobile menu.

use tracing::debug;

use super::navigation::NavigationService;

/// Whether the collapsible menu is expanded on narrow viewports.
///
/// Starts closed. Any navigation closes it again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Route to `path` through `service`, then collapse the menu.
    pub fn navigate_to<S>(&mut self, service: &mut S, path: &str)
    where
        S: NavigationService + ?Sized,
    {
        service.navigate(path);
        self.close();
    }

    /// CSS modifier shared by the hamburger and the menu list.
    pub fn modifier(&self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }

    /// `base` with the `active` modifier appended while open.
    pub fn class_for(&self, base: &str) -> String {
        if self.open {
            format!("{base} {}", self.modifier())
        } else {
            base.to_string()
        }
    }
}
