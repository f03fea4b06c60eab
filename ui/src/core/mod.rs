//! Platform-agnostic navbar logic: the static menu table, the open/closed
//! menu state and the seam to the routing service.

pub mod menu;
pub mod menu_state;
pub mod navigation;

pub use menu::{MenuItem, NavElement, NavRole};
pub use menu_state::MenuState;
pub use navigation::{NavigationService, RouterNavigation};
