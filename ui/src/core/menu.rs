//! Static navigation table rendered by the navbar.
//!
//! The bar is made of one logo element followed by the five menu entries and
//! the login call-to-action, always in the order declared here.

/// One navigation destination.
///
/// `id` is the Fluent message used for the localized label; `label` is the
/// English text shown when no bundle provides `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

impl MenuItem {
    const fn new(id: &'static str, label: &'static str, path: &'static str) -> Self {
        Self { id, label, path }
    }
}

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Regular menu entries, in display order.
pub static MENU_ITEMS: [MenuItem; 5] = [
    MenuItem::new("nav-home", "Home", HOME_PATH),
    MenuItem::new("nav-about", "About", "/about"),
    MenuItem::new("nav-services", "Services", "/services"),
    MenuItem::new("nav-products", "Products", "/products"),
    MenuItem::new("nav-contact", "Contact", "/contact"),
];

/// Login entry, rendered after the menu entries with the CTA styling.
pub static LOGIN_ITEM: MenuItem = MenuItem::new("nav-login", "Login", LOGIN_PATH);

/// Brand mark; clicking it returns to the home page.
pub static LOGO_ITEM: MenuItem = MenuItem::new("brand-name", "MyApp", HOME_PATH);

/// How an element of the bar is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRole {
    Logo,
    Link,
    CallToAction,
}

/// A clickable element of the rendered bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavElement {
    pub role: NavRole,
    pub item: &'static MenuItem,
}

impl NavElement {
    pub fn path(&self) -> &'static str {
        self.item.path
    }

    pub fn class(&self) -> &'static str {
        match self.role {
            NavRole::Logo => "navbar-logo",
            NavRole::Link => "navbar-link",
            NavRole::CallToAction => "navbar-link navbar-cta",
        }
    }
}

pub fn logo() -> NavElement {
    NavElement {
        role: NavRole::Logo,
        item: &LOGO_ITEM,
    }
}

/// Menu links followed by the login CTA.
pub fn links() -> impl Iterator<Item = NavElement> {
    MENU_ITEMS
        .iter()
        .map(|item| NavElement {
            role: NavRole::Link,
            item,
        })
        .chain(std::iter::once(NavElement {
            role: NavRole::CallToAction,
            item: &LOGIN_ITEM,
        }))
}

/// Every clickable element of the bar in render order (logo first).
pub fn layout() -> Vec<NavElement> {
    std::iter::once(logo()).chain(links()).collect()
}
