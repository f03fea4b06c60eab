use crate::core::menu::{self, NavElement};
use crate::core::{MenuState, RouterNavigation};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use tracing::{debug, warn};

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Responsive application navbar.
///
/// Renders the brand logo, the hamburger toggle for narrow viewports and the
/// menu list (five links plus the login call-to-action), in the order given by
/// [`menu::layout`]. Every click on a destination goes through the mounted
/// router and collapses the mobile menu.
///
/// Must be rendered inside a `Router`; platform crates place it in the layout
/// component of their route table:
/// ```ignore
/// #[component]
/// fn WebNavbar() -> Element {
///     rsx! {
///         AppNavbar {}
///         Outlet::<Route> {}
///     }
/// }
/// ```
///
/// When the platform provides a `Signal<String>` language context, the locale
/// picker keeps it in sync so routed views re-render on a language change.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut menu_state = use_signal(MenuState::default);
    let router = RouterNavigation(use_navigator());

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency so labels refresh when the global language changes.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let state = menu_state();
    debug!(open = state.is_open(), lang = %lang_marker, "AppNavbar render");

    let on_lang_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let logo = menu::logo();
    let links: Vec<NavElement> = menu::links().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { class: "navbar",
            // Hidden marker ties this render to the global language signal.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar-container",
                div {
                    class: logo.class(),
                    onclick: move |_| {
                        let mut router = router;
                        menu_state.write().navigate_to(&mut router, logo.path());
                    },
                    {i18n::label(logo.item)}
                }

                div {
                    class: state.class_for("hamburger"),
                    role: "button",
                    aria_label: t!("nav-toggle-label"),
                    aria_expanded: "{state.is_open()}",
                    onclick: move |_| {
                        menu_state.write().toggle();
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }

                ul { class: state.class_for("navbar-menu"),
                    for el in links {
                        li { key: "{el.path()}", class: "navbar-item",
                            button {
                                class: el.class(),
                                onclick: move |_| {
                                    let mut router = router;
                                    menu_state.write().navigate_to(&mut router, el.path());
                                },
                                {i18n::label(el.item)}
                            }
                        }
                    }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar-locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_lang_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx! {
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
