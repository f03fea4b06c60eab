//! Static content pages linked from the navbar.

use dioxus::prelude::*;

use super::use_lang_marker;

#[component]
fn StaticPage(class: &'static str, lang: String, title: String, intro: String) -> Element {
    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "page {class}",
            h1 { "{title}" }
            p { "{intro}" }
        }
    }
}

#[component]
pub fn About() -> Element {
    // Subscribe here so the localized strings below are rebuilt on change.
    let lang = use_lang_marker();
    rsx! {
        StaticPage {
            lang,
            class: "page-about",
            title: crate::t!("page-about-title"),
            intro: crate::t!("page-about-intro"),
        }
    }
}

#[component]
pub fn Services() -> Element {
    let lang = use_lang_marker();
    rsx! {
        StaticPage {
            lang,
            class: "page-services",
            title: crate::t!("page-services-title"),
            intro: crate::t!("page-services-intro"),
        }
    }
}

#[component]
pub fn Products() -> Element {
    let lang = use_lang_marker();
    rsx! {
        StaticPage {
            lang,
            class: "page-products",
            title: crate::t!("page-products-title"),
            intro: crate::t!("page-products-intro"),
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let lang = use_lang_marker();
    rsx! {
        StaticPage {
            lang,
            class: "page-contact",
            title: crate::t!("page-contact-title"),
            intro: crate::t!("page-contact-intro"),
        }
    }
}
