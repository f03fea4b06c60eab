use dioxus::prelude::*;

use super::use_lang_marker;

#[component]
pub fn Home() -> Element {
    let lang_marker = use_lang_marker();
    tracing::trace!(lang = %lang_marker, "Home render");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("page-home-title")} }
            p { {crate::t!("page-home-intro")} }
        }
    }
}
