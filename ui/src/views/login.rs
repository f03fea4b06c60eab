use dioxus::prelude::*;

use super::use_lang_marker;

/// Landing page of the navbar's call-to-action. Authentication itself lives
/// elsewhere; this only anchors the `/login` route.
#[component]
pub fn Login() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-login",
            h1 { {crate::t!("page-login-title")} }
            p { {crate::t!("page-login-intro")} }
        }
    }
}
