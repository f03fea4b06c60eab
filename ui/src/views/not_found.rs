use dioxus::prelude::*;

use super::use_lang_marker;

/// Catch-all view for paths outside the route table.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let lang_marker = use_lang_marker();
    let path = format!("/{}", segments.join("/"));
    tracing::info!(%path, "no route matched");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-not-found",
            h1 { {crate::t!("page-not-found-title")} }
            p { {crate::t!("page-not-found-body", path = path.clone())} }
        }
    }
}
