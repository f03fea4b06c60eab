use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::{About, Contact, Home, Login, PageNotFound, Products, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/products")]
    Products {},
    #[route("/contact")]
    Contact {},
    #[route("/login")]
    Login {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting MyApp web");

    // Global reactive language code; AppNavbar updates it on locale change.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
