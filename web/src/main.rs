use dioxus::prelude::*;

use api::{ApiClient, ApiConfig};
use ui::{AppErrorBoundary, Navbar};
use views::{Home, NotFound, Profile, Projects, Users};

mod query;
mod views;

use query::ListQuery;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/users?:..params")]
    Users { params: ListQuery },
    #[route("/projects?:..params")]
    Projects { params: ListQuery },
    #[route("/u/:friendly_id")]
    Profile { friendly_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);

    #[cfg(not(feature = "web"))]
    eprintln!("this binary targets the browser; run `dx serve --platform web`");
}

#[component]
fn App() -> Element {
    // Constructed once at launch; read-only for the lifetime of the app.
    use_context_provider(|| ApiClient::new(ApiConfig::from_env()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Navigation chrome plus a per-route containment boundary: a render
/// failure inside a page shows the fallback until the next route change
/// remounts the boundary.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar-link", to: Route::Home {}, "Home" }
            Link {
                class: "navbar-link",
                to: Route::Users { params: ListQuery::first_page() },
                "Members"
            }
            Link {
                class: "navbar-link",
                to: Route::Projects { params: ListQuery::first_page() },
                "Projects"
            }
        }
        AppErrorBoundary {
            Outlet::<Route> {}
        }
    }
}
