use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section {
            class: "not-found-page",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, "Back to the homepage" }
        }
    }
}
