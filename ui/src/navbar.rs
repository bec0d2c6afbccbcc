use dioxus::prelude::*;

/// Site navigation shell. The app fills it with router links; keeping
/// this crate free of the route table lets every frontend reuse it.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-brand", "ProFolio" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
