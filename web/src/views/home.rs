use dioxus::prelude::*;

use api::{ApiClient, Project};
use ui::{ModalSelection, ProjectCard, ProjectModal};

use crate::query::ListQuery;
use crate::Route;

/// Marketing landing page with a strip of featured projects.
#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let featured = use_resource(move || {
        let client = client.clone();
        async move { client.get_projects(1, 6, "").await }
    });

    let mut selected = use_signal(ModalSelection::<Project>::default);
    let open_project = selected.read().current().cloned();

    rsx! {
        section {
            class: "home-hero",
            h1 { "Show the work you're proud of" }
            p { "ProFolio is where professionals showcase their projects and find each other." }
            div {
                class: "home-hero-actions",
                Link {
                    class: "button button--primary",
                    to: Route::Users { params: ListQuery::first_page() },
                    "Browse members"
                }
                Link {
                    class: "button button--secondary",
                    to: Route::Projects { params: ListQuery::first_page() },
                    "Explore projects"
                }
            }
        }
        section {
            class: "home-featured",
            h2 { "Featured projects" }
            match &*featured.read() {
                Some(listing) if !listing.projects.is_empty() => rsx! {
                    div {
                        class: "card-grid",
                        for project in listing.projects.iter().cloned() {
                            ProjectCard {
                                key: "{project.id}",
                                project: project.clone(),
                                on_select: move |_| selected.write().select(project.clone()),
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    p { class: "home-featured-empty", "Nothing to feature yet — be the first." }
                },
                None => rsx! {
                    div { class: "loading-placeholder", "Loading projects..." }
                },
            }
            if let Some(project) = open_project {
                ProjectModal {
                    project,
                    on_close: move |_| selected.write().close(),
                }
            }
        }
    }
}
