use dioxus::prelude::*;

use api::{ApiClient, Project};
use ui::{EmptyState, ModalSelection, PaginationControls, ProjectCard, ProjectModal, SearchBox};

use crate::query::ListQuery;
use crate::Route;

use super::PAGE_SIZE;

/// Public project listing. Clicking a card selects the project and opens
/// its modal; at most one project is selected at a time (last click
/// wins), and the backdrop or the close button clears the selection.
#[component]
pub fn Projects(params: ListQuery) -> Element {
    let nav = use_navigator();

    if let Some(canonical) = params.canonicalize() {
        tracing::debug!("canonicalizing /projects to page=1");
        nav.replace(Route::Projects { params: canonical });
        return rsx! {};
    }

    let client = use_context::<ApiClient>();
    let page = params.page();
    let search = params.search();

    let listing = use_resource(use_reactive((&page, &search), move |(page, search)| {
        let client = client.clone();
        async move { client.get_projects(page, PAGE_SIZE, &search).await }
    }));

    let mut selected = use_signal(ModalSelection::<Project>::default);
    let open_project = selected.read().current().cloned();

    let params_for_search = params.clone();
    let params_for_nav = params.clone();

    rsx! {
        section {
            class: "listing-page",
            h1 { "Projects" }
            SearchBox {
                initial: search.clone(),
                placeholder: "Search projects...".to_string(),
                on_commit: move |query: String| {
                    nav.push(Route::Projects {
                        params: params_for_search.with_search(query),
                    });
                },
            }
            match &*listing.read() {
                Some(listing) => rsx! {
                    if listing.projects.is_empty() {
                        EmptyState { message: "No projects found".to_string() }
                    } else {
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
                        PaginationControls {
                            page: page,
                            total_pages: listing.total_pages,
                            on_navigate: move |target| {
                                nav.push(Route::Projects {
                                    params: params_for_nav.at_page(target),
                                });
                            },
                        }
                    }
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
