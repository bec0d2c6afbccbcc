use dioxus::prelude::*;

use api::ApiClient;
use ui::{total_pages, EmptyState, PaginationControls, SearchBox, UserCard};

use crate::query::ListQuery;
use crate::Route;

use super::PAGE_SIZE;

/// Public member listing: searchable, paginated grid of completed
/// profiles. List state lives in the URL so history navigation restores
/// prior pages.
#[component]
pub fn Users(params: ListQuery) -> Element {
    let nav = use_navigator();

    if let Some(canonical) = params.canonicalize() {
        tracing::debug!("canonicalizing /users to page=1");
        nav.replace(Route::Users { params: canonical });
        return rsx! {};
    }

    let client = use_context::<ApiClient>();
    let page = params.page();
    let search = params.search();

    let listing = use_resource(use_reactive((&page, &search), move |(page, search)| {
        let client = client.clone();
        async move { client.get_users(page, PAGE_SIZE, &search).await }
    }));

    let params_for_search = params.clone();
    let params_for_nav = params.clone();

    rsx! {
        section {
            class: "listing-page",
            h1 { "Members" }
            SearchBox {
                initial: search.clone(),
                placeholder: "Search members...".to_string(),
                on_commit: move |query: String| {
                    nav.push(Route::Users {
                        params: params_for_search.with_search(query),
                    });
                },
            }
            match &*listing.read() {
                Some(listing) => rsx! {
                    if listing.users.is_empty() {
                        EmptyState { message: "No users found".to_string() }
                    } else {
                        div {
                            class: "card-grid",
                            for user in listing.users.iter().cloned() {
                                UserCard {
                                    key: "{user.friendly_id}",
                                    user: user.clone(),
                                    on_select: move |_| {
                                        nav.push(Route::Profile {
                                            friendly_id: user.friendly_id.clone(),
                                        });
                                    },
                                }
                            }
                        }
                        PaginationControls {
                            page: page,
                            total_pages: total_pages(listing.total, PAGE_SIZE),
                            on_navigate: move |target| {
                                nav.push(Route::Users {
                                    params: params_for_nav.at_page(target),
                                });
                            },
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading-placeholder", "Loading members..." }
                },
            }
        }
    }
}
