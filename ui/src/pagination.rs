//! Pagination helpers and controls.

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;
use dioxus::prelude::*;

/// Number of pages needed for `total` entries at `limit` per page.
/// Never below 1, even for an empty listing.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    total.div_ceil(limit).max(1) as u32
}

pub fn has_prev(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Previous/Next controls for a listing page.
///
/// Previous is hidden on the first page and Next on the last; the page
/// owning the listing navigates to the emitted page number, preserving
/// its current search parameter.
#[component]
pub fn PaginationControls(page: u32, total_pages: u32, on_navigate: EventHandler<u32>) -> Element {
    rsx! {
        nav {
            class: "pagination",
            if has_prev(page) {
                button {
                    class: "pagination-button pagination-button--prev",
                    onclick: move |_| on_navigate.call(page - 1),
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                    "Previous"
                }
            }
            span { class: "pagination-status", "Page {page} of {total_pages}" }
            if has_next(page, total_pages) {
                button {
                    class: "pagination-button pagination-button--next",
                    onclick: move |_| on_navigate.call(page + 1),
                    "Next"
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    }
}
