//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod debounce;
pub use debounce::Debouncer;

mod search;
pub use search::{SearchBox, SearchEffect, SearchMachine, SearchPhase, SEARCH_DEBOUNCE};

mod pagination;
pub use pagination::{has_next, has_prev, total_pages, PaginationControls};

mod carousel;
pub use carousel::{Carousel, CarouselIndex};

mod modal;
pub use modal::{ModalOverlay, ModalSelection, ProjectModal};

mod error_boundary;
pub use error_boundary::AppErrorBoundary;

mod profession;
pub use profession::{Profession, ProfessionBadge};

mod cards;
pub use cards::{EmptyState, ProjectCard, UserCard};

mod social;
pub use social::SocialLinksRow;

mod navbar;
pub use navbar::Navbar;
