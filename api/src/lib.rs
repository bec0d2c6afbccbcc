//! # API crate — data layer for the ProFolio frontends
//!
//! Everything the pages need to talk to the remote ProFolio REST API lives
//! here: the endpoint registry, the HTTP client wrapper, the view models,
//! and the fail-soft domain fetchers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL + cache TTL, read once at application start |
//! | [`endpoints`] | Pure mapping from the base URL to the REST path table |
//! | [`client`] | [`ApiClient`]: URL resolution, response cache, error translation |
//! | [`error`] | [`ApiError`]: transport vs. API-status vs. decode failures |
//! | [`models`] | View models (`User`, `Project`, `Tag`, ...) and response envelopes |
//! | [`fetchers`] | Fail-soft operations the pages call (`get_users`, `get_projects`, ...) |
//!
//! The fetchers never reject: on any failure they log and resolve with a
//! documented empty default, so pages render uniform empty states instead
//! of scattering error handling.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod fetchers;
pub mod models;

pub use client::{ApiClient, CachePolicy};
pub use config::ApiConfig;
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use fetchers::{ProjectListing, UserListing, UserShowcase};
pub use models::{Media, Project, SocialLinks, Tag, User};
