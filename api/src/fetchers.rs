//! # Fail-soft domain fetchers
//!
//! The operations pages actually call. Every fetcher catches whatever the
//! client wrapper raises, logs it, and resolves with a documented empty
//! default — callers never need a recovery path and render the uniform
//! "No … found" empty states instead.
//!
//! Pagination policy: counts describe the *publicly listable* collection.
//! Both listings start from the server-reported total and subtract the
//! entries the visibility filter dropped from the fetched page, so users
//! and projects paginate by the same rule.

use crate::client::{ApiClient, CachePolicy};
use crate::error::ApiError;
use crate::models::{
    Envelope, ProfileData, Project, ProjectsPage, ShowcaseData, User, UsersPage,
};

/// One page of the public user listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListing {
    pub users: Vec<User>,
    /// Count of publicly listable users matching the search.
    pub total: u64,
}

/// One page of the public project listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListing {
    pub projects: Vec<Project>,
    /// At least 1, even when the listing is empty.
    pub total_pages: u32,
}

impl Default for ProjectListing {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            total_pages: 1,
        }
    }
}

/// A public profile together with its showcased projects.
#[derive(Debug, Clone, PartialEq)]
pub struct UserShowcase {
    pub user: User,
    pub projects: Vec<Project>,
}

fn list_query(page: u32, limit: u32, search: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", page.max(1).to_string()),
        ("limit", limit.max(1).to_string()),
    ];
    if !search.is_empty() {
        query.push(("search", search.to_string()));
    }
    query
}

/// Server total adjusted by the entries the visibility filter dropped
/// from the fetched page.
fn adjusted_total(server_total: u64, fetched: usize, kept: usize) -> u64 {
    let dropped = (fetched - kept) as u64;
    server_total.max(fetched as u64).saturating_sub(dropped)
}

fn pages_for(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    total.div_ceil(limit).max(1) as u32
}

impl ApiClient {
    /// Fetch one page of the public user listing.
    ///
    /// Filters out users without a completed profile; `total` counts the
    /// listable collection. On any failure resolves with `{ [], 0 }`.
    pub async fn get_users(&self, page: u32, limit: u32, search: &str) -> UserListing {
        match self.try_get_users(page, limit, search).await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!(error = %e, "user listing unavailable, serving empty page");
                UserListing::default()
            }
        }
    }

    async fn try_get_users(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<UserListing, ApiError> {
        let body = self
            .get_json(
                &self.endpoints().users(),
                &list_query(page, limit, search),
                CachePolicy::UseCache,
            )
            .await?;
        let envelope: Envelope<UsersPage> = serde_json::from_value(body)?;

        let fetched = envelope.data.users.len();
        let mut users: Vec<User> = envelope
            .data
            .users
            .into_iter()
            .filter(|u| u.completed_profile)
            .collect();
        // Count what the filter kept before capping to the requested
        // limit; truncated rows are still part of the listable total.
        let kept = users.len();
        users.truncate(limit.max(1) as usize);

        let total = adjusted_total(envelope.data.pagination.total, fetched, kept);
        Ok(UserListing { users, total })
    }

    /// Fetch one page of the public project listing.
    ///
    /// Keeps only projects whose owner has a completed profile and
    /// normalizes each (tag dedup). On any failure resolves with
    /// `{ [], total_pages: 1 }`.
    pub async fn get_projects(&self, page: u32, limit: u32, search: &str) -> ProjectListing {
        match self.try_get_projects(page, limit, search).await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!(error = %e, "project listing unavailable, serving empty page");
                ProjectListing::default()
            }
        }
    }

    async fn try_get_projects(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<ProjectListing, ApiError> {
        let body = self
            .get_json(
                &self.endpoints().projects(),
                &list_query(page, limit, search),
                CachePolicy::UseCache,
            )
            .await?;
        let envelope: Envelope<ProjectsPage> = serde_json::from_value(body)?;

        let fetched = envelope.data.projects.len();
        let mut projects: Vec<Project> = envelope
            .data
            .projects
            .into_iter()
            .filter(Project::publicly_listable)
            .map(Project::normalize)
            .collect();
        let kept = projects.len();
        projects.truncate(limit.max(1) as usize);

        let total = adjusted_total(envelope.data.pagination.total, fetched, kept);
        Ok(ProjectListing {
            projects,
            total_pages: pages_for(total, limit),
        })
    }

    /// Fetch a single public profile by slug. Resolves with `None` on any
    /// failure, on an empty slug, and when the API has no such user.
    pub async fn get_user_profile(&self, friendly_id: &str) -> Option<User> {
        let friendly_id = friendly_id.trim();
        if friendly_id.is_empty() {
            return None;
        }
        match self.try_get_user_profile(friendly_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(%friendly_id, error = %e, "profile unavailable");
                None
            }
        }
    }

    async fn try_get_user_profile(&self, friendly_id: &str) -> Result<Option<User>, ApiError> {
        let body = self
            .get_json(
                &self.endpoints().user_profile(friendly_id),
                &[],
                CachePolicy::UseCache,
            )
            .await?;
        let envelope: Envelope<ProfileData> = serde_json::from_value(body)?;
        Ok(envelope.data.user)
    }

    /// Fetch a user's showcase (profile + projects) by slug.
    ///
    /// Resolves with `None` on failure, on an empty slug, and when the
    /// envelope reports `success: false` or omits the user.
    pub async fn get_user_projects(&self, friendly_id: &str) -> Option<UserShowcase> {
        let friendly_id = friendly_id.trim();
        if friendly_id.is_empty() {
            return None;
        }
        match self.try_get_user_projects(friendly_id).await {
            Ok(showcase) => showcase,
            Err(e) => {
                tracing::warn!(%friendly_id, error = %e, "showcase unavailable");
                None
            }
        }
    }

    async fn try_get_user_projects(
        &self,
        friendly_id: &str,
    ) -> Result<Option<UserShowcase>, ApiError> {
        let body = self
            .get_json(
                &self.endpoints().user_projects(friendly_id),
                &[],
                CachePolicy::UseCache,
            )
            .await?;
        let envelope: Envelope<ShowcaseData> = serde_json::from_value(body)?;
        if !envelope.success {
            return Ok(None);
        }
        let Some(user) = envelope.data.user else {
            return Ok(None);
        };
        let projects = envelope
            .data
            .projects
            .into_iter()
            .map(Project::normalize)
            .collect();
        Ok(Some(UserShowcase { user, projects }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_total_subtracts_dropped_entries() {
        assert_eq!(adjusted_total(3, 3, 2), 2);
        assert_eq!(adjusted_total(40, 20, 20), 40);
        // Server total missing (0): fall back to what we actually saw.
        assert_eq!(adjusted_total(0, 3, 2), 2);
    }

    #[test]
    fn pages_never_drop_below_one() {
        assert_eq!(pages_for(0, 20), 1);
        assert_eq!(pages_for(1, 20), 1);
        assert_eq!(pages_for(20, 20), 1);
        assert_eq!(pages_for(21, 20), 2);
    }

    #[test]
    fn search_param_is_omitted_when_empty() {
        let query = list_query(1, 20, "");
        assert_eq!(query.len(), 2);
        let query = list_query(1, 20, "design");
        assert_eq!(query[2], ("search", "design".to_string()));
    }
}
