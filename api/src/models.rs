//! # View models and response envelopes
//!
//! Snapshot types returned by the fetchers. The remote API speaks
//! camelCase JSON; every optional or collection field carries
//! `#[serde(default)]` so a missing field degrades to an empty value
//! instead of a decode error — there is deliberately no schema
//! enforcement at this boundary.

use serde::{Deserialize, Serialize};

/// A member profile as shown in listings and on the public profile page.
///
/// Only users with `completed_profile == true` are eligible for public
/// listings; the fetchers enforce that invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    /// URL-safe unique slug used in public profile routes.
    #[serde(default)]
    pub friendly_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Free-form profession label ("Developer", "UI/UX Designer", ...).
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub country_origin: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    /// Gates eligibility for public listings.
    #[serde(default)]
    pub completed_profile: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// External profile links. All optional; unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub dribbble: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.linkedin.is_none()
            && self.instagram.is_none()
            && self.dribbble.is_none()
            && self.website.is_none()
    }
}

/// A showcased project. `media` is ordered (the carousel indexes into
/// it); `tags` are unique by id after [`Project::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Owning user, when the endpoint embeds it.
    #[serde(default)]
    pub user: Option<User>,
}

impl Project {
    /// Drop duplicate tags (same id), keeping first occurrence order.
    /// Media order is preserved untouched.
    pub fn normalize(mut self) -> Self {
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|tag| {
            if seen.contains(&tag.id) {
                false
            } else {
                seen.push(tag.id.clone());
                true
            }
        });
        self
    }

    /// Whether the project may appear in public listings: its owner must
    /// have a completed profile. Projects without an embedded owner are
    /// not listable.
    pub fn publicly_listable(&self) -> bool {
        self.user
            .as_ref()
            .map(|u| u.completed_profile)
            .unwrap_or(false)
    }
}

/// A label shared across projects, never owned by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One entry of a project's ordered media list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: String,
}

/// The `{ success, data }` envelope collection endpoints respond with.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
}

/// Pagination block embedded in collection responses.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub total: u64,
}

/// `data` payload of `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: PaginationMeta,
}

/// `data` payload of `GET /projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsPage {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: PaginationMeta,
}

/// `data` payload of `GET /user/:friendlyId`.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub user: Option<User>,
}

/// `data` payload of `GET /projects/user/:friendlyId`.
#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_dedups_tags_by_id() {
        let project = Project {
            tags: vec![
                Tag { id: "t1".into(), name: "rust".into() },
                Tag { id: "t2".into(), name: "web".into() },
                Tag { id: "t1".into(), name: "rust-dupe".into() },
            ],
            ..Project::default()
        };
        let normalized = project.normalize();
        assert_eq!(normalized.tags.len(), 2);
        assert_eq!(normalized.tags[0].name, "rust");
        assert_eq!(normalized.tags[1].name, "web");
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let user: User = serde_json::from_str(r#"{"friendlyId": "jane"}"#).unwrap();
        assert_eq!(user.friendly_id, "jane");
        assert!(!user.completed_profile);
        assert!(user.skills.is_empty());
        assert!(user.social_links.is_empty());
    }

    #[test]
    fn camel_case_fields_map_onto_snake_case() {
        let json = r#"{
            "friendlyId": "jane",
            "username": "jane",
            "completedProfile": true,
            "countryOrigin": "Portugal",
            "socialLinks": { "github": "https://github.com/jane" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.completed_profile);
        assert_eq!(user.country_origin.as_deref(), Some("Portugal"));
        assert_eq!(
            user.social_links.github.as_deref(),
            Some("https://github.com/jane")
        );
    }

    #[test]
    fn project_without_owner_is_not_listable() {
        let project = Project::default();
        assert!(!project.publicly_listable());

        let listed = Project {
            user: Some(User {
                completed_profile: true,
                ..User::default()
            }),
            ..Project::default()
        };
        assert!(listed.publicly_listable());
    }
}
