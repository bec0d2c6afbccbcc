//! Query parameters of the listing routes.
//!
//! `page` and `search` in the URL are the canonical list state: back and
//! forward navigation reproduce prior listings from them alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `?page=…&search=…` on `/users` and `/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    /// Canonical entry point for a listing: page 1, no search.
    pub fn first_page() -> Self {
        Self {
            page: Some(1),
            search: None,
        }
    }

    /// Effective 1-based page (canonicalized listings always have one).
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective search string, empty when absent.
    pub fn search(&self) -> String {
        self.search.clone().unwrap_or_default()
    }

    /// A listing URL without an explicit page is ambiguous; mounting
    /// replaces it with the same query pinned to page 1. `None` means
    /// the URL is already canonical.
    pub fn canonicalize(&self) -> Option<Self> {
        if self.page.is_some() {
            return None;
        }
        Some(self.at_page(1))
    }

    /// Same search, different page.
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: Some(page.max(1)),
            search: self.search.clone(),
        }
    }

    /// New committed search; resets to page 1. An empty commit clears the
    /// search parameter entirely.
    pub fn with_search(&self, search: String) -> Self {
        Self {
            page: Some(1),
            search: if search.is_empty() { None } else { Some(search) },
        }
    }
}

impl From<&str> for ListQuery {
    fn from(query: &str) -> Self {
        serde_urlencoded::from_str(query).unwrap_or_default()
    }
}

impl fmt::Display for ListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            serde_urlencoded::to_string(self).unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_encoded_search() {
        let query = ListQuery::from("page=2&search=web%20design");
        assert_eq!(query.page(), 2);
        assert_eq!(query.search(), "web design");
    }

    #[test]
    fn missing_params_default() {
        let query = ListQuery::from("");
        assert_eq!(query.page, None);
        assert_eq!(query.page(), 1);
        assert_eq!(query.search(), "");
    }

    #[test]
    fn garbage_degrades_to_defaults() {
        let query = ListQuery::from("page=not-a-number");
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn display_omits_absent_params() {
        assert_eq!(ListQuery::first_page().to_string(), "page=1");
        let query = ListQuery {
            page: Some(2),
            search: Some("web design".to_string()),
        };
        assert_eq!(query.to_string(), "page=2&search=web+design");
    }

    #[test]
    fn bare_listing_urls_canonicalize_to_page_one() {
        let canonical = ListQuery::from("").canonicalize().expect("redirect");
        assert_eq!(canonical.page, Some(1));

        // The search survives the redirect.
        let canonical = ListQuery::from("search=design")
            .canonicalize()
            .expect("redirect");
        assert_eq!(canonical.page(), 1);
        assert_eq!(canonical.search(), "design");

        // An explicit page is already canonical; no redirect.
        assert_eq!(ListQuery::from("page=3").canonicalize(), None);
    }

    #[test]
    fn committing_a_search_resets_to_page_one() {
        let query = ListQuery {
            page: Some(4),
            search: None,
        };
        let committed = query.with_search("design".to_string());
        assert_eq!(committed.page(), 1);
        assert_eq!(committed.search(), "design");

        // Clearing drops the parameter instead of keeping an empty one.
        let cleared = committed.with_search(String::new());
        assert_eq!(cleared.search, None);
        assert_eq!(cleared.page(), 1);
    }
}
