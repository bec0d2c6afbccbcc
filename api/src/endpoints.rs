//! Pure registry of the remote API's REST paths.

/// Maps a base URL to the full table of REST endpoints.
///
/// Construction cannot fail and performs no I/O; the base URL is not
/// validated here, so a malformed origin only shows up downstream as an
/// HTTP error. A trailing `/` on the base is tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Paginated, searchable public user listing.
    pub fn users(&self) -> String {
        format!("{}/users", self.base)
    }

    /// Paginated, searchable public project listing.
    pub fn projects(&self) -> String {
        format!("{}/projects", self.base)
    }

    /// Single public profile, addressed by its URL-safe slug.
    pub fn user_profile(&self, friendly_id: &str) -> String {
        format!("{}/user/{}", self.base, friendly_id)
    }

    /// A user's project showcase, addressed by the owner's slug.
    pub fn user_projects(&self, friendly_id: &str) -> String {
        format!("{}/projects/user/{}", self.base, friendly_id)
    }

    // Auth and admin routes exist on the remote API; the public pages do
    // not call them, but the table stays complete so other frontends can.

    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    pub fn register(&self) -> String {
        format!("{}/auth/register", self.base)
    }

    pub fn logout(&self) -> String {
        format!("{}/auth/logout", self.base)
    }

    pub fn me(&self) -> String {
        format!("{}/auth/me", self.base)
    }

    pub fn admin_users(&self) -> String {
        format!("{}/admin/users", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_paths() {
        let endpoints = Endpoints::new("https://api.example.com/api/v1");
        assert_eq!(endpoints.users(), "https://api.example.com/api/v1/users");
        assert_eq!(
            endpoints.projects(),
            "https://api.example.com/api/v1/projects"
        );
    }

    #[test]
    fn builds_parameterized_paths() {
        let endpoints = Endpoints::new("https://api.example.com/api/v1");
        assert_eq!(
            endpoints.user_profile("jane-doe"),
            "https://api.example.com/api/v1/user/jane-doe"
        );
        assert_eq!(
            endpoints.user_projects("jane-doe"),
            "https://api.example.com/api/v1/projects/user/jane-doe"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let endpoints = Endpoints::new("https://api.example.com/api/v1/");
        assert_eq!(endpoints.users(), "https://api.example.com/api/v1/users");
    }
}
