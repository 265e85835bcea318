//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Public URL the site is served from, used for the canonical link
    /// Example: https://jemsonnn.dev
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL").ok(),
        }
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Canonical URL of the page, without a trailing slash
    pub fn canonical_url(&self) -> Option<String> {
        if !self.has_site_url() {
            return None;
        }
        self.site_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/').to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
