//! Client configuration.
//!
//! The FCG backend is addressed by a single webhook root URL. `Config` is an
//! explicit context value owned by the client — constructed once at session
//! start, never a global.

use serde::{Deserialize, Serialize};

/// Production n8n webhook root for the FCG backend.
pub const DEFAULT_BASE_URL: &str = "https://erfank.app.n8n.cloud/webhook";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Configuration pointing at the given backend root.
    ///
    /// A single trailing slash is stripped so endpoint paths can always be
    /// appended with their leading `/`. The URL is not otherwise validated.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize(base_url),
        }
    }

    /// Point the client at a different backend root. The same trailing-slash
    /// rule applies.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = normalize(base_url);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(Config::new("https://x/").base_url(), "https://x");
        assert_eq!(Config::new("https://x").base_url(), "https://x");
    }

    #[test]
    fn set_base_url_applies_the_same_rule() {
        let mut config = Config::default();
        config.set_base_url("https://h/webhook/");
        assert_eq!(config.base_url(), "https://h/webhook");
    }

    #[test]
    fn default_points_at_production() {
        assert_eq!(Config::default().base_url(), DEFAULT_BASE_URL);
    }
}
