//! Content API configuration captured once at start-up.
//!
//! The only setting is the base URL of the WordPress installation. When the
//! deployment never set one, the placeholder below is used and every consumer
//! serves the embedded fallback dataset without touching the network.

/// Base URL applied when no URL was provided.
pub const PLACEHOLDER_API_URL: &str = "https://your-wordpress-site.com";

/// Substring identifying a placeholder URL, including edited variants of it.
pub const PLACEHOLDER_MARKER: &str = "your-wordpress-site";

/// Environment variable carrying the base URL.
pub const API_URL_ENV: &str = "WP_API_URL";

/// Immutable site configuration shared by reference with every consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
  base_url: String,
}

impl SiteConfig {
  /// Resolve the configuration from the raw (possibly absent) URL value.
  ///
  /// Absence applies [`PLACEHOLDER_API_URL`]; an explicitly empty value stays
  /// empty and is reported as unconfigured. Trailing slashes are trimmed so
  /// endpoint paths can be appended directly.
  pub fn resolve(raw_url: Option<&str>) -> Self {
    let url = raw_url.unwrap_or(PLACEHOLDER_API_URL).trim();
    Self {
      base_url: url.trim_end_matches('/').to_string(),
    }
  }

  /// Base URL with trailing slashes removed.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Whether a real Content API has been set up.
  pub fn is_configured(&self) -> bool {
    !self.base_url.is_empty() && !self.base_url.contains(PLACEHOLDER_MARKER)
  }
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self::resolve(None)
  }
}
