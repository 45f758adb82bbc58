//! Trait definitions for reading from the Content API.

use async_trait::async_trait;

use super::error::FetchError;
use super::models::{PostQuery, PostsPage, WpDocument, WpTerm, WpTermId};

/// Read-only operations against the WordPress REST API (enables testing with
/// fake implementations).
#[async_trait]
pub trait ContentApi: Send + Sync {
  /// List up to 100 category terms as `{id, slug}` pairs.
  async fn list_categories(&self) -> Result<Vec<WpTerm>, FetchError>;

  /// Look up a single category by slug.
  ///
  /// # Returns
  /// At most one term ID; an empty vector when no category has that slug.
  async fn find_category(&self, slug: &str) -> Result<Vec<WpTermId>, FetchError>;

  /// Fetch one page of posts together with the pagination headers.
  async fn list_posts(&self, query: &PostQuery) -> Result<PostsPage, FetchError>;

  /// Fetch up to 100 documents from the `document` post type.
  async fn list_documents(&self) -> Result<Vec<WpDocument>, FetchError>;
}
