//! Fake WordPress Content API for testing
//!
//! Serves predefined responses without any network requests, counts calls per
//! endpoint and can be told to fail individual endpoints.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rakuyu_feed::wordpress::{ContentApi, FetchError, PostQuery, PostsPage, WpDocument, WpPost, WpTerm, WpTermId};

use crate::common::fixtures;

/// Endpoints that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  Categories,
  CategoryLookup,
  Posts,
  Documents,
}

/// Number of calls received per endpoint.
#[derive(Debug, Default)]
pub struct CallCounts {
  pub categories: AtomicUsize,
  pub category_lookup: AtomicUsize,
  pub posts: AtomicUsize,
  pub documents: AtomicUsize,
}

impl CallCounts {
  pub fn get(&self, endpoint: Endpoint) -> usize {
    let counter = match endpoint {
      Endpoint::Categories => &self.categories,
      Endpoint::CategoryLookup => &self.category_lookup,
      Endpoint::Posts => &self.posts,
      Endpoint::Documents => &self.documents,
    };
    counter.load(Ordering::SeqCst)
  }

  /// Calls across every endpoint.
  pub fn total(&self) -> usize {
    [
      Endpoint::Categories,
      Endpoint::CategoryLookup,
      Endpoint::Posts,
      Endpoint::Documents,
    ]
    .into_iter()
    .map(|endpoint| self.get(endpoint))
    .sum()
  }
}

/// A fake Content API returning fixture data.
pub struct FakeWordPress {
  terms: Vec<WpTerm>,
  posts: Vec<WpPost>,
  documents: Vec<WpDocument>,
  pagination_headers: Option<(u32, u64)>,
  failing: HashSet<Endpoint>,
  pub calls: CallCounts,
  post_queries: Mutex<Vec<PostQuery>>,
}

impl FakeWordPress {
  /// Create a fake with no content at all
  pub fn new() -> Self {
    Self {
      terms: Vec::new(),
      posts: Vec::new(),
      documents: Vec::new(),
      pagination_headers: None,
      failing: HashSet::new(),
      calls: CallCounts::default(),
      post_queries: Mutex::new(Vec::new()),
    }
  }

  /// Create a fake loaded with the standard fixtures
  pub fn with_fixtures() -> Self {
    let mut fake = Self::new();
    fake.terms = serde_json::from_value(fixtures::categories_response()).unwrap();
    fake.posts = serde_json::from_value(fixtures::posts_response()).unwrap();
    fake.documents = serde_json::from_value(fixtures::documents_response()).unwrap();
    fake
  }

  /// Replace the category terms
  pub fn set_terms(&mut self, terms: Vec<WpTerm>) {
    self.terms = terms;
  }

  /// Send `X-WP-TotalPages` / `X-WP-Total` with every posts response
  pub fn set_pagination_headers(&mut self, total_pages: u32, total: u64) {
    self.pagination_headers = Some((total_pages, total));
  }

  /// Make `endpoint` answer with HTTP 500
  pub fn fail(&mut self, endpoint: Endpoint) {
    self.failing.insert(endpoint);
  }

  /// Every posts query received, in order
  pub fn post_queries(&self) -> Vec<PostQuery> {
    self.post_queries.lock().unwrap().clone()
  }

  fn check(&self, endpoint: Endpoint, resource: &'static str) -> Result<(), FetchError> {
    if self.failing.contains(&endpoint) {
      Err(FetchError::Status { resource, status: 500 })
    } else {
      Ok(())
    }
  }
}

impl Default for FakeWordPress {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ContentApi for FakeWordPress {
  async fn list_categories(&self) -> Result<Vec<WpTerm>, FetchError> {
    self.calls.categories.fetch_add(1, Ordering::SeqCst);
    self.check(Endpoint::Categories, "categories")?;
    Ok(self.terms.clone())
  }

  async fn find_category(&self, slug: &str) -> Result<Vec<WpTermId>, FetchError> {
    self.calls.category_lookup.fetch_add(1, Ordering::SeqCst);
    self.check(Endpoint::CategoryLookup, "categories")?;
    Ok(
      self
        .terms
        .iter()
        .filter(|term| term.slug == slug)
        .map(|term| WpTermId { id: term.id })
        .collect(),
    )
  }

  async fn list_posts(&self, query: &PostQuery) -> Result<PostsPage, FetchError> {
    self.calls.posts.fetch_add(1, Ordering::SeqCst);
    self.post_queries.lock().unwrap().push(*query);
    self.check(Endpoint::Posts, "posts")?;

    let per_page = query.per_page.max(1) as usize;
    let skip = (query.page.unwrap_or(1).max(1) as usize - 1) * per_page;
    let posts = self
      .posts
      .iter()
      .filter(|post| query.category_id.is_none_or(|id| post.categories.contains(&id)))
      .skip(skip)
      .take(per_page)
      .cloned()
      .collect();

    Ok(PostsPage {
      posts,
      total_pages: self.pagination_headers.map(|(pages, _)| pages),
      total: self.pagination_headers.map(|(_, total)| total),
    })
  }

  async fn list_documents(&self) -> Result<Vec<WpDocument>, FetchError> {
    self.calls.documents.fetch_add(1, Ordering::SeqCst);
    self.check(Endpoint::Documents, "documents")?;
    Ok(self.documents.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_fake_counts_calls() {
    let fake = FakeWordPress::with_fixtures();

    fake.list_categories().await.unwrap();
    fake.list_documents().await.unwrap();

    assert_eq!(fake.calls.get(Endpoint::Categories), 1);
    assert_eq!(fake.calls.get(Endpoint::Documents), 1);
    assert_eq!(fake.calls.total(), 2);
  }

  #[tokio::test]
  async fn test_fake_failure_is_status_error() {
    let mut fake = FakeWordPress::with_fixtures();
    fake.fail(Endpoint::Posts);

    let error = fake.list_posts(&PostQuery::latest(5)).await.unwrap_err();

    assert_eq!(error.resource(), "posts");
    assert_eq!(error.to_string(), "posts request returned HTTP 500");
  }

  #[tokio::test]
  async fn test_fake_filters_by_category() {
    let fake = FakeWordPress::with_fixtures();
    let query = PostQuery {
      per_page: 10,
      page: Some(1),
      category_id: Some(1),
    };

    let page = fake.list_posts(&query).await.unwrap();

    let ids: Vec<_> = page.posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, [501, 504]);
  }
}
