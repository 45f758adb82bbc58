//! Feed consumers: the news list, the news ticker and the document library.
//!
//! Each consumer walks `Idle -> Loading -> Success | Fallback` and returns to
//! `Loading` whenever its parameters change and it is loaded again. There is
//! no error state: a failed fetch is reduced to the embedded fallback dataset
//! in [`load_or_fallback`], the only place that decision is made.

use std::future::Future;

use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::content::{
  Document, NewsCategory, PaginatedResult, Post, emulate_news_page, fetch_annotated_posts, fetch_documents,
  fetch_paginated_posts, fallback_documents, fallback_posts,
};
use crate::wordpress::{ContentApi, FetchError};

/// Default number of posts per news page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Default number of posts in the ticker.
pub const DEFAULT_TICKER_LIMIT: u32 = 5;

/// Lifecycle of a consumer's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState<T> {
  Idle,
  Loading,
  /// Served by the live Content API.
  Success(T),
  /// Served from the embedded dataset; renders exactly like `Success`.
  Fallback(T),
}

impl<T> FeedState<T> {
  /// Data to render, regardless of which source served it.
  pub fn data(&self) -> Option<&T> {
    match self {
      FeedState::Success(data) | FeedState::Fallback(data) => Some(data),
      FeedState::Idle | FeedState::Loading => None,
    }
  }

  pub fn is_loading(&self) -> bool {
    matches!(self, FeedState::Loading)
  }

  pub fn is_fallback(&self) -> bool {
    matches!(self, FeedState::Fallback(_))
  }
}

/// Run `live` when the API is configured, otherwise (or when it fails) use
/// `fallback`.
///
/// `live` is never polled for an unconfigured site, so no request is made.
pub async fn load_or_fallback<T, F>(config: &SiteConfig, live: F, fallback: impl FnOnce() -> T) -> FeedState<T>
where
  F: Future<Output = Result<T, FetchError>>,
{
  if !config.is_configured() {
    debug!("content API not configured; serving embedded content");
    return FeedState::Fallback(fallback());
  }

  match live.await {
    Ok(data) => FeedState::Success(data),
    Err(error) => {
      warn!(%error, resource = error.resource(), "live fetch failed; serving embedded content");
      FeedState::Fallback(fallback())
    }
  }
}

/// Paginated, category-filterable news list.
#[derive(Debug, Clone)]
pub struct NewsFeed {
  category: Option<NewsCategory>,
  page: u32,
  page_size: u32,
  state: FeedState<PaginatedResult<Post>>,
}

impl NewsFeed {
  pub fn new(page_size: u32) -> Self {
    Self {
      category: None,
      page: 1,
      page_size: page_size.max(1),
      state: FeedState::Idle,
    }
  }

  pub fn category(&self) -> Option<NewsCategory> {
    self.category
  }

  pub fn page(&self) -> u32 {
    self.page
  }

  pub fn page_size(&self) -> u32 {
    self.page_size
  }

  pub fn state(&self) -> &FeedState<PaginatedResult<Post>> {
    &self.state
  }

  /// Switch category (`None` = all); always returns to the first page.
  pub fn set_category(&mut self, category: Option<NewsCategory>) {
    self.category = category;
    self.page = 1;
  }

  pub fn set_page(&mut self, page: u32) {
    self.page = page.max(1);
  }

  /// Fetch the current page, falling back to the emulated archive.
  pub async fn load(&mut self, config: &SiteConfig, api: &dyn ContentApi) -> &FeedState<PaginatedResult<Post>> {
    self.state = FeedState::Loading;
    let (category, page, page_size) = (self.category, self.page, self.page_size);

    self.state = load_or_fallback(
      config,
      fetch_paginated_posts(api, page, page_size, category.map(|category| category.slug())),
      || emulate_news_page(category, page, page_size),
    )
    .await;
    &self.state
  }
}

impl Default for NewsFeed {
  fn default() -> Self {
    Self::new(DEFAULT_PAGE_SIZE)
  }
}

/// The short list of latest posts shown on the home page.
#[derive(Debug, Clone)]
pub struct TickerFeed {
  limit: u32,
  state: FeedState<Vec<Post>>,
}

impl TickerFeed {
  pub fn new(limit: u32) -> Self {
    Self {
      limit: limit.max(1),
      state: FeedState::Idle,
    }
  }

  pub fn state(&self) -> &FeedState<Vec<Post>> {
    &self.state
  }

  pub async fn load(&mut self, config: &SiteConfig, api: &dyn ContentApi) -> &FeedState<Vec<Post>> {
    self.state = FeedState::Loading;
    let limit = self.limit;

    self.state = load_or_fallback(config, fetch_annotated_posts(api, limit), || {
      fallback_posts().into_iter().take(limit as usize).collect()
    })
    .await;
    &self.state
  }
}

impl Default for TickerFeed {
  fn default() -> Self {
    Self::new(DEFAULT_TICKER_LIMIT)
  }
}

/// The downloadable document library.
#[derive(Debug, Clone)]
pub struct DocumentFeed {
  state: FeedState<Vec<Document>>,
}

impl DocumentFeed {
  pub fn new() -> Self {
    Self { state: FeedState::Idle }
  }

  pub fn state(&self) -> &FeedState<Vec<Document>> {
    &self.state
  }

  pub async fn load(&mut self, config: &SiteConfig, api: &dyn ContentApi) -> &FeedState<Vec<Document>> {
    self.state = FeedState::Loading;
    self.state = load_or_fallback(config, fetch_documents(api), fallback_documents).await;
    &self.state
  }
}

impl Default for DocumentFeed {
  fn default() -> Self {
    Self::new()
  }
}
