//! HTTP client implementation for talking to the WordPress REST API.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;
use url::form_urlencoded;

use super::api::ContentApi;
use super::error::FetchError;
use super::models::{PostQuery, PostsPage, WpDocument, WpPost, WpTerm, WpTermId};

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
const CATEGORIES_PATH: &str = "/wp-json/wp/v2/categories";
const DOCUMENTS_PATH: &str = "/wp-json/wp/v2/document";

const POST_FIELDS: &str = "id,date,title,excerpt,link,slug,categories";
const DOCUMENT_FIELDS: &str = "id,date,title,excerpt,acf,slug,link";

/// Page size used for the taxonomy listing and the document library.
const COLLECTION_LIMIT: u32 = 100;

const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";
const TOTAL_HEADER: &str = "x-wp-total";

/// WordPress REST API client.
#[derive(Clone)]
pub struct WordPressClient {
  base_url: String,
  client: reqwest::Client,
  rate_limiter: Arc<RequestRateLimiter>,
}

/// Simple fixed-window rate limiter to cap the number of requests per interval.
#[derive(Debug)]
struct RequestRateLimiter {
  max_requests: usize,
  window: Duration,
  timestamps: Mutex<VecDeque<Instant>>,
}

impl RequestRateLimiter {
  fn new(max_requests: usize, window: Duration) -> Self {
    Self {
      max_requests,
      window,
      timestamps: Mutex::new(VecDeque::with_capacity(max_requests)),
    }
  }

  /// Wait until another request fits inside the current window.
  async fn acquire(&self) {
    loop {
      let mut timestamps = self.timestamps.lock().await;
      let now = Instant::now();

      while let Some(earliest) = timestamps.front()
        && now.duration_since(*earliest) >= self.window
      {
        timestamps.pop_front();
      }

      let earliest = match timestamps.front() {
        Some(earliest) if timestamps.len() >= self.max_requests => *earliest,
        _ => {
          timestamps.push_back(now);
          return;
        }
      };

      let wait = self.window.saturating_sub(now.duration_since(earliest));
      drop(timestamps);

      if !wait.is_zero() {
        sleep(wait).await;
      }
    }
  }
}

impl WordPressClient {
  /// Create a new client.
  ///
  /// # Arguments
  /// * `base_url` - Root of the WordPress site (e.g. `https://cms.example.jp`)
  /// * `timeout_secs` - Request timeout in seconds
  /// * `rate_limit` - Maximum requests per second
  ///
  /// # Errors
  /// Returns an error if the rate limit is zero or if the underlying
  /// `reqwest::Client` cannot be built.
  pub fn new(base_url: impl Into<String>, timeout_secs: u64, rate_limit: usize) -> Result<Self> {
    if rate_limit == 0 {
      return Err(anyhow!("Rate limit must be at least 1 request per second"));
    }

    let base_url = base_url.into().trim_end_matches('/').to_string();

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .user_agent(format!(
        "rakuyu-feed/{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TARGET")
      ))
      .build()
      .context("Failed to create HTTP client")?;

    Ok(Self {
      base_url,
      client,
      rate_limiter: Arc::new(RequestRateLimiter::new(rate_limit, Duration::from_secs(1))),
    })
  }

  /// Build the absolute URL for an endpoint path plus query pairs.
  fn endpoint_url(&self, path: &str, query: &[(&str, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
      serializer.append_pair(key, value);
    }
    format!("{}{}?{}", self.base_url, path, serializer.finish())
  }

  /// Issue a GET and reject non-2xx responses.
  async fn get(
    &self,
    resource: &'static str,
    path: &str,
    query: &[(&str, String)],
  ) -> Result<reqwest::Response, FetchError> {
    self.rate_limiter.acquire().await;

    let url = self.endpoint_url(path, query);
    debug!(%url, resource, "GET");

    let response = self
      .client
      .get(&url)
      .header("Accept", "application/json")
      .send()
      .await
      .map_err(|source| FetchError::Transport { resource, source })?;

    let status = response.status();
    if !status.is_success() {
      return Err(FetchError::Status {
        resource,
        status: status.as_u16(),
      });
    }

    Ok(response)
  }

  async fn get_json<T: DeserializeOwned>(
    &self,
    resource: &'static str,
    path: &str,
    query: &[(&str, String)],
  ) -> Result<T, FetchError> {
    let response = self.get(resource, path, query).await?;
    response
      .json()
      .await
      .map_err(|source| FetchError::Decode { resource, source })
  }
}

#[async_trait]
impl ContentApi for WordPressClient {
  async fn list_categories(&self) -> Result<Vec<WpTerm>, FetchError> {
    let query = [
      ("per_page", COLLECTION_LIMIT.to_string()),
      ("_fields", "id,slug".to_string()),
    ];
    self.get_json("categories", CATEGORIES_PATH, &query).await
  }

  async fn find_category(&self, slug: &str) -> Result<Vec<WpTermId>, FetchError> {
    let query = [("slug", slug.to_string()), ("_fields", "id".to_string())];
    self.get_json("categories", CATEGORIES_PATH, &query).await
  }

  async fn list_posts(&self, query: &PostQuery) -> Result<PostsPage, FetchError> {
    let mut pairs = vec![("per_page", query.per_page.to_string())];
    if let Some(page) = query.page {
      pairs.push(("page", page.to_string()));
    }
    pairs.push(("_fields", POST_FIELDS.to_string()));
    if let Some(category_id) = query.category_id {
      pairs.push(("categories", category_id.to_string()));
    }

    let response = self.get("posts", POSTS_PATH, &pairs).await?;
    let total_pages = header_count(response.headers(), TOTAL_PAGES_HEADER);
    let total = header_count(response.headers(), TOTAL_HEADER);

    let posts: Vec<WpPost> = response
      .json()
      .await
      .map_err(|source| FetchError::Decode {
        resource: "posts",
        source,
      })?;

    Ok(PostsPage {
      posts,
      total_pages,
      total,
    })
  }

  async fn list_documents(&self) -> Result<Vec<WpDocument>, FetchError> {
    let query = [
      ("per_page", COLLECTION_LIMIT.to_string()),
      ("_fields", DOCUMENT_FIELDS.to_string()),
    ];
    self.get_json("documents", DOCUMENTS_PATH, &query).await
  }
}

/// Read a numeric pagination header; missing or malformed values yield `None`.
fn header_count<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
  headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
