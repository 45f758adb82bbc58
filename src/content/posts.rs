//! News post fetching with category annotation.

use futures::join;
use tracing::debug;

use super::categories::{CategoryMap, build_category_map, resolve_category_id};
use super::models::{PaginatedResult, Post};
use crate::wordpress::{ContentApi, FetchError, PostQuery, WpPost};

/// Fetch the most recent `limit` posts, each annotated with its category.
///
/// The posts query and the category map are requested concurrently. Only a
/// failed posts query is an error; a failed category lookup leaves the posts
/// uncategorised.
pub async fn fetch_annotated_posts(api: &dyn ContentApi, limit: u32) -> Result<Vec<Post>, FetchError> {
  let query = PostQuery::latest(limit);
  let (page, categories) = join!(api.list_posts(&query), build_category_map(api));
  let page = page?;

  debug!(count = page.posts.len(), categories = categories.len(), "fetched latest posts");
  Ok(annotate(page.posts, &categories))
}

/// Fetch one page of posts, optionally limited to a category slug.
///
/// A slug of `"all"` (or `None`) means no filter. A slug that does not resolve
/// to a term also falls back to the unfiltered collection rather than failing.
/// Totals come from the pagination headers; without them the page is treated
/// as the only one.
///
/// # Errors
/// Returns the posts query failure. Category lookups never fail the call.
pub async fn fetch_paginated_posts(
  api: &dyn ContentApi,
  page: u32,
  page_size: u32,
  category_slug: Option<&str>,
) -> Result<PaginatedResult<Post>, FetchError> {
  let category_id = match category_slug {
    Some(slug) => resolve_category_id(api, slug).await,
    None => None,
  };

  let query = PostQuery {
    per_page: page_size,
    page: Some(page.max(1)),
    category_id,
  };
  let (response, categories) = join!(api.list_posts(&query), build_category_map(api));
  let response = response?;

  let total_pages = response.total_pages.unwrap_or(1).max(1);
  let total_count = response.total.unwrap_or(response.posts.len() as u64);
  debug!(page, total_pages, total_count, ?category_id, "fetched post page");

  Ok(PaginatedResult {
    items: annotate(response.posts, &categories),
    total_pages,
    total_count,
  })
}

fn annotate(posts: Vec<WpPost>, categories: &CategoryMap) -> Vec<Post> {
  posts
    .into_iter()
    .map(|wire| {
      let category = categories.resolve_news_category(&wire.categories);
      Post {
        category,
        ..Post::from(wire)
      }
    })
    .collect()
}
