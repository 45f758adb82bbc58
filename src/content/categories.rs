//! Category resolution between WordPress term IDs and site slugs.
//!
//! Resolution is best-effort enrichment: every lookup here degrades to "no
//! category" instead of failing the surrounding fetch.

use std::collections::HashMap;

use tracing::warn;

use super::models::NewsCategory;
use crate::wordpress::ContentApi;

/// Term ID to slug mapping, built once per fetch operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
  slugs: HashMap<i64, String>,
}

impl CategoryMap {
  /// Build from `(id, slug)` pairs; a repeated ID keeps the last slug.
  pub fn from_pairs<I, S>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (i64, S)>,
    S: Into<String>,
  {
    Self {
      slugs: pairs.into_iter().map(|(id, slug)| (id, slug.into())).collect(),
    }
  }

  /// Slug for a term ID, or `None` when the ID is unknown.
  pub fn get(&self, id: i64) -> Option<&str> {
    self.slugs.get(&id).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.slugs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slugs.is_empty()
  }

  /// First ID in `category_ids` whose slug is a recognised news category.
  ///
  /// List order wins, not numeric order.
  pub fn resolve_news_category(&self, category_ids: &[i64]) -> Option<NewsCategory> {
    category_ids
      .iter()
      .filter_map(|id| self.get(*id))
      .find_map(NewsCategory::from_slug)
  }
}

/// Query the taxonomy endpoint and build a fresh [`CategoryMap`].
///
/// Any failure yields an empty map, leaving every post uncategorised.
pub async fn build_category_map(api: &dyn ContentApi) -> CategoryMap {
  match api.list_categories().await {
    Ok(terms) => CategoryMap::from_pairs(terms.into_iter().map(|term| (term.id, term.slug))),
    Err(error) => {
      warn!(%error, "category lookup failed; posts will be uncategorised");
      CategoryMap::default()
    }
  }
}

/// Resolve a category slug to its term ID for filtering.
///
/// Returns `None` for `"all"`, an unknown slug, or a failed lookup, in which
/// case the caller queries the unfiltered collection.
pub async fn resolve_category_id(api: &dyn ContentApi, slug: &str) -> Option<i64> {
  if slug.is_empty() || slug == "all" {
    return None;
  }

  match api.find_category(slug).await {
    Ok(terms) => terms.first().map(|term| term.id),
    Err(error) => {
      warn!(%error, slug, "category id lookup failed; querying without a category filter");
      None
    }
  }
}
