//! Data transfer objects returned by the WordPress REST API.
//!
//! Only the fields requested through `_fields` are modelled. Everything that
//! WordPress may omit carries a serde default so a sparse response still
//! decodes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A rendered rich-text field (`{"rendered": "<p>...</p>"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
  /// HTML produced by WordPress.
  #[serde(default)]
  pub rendered: String,
}

/// A news post as returned by `/wp/v2/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpPost {
  /// Post ID, unique within the posts collection.
  pub id: i64,
  /// Publication timestamp (site-local ISO 8601, no offset).
  pub date: String,
  /// Post title.
  pub title: Rendered,
  /// Optional excerpt.
  #[serde(default)]
  pub excerpt: Option<Rendered>,
  /// Permalink to the full post.
  #[serde(default)]
  pub link: String,
  /// URL slug.
  #[serde(default)]
  pub slug: String,
  /// Raw taxonomy term IDs in the order WordPress lists them.
  #[serde(default)]
  pub categories: Vec<i64>,
}

/// A taxonomy term from `/wp/v2/categories?_fields=id,slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpTerm {
  pub id: i64,
  pub slug: String,
}

/// A term reduced to its ID (`/wp/v2/categories?slug=...&_fields=id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpTermId {
  pub id: i64,
}

/// A downloadable document from the custom `document` post type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpDocument {
  pub id: i64,
  pub date: String,
  pub title: Rendered,
  #[serde(default)]
  pub excerpt: Option<Rendered>,
  /// Custom field block carrying the attachment metadata. WordPress sends
  /// `false` or `null` here when a document has no field values.
  #[serde(default, deserialize_with = "lenient_fields")]
  pub acf: DocumentFields,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub link: String,
}

/// Custom fields attached to a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFields {
  /// One-line description shown on the card.
  #[serde(default, deserialize_with = "lenient_string")]
  pub short_description: Option<String>,
  /// Download URL of the file itself.
  #[serde(default, deserialize_with = "lenient_string")]
  pub file_url: Option<String>,
  /// Human-readable size such as `"8.4 MB"`.
  #[serde(default, deserialize_with = "lenient_string")]
  pub file_size: Option<String>,
  /// Category value as entered in the CMS; unknown values are ignored later.
  /// An unset select field arrives as `false`.
  #[serde(default, deserialize_with = "lenient_string")]
  pub document_category: Option<String>,
}

/// Decode the custom field block, treating anything but a well-formed object
/// as an empty block.
fn lenient_fields<'de, D>(deserializer: D) -> Result<DocumentFields, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
    _ => DocumentFields::default(),
  })
}

/// Keep string values only; `false`, numbers and the like become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(value) => Some(value),
    _ => None,
  })
}

/// Query for one page of the posts collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
  /// Items per page (`per_page`).
  pub per_page: u32,
  /// 1-based page (`page`); `None` leaves it to the server default.
  pub page: Option<u32>,
  /// Restrict to one category term ID (`categories`).
  pub category_id: Option<i64>,
}

impl PostQuery {
  /// The most recent `limit` posts, unfiltered.
  pub fn latest(limit: u32) -> Self {
    Self {
      per_page: limit,
      page: None,
      category_id: None,
    }
  }
}

/// Posts returned for a query plus the pagination headers, when present.
#[derive(Debug, Clone)]
pub struct PostsPage {
  pub posts: Vec<WpPost>,
  /// `X-WP-TotalPages`
  pub total_pages: Option<u32>,
  /// `X-WP-Total`
  pub total: Option<u64>,
}
