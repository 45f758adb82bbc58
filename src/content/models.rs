//! Domain types served to the feed consumers.
//!
//! Everything here is read-only and request-scoped: built fresh for each
//! fetch and dropped once the view that displayed it goes away.

use serde::Serialize;

use super::text::strip_html;
use crate::wordpress::{WpDocument, WpPost};

/// Link value meaning "this item has no detail page".
pub const NO_DETAIL_LINK: &str = "#";

/// News categories the site knows how to badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsCategory {
  Info,
  Download,
  Award,
}

impl NewsCategory {
  /// Every recognised category, in filter-bar order.
  pub const ALL: [NewsCategory; 3] = [NewsCategory::Info, NewsCategory::Download, NewsCategory::Award];

  /// Stable slug matching the WordPress category slug.
  pub fn slug(&self) -> &'static str {
    match self {
      NewsCategory::Info => "info",
      NewsCategory::Download => "download",
      NewsCategory::Award => "award",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|category| category.slug() == slug)
  }

  /// Badge label.
  pub fn label(&self) -> &'static str {
    match self {
      NewsCategory::Info => "お知らせ",
      NewsCategory::Download => "資料追加",
      NewsCategory::Award => "受賞報告",
    }
  }
}

/// Sections of the document library, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocCategory {
  Catalog,
  TechnicalSpec,
  ConstructionManual,
  DesignReference,
}

impl DocCategory {
  /// Fixed section order of the document library.
  pub const ORDER: [DocCategory; 4] = [
    DocCategory::Catalog,
    DocCategory::TechnicalSpec,
    DocCategory::ConstructionManual,
    DocCategory::DesignReference,
  ];

  pub fn slug(&self) -> &'static str {
    match self {
      DocCategory::Catalog => "catalog",
      DocCategory::TechnicalSpec => "technical-spec",
      DocCategory::ConstructionManual => "construction-manual",
      DocCategory::DesignReference => "design-reference",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    Self::ORDER.into_iter().find(|category| category.slug() == slug)
  }

  /// Section heading.
  pub fn label(&self) -> &'static str {
    match self {
      DocCategory::Catalog => "カタログ",
      DocCategory::TechnicalSpec => "技術仕様書",
      DocCategory::ConstructionManual => "施工マニュアル",
      DocCategory::DesignReference => "設計参考図",
    }
  }

  /// Icon name used by the section header.
  pub fn icon(&self) -> &'static str {
    match self {
      DocCategory::Catalog => "book",
      DocCategory::TechnicalSpec => "settings",
      DocCategory::ConstructionManual => "tool",
      DocCategory::DesignReference => "layout",
    }
  }
}

/// A news post, optionally annotated with its recognised category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  pub id: i64,
  /// ISO 8601 timestamp as delivered by the API.
  pub published_at: String,
  /// Trusted HTML, kept verbatim.
  pub title: String,
  /// Trusted HTML excerpt, when the post has one.
  pub summary: Option<String>,
  /// Absolute or relative URL; [`NO_DETAIL_LINK`] when there is none.
  pub link: String,
  pub slug: String,
  /// Raw taxonomy references in API order.
  pub category_ids: Vec<i64>,
  /// First recognised category among `category_ids`.
  #[serde(rename = "categorySlug")]
  pub category: Option<NewsCategory>,
}

impl Post {
  /// Category whose badge is shown; unresolved posts display as `info`.
  pub fn display_category(&self) -> NewsCategory {
    self.category.unwrap_or(NewsCategory::Info)
  }

  /// Link to the detail page, or `None` for the no-detail sentinel.
  pub fn detail_link(&self) -> Option<&str> {
    non_sentinel_link(&self.link)
  }
}

impl From<WpPost> for Post {
  fn from(post: WpPost) -> Self {
    Self {
      id: post.id,
      published_at: post.date,
      title: post.title.rendered,
      summary: post.excerpt.map(|excerpt| excerpt.rendered).filter(|html| !html.is_empty()),
      link: post.link,
      slug: post.slug,
      category_ids: post.categories,
      category: None,
    }
  }
}

/// Metadata describing the downloadable file behind a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
  pub short_description: Option<String>,
  /// Download URL; [`NO_DETAIL_LINK`] when the CMS has none.
  pub file_url: String,
  pub file_size_label: Option<String>,
  pub raw_category: Option<DocCategory>,
}

/// A document in the download library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
  pub id: i64,
  pub published_at: String,
  pub title: String,
  pub summary: Option<String>,
  pub link: String,
  pub slug: String,
  pub attachment: Attachment,
  /// Copied from `attachment.raw_category`.
  pub doc_category: Option<DocCategory>,
}

impl Document {
  /// Card description: the short description, else the plain-text summary.
  pub fn description(&self) -> String {
    match &self.attachment.short_description {
      Some(description) if !description.trim().is_empty() => description.trim().to_string(),
      _ => self.summary.as_deref().map(strip_html).unwrap_or_default(),
    }
  }

  /// Download URL, or `None` for the no-file sentinel.
  pub fn download_link(&self) -> Option<&str> {
    non_sentinel_link(&self.attachment.file_url)
  }
}

impl From<WpDocument> for Document {
  fn from(doc: WpDocument) -> Self {
    let raw_category = doc.acf.document_category.as_deref().and_then(DocCategory::from_slug);
    Self {
      id: doc.id,
      published_at: doc.date,
      title: doc.title.rendered,
      summary: doc.excerpt.map(|excerpt| excerpt.rendered).filter(|html| !html.is_empty()),
      link: doc.link,
      slug: doc.slug,
      attachment: Attachment {
        short_description: doc.acf.short_description,
        file_url: doc.acf.file_url.unwrap_or_else(|| NO_DETAIL_LINK.to_string()),
        file_size_label: doc.acf.file_size,
        raw_category,
      },
      doc_category: raw_category,
    }
  }
}

/// One page of a collection plus the totals needed to draw pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
  pub items: Vec<T>,
  /// At least 1.
  pub total_pages: u32,
  pub total_count: u64,
}

fn non_sentinel_link(link: &str) -> Option<&str> {
  let link = link.trim();
  (!link.is_empty() && link != NO_DETAIL_LINK).then_some(link)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn wire_document(acf: serde_json::Value) -> WpDocument {
    serde_json::from_value(json!({
      "id": 20,
      "date": "2026-01-15T00:00:00",
      "title": { "rendered": "技術仕様書" },
      "excerpt": { "rendered": "<p>改訂第4版</p>" },
      "acf": acf,
      "slug": "tech-spec-v4",
      "link": "https://cms.rakuyuz.jp/document/tech-spec-v4"
    }))
    .unwrap()
  }

  #[test]
  fn test_news_category_slugs_round_trip() {
    for category in NewsCategory::ALL {
      assert_eq!(NewsCategory::from_slug(category.slug()), Some(category));
    }
    assert_eq!(NewsCategory::from_slug("uncategorized"), None);
  }

  #[test]
  fn test_doc_category_order_is_fixed() {
    let slugs: Vec<_> = DocCategory::ORDER.iter().map(DocCategory::slug).collect();
    assert_eq!(
      slugs,
      ["catalog", "technical-spec", "construction-manual", "design-reference"]
    );
  }

  #[test]
  fn test_document_category_copied_from_attachment() {
    let doc = Document::from(wire_document(json!({
      "short_description": "仕様書です。",
      "file_url": "https://cms.rakuyuz.jp/files/spec.pdf",
      "file_size": "5.1 MB",
      "document_category": "technical-spec"
    })));

    assert_eq!(doc.doc_category, Some(DocCategory::TechnicalSpec));
    assert_eq!(doc.attachment.raw_category, doc.doc_category);
    assert_eq!(doc.download_link(), Some("https://cms.rakuyuz.jp/files/spec.pdf"));
    assert_eq!(doc.description(), "仕様書です。");
  }

  #[test]
  fn test_document_defaults_without_metadata() {
    let doc = Document::from(wire_document(json!({})));

    assert_eq!(doc.attachment.file_url, NO_DETAIL_LINK);
    assert_eq!(doc.download_link(), None);
    assert_eq!(doc.doc_category, None);
    assert_eq!(doc.description(), "改訂第4版");
  }

  #[test]
  fn test_unknown_document_category_is_dropped() {
    let doc = Document::from(wire_document(json!({ "document_category": "brochure" })));
    assert_eq!(doc.doc_category, None);
  }

  #[test]
  fn test_post_without_category_displays_as_info() {
    let post = Post::from(
      serde_json::from_value::<WpPost>(json!({
        "id": 3,
        "date": "2025-12-05T00:00:00",
        "title": { "rendered": "受賞" },
        "excerpt": { "rendered": "" },
        "link": "#",
        "categories": [99]
      }))
      .unwrap(),
    );

    assert_eq!(post.category, None);
    assert_eq!(post.display_category(), NewsCategory::Info);
    assert_eq!(post.summary, None);
    assert_eq!(post.detail_link(), None);
  }

  #[test]
  fn test_post_serializes_with_category_slug() {
    let post = Post {
      id: 1,
      published_at: "2026-02-20T00:00:00".to_string(),
      title: "t".to_string(),
      summary: None,
      link: "#".to_string(),
      slug: "s".to_string(),
      category_ids: vec![2],
      category: Some(NewsCategory::Download),
    };

    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(value["categorySlug"], "download");
    assert_eq!(value["publishedAt"], "2026-02-20T00:00:00");
    assert_eq!(value["categoryIds"], json!([2]));
  }
}
