//! Embedded fallback dataset and the local pagination emulator.
//!
//! Used whenever the Content API is unconfigured or a live fetch fails, so
//! that consumers render the same shapes regardless of the data source.

use chrono::Duration;

use super::models::{Attachment, DocCategory, Document, NewsCategory, PaginatedResult, Post};
use super::text::parse_timestamp;

/// Number of synthetic copies of the fallback posts in the emulated archive.
pub const REPLICA_COUNT: i64 = 3;
/// Each replica is dated this many days before the previous one.
pub const REPLICA_OFFSET_DAYS: i64 = 30;
/// Each replica offsets post IDs by this stride to keep them unique.
pub const REPLICA_ID_STRIDE: i64 = 100;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn post(id: i64, date: &str, title: &str, excerpt: &str, link: &str, slug: &str, category: NewsCategory) -> Post {
  Post {
    id,
    published_at: date.to_string(),
    title: title.to_string(),
    summary: (!excerpt.is_empty()).then(|| excerpt.to_string()),
    link: link.to_string(),
    slug: slug.to_string(),
    category_ids: Vec::new(),
    category: Some(category),
  }
}

/// The fixed fallback news posts, newest first.
pub fn fallback_posts() -> Vec<Post> {
  vec![
    post(
      1,
      "2026-02-20T00:00:00",
      "年末年始の営業について",
      "<p>2026年12月28日〜2027年1月5日は休業いたします。</p>",
      "#",
      "year-end",
      NewsCategory::Info,
    ),
    post(
      2,
      "2026-01-15T00:00:00",
      "2026年版 施工マニュアルを公開しました",
      "<p>最新の施工マニュアルをダウンロードページにアップロードしました。</p>",
      "/downloads",
      "manual-2026",
      NewsCategory::Download,
    ),
    post(
      3,
      "2025-12-05T00:00:00",
      "インフラメンテナンス大賞 優秀賞を受賞しました",
      "<p>国土交通大臣賞・インフラメンテナンス大賞の優秀賞を受賞いたしました。</p>",
      "#",
      "award-2025",
      NewsCategory::Award,
    ),
    post(
      4,
      "2025-11-10T00:00:00",
      "冬季施工に関するお知らせ",
      "",
      "#",
      "winter-notice",
      NewsCategory::Info,
    ),
    post(
      5,
      "2025-10-01T00:00:00",
      "技術仕様書（改訂版）を公開しました",
      "",
      "/downloads",
      "spec-rev",
      NewsCategory::Download,
    ),
  ]
}

fn document(
  id: i64,
  date: &str,
  title: &str,
  description: &str,
  file_size: &str,
  slug: &str,
  category: DocCategory,
) -> Document {
  Document {
    id,
    published_at: date.to_string(),
    title: title.to_string(),
    summary: None,
    link: "#".to_string(),
    slug: slug.to_string(),
    attachment: Attachment {
      short_description: Some(description.to_string()),
      file_url: "#".to_string(),
      file_size_label: Some(file_size.to_string()),
      raw_category: Some(category),
    },
    doc_category: Some(category),
  }
}

/// The fixed fallback document library, two documents per section.
pub fn fallback_documents() -> Vec<Document> {
  vec![
    document(
      10,
      "2026-01-01T00:00:00",
      "RAKUYU-Z工法 総合カタログ 2026年版",
      "工法の概要・仕様・施工事例をまとめた総合カタログです。",
      "8.4 MB",
      "catalog-2026",
      DocCategory::Catalog,
    ),
    document(
      11,
      "2025-06-01T00:00:00",
      "特殊ポンプ 製品カタログ",
      "各種特殊ポンプの仕様・寸法・性能曲線を掲載しています。",
      "3.2 MB",
      "pump-catalog",
      DocCategory::Catalog,
    ),
    document(
      20,
      "2026-01-15T00:00:00",
      "RAKUYU-Z工法 技術仕様書（改訂第4版）",
      "工法の設計・施工に必要な技術的仕様を詳細に記載した公式仕様書です。",
      "5.1 MB",
      "tech-spec-v4",
      DocCategory::TechnicalSpec,
    ),
    document(
      21,
      "2024-09-01T00:00:00",
      "通水プラグ・ストッパー 技術基準",
      "通水プラグ及びストッパーの材質・耐圧・適用条件に関する技術基準です。",
      "2.8 MB",
      "plug-stopper-spec",
      DocCategory::TechnicalSpec,
    ),
    document(
      30,
      "2026-01-15T00:00:00",
      "RAKUYU-Z工法 施工マニュアル 2026年版",
      "現場での施工手順・安全管理・品質管理を網羅した最新マニュアルです。",
      "12.7 MB",
      "manual-2026",
      DocCategory::ConstructionManual,
    ),
    document(
      31,
      "2024-03-01T00:00:00",
      "不断水作業 安全管理マニュアル",
      "不断水施工における作業員安全管理・緊急対応手順をまとめたマニュアルです。",
      "4.3 MB",
      "safety-manual",
      DocCategory::ConstructionManual,
    ),
    document(
      40,
      "2025-08-01T00:00:00",
      "標準施工図集（管径 φ150〜φ700）",
      "φ150〜φ700対応の標準施工図・断面図・平面図セットです。",
      "18.2 MB",
      "std-drawings",
      DocCategory::DesignReference,
    ),
    document(
      41,
      "2024-11-01T00:00:00",
      "大口径対応 設計参考図（φ800〜φ1800）",
      "大口径管（φ800以上）への対応設計図面集です。ストッパー設置詳細を含みます。",
      "22.5 MB",
      "large-dia-drawings",
      DocCategory::DesignReference,
    ),
  ]
}

/// Keep only posts whose recognised category equals `category`; `None` keeps
/// everything.
pub fn filter_by_category(posts: Vec<Post>, category: Option<NewsCategory>) -> Vec<Post> {
  match category {
    Some(category) => posts.into_iter().filter(|post| post.category == Some(category)).collect(),
    None => posts,
  }
}

/// The fallback posts replicated into a larger virtual archive.
///
/// Replica `i` is dated `i * REPLICA_OFFSET_DAYS` days earlier and its IDs are
/// offset by `i * REPLICA_ID_STRIDE`.
pub fn emulated_archive() -> Vec<Post> {
  let base = fallback_posts();
  (0..REPLICA_COUNT)
    .flat_map(|replica| {
      base.iter().map(move |base_post| Post {
        id: base_post.id + replica * REPLICA_ID_STRIDE,
        published_at: shift_days(&base_post.published_at, replica * REPLICA_OFFSET_DAYS),
        ..base_post.clone()
      })
    })
    .collect()
}

/// Serve `page` of the emulated archive the way the live API would.
///
/// `total_pages` is `ceil(total_count / page_size)` (never below 1); a page
/// past the end yields no items.
pub fn emulate_news_page(category: Option<NewsCategory>, page: u32, page_size: u32) -> PaginatedResult<Post> {
  let page_size = page_size.max(1);
  let filtered = filter_by_category(emulated_archive(), category);

  let total_count = filtered.len() as u64;
  let total_pages = u32::try_from(total_count.div_ceil(u64::from(page_size)))
    .unwrap_or(u32::MAX)
    .max(1);
  let skip = (page.max(1) as usize - 1).saturating_mul(page_size as usize);

  PaginatedResult {
    items: filtered.into_iter().skip(skip).take(page_size as usize).collect(),
    total_pages,
    total_count,
  }
}

fn shift_days(raw: &str, days: i64) -> String {
  match parse_timestamp(raw) {
    Some(timestamp) if days != 0 => (timestamp - Duration::days(days)).format(TIMESTAMP_FORMAT).to_string(),
    _ => raw.to_string(),
  }
}
