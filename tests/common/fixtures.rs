//! Test fixtures for WordPress REST API responses
//!
//! Shapes match what the site requests through `_fields`.

use serde_json::json;

/// `/wp/v2/categories?_fields=id,slug`
pub fn categories_response() -> serde_json::Value {
  json!([
    { "id": 1, "slug": "info" },
    { "id": 2, "slug": "download" },
    { "id": 3, "slug": "award" },
    { "id": 7, "slug": "uncategorized" }
  ])
}

/// `/wp/v2/posts`, newest first.
pub fn posts_response() -> serde_json::Value {
  json!([
    {
      "id": 501,
      "date": "2026-03-02T10:00:00",
      "title": { "rendered": "設計参考図を追加しました" },
      "excerpt": { "rendered": "<p>大口径対応の設計参考図を追加しました。</p>\n" },
      "link": "https://cms.rakuyuz.jp/2026/03/02/drawings/",
      "slug": "drawings",
      "categories": [2, 1]
    },
    {
      "id": 502,
      "date": "2026-02-25T09:00:00",
      "title": { "rendered": "協会ウェブサイトを更新しました" },
      "excerpt": { "rendered": "" },
      "link": "#",
      "slug": "site-update",
      "categories": [99]
    },
    {
      "id": 503,
      "date": "2026-02-10T09:00:00",
      "title": { "rendered": "技術賞を受賞しました &#8211; 2026" },
      "excerpt": { "rendered": "<p>受賞のお知らせです。</p>" },
      "link": "https://cms.rakuyuz.jp/2026/02/10/award/",
      "slug": "award-2026",
      "categories": [7, 3]
    },
    {
      "id": 504,
      "date": "2026-01-20T09:00:00",
      "title": { "rendered": "講習会のご案内" },
      "link": "https://cms.rakuyuz.jp/2026/01/20/seminar/",
      "slug": "seminar",
      "categories": [1]
    }
  ])
}

/// `/wp/v2/document?_fields=id,date,title,excerpt,acf,slug,link`
pub fn documents_response() -> serde_json::Value {
  json!([
    {
      "id": 900,
      "date": "2026-01-05T00:00:00",
      "title": { "rendered": "総合カタログ 2026" },
      "excerpt": { "rendered": "<p>総合カタログです。</p>" },
      "acf": {
        "short_description": "工法の概要をまとめたカタログです。",
        "file_url": "https://cms.rakuyuz.jp/files/catalog-2026.pdf",
        "file_size": "8.4 MB",
        "document_category": "catalog"
      },
      "slug": "catalog-2026",
      "link": "https://cms.rakuyuz.jp/document/catalog-2026/"
    },
    {
      "id": 901,
      "date": "2025-11-12T00:00:00",
      "title": { "rendered": "標準施工図集" },
      "excerpt": { "rendered": "<p>標準施工図の<strong>セット</strong>です。</p>" },
      "acf": {
        "file_url": "https://cms.rakuyuz.jp/files/drawings.pdf",
        "file_size": "18.2 MB",
        "document_category": "design-reference"
      },
      "slug": "drawings",
      "link": "https://cms.rakuyuz.jp/document/drawings/"
    },
    {
      "id": 902,
      "date": "2025-10-01T00:00:00",
      "title": { "rendered": "会社案内パンフレット" },
      "acf": {
        "file_url": "https://cms.rakuyuz.jp/files/brochure.pdf",
        "document_category": "brochure"
      },
      "slug": "brochure",
      "link": "https://cms.rakuyuz.jp/document/brochure/"
    },
    {
      "id": 903,
      "date": "2025-09-01T00:00:00",
      "title": { "rendered": "施工マニュアル 第3版" },
      "acf": {
        "short_description": "旧版の施工マニュアルです。",
        "file_size": "10.1 MB",
        "document_category": "construction-manual"
      },
      "slug": "manual-v3",
      "link": "https://cms.rakuyuz.jp/document/manual-v3/"
    }
  ])
}
