//! Content layer: domain types, category resolution, the post and document
//! fetchers, and the embedded fallback dataset.

pub mod categories;
pub mod documents;
pub mod fallback;
pub mod models;
pub mod posts;
pub mod text;

pub use categories::{CategoryMap, build_category_map, resolve_category_id};
pub use documents::{DocumentGroup, fetch_documents, group_documents};
pub use fallback::{emulate_news_page, fallback_documents, fallback_posts, filter_by_category};
pub use models::{Attachment, DocCategory, Document, NO_DETAIL_LINK, NewsCategory, PaginatedResult, Post};
pub use posts::{fetch_annotated_posts, fetch_paginated_posts};
