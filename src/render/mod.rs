//! Plain-text views of the feed consumers.
//!
//! Rich-text fields are stripped to plain text here; the JSON output path
//! keeps them verbatim.

pub mod documents;
pub mod news;
pub mod pagination;

pub use documents::render_document_library;
pub use news::{NEWS_INDEX_PATH, render_news_page, render_ticker};
pub use pagination::{PageMarker, PageWindow, page_window, render_page_bar};
