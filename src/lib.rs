//! Content fetch and fallback layer for the RAKUYU-Z association site.
//!
//! News posts and downloadable documents are read from a headless WordPress
//! Content API. When the API is not configured or a request fails, the
//! consumers transparently serve an embedded dataset of the same shape.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod format;
pub mod render;
pub mod wordpress;
