//! WordPress module providing the Content API abstraction, the HTTP client,
//! wire models, and the shared fetch error.

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use api::ContentApi;
pub use client::WordPressClient;
pub use error::FetchError;
pub use models::{DocumentFields, PostQuery, PostsPage, Rendered, WpDocument, WpPost, WpTerm, WpTermId};
