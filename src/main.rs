//! rakuyu-feed - News and document feeds from the association's Content API
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  rakuyu_feed::cli::run().await;
}
