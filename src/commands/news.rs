//! `news` subcommand: one page of the news list.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, NewsArgs};
use crate::color::ColorScheme;
use crate::commands::{build_client, exit_with_error, report_written, write_output};
use crate::config::SiteConfig;
use crate::content::{NewsCategory, Post};
use crate::feed::NewsFeed;
use crate::format::OutputFormat;
use crate::render::{PageWindow, page_window, render_news_page};
use crate::wordpress::ContentApi;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewsPageView<'a> {
  category: Option<NewsCategory>,
  page: u32,
  page_size: u32,
  total_pages: u32,
  total_count: u64,
  items: &'a [Post],
  pagination: PageWindow,
}

/// Execute the `news` subcommand.
pub(crate) async fn handle_news_command(args: &NewsArgs, cli: &Cli, colors: &ColorScheme) {
  if let Err(error) = run_news_command(args, cli).await {
    exit_with_error("Failed to write news", &error, colors);
  }
  report_written(cli.output.output.as_deref(), colors);
}

async fn run_news_command(args: &NewsArgs, cli: &Cli) -> Result<()> {
  let config = cli.api.site_config();
  let client = build_client(cli)?;
  let rendered = render_news(args, cli.output.format, &config, &client, &cli.output_colors()).await?;
  write_output(&rendered, cli.output.output.as_deref())
}

/// Load the requested news page and render it in `format`.
///
/// # Errors
/// Only serialization can fail; fetch failures are served from the embedded
/// archive.
pub async fn render_news(
  args: &NewsArgs,
  format: OutputFormat,
  config: &SiteConfig,
  api: &dyn ContentApi,
  colors: &ColorScheme,
) -> Result<String> {
  let mut feed = NewsFeed::new(args.per_page);
  feed.set_category(args.category.category());
  feed.set_page(args.page);

  feed.load(config, api).await;
  let state = feed.state();
  info!(fallback = state.is_fallback(), page = args.page, "news page loaded");
  let result = state.data().context("news feed finished without data")?;
  let window = page_window(feed.page(), result.total_pages);

  match format {
    OutputFormat::Text => Ok(render_news_page(result, &window, colors)),
    OutputFormat::Json => {
      let view = NewsPageView {
        category: feed.category(),
        page: feed.page(),
        page_size: feed.page_size(),
        total_pages: result.total_pages,
        total_count: result.total_count,
        items: &result.items,
        pagination: window,
      };
      let mut json = serde_json::to_string_pretty(&view).context("Failed to serialize news page")?;
      json.push('\n');
      Ok(json)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cli::NewsCategoryArg;
  use crate::wordpress::WordPressClient;

  fn unconfigured_client() -> WordPressClient {
    WordPressClient::new(SiteConfig::default().base_url(), 5, 10).unwrap()
  }

  #[tokio::test]
  async fn test_unconfigured_news_json_uses_archive() {
    let args = NewsArgs {
      category: NewsCategoryArg::Download,
      page: 1,
      per_page: 10,
    };

    let rendered = render_news(
      &args,
      OutputFormat::Json,
      &SiteConfig::default(),
      &unconfigured_client(),
      &ColorScheme::plain(),
    )
    .await
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["category"], "download");
    assert_eq!(value["totalCount"], 6);
    assert_eq!(value["totalPages"], 1);
    assert_eq!(value["items"].as_array().unwrap().len(), 6);
    assert_eq!(value["items"][0]["categorySlug"], "download");
    assert_eq!(value["pagination"]["hasNext"], false);
  }

  #[tokio::test]
  async fn test_unconfigured_news_text_second_page() {
    let args = NewsArgs {
      category: NewsCategoryArg::All,
      page: 2,
      per_page: 10,
    };

    let rendered = render_news(
      &args,
      OutputFormat::Text,
      &SiteConfig::default(),
      &unconfigured_client(),
      &ColorScheme::plain(),
    )
    .await
    .unwrap();

    assert!(rendered.starts_with("15件\n"));
    assert!(rendered.ends_with("‹ 1 [2]\n"));
  }
}
