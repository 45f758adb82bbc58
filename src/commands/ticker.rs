//! `ticker` subcommand: the latest headlines.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::commands::{build_client, exit_with_error, report_written, write_output};
use crate::config::SiteConfig;
use crate::feed::TickerFeed;
use crate::format::OutputFormat;
use crate::render::render_ticker;
use crate::wordpress::ContentApi;

/// Execute the `ticker` subcommand.
///
/// # Arguments
/// * `limit` - Number of headlines to show
/// * `cli` - Parsed command line, providing the site config and output options
/// * `colors` - Color scheme for status and error messages
pub(crate) async fn handle_ticker_command(limit: u32, cli: &Cli, colors: &ColorScheme) {
  let result = async {
    let config = cli.api.site_config();
    let client = build_client(cli)?;
    let rendered = render_headlines(limit, cli.output.format, &config, &client, &cli.output_colors()).await?;
    write_output(&rendered, cli.output.output.as_deref())
  }
  .await;

  if let Err(error) = result {
    exit_with_error("Failed to write headlines", &error, colors);
  }
  report_written(cli.output.output.as_deref(), colors);
}

/// Load the latest `limit` posts and render them in `format`.
pub async fn render_headlines(
  limit: u32,
  format: OutputFormat,
  config: &SiteConfig,
  api: &dyn ContentApi,
  colors: &ColorScheme,
) -> Result<String> {
  let mut feed = TickerFeed::new(limit);
  feed.load(config, api).await;
  let state = feed.state();
  info!(fallback = state.is_fallback(), "headlines loaded");
  let posts = state.data().context("ticker finished without data")?;

  match format {
    OutputFormat::Text => Ok(render_ticker(posts, colors)),
    OutputFormat::Json => {
      let mut json = serde_json::to_string_pretty(posts).context("Failed to serialize headlines")?;
      json.push('\n');
      Ok(json)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::wordpress::WordPressClient;

  #[tokio::test]
  async fn test_unconfigured_headlines() {
    let client = WordPressClient::new(SiteConfig::default().base_url(), 5, 10).unwrap();

    let rendered = render_headlines(
      3,
      OutputFormat::Text,
      &SiteConfig::default(),
      &client,
      &ColorScheme::plain(),
    )
    .await
    .unwrap();

    insta::assert_snapshot!(rendered, @r###"
    2026/02/20  お知らせ  年末年始の営業について  /news
    2026/01/15  資料追加  2026年版 施工マニュアルを公開しました  /downloads
    2025/12/05  受賞報告  インフラメンテナンス大賞 優秀賞を受賞しました  /news
    すべてのニュースを見る /news
    "###);
  }
}
