//! `documents` subcommand: the download library.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, DocCategoryArg};
use crate::color::ColorScheme;
use crate::commands::{build_client, exit_with_error, report_written, write_output};
use crate::config::SiteConfig;
use crate::content::{DocCategory, Document, group_documents};
use crate::feed::DocumentFeed;
use crate::format::OutputFormat;
use crate::render::render_document_library;
use crate::wordpress::ContentApi;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionView<'a> {
  category: DocCategory,
  label: &'static str,
  icon: &'static str,
  documents: Vec<&'a Document>,
}

/// Execute the `documents` subcommand.
///
/// # Arguments
/// * `category` - Section to show, or every section
/// * `cli` - Parsed command line, providing the site config and output options
/// * `colors` - Color scheme for status and error messages
pub(crate) async fn handle_documents_command(category: DocCategoryArg, cli: &Cli, colors: &ColorScheme) {
  let result = async {
    let config = cli.api.site_config();
    let client = build_client(cli)?;
    let visible = category.visible();
    let rendered = render_documents(&visible, cli.output.format, &config, &client, &cli.output_colors()).await?;
    write_output(&rendered, cli.output.output.as_deref())
  }
  .await;

  if let Err(error) = result {
    exit_with_error("Failed to write document library", &error, colors);
  }
  report_written(cli.output.output.as_deref(), colors);
}

/// Load the document library and render the `visible` sections in `format`.
pub async fn render_documents(
  visible: &[DocCategory],
  format: OutputFormat,
  config: &SiteConfig,
  api: &dyn ContentApi,
  colors: &ColorScheme,
) -> Result<String> {
  let mut feed = DocumentFeed::new();
  feed.load(config, api).await;
  let state = feed.state();
  let documents = state.data().context("document library finished without data")?;
  info!(fallback = state.is_fallback(), count = documents.len(), "document library loaded");

  match format {
    OutputFormat::Text => Ok(render_document_library(documents, visible, colors)),
    OutputFormat::Json => {
      let sections: Vec<SectionView<'_>> = group_documents(documents, visible)
        .into_iter()
        .map(|group| SectionView {
          category: group.category,
          label: group.category.label(),
          icon: group.category.icon(),
          documents: group.documents,
        })
        .collect();
      let mut json = serde_json::to_string_pretty(&sections).context("Failed to serialize document library")?;
      json.push('\n');
      Ok(json)
    }
  }
}
