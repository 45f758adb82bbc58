//! `status` subcommand: report the resolved Content API configuration.
//!
//! Never performs network I/O.

use serde_json::json;

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::commands::{exit_with_error, report_written, write_output};
use crate::config::{API_URL_ENV, SiteConfig};
use crate::format::OutputFormat;

pub(crate) fn handle_status_command(cli: &Cli, colors: &ColorScheme) {
  let config = cli.api.site_config();
  let rendered = render_status(&config, cli.output.format, &cli.output_colors());

  if let Err(error) = write_output(&rendered, cli.output.output.as_deref()) {
    exit_with_error("Failed to write status", &error, colors);
  }
  report_written(cli.output.output.as_deref(), colors);
}

/// Describe `config` as text or JSON.
pub fn render_status(config: &SiteConfig, format: OutputFormat, colors: &ColorScheme) -> String {
  let source = if config.is_configured() { "live" } else { "embedded" };

  match format {
    OutputFormat::Json => format!(
      "{:#}\n",
      json!({
        "baseUrl": config.base_url(),
        "configured": config.is_configured(),
        "source": source,
        "env": API_URL_ENV,
      })
    ),
    OutputFormat::Text => {
      let state = if config.is_configured() {
        colors.success("✓ configured")
      } else {
        colors.warning("⚠ not configured")
      };
      let base_url = if config.base_url().is_empty() {
        colors.dimmed("(empty)")
      } else {
        colors.link(config.base_url())
      };

      format!(
        "{}: {}\n{}: {}\n{}: {}\n",
        colors.emphasis("Content API"),
        base_url,
        colors.emphasis("Status"),
        state,
        colors.emphasis("Content source"),
        colors.info(source),
      )
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_unconfigured_text() {
    let output = render_status(&SiteConfig::default(), OutputFormat::Text, &ColorScheme::plain());

    insta::assert_snapshot!(output, @r###"
    Content API: https://your-wordpress-site.com
    Status: ⚠ not configured
    Content source: embedded
    "###);
  }

  #[test]
  fn test_status_configured_json() {
    let config = SiteConfig::resolve(Some("https://cms.rakuyuz.jp//"));

    let output = render_status(&config, OutputFormat::Json, &ColorScheme::plain());

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["baseUrl"], "https://cms.rakuyuz.jp");
    assert_eq!(value["configured"], true);
    assert_eq!(value["source"], "live");
    assert_eq!(value["env"], "WP_API_URL");
  }

  #[test]
  fn test_status_empty_url() {
    let output = render_status(&SiteConfig::resolve(Some("")), OutputFormat::Text, &ColorScheme::plain());
    assert!(output.contains("Content API: (empty)"));
  }
}
