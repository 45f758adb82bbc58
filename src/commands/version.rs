//! `version` subcommand: build metadata as text or JSON.

use serde_json::json;

use crate::color::ColorScheme;

const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print version and build metadata.
///
/// # Arguments
/// * `json` - Emit a JSON document instead of colored text.
/// * `short` - Print only the semantic version string.
pub(crate) fn handle_version_command(json: bool, short: bool, colors: &ColorScheme) {
  print!("{}", render_version(json, short, colors));
}

fn render_version(json: bool, short: bool, colors: &ColorScheme) -> String {
  if short {
    return format!("{VERSION}\n");
  }

  let built = format_timestamp(env!("BUILD_TIMESTAMP"));

  if json {
    return format!(
      "{:#}\n",
      json!({
        "name": PACKAGE_NAME,
        "version": VERSION,
        "git_commit": env!("GIT_HASH"),
        "build_timestamp": built,
        "target": env!("TARGET"),
        "rust_version": env!("RUSTC_VERSION"),
      })
    );
  }

  format!(
    "{} {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n",
    colors.emphasis(PACKAGE_NAME),
    colors.number(VERSION),
    colors.emphasis("Git commit"),
    colors.code(env!("GIT_HASH")),
    colors.emphasis("Built"),
    colors.dimmed(built),
    colors.emphasis("Target"),
    env!("TARGET"),
    colors.emphasis("Rust version"),
    env!("RUSTC_VERSION"),
  )
}

/// Unix epoch seconds to `YYYY-MM-DD HH:MM:SS UTC`; other input is returned
/// unchanged.
fn format_timestamp(timestamp: &str) -> String {
  timestamp
    .parse::<i64>()
    .ok()
    .and_then(|seconds| chrono::DateTime::from_timestamp(seconds, 0))
    .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    .unwrap_or_else(|| timestamp.to_string())
}
