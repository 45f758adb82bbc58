//! Output format definitions.

use clap::ValueEnum;

/// How feed results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// Human-readable listing (default)
  #[default]
  Text,
  /// Pretty-printed JSON of the underlying data
  Json,
}

impl OutputFormat {
  /// Whether terminal colours make sense for this format.
  pub fn supports_color(&self) -> bool {
    matches!(self, OutputFormat::Text)
  }
}
