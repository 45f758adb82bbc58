//! Color utilities for terminal output
//!
//! Semantic styles for CLI messages plus the category colours used for news
//! badges and document section headings. Every method returns plain text when
//! colours are disabled.

use owo_colors::OwoColorize;

use crate::cli::ColorOption;
use crate::content::{DocCategory, NewsCategory};

/// Color scheme for the application
pub struct ColorScheme {
  enabled: bool,
}

impl ColorScheme {
  /// Create a new color scheme based on user preference and terminal
  /// capabilities
  pub fn new(color_option: ColorOption) -> Self {
    let enabled = match color_option {
      ColorOption::Always => true,
      ColorOption::Never => false,
      ColorOption::Auto => {
        use std::io::IsTerminal;
        std::io::stdout().is_terminal()
      }
    };

    Self { enabled }
  }

  /// A scheme that never emits escape codes (JSON output, files).
  pub fn plain() -> Self {
    Self { enabled: false }
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  fn paint<T: std::fmt::Display>(&self, text: T, style: impl FnOnce(&T) -> String) -> String {
    if self.enabled { style(&text) } else { text.to_string() }
  }

  /// Style for success messages (green)
  pub fn success<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.green().to_string())
  }

  /// Style for error messages (bright red)
  pub fn error<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_red().bold().to_string())
  }

  /// Style for warning messages (yellow)
  pub fn warning<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.yellow().to_string())
  }

  /// Style for info messages (cyan)
  pub fn info<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.cyan().to_string())
  }

  /// Style for emphasis/important text (bright white, bold)
  pub fn emphasis<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_white().bold().to_string())
  }

  /// Style for URLs and links (blue, underlined)
  pub fn link<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.blue().underline().to_string())
  }

  /// Style for numbers and metrics (bright blue)
  pub fn number<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_blue().to_string())
  }

  /// Style for build identifiers and other code-like values (bright green)
  pub fn code<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.bright_green().to_string())
  }

  /// Style for dimmed/secondary text such as dates and file sizes
  pub fn dimmed<T: std::fmt::Display>(&self, text: T) -> String {
    self.paint(text, |t| t.dimmed().to_string())
  }

  /// Badge colour of a news category: slate, blue, amber.
  pub fn news_badge<T: std::fmt::Display>(&self, category: NewsCategory, text: T) -> String {
    self.paint(text, |t| match category {
      NewsCategory::Info => t.white().on_bright_black().to_string(),
      NewsCategory::Download => t.bright_white().on_blue().to_string(),
      NewsCategory::Award => t.black().on_yellow().to_string(),
    })
  }

  /// Heading colour of a document section.
  pub fn doc_section<T: std::fmt::Display>(&self, category: DocCategory, text: T) -> String {
    self.paint(text, |t| match category {
      DocCategory::Catalog => t.bright_blue().bold().to_string(),
      DocCategory::TechnicalSpec => t.magenta().bold().to_string(),
      DocCategory::ConstructionManual => t.green().bold().to_string(),
      DocCategory::DesignReference => t.yellow().bold().to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_color_scheme_disabled() {
    let scheme = ColorScheme::new(ColorOption::Never);
    assert!(!scheme.is_enabled());
    assert_eq!(scheme.success("test"), "test");
    assert_eq!(scheme.news_badge(NewsCategory::Award, "受賞報告"), "受賞報告");
    assert_eq!(scheme.doc_section(DocCategory::Catalog, "カタログ"), "カタログ");
  }

  #[test]
  fn test_color_scheme_enabled() {
    let scheme = ColorScheme::new(ColorOption::Always);
    assert!(scheme.is_enabled());
    assert_ne!(scheme.success("test"), "test");
    assert_ne!(scheme.error("test"), "test");
  }

  #[test]
  fn test_category_colors_differ() {
    let scheme = ColorScheme::new(ColorOption::Always);
    let badges: Vec<_> = NewsCategory::ALL
      .iter()
      .map(|category| scheme.news_badge(*category, "x"))
      .collect();
    assert_ne!(badges[0], badges[1]);
    assert_ne!(badges[1], badges[2]);

    let sections: Vec<_> = DocCategory::ORDER
      .iter()
      .map(|category| scheme.doc_section(*category, "x"))
      .collect();
    assert_ne!(sections[0], sections[1]);
    assert_ne!(sections[2], sections[3]);
  }

  #[test]
  fn test_plain_scheme_is_disabled() {
    assert!(!ColorScheme::plain().is_enabled());
  }
}
