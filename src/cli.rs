//! Command-line interface definitions for rakuyu-feed.
//!
//! Defines the CLI structure using clap derives and dispatches each
//! subcommand to its handler in [`crate::commands`].

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::completions::handle_completions_command;
use crate::commands::documents::handle_documents_command;
use crate::commands::news::handle_news_command;
use crate::commands::status::handle_status_command;
use crate::commands::ticker::handle_ticker_command;
use crate::commands::version::handle_version_command;
use crate::config::{API_URL_ENV, SiteConfig};
use crate::content::{DocCategory, NewsCategory};
use crate::feed::{DEFAULT_PAGE_SIZE, DEFAULT_TICKER_LIMIT};
use crate::format::OutputFormat;

/// rakuyu-feed - News and document feeds of the RAKUYU-Z association site
#[derive(Debug, Parser)]
#[command(
  name = "rakuyu-feed",
  version,
  about = "News and document feeds from the association's WordPress Content API",
  long_about = "Fetches news posts and downloadable documents from a headless WordPress installation.\n\
                When no Content API is configured, or a request fails, the embedded content is served instead.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Content API options
  #[command(flatten)]
  pub api: ApiOptions,

  /// Output options
  #[command(flatten)]
  pub output: OutputOptions,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,

  /// Performance options
  #[command(flatten)]
  pub performance: PerformanceOptions,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
  /// List one page of news, optionally filtered by category
  News(NewsArgs),

  /// Show the latest news headlines
  Ticker {
    /// Number of posts to show
    #[arg(long, default_value_t = DEFAULT_TICKER_LIMIT, value_name = "N")]
    limit: u32,
  },

  /// List the document library grouped by category
  Documents {
    /// Only show one category
    #[arg(long, value_enum, default_value = "all")]
    category: DocCategoryArg,
  },

  /// Show the resolved Content API configuration (no network access)
  Status,

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },

  /// Generate shell completion scripts
  Completions {
    /// Target shell for completions
    #[arg(value_enum)]
    shell: Shell,
  },
}

/// Arguments of the `news` subcommand
#[derive(Debug, Clone, Args)]
pub struct NewsArgs {
  /// Category filter
  #[arg(long, value_enum, default_value = "all")]
  pub category: NewsCategoryArg,

  /// Page number (1-based)
  #[arg(long, default_value_t = 1, value_name = "N")]
  pub page: u32,

  /// Posts per page
  #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_name = "N")]
  pub per_page: u32,
}

/// News category filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NewsCategoryArg {
  All,
  Info,
  Download,
  Award,
}

impl NewsCategoryArg {
  /// `None` means every category.
  pub fn category(self) -> Option<NewsCategory> {
    match self {
      NewsCategoryArg::All => None,
      NewsCategoryArg::Info => Some(NewsCategory::Info),
      NewsCategoryArg::Download => Some(NewsCategory::Download),
      NewsCategoryArg::Award => Some(NewsCategory::Award),
    }
  }
}

/// Document category filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocCategoryArg {
  All,
  Catalog,
  TechnicalSpec,
  ConstructionManual,
  DesignReference,
}

impl DocCategoryArg {
  /// Sections to display.
  pub fn visible(self) -> Vec<DocCategory> {
    match self {
      DocCategoryArg::All => DocCategory::ORDER.to_vec(),
      DocCategoryArg::Catalog => vec![DocCategory::Catalog],
      DocCategoryArg::TechnicalSpec => vec![DocCategory::TechnicalSpec],
      DocCategoryArg::ConstructionManual => vec![DocCategory::ConstructionManual],
      DocCategoryArg::DesignReference => vec![DocCategory::DesignReference],
    }
  }
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
  Bash,
  Zsh,
  Fish,
  Powershell,
  Elvish,
}

/// Content API options
#[derive(Debug, Parser)]
pub struct ApiOptions {
  /// WordPress base URL (placeholder or unset serves embedded content)
  #[arg(long, env = API_URL_ENV, value_name = "URL")]
  pub api_url: Option<String>,
}

impl ApiOptions {
  /// Resolve the immutable site configuration.
  pub fn site_config(&self) -> SiteConfig {
    SiteConfig::resolve(self.api_url.as_deref())
  }
}

/// Output options
#[derive(Debug, Parser)]
pub struct OutputOptions {
  /// Output format
  #[arg(long, value_enum, default_value = "text", value_name = "FORMAT")]
  pub format: OutputFormat,

  /// Write output to a file instead of stdout
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,
}

/// Behavior options
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Colorize output
  #[arg(long, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Performance options
#[derive(Debug, Parser)]
pub struct PerformanceOptions {
  /// Max requests per second
  #[arg(long, default_value = "10", value_name = "N")]
  pub rate_limit: usize,

  /// Request timeout in seconds
  #[arg(long, default_value = "30", value_name = "SECONDS")]
  pub timeout: u64,
}

impl Cli {
  /// Parse CLI arguments from the environment
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate CLI arguments
  ///
  /// Returns an error if the CLI configuration is invalid.
  pub fn validate(&self) -> Result<(), String> {
    if self.performance.rate_limit == 0 {
      return Err("--rate-limit must be at least 1 request per second".to_string());
    }

    if self.performance.timeout == 0 {
      return Err("--timeout must be at least 1 second".to_string());
    }

    match &self.command {
      Command::News(args) if args.page == 0 => Err("--page starts at 1".to_string()),
      Command::News(args) if args.per_page == 0 => Err("--per-page must be at least 1".to_string()),
      Command::Ticker { limit: 0 } => Err("--limit must be at least 1".to_string()),
      _ => Ok(()),
    }
  }

  /// Colour scheme for stdout, disabled for JSON and file output.
  pub fn output_colors(&self) -> ColorScheme {
    if self.output.format.supports_color() && self.output.output.is_none() {
      ColorScheme::new(self.behavior.color)
    } else {
      ColorScheme::plain()
    }
  }
}

/// Parse CLI arguments, initialize shared services, and dispatch to the chosen
/// command.
pub async fn run() {
  let cli = Cli::parse_args();

  init_tracing(&cli.behavior);

  // Create color scheme based on user preference
  let colors = ColorScheme::new(cli.behavior.color);

  // Validate CLI arguments
  if let Err(e) = cli.validate() {
    eprintln!("{} {}", colors.error("Error:"), e);
    process::exit(4); // Invalid arguments exit code
  }

  match &cli.command {
    Command::News(args) => {
      handle_news_command(args, &cli, &colors).await;
    }
    Command::Ticker { limit } => {
      handle_ticker_command(*limit, &cli, &colors).await;
    }
    Command::Documents { category } => {
      handle_documents_command(*category, &cli, &colors).await;
    }
    Command::Status => {
      handle_status_command(&cli, &colors);
    }
    Command::Version { json, short } => {
      handle_version_command(*json, *short, &colors);
    }
    Command::Completions { shell } => {
      handle_completions_command(*shell);
    }
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
