//! CLI subcommand handlers.
//!
//! Each feed command resolves the site configuration, builds the Content API
//! client, loads its consumer and writes the rendered result. The helpers
//! below are shared between them.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::color::ColorScheme;
use crate::wordpress::WordPressClient;

pub mod completions;
pub mod documents;
pub mod news;
pub mod status;
pub mod ticker;
pub mod version;

/// Build the Content API client from the CLI options.
///
/// Construction never touches the network, so this is safe for an
/// unconfigured site.
pub(crate) fn build_client(cli: &Cli) -> Result<WordPressClient> {
  let config = cli.api.site_config();
  WordPressClient::new(config.base_url(), cli.performance.timeout, cli.performance.rate_limit)
    .context("Unable to construct Content API client")
}

/// Write rendered output to `path`, or to stdout when no path is given.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
  match path {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
      }
      fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))
    }
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(rendered.as_bytes()).context("Failed to write to stdout")?;
      stdout.flush().context("Failed to flush stdout")
    }
  }
}

/// Report a local failure and exit non-zero.
pub(crate) fn exit_with_error(action: &str, error: &anyhow::Error, colors: &ColorScheme) -> ! {
  eprintln!("{} {}", colors.error("✗"), colors.error(action));
  eprintln!("  {}: {:#}", colors.emphasis("Error"), error);
  process::exit(1);
}

/// Print the "written to" confirmation for file output.
pub(crate) fn report_written(path: Option<&Path>, colors: &ColorScheme) {
  if let Some(path) = path {
    eprintln!("{} Wrote {}", colors.success("✓"), colors.link(path.display()));
  }
}
