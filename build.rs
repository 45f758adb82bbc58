//! Build script for rakuyu-feed.
//!
//! Stamps the binary with the metadata printed by `rakuyu-feed version`.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
  let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
  println!("cargo:rustc-env=GIT_HASH={git_hash}");

  let built_at = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|elapsed| elapsed.as_secs())
    .unwrap_or_default();
  println!("cargo:rustc-env=BUILD_TIMESTAMP={built_at}");

  println!("cargo:rustc-env=TARGET={}", env::var("TARGET").unwrap_or_default());

  let rustc = command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());
  println!("cargo:rustc-env=RUSTC_VERSION={rustc}");

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
  println!("cargo:rerun-if-env-changed=TARGET");
}

/// Run a tool and return its trimmed stdout, or `None` when it is missing or
/// prints nothing.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
  let output = Command::new(program).args(args).output().ok()?;
  let text = String::from_utf8(output.stdout).ok()?.trim().to_string();
  (!text.is_empty()).then_some(text)
}
