//! Failure type shared by every Content API call.

use std::fmt;

/// Why a request against the Content API did not produce data.
#[derive(Debug)]
pub enum FetchError {
  /// The server answered with a non-2xx status.
  Status {
    /// Collection that was being requested (`posts`, `categories`, ...).
    resource: &'static str,
    /// HTTP status code returned.
    status: u16,
  },
  /// The request never completed (DNS, connect, timeout, TLS).
  Transport {
    resource: &'static str,
    source: reqwest::Error,
  },
  /// The body could not be decoded into the expected shape.
  Decode {
    resource: &'static str,
    source: reqwest::Error,
  },
}

impl FetchError {
  /// Collection the failed request targeted.
  pub fn resource(&self) -> &'static str {
    match self {
      Self::Status { resource, .. } | Self::Transport { resource, .. } | Self::Decode { resource, .. } => resource,
    }
  }
}

impl fmt::Display for FetchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Status { resource, status } => write!(f, "{resource} request returned HTTP {status}"),
      Self::Transport { resource, source } => write!(f, "{resource} request failed: {source}"),
      Self::Decode { resource, source } => write!(f, "{resource} response could not be decoded: {source}"),
    }
  }
}

impl std::error::Error for FetchError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Status { .. } => None,
      Self::Transport { source, .. } | Self::Decode { source, .. } => Some(source),
    }
  }
}
