//! Plain-text helpers for rich-text fields and timestamps.
//!
//! Titles and summaries arrive as trusted HTML. The library keeps them
//! verbatim; these helpers only exist for surfaces that cannot render markup,
//! such as the terminal.

use chrono::NaiveDateTime;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parse a WordPress timestamp (`2026-02-20T00:00:00`), ignoring any trailing
/// `Z` or numeric offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
  let raw = raw.trim();
  if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(raw) {
    return Some(with_offset.naive_local());
  }
  let local = raw.strip_suffix('Z').unwrap_or(raw);
  TIMESTAMP_FORMATS
    .iter()
    .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
}

/// Format a timestamp as `YYYY/MM/DD`; unparsable input is returned as-is.
pub fn format_published_date(raw: &str) -> String {
  parse_timestamp(raw)
    .map(|timestamp| timestamp.format("%Y/%m/%d").to_string())
    .unwrap_or_else(|| raw.to_string())
}

/// Remove markup and decode entities so HTML fields read as plain text.
pub fn strip_html(html: &str) -> String {
  let mut text = String::with_capacity(html.len());
  let mut in_tag = false;

  for ch in html.chars() {
    match ch {
      '<' => in_tag = true,
      '>' if in_tag => in_tag = false,
      _ if !in_tag => text.push(ch),
      _ => {}
    }
  }

  decode_entities(text.trim())
}

fn decode_entities(text: &str) -> String {
  let mut decoded = String::with_capacity(text.len());
  let mut rest = text;

  while let Some(start) = rest.find('&') {
    decoded.push_str(&rest[..start]);
    let candidate = &rest[start..];

    match candidate.find(';').and_then(|end| Some((end, decode_entity(&candidate[1..end])?))) {
      Some((end, ch)) => {
        decoded.push(ch);
        rest = &candidate[end + 1..];
      }
      None => {
        decoded.push('&');
        rest = &candidate[1..];
      }
    }
  }

  decoded.push_str(rest);
  decoded
}

fn decode_entity(body: &str) -> Option<char> {
  if let Some(numeric) = body.strip_prefix('#') {
    let value = match numeric.strip_prefix(['x', 'X']) {
      Some(hex) => u32::from_str_radix(hex, 16).ok()?,
      None => numeric.parse().ok()?,
    };
    return char::from_u32(value);
  }

  let ch = match body {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
    "nbsp" => ' ',
    "ndash" => '\u{2013}',
    "mdash" => '\u{2014}',
    "hellip" => '\u{2026}',
    "lsquo" => '\u{2018}',
    "rsquo" => '\u{2019}',
    "ldquo" => '\u{201C}',
    "rdquo" => '\u{201D}',
    _ => return None,
  };
  Some(ch)
}
