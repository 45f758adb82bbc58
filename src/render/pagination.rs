//! Page-number window for the news list pagination bar.

use serde::Serialize;

use crate::color::ColorScheme;

/// Pages within this distance of the current page are always listed.
const WINDOW_RADIUS: u32 = 2;

/// One slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageMarker {
  Page(u32),
  /// A run of hidden pages, drawn as an ellipsis.
  Gap,
}

/// Everything needed to draw the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
  pub current: u32,
  pub total: u32,
  pub markers: Vec<PageMarker>,
  pub has_prev: bool,
  pub has_next: bool,
}

impl PageWindow {
  /// A single page needs no bar.
  pub fn is_trivial(&self) -> bool {
    self.total <= 1
  }
}

/// Render the bar as `‹ 1 … 4 5 [6] 7 8 … 12 ›`; the arrows only appear when
/// there is a page in that direction.
pub fn render_page_bar(window: &PageWindow, colors: &ColorScheme) -> String {
  let mut parts = Vec::with_capacity(window.markers.len() + 2);

  if window.has_prev {
    parts.push("‹".to_string());
  }
  for marker in &window.markers {
    parts.push(match marker {
      PageMarker::Page(page) if *page == window.current => colors.emphasis(format!("[{page}]")),
      PageMarker::Page(page) => page.to_string(),
      PageMarker::Gap => colors.dimmed("…"),
    });
  }
  if window.has_next {
    parts.push("›".to_string());
  }

  parts.join(" ")
}

/// Compute the visible pages: the first, the last, and every page within two
/// of `current`, with a [`PageMarker::Gap`] wherever pages are skipped.
pub fn page_window(current: u32, total: u32) -> PageWindow {
  let total = total.max(1);
  let current = current.clamp(1, total);

  let low = current.saturating_sub(WINDOW_RADIUS).max(1);
  let high = current.saturating_add(WINDOW_RADIUS).min(total);
  let mut pages: Vec<u32> = (low..=high).collect();
  pages.push(1);
  pages.push(total);
  pages.sort_unstable();
  pages.dedup();

  let mut markers = Vec::with_capacity(pages.len() + 2);
  let mut previous = 0;
  for page in pages {
    if page > previous + 1 {
      markers.push(PageMarker::Gap);
    }
    markers.push(PageMarker::Page(page));
    previous = page;
  }

  PageWindow {
    current,
    total,
    markers,
    has_prev: current > 1,
    has_next: current < total,
  }
}
