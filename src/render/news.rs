//! Terminal rendering of the news list and the ticker.

use unicode_width::UnicodeWidthStr;

use super::pagination::{PageWindow, render_page_bar};
use crate::color::ColorScheme;
use crate::content::text::{format_published_date, strip_html};
use crate::content::{PaginatedResult, Post};

/// Where ticker entries without a detail page point.
pub const NEWS_INDEX_PATH: &str = "/news";

/// Display columns reserved for the category badge.
const BADGE_WIDTH: usize = 8;

const EMPTY_NEWS: &str = "該当するお知らせはありません。";
const VIEW_ALL: &str = "すべてのニュースを見る";

/// Render one page of the news list: the total, one line per post and the
/// pagination bar when there is more than one page.
pub fn render_news_page(result: &PaginatedResult<Post>, window: &PageWindow, colors: &ColorScheme) -> String {
  let mut output = format!("{}件\n", colors.number(result.total_count));

  if result.items.is_empty() {
    output.push_str(&colors.dimmed(EMPTY_NEWS));
    output.push('\n');
    return output;
  }

  for post in &result.items {
    output.push_str(&render_post_line(post, post.detail_link(), colors));
    output.push('\n');
  }

  if !window.is_trivial() {
    output.push('\n');
    output.push_str(&render_page_bar(window, colors));
    output.push('\n');
  }

  output
}

/// Render the ticker; posts without a detail page link to the news index.
pub fn render_ticker(posts: &[Post], colors: &ColorScheme) -> String {
  let mut output = String::new();

  for post in posts {
    let link = post.detail_link().unwrap_or(NEWS_INDEX_PATH);
    output.push_str(&render_post_line(post, Some(link), colors));
    output.push('\n');
  }

  output.push_str(&format!("{} {}\n", VIEW_ALL, colors.link(NEWS_INDEX_PATH)));
  output
}

/// `date  badge  title  [link]`
fn render_post_line(post: &Post, link: Option<&str>, colors: &ColorScheme) -> String {
  let category = post.display_category();
  let label = category.label();
  let padding = " ".repeat(BADGE_WIDTH.saturating_sub(label.width()));

  let mut line = format!(
    "{}  {}{}  {}",
    colors.dimmed(format_published_date(&post.published_at)),
    colors.news_badge(category, label),
    padding,
    strip_html(&post.title),
  );

  if let Some(link) = link {
    line.push_str("  ");
    line.push_str(&colors.link(link));
  }

  line
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cli::ColorOption;
  use crate::content::{NewsCategory, emulate_news_page, fallback_posts};
  use crate::render::pagination::page_window;

  fn plain() -> ColorScheme {
    ColorScheme::new(ColorOption::Never)
  }

  #[test]
  fn test_render_news_page_with_pagination() {
    let result = emulate_news_page(None, 1, 3);
    let window = page_window(1, result.total_pages);

    let output = render_news_page(&result, &window, &plain());

    insta::assert_snapshot!(output, @r###"
    15件
    2026/02/20  お知らせ  年末年始の営業について
    2026/01/15  資料追加  2026年版 施工マニュアルを公開しました  /downloads
    2025/12/05  受賞報告  インフラメンテナンス大賞 優秀賞を受賞しました

    [1] 2 3 … 5 ›
    "###);
  }

  #[test]
  fn test_render_single_page_has_no_bar() {
    let result = emulate_news_page(Some(NewsCategory::Award), 1, 10);
    let window = page_window(1, result.total_pages);

    let output = render_news_page(&result, &window, &plain());

    assert!(output.starts_with("3件\n"));
    assert_eq!(output.lines().count(), 4);
    assert!(!output.contains('['));
  }

  #[test]
  fn test_render_empty_news_page() {
    let result = PaginatedResult {
      items: Vec::new(),
      total_pages: 1,
      total_count: 0,
    };

    let output = render_news_page(&result, &page_window(1, 1), &plain());

    insta::assert_snapshot!(output, @r###"
    0件
    該当するお知らせはありません。
    "###);
  }

  #[test]
  fn test_unresolved_category_renders_as_info() {
    let mut post = fallback_posts().remove(2);
    post.category = None;
    post.title = "<em>Rock</em> &amp; Roll".to_string();

    let line = render_post_line(&post, None, &plain());

    assert_eq!(line, "2025/12/05  お知らせ  Rock & Roll");
  }

  #[test]
  fn test_render_ticker_links_to_news_index() {
    let posts: Vec<_> = fallback_posts().into_iter().take(2).collect();

    let output = render_ticker(&posts, &plain());

    insta::assert_snapshot!(output, @r###"
    2026/02/20  お知らせ  年末年始の営業について  /news
    2026/01/15  資料追加  2026年版 施工マニュアルを公開しました  /downloads
    すべてのニュースを見る /news
    "###);
  }
}
