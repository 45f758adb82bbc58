//! Terminal rendering of the document library.

use crate::color::ColorScheme;
use crate::content::text::{format_published_date, strip_html};
use crate::content::{DocCategory, Document, group_documents};

const EMPTY_LIBRARY: &str = "現在公開中の資料はありません。";

/// Render the library as one section per category in display order.
///
/// An empty library prints the empty-state notice; a filter that hides every
/// section prints nothing.
pub fn render_document_library(documents: &[Document], visible: &[DocCategory], colors: &ColorScheme) -> String {
  if documents.is_empty() {
    return format!("{}\n", colors.dimmed(EMPTY_LIBRARY));
  }

  let sections: Vec<String> = group_documents(documents, visible)
    .into_iter()
    .map(|group| {
      let mut section = format!(
        "{}  {}\n",
        colors.doc_section(group.category, group.category.label()),
        colors.dimmed(format!("{}件", group.documents.len())),
      );
      for document in group.documents {
        section.push_str(&render_document(document, colors));
      }
      section
    })
    .collect();

  sections.join("\n")
}

fn render_document(document: &Document, colors: &ColorScheme) -> String {
  let mut card = format!("  {}\n", colors.emphasis(strip_html(&document.title)));

  let description = document.description();
  if !description.is_empty() {
    card.push_str(&format!("  {description}\n"));
  }

  let mut meta = format_published_date(&document.published_at);
  if let Some(size) = document.attachment.file_size_label.as_deref().filter(|size| !size.is_empty()) {
    meta.push_str(" · ");
    meta.push_str(size);
  }
  card.push_str(&format!("  {}", colors.dimmed(meta)));

  if let Some(link) = document.download_link() {
    card.push_str("  ");
    card.push_str(&colors.link(link));
  }
  card.push('\n');
  card
}
