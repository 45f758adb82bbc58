//! Document library fetching and grouping.

use tracing::debug;

use super::models::{DocCategory, Document};
use crate::wordpress::{ContentApi, FetchError};

/// Fetch the whole document library (a single page of up to 100 items).
///
/// # Errors
/// Returns the request failure; there is no partial result.
pub async fn fetch_documents(api: &dyn ContentApi) -> Result<Vec<Document>, FetchError> {
  let documents = api.list_documents().await?;
  debug!(count = documents.len(), "fetched documents");
  Ok(documents.into_iter().map(Document::from).collect())
}

/// Documents belonging to one library section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentGroup<'a> {
  pub category: DocCategory,
  pub documents: Vec<&'a Document>,
}

/// Group documents into sections in the fixed [`DocCategory::ORDER`].
///
/// Only categories listed in `visible` are considered, sections without
/// documents are omitted, and documents with no category appear nowhere.
pub fn group_documents<'a>(documents: &'a [Document], visible: &[DocCategory]) -> Vec<DocumentGroup<'a>> {
  DocCategory::ORDER
    .into_iter()
    .filter(|category| visible.contains(category))
    .filter_map(|category| {
      let members: Vec<&Document> = documents
        .iter()
        .filter(|doc| doc.doc_category == Some(category))
        .collect();
      (!members.is_empty()).then_some(DocumentGroup {
        category,
        documents: members,
      })
    })
    .collect()
}
