//! Source rows and the enriched records the pipeline produces

use serde::{Deserialize, Serialize};

use crate::author::{joined_family_names, split_family_names};
use crate::document::{ContentStatus, DocumentSecurity};
use crate::repository::RepositoryRecord;

/// One row of the spreadsheet export. Immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRow {
    pub doi: String,
    pub doi_url: Option<String>,
    pub fulltext_url: String,
    pub title: String,
    /// Semicolon-delimited author list, each "Family, Given".
    pub authors: String,
    pub journal: Option<String>,
    /// Publisher as cited in the source.
    pub publisher: Option<String>,
    pub issn: Option<String>,
    pub e_issn: Option<String>,
    pub publish_year: i32,
    /// Source publisher key; selects the embargo policy and storage folder.
    pub source_key: String,
}

impl SourceRow {
    pub fn family_names(&self) -> Vec<String> {
        split_family_names(&self.authors)
    }

    pub fn family_names_joined(&self) -> String {
        joined_family_names(&self.authors)
    }

    /// Filename portion of the fulltext URL.
    pub fn fulltext_filename(&self) -> &str {
        self.fulltext_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.fulltext_url)
    }

    /// Storage path relative to a storage root: `<source-key>/<filename>`.
    pub fn storage_path(&self) -> String {
        format!("{}/{}", self.source_key, self.fulltext_filename())
    }
}

/// A source row joined with its matched repository record and the import
/// decision taken for it. At most one per source row and run.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecord {
    pub source: SourceRow,
    pub eprint_id: u64,
    pub record: RepositoryRecord,
    /// Whether the record already carried an acceptable fulltext PDF.
    pub has_acceptable_document: bool,
    /// Set only when the record is queued for import.
    pub security: Option<DocumentSecurity>,
    pub content: Option<ContentStatus>,
    pub embargo_year: Option<i32>,
    pub local_path: Option<String>,
}
