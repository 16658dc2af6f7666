//! Attached-document representation for repository records

use serde::{Deserialize, Serialize};

/// Mime type of documents the auditor inspects.
pub const PDF_MIME: &str = "application/pdf";

/// Access level of a document or an import decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSecurity {
    Public,
    Staffonly,
    Other,
}

impl DocumentSecurity {
    pub fn parse(value: &str) -> Self {
        match value {
            "public" => DocumentSecurity::Public,
            "staffonly" => DocumentSecurity::Staffonly,
            _ => DocumentSecurity::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSecurity::Public => "public",
            DocumentSecurity::Staffonly => "staffonly",
            DocumentSecurity::Other => "other",
        }
    }
}

/// Publication state of a document's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Published,
    Unspecified,
    Other,
}

impl ContentStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "published" => ContentStatus::Published,
            _ => ContentStatus::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Published => "published",
            ContentStatus::Unspecified => "unspecified",
            ContentStatus::Other => "other",
        }
    }
}

/// A file attached to a repository record.
///
/// Security and content arrive as free-text index fields; the typed
/// accessors collapse unknown values into the `Other` buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachedDocument {
    pub mime_type: String,
    pub security: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl AttachedDocument {
    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }

    pub fn security_level(&self) -> DocumentSecurity {
        DocumentSecurity::parse(&self.security)
    }

    /// A document without a content field counts as unspecified.
    pub fn content_status(&self) -> ContentStatus {
        self.content
            .as_deref()
            .map(ContentStatus::parse)
            .unwrap_or(ContentStatus::Unspecified)
    }
}
