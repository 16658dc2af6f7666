//! Repository-record representation as returned by the search index

use serde::{Deserialize, Serialize};

use crate::document::AttachedDocument;

/// One entry of a record's identifier list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIdentifier {
    #[serde(rename = "type")]
    pub id_type: String,
    pub id: String,
}

impl RecordIdentifier {
    pub fn doi(id: &str) -> Self {
        Self {
            id_type: "doi".to_string(),
            id: id.to_string(),
        }
    }
}

/// An existing entry in the target repository.
///
/// Only the fields the enrichment touches are typed; everything else the
/// index returns is preserved verbatim in `extra` so enriched records can be
/// handed to a downstream exporter without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub eprintid: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<Vec<RecordIdentifier>>,
    /// Free-text internal note field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<AttachedDocument>>,
    /// Journal title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_issn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Processing-status marker used for downstream export filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RepositoryRecord {
    /// Whether the identifier list already carries this DOI.
    pub fn has_doi(&self, doi: &str) -> bool {
        self.id_number
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|number| number.id_type == "doi" && number.id == doi)
    }

    /// The first PDF-typed attachment. Later PDFs are never inspected.
    pub fn first_pdf(&self) -> Option<&AttachedDocument> {
        self.documents
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|document| document.is_pdf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RepositoryRecord {
        RepositoryRecord {
            eprintid: 4711,
            id_number: Some(vec![RecordIdentifier::doi("10.1000/x")]),
            suggestions: None,
            documents: None,
            publication: None,
            issn: None,
            e_issn: None,
            publisher: None,
            update_status: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_has_doi() {
        let rec = record();
        assert!(rec.has_doi("10.1000/x"));
        assert!(!rec.has_doi("10.1000/y"));
    }

    #[test]
    fn test_first_pdf_skips_other_mime_types() {
        let mut rec = record();
        rec.documents = Some(vec![
            AttachedDocument {
                mime_type: "text/html".to_string(),
                security: "public".to_string(),
                content: None,
            },
            AttachedDocument {
                mime_type: "application/pdf".to_string(),
                security: "staffonly".to_string(),
                content: Some("published".to_string()),
            },
        ]);
        let pdf = rec.first_pdf().unwrap();
        assert_eq!(pdf.security, "staffonly");
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let json = r#"{
            "eprintid": 99,
            "title": "On the Digestion of Cellulose",
            "date": 1998,
            "suggestions": "see also box 4"
        }"#;
        let rec: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.eprintid, 99);
        assert_eq!(rec.suggestions.as_deref(), Some("see also box 4"));

        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back["title"], "On the Digestion of Cellulose");
        assert_eq!(back["date"], 1998);
    }
}
