//! Attached-document audit
//!
//! Decides whether a matched record already carries an acceptable fulltext
//! PDF. Only the first PDF attachment is evaluated; other mime types are
//! ignored entirely.

use tracing::{info, warn};

use natlic_domain::{ContentStatus, DocumentSecurity, RepositoryRecord};

/// True when the record's first PDF is published and either public or
/// staff-only (the latter means an embargo is already in effect). Anything
/// else, or no PDF at all, needs replacement.
pub fn has_acceptable_document(record: &RepositoryRecord) -> bool {
    let Some(document) = record.first_pdf() else {
        return false;
    };

    match (document.security_level(), document.content_status()) {
        (DocumentSecurity::Public, ContentStatus::Published) => {
            info!(eprintid = record.eprintid, "record already has a published pdf");
            true
        }
        (DocumentSecurity::Staffonly, ContentStatus::Published) => {
            info!(
                eprintid = record.eprintid,
                "record has a published pdf under embargo"
            );
            true
        }
        (security, content) => {
            warn!(
                eprintid = record.eprintid,
                security = security.as_str(),
                content = content.as_str(),
                "record has a pdf that will be replaced"
            );
            false
        }
    }
}
