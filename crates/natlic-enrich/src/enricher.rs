//! Metadata enrichment of matched records
//!
//! Merges normalized bibliographic data from a source row into its matched
//! repository record. Present source values overwrite; absent source values
//! never erase existing data. The whole merge is idempotent.

use natlic_domain::{RecordIdentifier, RepositoryRecord, SourceRow};

use crate::tables::{
    fix_eissn, fix_issn, normalize_publisher, NOTE_SEPARATOR, PROVENANCE_NOTE,
    UPDATE_STATUS_FULLTEXT,
};

/// Apply the full enrichment to a matched record.
pub fn enrich_record(record: &mut RepositoryRecord, row: &SourceRow) {
    merge_doi(record, &row.doi);
    merge_note(record);

    if let Some(journal) = &row.journal {
        record.publication = Some(journal.clone());
    }
    if let Some(issn) = &row.issn {
        record.issn = Some(fix_issn(issn).to_string());
    }
    if let Some(e_issn) = &row.e_issn {
        record.e_issn = Some(fix_eissn(e_issn).to_string());
    }
    if let Some(publisher) = &row.publisher {
        record.publisher = Some(normalize_publisher(publisher).to_string());
    }

    // Marker is set in all cases, whatever else was merged.
    record.update_status = Some(UPDATE_STATUS_FULLTEXT.to_string());
}

/// Append a DOI identifier unless the list already carries it.
fn merge_doi(record: &mut RepositoryRecord, doi: &str) {
    if record.has_doi(doi) {
        return;
    }
    record
        .id_number
        .get_or_insert_with(Vec::new)
        .push(RecordIdentifier::doi(doi));
}

/// Set or append the provenance note, exactly once.
fn merge_note(record: &mut RepositoryRecord) {
    match &mut record.suggestions {
        Some(note) if note.contains(PROVENANCE_NOTE) => {}
        Some(note) => {
            note.push_str(NOTE_SEPARATOR);
            note.push_str(PROVENANCE_NOTE);
        }
        None => record.suggestions = Some(PROVENANCE_NOTE.to_string()),
    }
}
