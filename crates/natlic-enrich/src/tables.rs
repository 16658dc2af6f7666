//! Static normalization and correction tables
//!
//! Pure lookup data, loaded once. Publisher spellings collapse to one
//! canonical form; ISSN/e-ISSN corrections are keyed by the literal
//! (possibly malformed) value found in the export. Unmapped values always
//! pass through unchanged.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Provenance sentence recorded on every enriched record.
pub const PROVENANCE_NOTE: &str = "It was possible to publish this article open access thanks \
to a Swiss National Licence with the Publisher.";

/// Separator used when appending the provenance note to an existing note.
pub const NOTE_SEPARATOR: &str = " -- ";

/// Processing-status marker set on enriched records for downstream export
/// filtering.
pub const UPDATE_STATUS_FULLTEXT: &str = "fulltext";

lazy_static! {
    static ref PUBLISHER_NORMALIZATIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Akademie Verlag GmbH", "Akademie Verlag"),
        ("Blackwell Publishing Ltd", "Blackwell"),
        ("Blackwell Science Ltd", "Blackwell"),
        ("Blackwell Science Ltd, UK", "Blackwell"),
        ("Blackwell Science, Ltd", "Blackwell"),
        ("Elsevier B.V.", "Elsevier"),
        ("Elsevier Science", "Elsevier"),
        ("Elsevier Science B.V.", "Elsevier"),
        ("OLDENBOURG WISSENSCHAFTSVERLAG", "Oldenbourg"),
        ("Oldenbourg Wissenschaftsverlag GmbH", "Oldenbourg"),
        ("R. Oldenbourg Verlag", "Oldenbourg"),
        ("The University Chicago Press", "The University of Chicago Press"),
        ("University Chicago Press", "The University of Chicago Press"),
        ("Walter de Gruyter", "De Gruyter"),
        ("Walter de Gruyter GmbH", "De Gruyter"),
        ("Walter de Gruyter GmbH & Co. KG", "De Gruyter"),
        ("Walter de Gruyter, Berlin / New York", "De Gruyter"),
    ]);

    static ref ISSN_FIXES: HashMap<&'static str, &'static str> = HashMap::from([
        ("14346621", "1434-6621"),
        ("943", "0943-8610"),
        ("3005577", "0300-5577"),
        ("16193997", "0300-5577"),
    ]);

    static ref EISSN_FIXES: HashMap<&'static str, &'static str> = HashMap::from([
        ("-", "1756-2651"),
        ("14374331", "1437-4331"),
        ("16193997", "1619-3997"),
        ("3005577", "1619-3997"),
    ]);
}

/// Canonical publisher name, or the input when no mapping exists.
pub fn normalize_publisher(name: &str) -> &str {
    PUBLISHER_NORMALIZATIONS.get(name).copied().unwrap_or(name)
}

/// Corrected ISSN, or the input when it needs no correction.
pub fn fix_issn(issn: &str) -> &str {
    ISSN_FIXES.get(issn).copied().unwrap_or(issn)
}

/// Corrected e-ISSN, or the input when it needs no correction.
pub fn fix_eissn(eissn: &str) -> &str {
    EISSN_FIXES.get(eissn).copied().unwrap_or(eissn)
}
