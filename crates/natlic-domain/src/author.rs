//! Author-name splitting for the export's author lists
//!
//! The export separates authors with semicolons and name parts with a comma,
//! "Family, Given; Family, Given". Only the family names take part in the
//! title/author fallback match.

/// Split a semicolon-delimited author list into family names.
///
/// Each author is expected as "Family, Given"; an entry without a comma is
/// used whole. Empty entries are dropped.
pub fn split_family_names(authors: &str) -> Vec<String> {
    authors
        .split(';')
        .map(|author| author.split(',').next().unwrap_or(author).trim())
        .filter(|family| !family.is_empty())
        .map(|family| family.to_string())
        .collect()
}

/// Family names joined with single spaces, the form the index query expects.
pub fn joined_family_names(authors: &str) -> String {
    split_family_names(authors).join(" ")
}
