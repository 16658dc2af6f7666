//! Embargo computation
//!
//! National-licence agreements fix the embargo length per publisher. A
//! record may go public once `publish year + embargo length` lies in the
//! past; until then it is imported staff-only.

use lazy_static::lazy_static;
use std::collections::HashMap;

use natlic_domain::{ContentStatus, DocumentSecurity};

use crate::error::{EnrichError, Result};

lazy_static! {
    /// Embargo length in years by source publisher key.
    static ref EMBARGO_YEARS: HashMap<&'static str, i32> = HashMap::from([
        ("gruyter", 2),
        ("cambridge", 5),
        ("oxford", 3),
        ("springer", 5),
    ]);
}

/// Import decision for a record lacking an acceptable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embargo {
    /// Year the document may become public.
    pub year: i32,
    pub security: DocumentSecurity,
    pub content: ContentStatus,
}

/// Compute the embargo release year and access level.
///
/// Fails with [`EnrichError::MissingEmbargoPolicy`] when the publisher key
/// is not covered by a licence agreement; an unknown publisher must never
/// default to public access.
pub fn compute_embargo(publisher: &str, publish_year: i32, current_year: i32) -> Result<Embargo> {
    let length = EMBARGO_YEARS
        .get(publisher)
        .ok_or_else(|| EnrichError::MissingEmbargoPolicy(publisher.to_string()))?;
    let year = publish_year + length;
    let security = if year > current_year {
        DocumentSecurity::Staffonly
    } else {
        DocumentSecurity::Public
    };
    Ok(Embargo {
        year,
        security,
        content: ContentStatus::Published,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("oxford", 2014, 2024, 2017, DocumentSecurity::Public; "expired embargo is public")]
    #[test_case("oxford", 2023, 2024, 2026, DocumentSecurity::Staffonly; "running embargo is staffonly")]
    #[test_case("gruyter", 2022, 2024, 2024, DocumentSecurity::Public; "release year itself is public")]
    #[test_case("cambridge", 2020, 2024, 2025, DocumentSecurity::Staffonly; "five year embargo")]
    fn test_compute_embargo(
        publisher: &str,
        publish_year: i32,
        current_year: i32,
        expected_year: i32,
        expected_security: DocumentSecurity,
    ) {
        let embargo = compute_embargo(publisher, publish_year, current_year).unwrap();
        assert_eq!(embargo.year, expected_year);
        assert_eq!(embargo.security, expected_security);
        assert_eq!(embargo.content, ContentStatus::Published);
    }

    #[test]
    fn test_unknown_publisher_is_a_hard_failure() {
        let err = compute_embargo("wiley", 2014, 2024).unwrap_err();
        assert!(matches!(err, EnrichError::MissingEmbargoPolicy(ref key) if key == "wiley"));
    }
}
