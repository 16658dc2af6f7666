//! Match outcome of an index lookup

use crate::repository::RepositoryRecord;

/// Result of looking a source row up in the search index.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Exactly one candidate. Safe to process further.
    Unique(Box<RepositoryRecord>),
    /// More than one candidate. Requires manual resolution; the row is
    /// excluded from the run.
    Ambiguous(Vec<u64>),
    /// Nothing found. An expected outcome, not an error.
    NoMatch,
}

impl MatchOutcome {
    pub fn is_unique(&self) -> bool {
        matches!(self, MatchOutcome::Unique(_))
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchOutcome::NoMatch)
    }
}
