//! Record matching against the search index
//!
//! DOI lookup first; the title/author fallback runs only when the DOI stage
//! finds nothing. An ambiguous stage halts matching for the row: duplicates
//! in the repository must be resolved by hand, never auto-picked.

use tracing::{debug, error, info};

use natlic_domain::{MatchOutcome, SourceRow};
use natlic_index::{Result, SearchIndex, SearchResponse};

pub struct Matcher<'a, I: SearchIndex> {
    index: &'a I,
}

impl<'a, I: SearchIndex> Matcher<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Exact DOI lookup.
    pub async fn match_by_doi(&self, doi: &str) -> Result<MatchOutcome> {
        let response = self.index.search_identifier(doi).await?;
        let outcome = classify(response);
        match &outcome {
            MatchOutcome::Unique(record) => {
                info!(eprintid = record.eprintid, doi, "found match by doi");
            }
            MatchOutcome::Ambiguous(ids) => {
                error!(doi, candidates = ?ids, "several entries for doi, cannot import");
            }
            MatchOutcome::NoMatch => debug!(doi, "no match by doi"),
        }
        Ok(outcome)
    }

    /// Fallback lookup for records stored without a DOI.
    pub async fn match_by_title_and_authors(
        &self,
        title: &str,
        family_names: &str,
    ) -> Result<MatchOutcome> {
        let response = self.index.search_title_creators(title, family_names).await?;
        let outcome = classify(response);
        match &outcome {
            MatchOutcome::Unique(record) => {
                info!(eprintid = record.eprintid, title, "found match by title and authors");
            }
            MatchOutcome::Ambiguous(ids) => {
                error!(title, candidates = ?ids, "several entries for title, cannot import");
            }
            MatchOutcome::NoMatch => debug!(title, "no match by title and authors"),
        }
        Ok(outcome)
    }

    /// Full per-row matching: DOI stage, then the title/author fallback on
    /// NoMatch only. An ambiguous DOI stage does not cascade to the fallback.
    pub async fn match_record(&self, row: &SourceRow) -> Result<MatchOutcome> {
        let outcome = self.match_by_doi(&row.doi).await?;
        if outcome.is_no_match() {
            return self
                .match_by_title_and_authors(&row.title, &row.family_names_joined())
                .await;
        }
        Ok(outcome)
    }
}

/// Three-way classification of a search response.
fn classify(response: SearchResponse) -> MatchOutcome {
    match response.total() {
        0 => MatchOutcome::NoMatch,
        1 => match response.into_records().into_iter().next() {
            Some(record) => MatchOutcome::Unique(Box::new(record)),
            None => MatchOutcome::NoMatch,
        },
        _ => MatchOutcome::Ambiguous(response.record_ids()),
    }
}
