//! Search-response parsing

use natlic_domain::RepositoryRecord;
use serde::Deserialize;

use crate::error::Result;

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: HitSet,
}

#[derive(Debug, Deserialize)]
pub struct HitSet {
    /// Total hit count as reported by the index.
    pub total: u64,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source")]
    pub source: RepositoryRecord,
}

impl SearchResponse {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn total(&self) -> u64 {
        self.hits.total
    }

    pub fn into_records(self) -> Vec<RepositoryRecord> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }

    /// Stable ids of all candidate records, for ambiguity reporting.
    pub fn record_ids(&self) -> Vec<u64> {
        self.hits
            .hits
            .iter()
            .map(|hit| hit.source.eprintid)
            .collect()
    }
}
