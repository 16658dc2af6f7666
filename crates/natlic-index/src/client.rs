//! Thin HTTP transport and the `SearchIndex` seam

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{IndexError, Result};
use crate::query::{identifier_query, title_creator_query};
use crate::response::SearchResponse;

/// The two query shapes the enrichment pipeline needs.
#[async_trait]
pub trait SearchIndex {
    /// Exact-term lookup on the identifier field.
    async fn search_identifier(&self, value: &str) -> Result<SearchResponse>;

    /// Title (all terms) plus creator family names (any) lookup.
    async fn search_title_creators(
        &self,
        title: &str,
        family_names: &str,
    ) -> Result<SearchResponse>;
}

/// HTTP client against one collection of the search index.
pub struct IndexClient {
    http: reqwest::Client,
    search_url: Url,
}

impl IndexClient {
    /// Index queries can be slow on cold caches; mirror the generous
    /// server-side timeout instead of failing rows early.
    const TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(base_url: &str, collection: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|_| IndexError::InvalidUrl(base_url.to_string()))?;
        let search_url = base
            .join(&format!("{collection}/_search"))
            .map_err(|_| IndexError::InvalidUrl(format!("{base_url} + {collection}")))?;

        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|err| IndexError::Request(err.to_string()))?;

        Ok(Self { http, search_url })
    }

    async fn search(&self, query: &Value) -> Result<SearchResponse> {
        debug!(url = %self.search_url, "index query");
        let response = self
            .http
            .post(self.search_url.clone())
            .json(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Status {
                status: status.as_u16(),
                url: self.search_url.to_string(),
            });
        }

        let body = response.text().await?;
        SearchResponse::parse(&body)
    }
}

#[async_trait]
impl SearchIndex for IndexClient {
    async fn search_identifier(&self, value: &str) -> Result<SearchResponse> {
        self.search(&identifier_query(value)).await
    }

    async fn search_title_creators(
        &self,
        title: &str,
        family_names: &str,
    ) -> Result<SearchResponse> {
        self.search(&title_creator_query(title, family_names)).await
    }
}
