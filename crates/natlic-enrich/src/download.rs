//! Fulltext PDF downloads
//!
//! Best-effort: an existing file is left alone, a transport failure is
//! logged with the failing URL and the row continues without a local file.
//! No retries.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use natlic_domain::SourceRow;

pub struct PdfFetcher {
    http: reqwest::Client,
    root: PathBuf,
}

impl PdfFetcher {
    pub fn new(root: &Path) -> Self {
        Self {
            http: reqwest::Client::new(),
            root: root.to_path_buf(),
        }
    }

    /// Fetch the row's fulltext to `<root>/<source-key>/<filename>`.
    ///
    /// Returns the local path when the file is present afterwards, `None`
    /// when the download failed.
    pub async fn fetch(&self, row: &SourceRow) -> Option<PathBuf> {
        let dir = self.root.join(&row.source_key);
        let path = dir.join(row.fulltext_filename());
        if path.is_file() {
            debug!(path = %path.display(), "fulltext already on disk");
            return Some(path);
        }

        let bytes = match self.get_bytes(&row.fulltext_url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(url = %row.fulltext_url, error = %err, "could not download pdf");
                return None;
            }
        };

        if let Err(err) = std::fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %err, "could not create download directory");
            return None;
        }
        if let Err(err) = std::fs::write(&path, &bytes) {
            warn!(path = %path.display(), error = %err, "could not write pdf");
            return None;
        }

        info!(doi = %row.doi, path = %path.display(), "downloaded full text");
        Some(path)
    }

    async fn get_bytes(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SourceRow {
        SourceRow {
            doi: "10.1093/past/gtm001".to_string(),
            doi_url: None,
            fulltext_url: "https://content.invalid/oxford/gtm001.pdf".to_string(),
            title: "A Title".to_string(),
            authors: "Miescher, Friedrich".to_string(),
            journal: None,
            publisher: None,
            issn: None,
            e_issn: None,
            publish_year: 2014,
            source_key: "oxford".to_string(),
        }
    }

    #[tokio::test]
    async fn test_existing_file_is_not_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("oxford");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("gtm001.pdf"), b"%PDF-1.4").unwrap();

        let fetcher = PdfFetcher::new(dir.path());
        // The URL host does not resolve; a hit proves the disk short-circuit.
        let path = fetcher.fetch(&row()).await.unwrap();
        assert!(path.ends_with("oxford/gtm001.pdf"));
    }

    #[tokio::test]
    async fn test_failed_download_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = PdfFetcher::new(dir.path());
        assert!(fetcher.fetch(&row()).await.is_none());
    }
}
