//! Sequential pipeline driver
//!
//! Rows are processed strictly in source-sheet order: match, audit, embargo,
//! manifest, enrich, optional download. Row-scoped failures are logged and
//! the batch continues. The enriched collection is returned by value for a
//! downstream exporter; nothing is accumulated in hidden state.

use std::collections::HashSet;

use chrono::{Datelike, Local};
use tracing::{error, info, warn};

use natlic_domain::{EnrichedRecord, MatchOutcome};
use natlic_index::SearchIndex;

use crate::audit::has_acceptable_document;
use crate::config::EnricherConfig;
use crate::download::PdfFetcher;
use crate::embargo::compute_embargo;
use crate::enricher::enrich_record;
use crate::error::Result;
use crate::import_list::ImportListWriter;
use crate::loader::load_source_rows;
use crate::matcher::Matcher;
use crate::report::MatchReportWriter;

/// Per-run counters, reported at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub matched: usize,
    pub ambiguous: usize,
    pub unmatched: usize,
    pub queued_for_import: usize,
    pub downloaded: usize,
    pub failed_rows: usize,
}

/// Everything a run produces in memory.
pub struct RunOutput {
    pub summary: RunSummary,
    pub enriched: Vec<EnrichedRecord>,
}

pub struct Enricher<I: SearchIndex> {
    config: EnricherConfig,
    index: I,
}

impl<I: SearchIndex> Enricher<I> {
    pub fn new(config: EnricherConfig, index: I) -> Self {
        Self { config, index }
    }

    pub async fn run(&self) -> Result<RunOutput> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let rows = load_source_rows(&self.config.source_path)?;
        let today = Local::now().date_naive();
        let current_year = today.year();

        let import_list = ImportListWriter::new(&self.config.output_dir, today);
        let mut report = MatchReportWriter::create(&self.config.output_dir, today)?;
        let fetcher = self
            .config
            .download_pdfs
            .then(|| PdfFetcher::new(&self.config.download_root));
        let matcher = Matcher::new(&self.index);

        let mut summary = RunSummary {
            rows: rows.len(),
            ..RunSummary::default()
        };
        let mut enriched = Vec::new();
        let mut seen_ids: HashSet<u64> = HashSet::new();

        for row in &rows {
            let outcome = match matcher.match_record(row).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(doi = %row.doi, error = %err, "index lookup failed, row skipped");
                    summary.failed_rows += 1;
                    continue;
                }
            };

            let record = match outcome {
                MatchOutcome::Unique(record) => *record,
                MatchOutcome::Ambiguous(_) => {
                    summary.ambiguous += 1;
                    continue;
                }
                MatchOutcome::NoMatch => {
                    summary.unmatched += 1;
                    continue;
                }
            };

            let eprint_id = record.eprintid;
            if !seen_ids.insert(eprint_id) {
                warn!(eprintid = eprint_id, doi = %row.doi, "duplicate match, row skipped");
                continue;
            }
            summary.matched += 1;
            report.append(&row.doi, eprint_id, &row.storage_path())?;

            let acceptable = has_acceptable_document(&record);
            let mut result = EnrichedRecord {
                source: row.clone(),
                eprint_id,
                record,
                has_acceptable_document: acceptable,
                security: None,
                content: None,
                embargo_year: None,
                local_path: None,
            };

            if !acceptable {
                let embargo = match compute_embargo(&row.source_key, row.publish_year, current_year)
                {
                    Ok(embargo) => embargo,
                    Err(err) => {
                        error!(doi = %row.doi, error = %err, "row skipped");
                        summary.failed_rows += 1;
                        continue;
                    }
                };
                let local_path = self
                    .config
                    .storage_root
                    .join(row.storage_path())
                    .to_string_lossy()
                    .into_owned();
                import_list.append_line(eprint_id, &embargo, &local_path)?;
                info!(
                    eprintid = eprint_id,
                    embargo_year = embargo.year,
                    "record can be imported with embargo"
                );
                summary.queued_for_import += 1;

                result.security = Some(embargo.security);
                result.content = Some(embargo.content);
                result.embargo_year = Some(embargo.year);
                result.local_path = Some(local_path);

                if let Some(fetcher) = &fetcher {
                    if fetcher.fetch(row).await.is_some() {
                        summary.downloaded += 1;
                    }
                }
            }

            enrich_record(&mut result.record, row);
            enriched.push(result);
        }

        info!(
            rows = summary.rows,
            matched = summary.matched,
            ambiguous = summary.ambiguous,
            unmatched = summary.unmatched,
            queued = summary.queued_for_import,
            "run finished"
        );
        Ok(RunOutput { summary, enriched })
    }
}
