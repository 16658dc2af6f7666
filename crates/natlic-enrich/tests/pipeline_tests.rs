//! Enrichment pipeline integration tests
//!
//! Drive the full pipeline against a scripted fake index and a generated
//! spreadsheet fixture; no network, no live index.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rust_xlsxwriter::Workbook;

use natlic_domain::{AttachedDocument, DocumentSecurity, RepositoryRecord};
use natlic_enrich::{Enricher, EnricherConfig};
use natlic_index::{Hit, HitSet, SearchIndex, SearchResponse};

struct FakeIndex {
    by_identifier: HashMap<String, Vec<RepositoryRecord>>,
    by_title: HashMap<String, Vec<RepositoryRecord>>,
}

#[async_trait]
impl SearchIndex for FakeIndex {
    async fn search_identifier(&self, value: &str) -> natlic_index::Result<SearchResponse> {
        Ok(response(
            self.by_identifier.get(value).cloned().unwrap_or_default(),
        ))
    }

    async fn search_title_creators(
        &self,
        title: &str,
        _family_names: &str,
    ) -> natlic_index::Result<SearchResponse> {
        Ok(response(self.by_title.get(title).cloned().unwrap_or_default()))
    }
}

fn response(records: Vec<RepositoryRecord>) -> SearchResponse {
    SearchResponse {
        hits: HitSet {
            total: records.len() as u64,
            hits: records.into_iter().map(|source| Hit { source }).collect(),
        },
    }
}

fn record(eprintid: u64) -> RepositoryRecord {
    RepositoryRecord {
        eprintid,
        id_number: None,
        suggestions: None,
        documents: None,
        publication: None,
        issn: None,
        e_issn: None,
        publisher: None,
        update_status: None,
        extra: serde_json::Map::new(),
    }
}

fn record_with_published_pdf(eprintid: u64) -> RepositoryRecord {
    let mut rec = record(eprintid);
    rec.documents = Some(vec![AttachedDocument {
        mime_type: "application/pdf".to_string(),
        security: "public".to_string(),
        content: Some("published".to_string()),
    }]);
    rec
}

/// Write a sheet from sparse (column, value) cell lists, one list per row.
fn write_sheet(path: &Path, rows: &[Vec<(u16, &str)>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (row_index, cells) in rows.iter().enumerate() {
        for (column, value) in cells {
            sheet.write(row_index as u32, *column, *value).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn header() -> Vec<(u16, &'static str)> {
    vec![
        (0, "nr"),
        (3, "doi"),
        (4, "url"),
        (5, "fulltext-url"),
        (6, "title"),
        (8, "authors"),
        (9, "publish-date"),
        (10, "journal"),
        (11, "affiliation"),
        (12, "publisher"),
        (18, "issn"),
        (19, "e-issn"),
        (22, "source"),
        (27, "comment"),
    ]
}

fn fixture_rows() -> Vec<Vec<(u16, &'static str)>> {
    vec![
        header(),
        // Unique DOI match; the matched record has no documents.
        vec![
            (0, "1"),
            (3, "10.1093/past/gtm001"),
            (5, "https://content.example.org/oxford/gtm001.pdf"),
            (6, "Peasants and Their Fields"),
            (8, "Miescher, Friedrich; Bernoulli, Daniel"),
            (9, "2014"),
            (10, "Past and Present"),
            (12, "Oxford University Press"),
            (18, "943"),
            (22, "oxford"),
        ],
        // No DOI match; unique title/author match with an acceptable PDF.
        vec![
            (0, "2"),
            (3, "10.1017/S0021853700001234"),
            (5, "https://content.example.org/cambridge/s1234.pdf"),
            (6, "Trade Routes of the Sahel"),
            (8, "Euler, Leonhard"),
            (9, "2012"),
            (22, "cambridge"),
        ],
        // Ambiguous DOI match; must not fall back to the title stage.
        vec![
            (0, "3"),
            (3, "10.1515/zfs.2010.001"),
            (5, "https://content.example.org/gruyter/zfs.pdf"),
            (6, "Ambiguous Everywhere"),
            (8, "Paracelsus"),
            (9, "2010"),
            (22, "gruyter"),
        ],
        // No match at all.
        vec![
            (0, "4"),
            (3, "10.1007/s00001-013-0001-1"),
            (5, "https://content.example.org/springer/s1.pdf"),
            (6, "An Unmatched Paper"),
            (8, "Bernoulli, Jakob"),
            (9, "2013"),
            (22, "springer"),
        ],
    ]
}

fn fake_index() -> FakeIndex {
    let mut by_identifier = HashMap::new();
    by_identifier.insert("10.1093/past/gtm001".to_string(), vec![record(101)]);
    by_identifier.insert(
        "10.1515/zfs.2010.001".to_string(),
        vec![record(301), record(302)],
    );

    let mut by_title = HashMap::new();
    by_title.insert(
        "Trade Routes of the Sahel".to_string(),
        vec![record_with_published_pdf(201)],
    );
    // Would resolve the ambiguous row if the pipeline (wrongly) cascaded.
    by_title.insert("Ambiguous Everywhere".to_string(), vec![record(303)]);

    FakeIndex {
        by_identifier,
        by_title,
    }
}

fn config(dir: &Path, source: PathBuf) -> EnricherConfig {
    EnricherConfig {
        source_path: source,
        index_url: "http://localhost:9200".to_string(),
        collection: "repository".to_string(),
        download_pdfs: false,
        download_root: dir.join("pdfs"),
        storage_root: dir.join("storage"),
        output_dir: dir.join("out"),
    }
}

fn find_output(dir: &Path, suffix: &str) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| path.to_string_lossy().ends_with(suffix))
}

#[tokio::test]
async fn test_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("records.xlsx");
    write_sheet(&source, &fixture_rows());

    let enricher = Enricher::new(config(dir.path(), source), fake_index());
    let output = enricher.run().await.unwrap();

    let summary = &output.summary;
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.ambiguous, 1);
    assert_eq!(summary.unmatched, 1);
    assert_eq!(summary.queued_for_import, 1);
    assert_eq!(summary.failed_rows, 0);

    // Row 1 was queued: manifest line with expired oxford embargo (2014+3).
    let manifest = find_output(&dir.path().join("out"), "-import.txt").unwrap();
    let manifest_content = std::fs::read_to_string(&manifest).unwrap();
    let lines: Vec<&str> = manifest_content.lines().collect();
    assert_eq!(lines.len(), 1);
    let fields: Vec<&str> = lines[0].split('|').collect();
    assert_eq!(fields[0], "101");
    assert_eq!(fields[1], "public");
    assert_eq!(fields[2], "published");
    assert_eq!(fields[3], "2017");
    assert!(fields[4].ends_with("storage/oxford/gtm001.pdf"));

    // Match report carries both matched rows, in sheet order.
    let report = find_output(&dir.path().join("out"), "-match-report.csv").unwrap();
    let report_content = std::fs::read_to_string(&report).unwrap();
    let report_lines: Vec<&str> = report_content.lines().collect();
    assert_eq!(report_lines[0], "doi,eprintid,storage-path");
    assert_eq!(report_lines[1], "10.1093/past/gtm001,101,oxford/gtm001.pdf");
    assert_eq!(
        report_lines[2],
        "10.1017/S0021853700001234,201,cambridge/s1234.pdf"
    );

    // Both matched records were enriched.
    assert_eq!(output.enriched.len(), 2);
    let first = &output.enriched[0];
    assert_eq!(first.eprint_id, 101);
    assert!(!first.has_acceptable_document);
    assert_eq!(first.embargo_year, Some(2017));
    assert_eq!(first.security, Some(DocumentSecurity::Public));
    assert_eq!(first.record.update_status.as_deref(), Some("fulltext"));
    assert_eq!(first.record.issn.as_deref(), Some("0943-8610"));
    assert!(first.record.has_doi("10.1093/past/gtm001"));
    assert!(first.record.suggestions.is_some());

    let second = &output.enriched[1];
    assert_eq!(second.eprint_id, 201);
    assert!(second.has_acceptable_document);
    assert_eq!(second.embargo_year, None);
    assert_eq!(second.security, None);
    assert_eq!(second.record.update_status.as_deref(), Some("fulltext"));
}

#[tokio::test]
async fn test_same_day_reruns_accumulate_in_the_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("records.xlsx");
    write_sheet(&source, &fixture_rows());

    let enricher = Enricher::new(config(dir.path(), source), fake_index());
    enricher.run().await.unwrap();
    enricher.run().await.unwrap();

    let manifest = find_output(&dir.path().join("out"), "-import.txt").unwrap();
    let content = std::fs::read_to_string(&manifest).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[tokio::test]
async fn test_unknown_publisher_fails_the_row_not_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("records.xlsx");
    write_sheet(
        &source,
        &[
            header(),
            vec![
                (0, "1"),
                (3, "10.9999/unknown.1"),
                (5, "https://content.example.org/wiley/w1.pdf"),
                (6, "A Paper From Elsewhere"),
                (8, "Euler, Leonhard"),
                (9, "2014"),
                (22, "wiley"),
            ],
        ],
    );

    let mut by_identifier = HashMap::new();
    by_identifier.insert("10.9999/unknown.1".to_string(), vec![record(401)]);
    let index = FakeIndex {
        by_identifier,
        by_title: HashMap::new(),
    };

    let enricher = Enricher::new(config(dir.path(), source), index);
    let output = enricher.run().await.unwrap();

    assert_eq!(output.summary.failed_rows, 1);
    assert_eq!(output.summary.queued_for_import, 0);
    assert!(output.enriched.is_empty());

    let manifest = find_output(&dir.path().join("out"), "-import.txt");
    assert!(manifest.is_none() || {
        let content = std::fs::read_to_string(manifest.unwrap()).unwrap();
        content.is_empty()
    });
}
