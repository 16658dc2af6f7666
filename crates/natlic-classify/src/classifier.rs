//! Row classification and the pipeline driver

use tracing::info;

use crate::config::ClassifyConfig;
use crate::error::Result;
use crate::loader::load_raw_rows;
use crate::output::{clean_output_dir, CategoryOutputs};
use crate::rules::{default_rules, first_match, CategoryRule, OTHER_CATEGORY};

/// Output workbook filename.
pub const WORKBOOK_NAME: &str = "sorted_publications.xlsx";

/// Assign one category to an affiliation cell.
///
/// The cell is split on semicolons and every candidate string is offered to
/// the rules in order; the first rule that matches any string wins. Returns
/// the category and the exact string that matched (`None` for `other`).
pub fn classify(
    rules: &'static [CategoryRule],
    affiliation_cell: &str,
) -> (&'static str, Option<String>) {
    let candidates: Vec<&str> = affiliation_cell.split(';').collect();
    match first_match(rules, &candidates) {
        Some((rule, matched)) => (rule.category, Some(matched.to_string())),
        None => (OTHER_CATEGORY, None),
    }
}

/// Per-run result: rows processed and rows per category, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifySummary {
    pub rows: usize,
    pub per_category: Vec<(&'static str, usize)>,
}

/// Classify every row of the export and write the category artifacts.
///
/// Prior output files are deleted first, so re-running on the same input
/// reproduces identical artifacts.
pub fn run(config: &ClassifyConfig) -> Result<ClassifySummary> {
    let (header, rows) = load_raw_rows(&config.source_path)?;
    clean_output_dir(&config.output_dir)?;

    let rules = default_rules();
    let categories: Vec<&'static str> = rules
        .iter()
        .map(|rule| rule.category)
        .chain([OTHER_CATEGORY])
        .collect();
    let mut outputs = CategoryOutputs::new(&config.output_dir, &categories, header);

    for row in &rows {
        let (category, matched) = classify(rules, row.affiliation());
        outputs.append(category, &row.cells, matched.as_deref())?;
    }

    let path = outputs.save_workbook(WORKBOOK_NAME)?;
    info!(rows = rows.len(), workbook = %path.display(), "classification finished");

    Ok(ClassifySummary {
        rows: rows.len(),
        per_category: outputs.counts(),
    })
}
