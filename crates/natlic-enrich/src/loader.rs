//! Source-sheet loading
//!
//! Reads the spreadsheet export into normalized [`SourceRow`]s using the
//! fixed column contract from `natlic_domain::columns`. The header row and
//! rows missing mandatory cells are skipped with a warning.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::warn;

use natlic_domain::{columns, SourceRow};

use crate::error::{EnrichError, Result};

/// Load all processable rows of the first sheet, in sheet order.
pub fn load_source_rows(path: &Path) -> Result<Vec<SourceRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| EnrichError::Load("workbook has no sheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = Vec::new();
    for (row_number, row) in range.rows().enumerate() {
        if cell_text(row, columns::DOI).as_deref() == Some(columns::HEADER_MARKER) {
            continue;
        }
        match source_row(row) {
            Some(source) => rows.push(source),
            None => warn!(row = row_number + 1, "row missing mandatory cells, skipped"),
        }
    }
    Ok(rows)
}

/// Build a [`SourceRow`] from one sheet row; `None` when a mandatory cell is
/// absent or the publish year does not parse.
fn source_row(row: &[Data]) -> Option<SourceRow> {
    Some(SourceRow {
        doi: cell_text(row, columns::DOI)?,
        doi_url: cell_text(row, columns::DOI_URL),
        fulltext_url: cell_text(row, columns::FULLTEXT_URL)?,
        title: cell_text(row, columns::TITLE)?,
        authors: cell_text(row, columns::AUTHORS)?,
        journal: cell_text(row, columns::JOURNAL),
        publisher: cell_text(row, columns::PUBLISHER),
        issn: cell_text(row, columns::ISSN),
        e_issn: cell_text(row, columns::E_ISSN),
        publish_year: cell_year(row, columns::PUBLISH_YEAR)?,
        source_key: cell_text(row, columns::SOURCE_KEY)?,
    })
}

/// Cell content as trimmed text; `None` for empty or absent cells.
fn cell_text(row: &[Data], column: usize) -> Option<String> {
    let text = match row.get(column)? {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn cell_year(row: &[Data], column: usize) -> Option<i32> {
    cell_text(row, column)?.parse().ok()
}
