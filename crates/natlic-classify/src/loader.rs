//! Raw sheet loading for the classifier
//!
//! The classifier carries every cell of a row into its category outputs, so
//! rows are loaded as plain string cells padded to the fixed row width. The
//! header row is detected by the DOI column and returned separately.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use natlic_domain::columns;

use crate::error::{ClassifyError, Result};

/// One raw row of the export: all cells as text, empty string for blanks.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub cells: Vec<String>,
}

impl RawRow {
    /// The semicolon-delimited affiliation field.
    pub fn affiliation(&self) -> &str {
        self.cells
            .get(columns::AFFILIATION)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Load the first sheet: header cells and all data rows, in sheet order.
pub fn load_raw_rows(path: &Path) -> Result<(Vec<String>, Vec<RawRow>)> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ClassifyError::Load("workbook has no sheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut header = Vec::new();
    let mut rows = Vec::new();
    for row in range.rows() {
        let cells = row_cells(row);
        let is_header = cells
            .get(columns::DOI)
            .is_some_and(|cell| cell == columns::HEADER_MARKER);
        if is_header && header.is_empty() {
            header = cells;
        } else {
            rows.push(RawRow { cells });
        }
    }
    Ok((header, rows))
}

fn row_cells(row: &[Data]) -> Vec<String> {
    let mut cells: Vec<String> = row.iter().map(cell_string).collect();
    cells.resize(cells.len().max(columns::ROW_WIDTH), String::new());
    cells
}

fn cell_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
