//! Per-category output artifacts
//!
//! Each category owns an in-memory table (for the workbook, written once at
//! the end of the run) and a CSV file (appended row by row during the run).
//! Every CSV field is quoted; blank cells stay as empty quoted strings.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use rust_xlsxwriter::Workbook;

use crate::error::Result;

struct CategoryTable {
    name: &'static str,
    rows: Vec<Vec<String>>,
}

pub struct CategoryOutputs {
    dir: PathBuf,
    header: Vec<String>,
    tables: Vec<CategoryTable>,
    table_index: HashMap<&'static str, usize>,
    csv_writers: HashMap<&'static str, csv::Writer<File>>,
}

impl CategoryOutputs {
    /// One table per category, in the given order.
    pub fn new(dir: &Path, categories: &[&'static str], header: Vec<String>) -> Self {
        let tables: Vec<CategoryTable> = categories
            .iter()
            .map(|name| CategoryTable {
                name,
                rows: Vec::new(),
            })
            .collect();
        let table_index = categories
            .iter()
            .enumerate()
            .map(|(index, name)| (*name, index))
            .collect();
        Self {
            dir: dir.to_path_buf(),
            header,
            tables,
            table_index,
            csv_writers: HashMap::new(),
        }
    }

    /// Append a row (plus the matched affiliation string, when any) to the
    /// category's table and CSV file.
    pub fn append(
        &mut self,
        category: &'static str,
        cells: &[String],
        matched: Option<&str>,
    ) -> Result<()> {
        let mut values: Vec<String> = cells.to_vec();
        if let Some(matched) = matched {
            values.push(matched.to_string());
        }

        if let Some(&index) = self.table_index.get(category) {
            self.tables[index].rows.push(values.clone());
        }

        let writer = match self.csv_writers.entry(category) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(self.dir.join(format!("{category}.csv")))?;
                entry.insert(
                    WriterBuilder::new()
                        .quote_style(QuoteStyle::Always)
                        .from_writer(file),
                )
            }
        };
        writer.write_record(&values)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the workbook: one sheet per category, each seeded with the
    /// source header row.
    pub fn save_workbook(&self, filename: &str) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        let mut workbook = Workbook::new();
        for table in &self.tables {
            let sheet = workbook.add_worksheet();
            sheet.set_name(table.name)?;
            for (column, cell) in self.header.iter().enumerate() {
                sheet.write(0, column as u16, cell.as_str())?;
            }
            for (row_index, row) in table.rows.iter().enumerate() {
                for (column, cell) in row.iter().enumerate() {
                    sheet.write(row_index as u32 + 1, column as u16, cell.as_str())?;
                }
            }
        }
        workbook.save(&path)?;
        Ok(path)
    }

    /// Row counts per category, in table order.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        self.tables
            .iter()
            .map(|table| (table.name, table.rows.len()))
            .collect()
    }
}

/// Delete files left over from a previous run; the directory itself and any
/// subdirectories stay.
pub fn clean_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            std::fs::remove_file(path)?;
        }
    }
    Ok(())
}
