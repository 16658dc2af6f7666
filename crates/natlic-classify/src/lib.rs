//! Affiliation classifier
//!
//! Sorts spreadsheet rows into institution categories by evaluating an
//! ordered list of case-insensitive regex rules over the row's
//! semicolon-delimited affiliation strings. The first matching rule wins;
//! unmatched rows land in the `other` category. Each category gets a CSV
//! file and a sheet in the output workbook.

pub mod classifier;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod rules;

pub use classifier::*;
pub use config::*;
pub use error::*;
pub use loader::*;
pub use output::*;
pub use rules::*;
