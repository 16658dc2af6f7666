//! Domain types shared by the natlic curation pipelines
//!
//! This crate provides the canonical models both pipelines work with:
//! - SourceRow: one row of the upstream spreadsheet export
//! - RepositoryRecord: an existing repository entry as returned by the search index
//! - AttachedDocument: a file attached to a repository record
//! - MatchOutcome: result of looking a source row up in the index
//! - columns: the fixed column contract with the upstream export
//! - author: family-name splitting for "Family, Given" author lists

pub mod author;
pub mod columns;
pub mod document;
pub mod outcome;
pub mod record;
pub mod repository;

pub use author::*;
pub use document::*;
pub use outcome::*;
pub use record::*;
pub use repository::*;
