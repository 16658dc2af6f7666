//! Search-index client for the natlic enrichment pipeline
//!
//! Provides the two query shapes the matcher needs (exact term on the
//! identifier field; title conjunction plus creator family-name
//! disjunction), response parsing, and a thin HTTP transport. The
//! [`SearchIndex`] trait is the seam the matcher is generic over, so tests
//! can run against a scripted fake instead of a live index.

pub mod client;
pub mod error;
pub mod query;
pub mod response;

pub use client::*;
pub use error::*;
pub use query::*;
pub use response::*;
