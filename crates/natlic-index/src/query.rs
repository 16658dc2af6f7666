//! Query construction for the two lookup shapes
//!
//! Queries are plain JSON bodies in the index's bool/must dialect. Builders
//! are pure so the shapes can be asserted without a transport.

use serde_json::{json, Value};

/// Field holding identifier values on repository records. The `.keyword`
/// suffix forces an exact, unanalyzed match.
pub const IDENTIFIER_FIELD: &str = "id_number.id.keyword";

/// Analyzed title field.
pub const TITLE_FIELD: &str = "title";

/// Creator family-name field.
pub const CREATOR_FAMILY_FIELD: &str = "creators.name.family";

/// Exact-term query on the identifier field.
pub fn identifier_query(value: &str) -> Value {
    json!({
        "query": { "bool": { "must": { "match": { (IDENTIFIER_FIELD): value } } } }
    })
}

/// Compound query: every title term must match, any of the family names may.
pub fn title_creator_query(title: &str, family_names: &str) -> Value {
    json!({
        "query": { "bool": { "must": [
            { "match": { (TITLE_FIELD): { "query": title, "operator": "AND" } } },
            { "match": { (CREATOR_FAMILY_FIELD): { "query": family_names, "operator": "OR" } } }
        ] } }
    })
}
