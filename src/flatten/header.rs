//! Header synthesis
//!
//! Column titles default to the last segment of each path specification.
//! Callers may suppress the header row or supply their own names (the
//! metric-listing use case renames columns to human-readable labels).

use crate::flatten::path::PathQuery;
use crate::flatten::types::HeaderMode;

/// Default column titles: one per path specification, in query order.
pub fn synthesize_headers(query: &PathQuery) -> Vec<String> {
    query
        .specs()
        .iter()
        .map(|spec| spec.last_segment().to_string())
        .collect()
}

/// Resolve the header row for a query under the given mode.
///
/// Custom names shorter than the query are padded with synthesized titles;
/// surplus names are ignored. The returned row, when present, always has
/// exactly as many cells as the query has specifications.
pub fn resolve_headers(query: &PathQuery, mode: &HeaderMode) -> Option<Vec<String>> {
    match mode {
        HeaderMode::None => None,
        HeaderMode::Auto => Some(synthesize_headers(query)),
        HeaderMode::Custom(names) => {
            let mut header = synthesize_headers(query);
            for (slot, name) in header.iter_mut().zip(names) {
                *slot = name.clone();
            }
            Some(header)
        }
    }
}
