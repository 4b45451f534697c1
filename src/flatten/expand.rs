//! Row expansion
//!
//! Merges per-column extraction results into rectangular rows. Rows are keyed
//! by the maximal index-paths observed across all columns, in first-appearance
//! order (columns scanned left to right, each column's leaves in extraction
//! order); an index-path that is a strict prefix of another describes the same
//! branch at lesser depth and does not open a row of its own. A column's cell
//! for a row is the leaf whose index-path is a prefix of the row key, so
//! shallower columns replicate their value across every deeper row of their
//! branch; a column that crossed no arrays at all (empty index-path) is the
//! degenerate case and broadcasts into every row.

use crate::flatten::extract::{Extraction, IndexPath};
use crate::flatten::types::{Cell, Row};
use std::collections::HashSet;

/// Expand one extraction per column into data rows.
///
/// Columns branching over arrays of unrelated lengths align by position:
/// row keys come from the union of index-paths and the shorter column pads
/// with blanks. When no column branched at all, a single row of the scalar
/// values is emitted.
pub fn expand_rows(columns: &[Extraction]) -> Vec<Row> {
    // Every distinct non-empty index-path, in first-appearance order.
    let mut candidates: Vec<&IndexPath> = Vec::new();
    let mut seen: HashSet<&IndexPath> = HashSet::new();

    for column in columns {
        for (index_path, _) in &column.leaves {
            if !index_path.is_empty() && seen.insert(index_path) {
                candidates.push(index_path);
            }
        }
    }

    // Row keys are the maximal index-paths. A strict prefix of a deeper
    // path marks the branch a deeper column expanded further, not a row.
    let keys: Vec<&IndexPath> = candidates
        .iter()
        .filter(|key| {
            !candidates
                .iter()
                .any(|other| other.len() > key.len() && other.starts_with(key.as_slice()))
        })
        .copied()
        .collect();

    if keys.is_empty() {
        // Nothing branched: one row of the scalar values, blanks for
        // columns that resolved nothing.
        if columns.iter().all(Extraction::is_empty) {
            return Vec::new();
        }
        let row = columns
            .iter()
            .map(|column| match column.leaves.first() {
                Some((_, value)) => Cell::Value(value.clone()),
                None => Cell::Blank,
            })
            .collect();
        return vec![row];
    }

    // Within one column no leaf's index-path is a prefix of another's (the
    // walk cannot both stop at a node and descend through it), so at most
    // one leaf matches a given row key.
    keys.iter()
        .map(|key| {
            columns
                .iter()
                .map(|column| {
                    let matched = column
                        .leaves
                        .iter()
                        .find(|(index_path, _)| key.starts_with(index_path));
                    match matched {
                        Some((_, value)) => Cell::Value(value.clone()),
                        None => Cell::Blank,
                    }
                })
                .collect()
        })
        .collect()
}
