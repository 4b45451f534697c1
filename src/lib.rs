//! # Press - JSON-to-table flattening
//!
//! A library for flattening arbitrary nested JSON into rectangular tables
//! via slash-delimited path queries, plus the grouped-response reshape used
//! by marketing-analytics time-series exports.
//!
//! ## Modules
//!
//! - **flatten**: path queries, tree extraction, row expansion, headers
//! - **reshape**: lift a per-group label into every nested record
//!
//! ## Quick Start
//!
//! ### Flattening
//!
//! ```rust
//! use press::{flatten, FlattenOptions};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), press::FlattenError> {
//! let doc = json!({
//!     "data": [
//!         {"name": "X", "id": "1"},
//!         {"name": "Y", "id": "2"}
//!     ]
//! });
//!
//! let table = flatten(&doc, "/data/name,/data/id", &FlattenOptions::default())?;
//!
//! assert_eq!(table.into_values(), vec![
//!     vec![json!("name"), json!("id")],
//!     vec![json!("X"), json!("1")],
//!     vec![json!("Y"), json!("2")],
//! ]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Reshaping a grouped response
//!
//! ```rust
//! use press::reshape_grouped_response;
//! use serde_json::json;
//!
//! let doc = json!({"results": [
//!     {"segment": "A", "data": [{"date": "2020-01-01", "values": [1]}]}
//! ]});
//!
//! let reshaped = reshape_grouped_response(&doc);
//! // every record now carries its group's segment label
//! assert_eq!(reshaped["results"]["data"][0]["segment"], json!("A"));
//! ```

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::BufRead;

pub mod flatten;
pub mod reshape;

// Re-export commonly used types for convenience
pub use flatten::{
    Cell, FlattenError, FlattenOptions, HeaderMode, PathQuery, PathSpec, Row, Table, TableWriter,
};
pub use reshape::{reshape_grouped_response, ReshapeSpec};

/// Flatten a JSON document into a table.
///
/// `query` is a comma-separated list of slash-delimited paths, one per
/// output column (`"/results/data/date,/results/data/values"`). Malformed
/// path expressions are dropped silently; unresolvable paths become blank
/// cells. The only fatal condition is a query that yields no usable paths
/// with no `default_query` configured.
pub fn flatten(doc: &Value, query: &str, options: &FlattenOptions) -> Result<Table, FlattenError> {
    let query = PathQuery::parse_or_default(query, options.default_query.as_deref());
    if query.is_empty() {
        return Err(FlattenError::EmptyQuery);
    }

    let columns: Vec<flatten::Extraction> = query
        .specs()
        .iter()
        .map(|spec| flatten::extract(doc, spec))
        .collect();

    let rows = flatten::expand_rows(&columns);
    let header = flatten::resolve_headers(&query, &options.headers);

    Ok(Table::new(header, rows))
}

/// Main entry point for streams: flatten newline-delimited JSON documents
/// into one table on the writer, header emitted once.
pub fn flatten_json<R: BufRead, W: std::io::Write>(
    reader: R,
    writer: &mut TableWriter<W>,
    query: &str,
    options: &FlattenOptions,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: Value = serde_json::from_str(&line).context("Failed to parse JSON")?;

        let table = flatten(&doc, query, options)?;
        writer.write_table_continued(&table)?;
    }

    Ok(())
}
