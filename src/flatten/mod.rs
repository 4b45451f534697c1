//! JSON flattening - turn nested JSON into rectangular tables
//!
//! This module is the domain-agnostic half of the pipeline: a path query
//! selects columns, the extractor resolves each path against the document
//! (branching at arrays), and the row expander aligns the results into a
//! table with a synthesized header.

pub mod types;
pub mod path;
pub mod extract;
pub mod expand;
pub mod header;
pub mod writer;

pub use types::{Cell, FlattenError, FlattenOptions, HeaderMode, Row, Table};
pub use path::{PathQuery, PathSpec};
pub use extract::{extract, Extraction, IndexPath};
pub use expand::expand_rows;
pub use header::{resolve_headers, synthesize_headers};
pub use writer::TableWriter;
