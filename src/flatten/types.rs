use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// One cell of an output table.
///
/// A blank cell marks a path that produced no value for its row (path not
/// present, or index out of range for that branch). Blanks are ordinary data,
/// never errors, and serialize as the empty string the way a spreadsheet
/// renders a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value resolved for this column at this row.
    Blank,
    /// A resolved leaf value, original JSON type preserved.
    Value(Value),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Cell::Blank => None,
            Cell::Value(v) => Some(v),
        }
    }

    /// Convert into a plain JSON value, rendering blank as `""`.
    pub fn into_value(self) -> Value {
        match self {
            Cell::Blank => Value::String(String::new()),
            Cell::Value(v) => v,
        }
    }
}

impl From<Value> for Cell {
    fn from(v: Value) -> Self {
        Cell::Value(v)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Blank => serializer.serialize_str(""),
            Cell::Value(v) => v.serialize(serializer),
        }
    }
}

/// One row of an output table, one cell per path specification.
pub type Row = Vec<Cell>;

/// A rectangular table: an optional header row plus data rows.
///
/// Width is constant across all rows and equals the number of path
/// specifications in the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Column titles, present unless headers were suppressed.
    pub header: Option<Vec<String>>,

    /// Data rows in extraction order.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Option<Vec<String>>, rows: Vec<Row>) -> Self {
        Table { header, rows }
    }

    /// Number of columns, taken from the header or the first data row.
    pub fn width(&self) -> usize {
        self.header
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    /// True when the table holds no data rows (a header alone counts as empty).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten into plain JSON rows, header first when present and blanks
    /// rendered as `""`. This is the spreadsheet-facing 2D form.
    pub fn into_values(self) -> Vec<Vec<Value>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        if let Some(header) = self.header {
            out.push(header.into_iter().map(Value::String).collect());
        }
        for row in self.rows {
            out.push(row.into_iter().map(Cell::into_value).collect());
        }
        out
    }

    /// Iterate data rows, each as a serializable sequence.
    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

/// A data row wrapper that serializes as a JSON array, used by the writer.
pub(crate) struct RowSer<'a>(pub &'a Row);

impl Serialize for RowSer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for cell in self.0 {
            seq.serialize_element(cell)?;
        }
        seq.end()
    }
}

/// How the header row is produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HeaderMode {
    /// Emit a header row of each path's last segment (the default).
    #[default]
    Auto,
    /// Suppress the header row entirely.
    None,
    /// Caller-supplied column names. Missing names are filled in from the
    /// path specifications; surplus names are ignored.
    Custom(Vec<String>),
}

/// Configuration for one flatten invocation.
///
/// This is the typed replacement for the source API's loose optional
/// arguments: every knob has a named field with a documented default,
/// validated once at the boundary.
#[derive(Debug, Clone, Default)]
pub struct FlattenOptions {
    /// Header behavior, `HeaderMode::Auto` by default.
    pub headers: HeaderMode,

    /// Query used when the caller's query string parses to zero path
    /// specifications. `None` means an empty query is an error.
    pub default_query: Option<String>,
}

impl FlattenOptions {
    /// Options with the header row suppressed.
    pub fn no_headers() -> Self {
        FlattenOptions {
            headers: HeaderMode::None,
            ..FlattenOptions::default()
        }
    }

    pub fn with_default_query(mut self, query: impl Into<String>) -> Self {
        self.default_query = Some(query.into());
        self
    }

    pub fn with_column_names(mut self, names: Vec<String>) -> Self {
        self.headers = HeaderMode::Custom(names);
        self
    }
}

/// Document-level failures. Everything recoverable inside the pipeline
/// (malformed path expressions, unresolvable branches, unexpected group
/// shapes) is absorbed into dropped specs or blank cells instead.
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("path query contains no usable path expressions and no default query was configured")]
    EmptyQuery,

    #[error("invalid JSON document")]
    Parse(#[from] serde_json::Error),

    #[error("i/o error while streaming documents")]
    Io(#[from] std::io::Error),
}
