//! press-flatten: Flatten nested JSON into rectangular tables
//!
//! Usage:
//!   # Read from file, output rows to stdout
//!   press-flatten data.json --query "/data/name,/data/id"
//!
//!   # Read from stdin
//!   echo '{"data": [{"name": "X"}]}' | press-flatten --query "/data/name"
//!
//!   # Reshape a grouped API response before flattening
//!   press-flatten export.json --reshape \
//!       --query "/results/data/date,/results/data/values,/results/data/segment"
//!
//!   # Process NDJSON, one document per line, one shared header row
//!   press-flatten --ndjson feed.jsonl --query "/data/name"

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use press::{flatten, FlattenOptions, HeaderMode, ReshapeSpec, TableWriter};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};

#[derive(Parser, Debug)]
#[command(name = "press-flatten")]
#[command(about = "Flatten nested JSON into rectangular tables", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Comma-separated path query, one slash-delimited path per column
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Query to fall back on when --query is absent or unusable
    #[arg(long)]
    default_query: Option<String>,

    /// Suppress the header row
    #[arg(long)]
    no_headers: bool,

    /// Comma-separated column names overriding the synthesized header
    #[arg(long, conflicts_with = "no_headers")]
    columns: Option<String>,

    /// Lift each group's label into its records before flattening
    #[arg(long)]
    reshape: bool,

    /// Top-level key holding the group sequence (default: "results")
    #[arg(long, requires = "reshape")]
    groups_key: Option<String>,

    /// Label key inside each group (default: "segment")
    #[arg(long, requires = "reshape")]
    label_key: Option<String>,

    /// Record-sequence key inside each group (default: "data")
    #[arg(long, requires = "reshape")]
    records_key: Option<String>,

    /// Process newline-delimited JSON (one document per line)
    #[arg(long)]
    ndjson: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Build options
    let mut options = FlattenOptions::default();
    if args.no_headers {
        options.headers = HeaderMode::None;
    }
    if let Some(columns) = &args.columns {
        options.headers = HeaderMode::Custom(
            columns.split(',').map(|s| s.trim().to_string()).collect(),
        );
    }
    options.default_query = args.default_query.clone();

    let mut reshape_spec = ReshapeSpec::default();
    if let Some(key) = args.groups_key {
        reshape_spec.groups_key = key;
    }
    if let Some(key) = args.label_key {
        reshape_spec.label_key = key;
    }
    if let Some(key) = args.records_key {
        reshape_spec.records_key = key;
    }
    let reshape_spec = args.reshape.then_some(reshape_spec);

    let query = args.query.unwrap_or_default();

    let reader: Box<dyn Read> = if let Some(file_path) = &args.input {
        Box::new(BufReader::new(File::open(file_path)?))
    } else {
        Box::new(std::io::stdin())
    };

    let stdout = std::io::stdout();
    let mut writer = TableWriter::new(stdout.lock());

    process_reader(reader, &mut writer, &query, &options, reshape_spec.as_ref(), args.ndjson)?;

    writer.flush()?;
    Ok(())
}

/// Parse documents from the reader and flatten each into the shared table.
/// Whole-buffer input goes through simd-json for speed, with a serde_json
/// line-by-line fallback for NDJSON or input simd-json rejects.
fn process_reader<W: std::io::Write>(
    reader: Box<dyn Read>,
    writer: &mut TableWriter<W>,
    query: &str,
    options: &FlattenOptions,
    reshape_spec: Option<&ReshapeSpec>,
    ndjson: bool,
) -> Result<()> {
    let mut content = Vec::new();
    let mut buf_reader = BufReader::new(reader);
    buf_reader.read_to_end(&mut content)?;

    if !ndjson {
        // Try SIMD parsing first (faster) - use OwnedValue to avoid borrow issues
        if let Ok(owned) = simd_json::to_owned_value(&mut content.clone()) {
            let json_str = simd_json::to_string(&owned)?;
            let doc: Value = serde_json::from_str(&json_str)?;
            return flatten_one(&doc, writer, query, options, reshape_spec);
        }
    }

    // NDJSON, or simd-json could not parse the buffer as a single document
    let content_str = String::from_utf8_lossy(&content);
    for line in content_str.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let doc: Value = serde_json::from_str(line)?;
        flatten_one(&doc, writer, query, options, reshape_spec)?;

        if !ndjson {
            break;
        }
    }

    Ok(())
}

fn flatten_one<W: std::io::Write>(
    doc: &Value,
    writer: &mut TableWriter<W>,
    query: &str,
    options: &FlattenOptions,
    reshape_spec: Option<&ReshapeSpec>,
) -> Result<()> {
    let table = match reshape_spec {
        Some(spec) => flatten(&spec.apply(doc), query, options)?,
        None => flatten(doc, query, options)?,
    };
    writer.write_table_continued(&table)?;
    Ok(())
}
