use crate::flatten::types::{RowSer, Table};
use anyhow::{Context, Result};
use std::io::Write;

/// Writes tables as JSON Lines: one JSON array per row, header row first
/// when present. Streaming callers can ask for the header exactly once
/// across many tables.
pub struct TableWriter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        TableWriter {
            writer,
            header_written: false,
        }
    }

    /// Write a whole table, header included when the table carries one.
    pub fn write_table(&mut self, table: &Table) -> Result<()> {
        if let Some(header) = &table.header {
            let line = serde_json::to_string(header).context("Failed to serialize header row")?;
            writeln!(self.writer, "{}", line).context("Failed to write header row")?;
            self.header_written = true;
        }
        self.write_rows(table)
    }

    /// Write a table's header at most once per writer, then its rows. Used
    /// when flattening a stream of documents into a single output table.
    pub fn write_table_continued(&mut self, table: &Table) -> Result<()> {
        if !self.header_written {
            if let Some(header) = &table.header {
                let line =
                    serde_json::to_string(header).context("Failed to serialize header row")?;
                writeln!(self.writer, "{}", line).context("Failed to write header row")?;
            }
            self.header_written = true;
        }
        self.write_rows(table)
    }

    fn write_rows(&mut self, table: &Table) -> Result<()> {
        for row in table.iter_rows() {
            let line = serde_json::to_string(&RowSer(row)).context("Failed to serialize row")?;
            writeln!(self.writer, "{}", line).context("Failed to write row")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
