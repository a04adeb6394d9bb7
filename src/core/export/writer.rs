//! JSON output writers
//!
//! Both modes produce a single top-level array of pretty-printed records.
//! [`write_buffered`] serializes a complete collection in one pass;
//! [`StreamingJsonWriter`] appends records as they arrive and only closes the
//! array in [`StreamingJsonWriter::finish`]. A streaming file whose run was
//! interrupted is missing the closing `]`.

use crate::domain::ids::ResourceRecord;
use crate::domain::{ExporterError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write all records as one pretty-printed JSON array
///
/// Returns the size of the written file in bytes.
pub fn write_buffered(path: &Path, records: &[ResourceRecord]) -> Result<u64> {
    let mut writer = BufWriter::new(create_output(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    let bytes = std::fs::metadata(path)?.len();
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        bytes,
        "Exported resources"
    );
    Ok(bytes)
}

/// Size in mebibytes, for reporting
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        ExporterError::Export(format!(
            "Failed to create output file {}: {e}",
            path.display()
        ))
    })
}

/// Incremental writer for a JSON array of records
///
/// Separators are written lazily in front of every record after the first,
/// so the array stays well-formed no matter how many records (including
/// none) each page contributes.
pub struct StreamingJsonWriter<W: Write> {
    writer: W,
    records_written: usize,
}

impl StreamingJsonWriter<BufWriter<File>> {
    /// Create (or truncate) `path` and open the array
    pub fn create(path: &Path) -> Result<Self> {
        Self::new(BufWriter::new(create_output(path)?))
    }
}

impl<W: Write> StreamingJsonWriter<W> {
    /// Open the array on an arbitrary writer
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_all(b"[")?;
        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    /// Append one record
    pub fn write_record(&mut self, record: &ResourceRecord) -> Result<()> {
        if self.records_written > 0 {
            self.writer.write_all(b",")?;
        }
        self.writer.write_all(b"\n")?;
        serde_json::to_writer_pretty(&mut self.writer, record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Append a batch of records, returning how many were written
    pub fn write_records(&mut self, records: &[ResourceRecord]) -> Result<usize> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(records.len())
    }

    /// Push buffered output to the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Close the array and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.write_all(b"\n]\n")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
