//! Record sinks: the seam between the converter and the persistence layer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nrt_core::{Error, Result};
use nrt_record::RooTrackerRecord;

/// Receives each filled record, in event order.
pub trait RecordSink {
    /// Persist one record.
    fn write(&mut self, record: &RooTrackerRecord) -> Result<()>;

    /// Flush and close; called once after the last event.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes one JSON object per line.
pub struct JsonlSink {
    out: BufWriter<File>,
}

impl JsonlSink {
    /// Create the destination file, failing with [`Error::Output`] so the
    /// CLI can report the bad-destination cause distinctly.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|source| Error::Output { path: path.display().to_string(), source })?;
        tracing::info!(path = %path.display(), "created output file");
        Ok(JsonlSink { out: BufWriter::new(file) })
    }
}

impl RecordSink for JsonlSink {
    fn write(&mut self, record: &RooTrackerRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects records in memory; for tests.
#[derive(Debug, Default)]
pub struct VecSink {
    /// Records received so far.
    pub records: Vec<RooTrackerRecord>,
}

impl VecSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for VecSink {
    fn write(&mut self, record: &RooTrackerRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
