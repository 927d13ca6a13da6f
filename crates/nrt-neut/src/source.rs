//! Event sources: the seam between the converter and whatever holds the
//! simulated events.
//!
//! The run loop only ever sees the [`EventSource`] trait; the concrete
//! [`JsonChainSource`] chains one or more JSON container files in argument
//! order, the way the original tool chained its input trees.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use nrt_core::{Error, Result};
use nrt_record::Histogram;

use crate::event::NeutEvent;

/// Identity and weight inputs of one input file.
///
/// `file_id` changes exactly at file boundaries; the assembler keys its
/// weight cache on it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContext {
    /// Sequential file identity within the chain.
    pub file_id: u32,
    /// File name, for diagnostics.
    pub name: String,
    /// Entry count of this file alone, not of the whole chain.
    pub entries_in_file: u64,
    /// The `flux_numu` histogram, when the file carries one.
    pub flux: Option<Histogram>,
    /// The `evtrt_numu` histogram, when the file carries one.
    pub event_rate: Option<Histogram>,
}

/// An ordered, read-only supply of NEUT events.
pub trait EventSource {
    /// Total entry count across the whole chain.
    fn total_entries(&self) -> u64;

    /// The next event, or `None` at end of chain.
    fn next_event(&mut self) -> Result<Option<NeutEvent>>;

    /// Context of the file the most recently yielded event came from.
    ///
    /// Valid only after `next_event` has yielded at least one event.
    fn file_context(&self) -> &FileContext;
}

/// On-disk container shape: optional weight histograms plus the event list.
#[derive(Deserialize)]
struct Container {
    #[serde(default)]
    flux_numu: Option<Histogram>,
    #[serde(default)]
    evtrt_numu: Option<Histogram>,
    events: Vec<NeutEvent>,
}

struct LoadedFile {
    ctx: FileContext,
    events: Vec<NeutEvent>,
}

/// Chains events from one or more JSON container files.
pub struct JsonChainSource {
    files: Vec<LoadedFile>,
    file_idx: usize,
    event_idx: usize,
    /// File index of the last yielded event.
    yielded_from: usize,
    total: u64,
}

impl JsonChainSource {
    /// Open and parse every file up front.
    ///
    /// Fails with [`Error::NoInputFiles`] when the path list is empty or any
    /// path does not exist, so a bad descriptor is caught before any output
    /// is created.
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        if paths.is_empty() {
            return Err(Error::NoInputFiles(String::new()));
        }
        let mut files = Vec::with_capacity(paths.len());
        for (i, path) in paths.iter().enumerate() {
            if !path.exists() {
                return Err(Error::NoInputFiles(path.display().to_string()));
            }
            files.push(Self::load_file(path, i as u32)?);
        }
        let total = files.iter().map(|f| f.events.len() as u64).sum();
        tracing::debug!("opened {} input files with {} entries", files.len(), total);
        Ok(JsonChainSource { files, file_idx: 0, event_idx: 0, yielded_from: 0, total })
    }

    fn load_file(path: &Path, file_id: u32) -> Result<LoadedFile> {
        let file = File::open(path)?;
        let container: Container =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                Error::Source(format!("parsing {}: {}", path.display(), e))
            })?;
        let ctx = FileContext {
            file_id,
            name: path.display().to_string(),
            entries_in_file: container.events.len() as u64,
            flux: container.flux_numu,
            event_rate: container.evtrt_numu,
        };
        Ok(LoadedFile { ctx, events: container.events })
    }
}

impl EventSource for JsonChainSource {
    fn total_entries(&self) -> u64 {
        self.total
    }

    fn next_event(&mut self) -> Result<Option<NeutEvent>> {
        loop {
            let Some(file) = self.files.get(self.file_idx) else {
                return Ok(None);
            };
            if self.event_idx < file.events.len() {
                let ev = file.events[self.event_idx].clone();
                self.yielded_from = self.file_idx;
                self.event_idx += 1;
                return Ok(Some(ev));
            }
            self.file_idx += 1;
            self.event_idx = 0;
        }
    }

    fn file_context(&self) -> &FileContext {
        &self.files[self.yielded_from].ctx
    }
}
