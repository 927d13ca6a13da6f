//! The per-run conversion loop: source → assembler → sink, strictly
//! sequential, one event fully processed before the next is read.

use nrt_core::{Error, Result};
use nrt_neut::EventSource;
use nrt_record::RooTrackerRecord;

use crate::assemble::Assembler;
use crate::config::ConvertConfig;
use crate::sink::RecordSink;

/// End-of-run tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries read from the chain.
    pub read: u64,
    /// Records handed to the sink.
    pub written: u64,
    /// Entries dropped by the interaction-mode filter.
    pub ignored: u64,
}

/// Convert every event the source yields, up to the configured prefix limit.
pub fn run<S, K>(source: &mut S, sink: &mut K, cfg: &ConvertConfig) -> Result<RunSummary>
where
    S: EventSource,
    K: RecordSink,
{
    let total = source.total_entries();
    if total == 0 {
        return Err(Error::NoEntries);
    }
    let limit = cfg.max_events.map_or(total, |m| m.min(total));
    tracing::info!(total, limit, "starting conversion");

    // One record for the whole run, reset between events.
    let mut rec = if cfg.lite { RooTrackerRecord::lite() } else { RooTrackerRecord::full() };
    let mut asm = Assembler::new(cfg.clone());
    let mut read = 0u64;
    let mut written = 0u64;

    while read < limit {
        let Some(event) = source.next_event()? else {
            break;
        };
        read += 1;
        if read % 10_000 == 0 {
            tracing::info!(read, "read entries");
        }
        if asm.assemble(&event, source.file_context(), &mut rec)? {
            sink.write(&rec)?;
            written += 1;
        }
    }
    sink.finish()?;

    tracing::info!(written, "wrote events");
    if !cfg.ignore_modes.is_empty() {
        tracing::info!(ignored = asm.ignored(), "ignored entries by interaction mode");
    }
    Ok(RunSummary { read, written, ignored: asm.ignored() })
}
