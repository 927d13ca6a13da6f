//! # nrt-record
//!
//! The RooTracker output-format objects: the StdHep particle array, the
//! event record with its per-event `reset()` lifecycle, the NEUT FSI history
//! blocks, and the small histogram type used for per-file event weights.
//!
//! Field names on the serialized record are a stable contract with
//! downstream analysis tools and must not change between versions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fsi;
pub mod histogram;
pub mod record;
pub mod stdhep;

pub use fsi::{NucleonFsiBlock, PionFsiBlock, VcWorkBlock};
pub use histogram::Histogram;
pub use record::{FullRecord, RooTrackerRecord};
pub use stdhep::{
    STATUS_BAD, STATUS_FINAL, STATUS_INITIAL, STATUS_STRUCK_NUCLEON, STDHEP_MAX,
};
