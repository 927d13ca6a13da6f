//! # nrt-convert
//!
//! The core of the converter: maps NEUT-native particle lists onto the
//! canonical RooTracker StdHep array, assembles full event records, and
//! drives the per-run conversion loop.
//!
//! The two interesting pieces are:
//!
//! - [`transform::transform_particles`] — the particle-list transformer, an
//!   explicit per-slot state machine over the input index with two selectable
//!   conventions for the target/struck-nucleon slot.
//! - [`assemble::Assembler`] — wraps the transformer output with scalar
//!   metadata, per-file weights, and the verbatim FSI history copies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod config;
pub mod run;
pub mod sink;
pub mod status;
pub mod transform;

pub use assemble::Assembler;
pub use config::{ConvertConfig, EnergyUnit, TargetConvention};
pub use run::{RunSummary, run};
pub use sink::{JsonlSink, RecordSink, VecSink};
pub use status::{CanonicalStatus, StatusNote, StatusOutcome, map_status};
