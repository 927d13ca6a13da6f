//! # nrt-neut
//!
//! The simulator-native side of the converter: NEUT event, particle, vertex,
//! and FSI sub-record types, plus the [`EventSource`] seam the run loop
//! consumes events through.
//!
//! Everything here is borrowed, read-only input; the converter never mutates
//! a [`NeutEvent`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event;
pub mod source;

pub use event::{
    NeutEvent, NeutParticle, NeutVertex, NucleonFsiStep, NucleonFsiVertex, PionFsiParticle,
    PionFsiVertex,
};
pub use source::{EventSource, FileContext, JsonChainSource};
