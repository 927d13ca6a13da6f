//! # nrt-core
//!
//! Shared types for the NEUT → RooTracker converter: the crate-wide error
//! enum, PDG code helpers, and four-vector index constants.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fourvec;
pub mod pdg;

pub use error::{Error, Result};
pub use fourvec::{FourVector, IDX_E, IDX_PX, IDX_PY, IDX_PZ, IDX_T, IDX_X, IDX_Y, IDX_Z, scaled};
pub use pdg::nuclear_pdg;
