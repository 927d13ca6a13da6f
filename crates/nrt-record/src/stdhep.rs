//! StdHep array capacity and canonical status codes.

/// Maximum number of StdHep particle slots per event.
pub const STDHEP_MAX: usize = 100;

/// Canonical status: initial-state particle.
pub const STATUS_INITIAL: i32 = 0;
/// Canonical status: final-state particle.
pub const STATUS_FINAL: i32 = 1;
/// Canonical status: particle the simulator marked not-good; not expected
/// in the detector.
pub const STATUS_BAD: i32 = 2;
/// Canonical status reserved for the struck nucleon, matching the GENIE
/// convention so downstream consumers can key off it.
pub const STATUS_STRUCK_NUCLEON: i32 = 11;
