//! The particle-list transformer.
//!
//! Walks the NEUT particle stack in order and writes the canonical StdHep
//! array. Slots 0 and 1 of the input carry fixed meanings, so the walk is an
//! explicit state machine over {neutrino, target slot, general} keyed on the
//! input index. The input event is never mutated.

use nrt_core::{Error, FourVector, Result, fourvec, nuclear_pdg};
use nrt_neut::NeutEvent;
use nrt_record::{RooTrackerRecord, STATUS_INITIAL, STATUS_STRUCK_NUCLEON, STDHEP_MAX};

use crate::config::{ConvertConfig, TargetConvention};
use crate::status::{NATIVE_INITIAL, StatusNote, map_status, status_name};

/// Handler for one input index.
enum Slot {
    /// Index 0: the incoming neutrino. Written verbatim, never dropped.
    Neutrino,
    /// Index 1: the struck nucleon, represented per the run's
    /// [`TargetConvention`].
    TargetSlot,
    /// Indices ≥ 2: outgoing and intermediate particles.
    General,
}

fn slot_for(part_num: usize) -> Slot {
    match part_num {
        0 => Slot::Neutrino,
        1 => Slot::TargetSlot,
        _ => Slot::General,
    }
}

/// Write cursor over the record's StdHep arrays.
///
/// Slots are contiguous from 0; the cursor only advances on a write, so the
/// populated count always equals the final cursor position.
struct StdHepCursor<'a> {
    rec: &'a mut RooTrackerRecord,
}

impl StdHepCursor<'_> {
    fn push(&mut self, pdg: i32, status: i32, p4: FourVector) -> Result<usize> {
        let save_ind = self.rec.std_hep_pdg.len();
        if save_ind >= STDHEP_MAX {
            return Err(Error::CapacityExceeded {
                array: "StdHep",
                needed: save_ind + 1,
                capacity: STDHEP_MAX,
            });
        }
        self.rec.std_hep_pdg.push(pdg);
        self.rec.std_hep_status.push(status);
        self.rec.std_hep_p4.push(p4);
        if let Some(full) = self.rec.full.as_mut() {
            // Position and polarization are not implemented in NEUT; the
            // rows exist only so the full schema keeps its shape.
            full.std_hep_x4.push([0.0; 4]);
            full.std_hep_polz.push([0.0; 3]);
        }
        Ok(save_ind)
    }

    fn len(&self) -> usize {
        self.rec.std_hep_pdg.len()
    }
}

fn log_note(note: StatusNote, pdg: i32, event_no: i32) {
    match note {
        StatusNote::EscapedButAlive => tracing::warn!(
            pdg,
            event = event_no,
            "native status 2 \"{}\" marked as alive",
            status_name(2),
        ),
        StatusNote::UnexpectedNative(native) => tracing::warn!(
            pdg,
            event = event_no,
            native,
            "unexpected native status code \"{}\"",
            status_name(native),
        ),
    }
}

/// Transform one event's particle list into the record's StdHep array,
/// setting `StdHepN`, the bound flag, and (under NuWro emulation) the
/// struck-nucleon PDG scalar.
///
/// Fails on a particle list shorter than the two mandatory slots and when
/// the output would exceed [`STDHEP_MAX`].
pub fn transform_particles(
    event: &NeutEvent,
    cfg: &ConvertConfig,
    rec: &mut RooTrackerRecord,
) -> Result<()> {
    if event.particles.len() < 2 {
        return Err(Error::MalformedEvent { n_particles: event.particles.len() });
    }

    let factor = cfg.energy_unit.scale_factor();
    rec.is_bound = cfg.save_is_bound.then_some(event.ibound);

    let mut cursor = StdHepCursor { rec: &mut *rec };
    for (part_num, part) in event.particles.iter().enumerate() {
        match slot_for(part_num) {
            Slot::Neutrino => {
                let out = map_status(part.status, part.is_alive);
                if let Some(note) = out.note {
                    log_note(note, part.pid, event.event_no);
                }
                cursor.push(part.pid, out.status.code(), fourvec::scaled(&part.p4, factor))?;
            }
            Slot::TargetSlot => match cfg.target_convention {
                TargetConvention::NuWro => {
                    // One combined entry: target PDG, struck-nucleon momentum.
                    // The nucleon's species moves to the scalar so the slot
                    // stays invertible downstream.
                    cursor.push(
                        nuclear_pdg(event.target_z, event.target_a),
                        STATUS_INITIAL,
                        fourvec::scaled(&part.p4, factor),
                    )?;
                    cursor.rec.struck_nucleon_pdg = Some(part.pid);
                }
                TargetConvention::Neutgeom => {
                    // Synthetic target entry: the energy slot holds the mass
                    // number as a placeholder, never a physical energy, so it
                    // is not unit-scaled.
                    cursor.push(
                        nuclear_pdg(event.target_z, event.target_a),
                        STATUS_INITIAL,
                        [0.0, 0.0, 0.0, f64::from(event.target_a)],
                    )?;
                    // Then the struck nucleon itself, with the reserved
                    // status when NEUT marked it initial-state. A nucleon
                    // with any other native status goes through the same
                    // mapping and skip filter as a general particle; the
                    // target entry above stays either way.
                    if part.status == NATIVE_INITIAL {
                        cursor.push(
                            part.pid,
                            STATUS_STRUCK_NUCLEON,
                            fourvec::scaled(&part.p4, factor),
                        )?;
                    } else {
                        let out = map_status(part.status, part.is_alive);
                        if let Some(note) = out.note {
                            log_note(note, part.pid, event.event_no);
                        }
                        if cfg.skip_non_final_state && !out.status.is_good() {
                            tracing::debug!(
                                pdg = part.pid,
                                native = part.status,
                                event = event.event_no,
                                "not saving non-final-state struck nucleon",
                            );
                        } else {
                            cursor.push(
                                part.pid,
                                out.status.code(),
                                fourvec::scaled(&part.p4, factor),
                            )?;
                        }
                    }
                }
            },
            Slot::General => {
                let out = map_status(part.status, part.is_alive);
                if let Some(note) = out.note {
                    log_note(note, part.pid, event.event_no);
                }
                if cfg.skip_non_final_state && !out.status.is_good() {
                    tracing::debug!(
                        pdg = part.pid,
                        native = part.status,
                        event = event.event_no,
                        "not saving non-final-state particle",
                    );
                    continue;
                }
                cursor.push(part.pid, out.status.code(), fourvec::scaled(&part.p4, factor))?;
            }
        }
    }

    let n = cursor.len();
    rec.std_hep_n = n as i32;
    Ok(())
}
