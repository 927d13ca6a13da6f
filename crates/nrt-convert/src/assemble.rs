//! Event-record assembly: scalar metadata, per-file weights, and the
//! verbatim FSI history copies around the particle-list transform.

use nrt_core::{Error, Result};
use nrt_neut::{FileContext, NeutEvent};
use nrt_record::RooTrackerRecord;
use nrt_record::fsi::{
    NUCLEON_FSI_STEP_MAX, NUCLEON_FSI_VERT_MAX, NucleonFsiBlock, PION_FSI_PART_MAX,
    PION_FSI_VERT_MAX, PionFsiBlock, VCWORK_MAX, VcWorkBlock,
};

use crate::config::ConvertConfig;
use crate::transform::transform_particles;

/// Per-file event weights, recomputed only when the input file changes.
///
/// Intentionally stale between file boundaries; access is strictly
/// sequential.
struct WeightCache {
    file_id: Option<u32>,
    evt_wght: f64,
    evt_hist_wght: f64,
    entries_in_file: f64,
}

impl WeightCache {
    fn new() -> Self {
        WeightCache { file_id: None, evt_wght: 0.0, evt_hist_wght: 0.0, entries_in_file: 0.0 }
    }

    /// Recompute from the file's own histograms and entry count when the
    /// file identity changes; otherwise keep the cached values.
    fn update(&mut self, ctx: &FileContext) {
        if self.file_id == Some(ctx.file_id) {
            return;
        }
        self.file_id = Some(ctx.file_id);
        self.entries_in_file = ctx.entries_in_file as f64;
        match (&ctx.flux, &ctx.event_rate) {
            (Some(flux), Some(rate)) => {
                let rate_integral = rate.integral();
                self.evt_hist_wght = rate_integral / self.entries_in_file;
                self.evt_wght = rate_integral / (flux.integral() * self.entries_in_file);
            }
            _ => {
                self.evt_hist_wght = 0.0;
                self.evt_wght = 0.0;
            }
        }
        tracing::info!(
            file = %ctx.name,
            entries = ctx.entries_in_file,
            evt_wght = self.evt_wght,
            "opened new input file",
        );
    }
}

/// Assembles one RooTracker record per accepted event.
pub struct Assembler {
    cfg: ConvertConfig,
    weights: WeightCache,
    ignored: u64,
}

impl Assembler {
    /// New assembler for one run.
    pub fn new(cfg: ConvertConfig) -> Self {
        Assembler { cfg, weights: WeightCache::new(), ignored: 0 }
    }

    /// Events dropped by the interaction-mode filter so far.
    pub fn ignored(&self) -> u64 {
        self.ignored
    }

    /// Fill `rec` from one event.
    ///
    /// Returns `Ok(false)` when the event's interaction mode is filtered
    /// out; the record is untouched in that case.
    pub fn assemble(
        &mut self,
        event: &NeutEvent,
        ctx: &FileContext,
        rec: &mut RooTrackerRecord,
    ) -> Result<bool> {
        if self.cfg.ignore_modes.contains(&event.mode) {
            self.ignored += 1;
            tracing::debug!(mode = event.mode, event = event.event_no, "ignoring event by mode");
            return Ok(false);
        }

        // Weights must be current before the first event of a new file.
        self.weights.update(ctx);

        rec.reset();
        rec.evt_code = event.mode.to_string();
        rec.evt_num = event.event_no;

        transform_particles(event, &self.cfg, rec)?;

        let factor = self.cfg.energy_unit.scale_factor();
        if let Some(full) = rec.full.as_mut() {
            full.evt_xsec = event.totcrs;
            full.evt_wght = self.weights.evt_wght;
            full.evt_hist_wght = self.weights.evt_hist_wght;
            full.n_entries_in_file = self.weights.entries_in_file;
            full.ne_crsx = event.crsx;
            full.ne_crsy = event.crsy;
            full.ne_crsz = event.crsz;
            full.ne_crsphi = event.crsphi;

            if event.vertices.len() == 1 {
                full.evt_vtx = event.vertices[0].pos;
            } else {
                tracing::warn!(
                    event = event.event_no,
                    n_vertices = event.vertices.len(),
                    "vertex entry count != 1, writing zero vertex",
                );
                full.evt_vtx = [0.0; 4];
            }

            copy_vcwork(event, factor, &mut full.vcwork)?;
            copy_pion_fsi(event, factor, &mut full.pion_fsi)?;
            copy_nucleon_fsi(event, &mut full.nucleon_fsi)?;
        }

        Ok(true)
    }
}

/// Verbatim copy of the native particle stack; only momenta are unit-scaled.
fn copy_vcwork(event: &NeutEvent, factor: f64, out: &mut VcWorkBlock) -> Result<()> {
    let n = event.particles.len();
    if n > VCWORK_MAX {
        return Err(Error::CapacityExceeded { array: "VCWork", needed: n, capacity: VCWORK_MAX });
    }
    out.n = n as i32;
    for part in &event.particles {
        out.pdg.push(part.pid);
        out.p3.push([part.p4[0] * factor, part.p4[1] * factor, part.p4[2] * factor]);
        out.parent.push(0);
        out.flag.push(part.status);
        out.alive.push(i32::from(part.is_alive));
    }
    Ok(())
}

fn copy_pion_fsi(event: &NeutEvent, factor: f64, out: &mut PionFsiBlock) -> Result<()> {
    let n_vert = event.fsi_vertices.len();
    if n_vert > PION_FSI_VERT_MAX {
        return Err(Error::CapacityExceeded {
            array: "pion FSI vertex",
            needed: n_vert,
            capacity: PION_FSI_VERT_MAX,
        });
    }
    out.n_vert = n_vert as i32;
    for vert in &event.fsi_vertices {
        out.pos_vert.push(vert.pos);
        out.flag_vert.push(vert.vert_id);
    }

    let n_part = event.fsi_particles.len();
    if n_part > PION_FSI_PART_MAX {
        return Err(Error::CapacityExceeded {
            array: "pion FSI particle",
            needed: n_part,
            capacity: PION_FSI_PART_MAX,
        });
    }
    out.n_part = n_part as i32;
    for part in &event.fsi_particles {
        out.dir.push(part.dir);
        out.abs_p_lab.push(part.mom_lab * factor);
        out.abs_p_nuc.push(part.mom_nuc * factor);
        out.pdg.push(part.pid);
        out.vert_start.push(part.vert_start);
        out.vert_end.push(part.vert_end);
    }
    Ok(())
}

fn copy_nucleon_fsi(event: &NeutEvent, out: &mut NucleonFsiBlock) -> Result<()> {
    let n_vert = event.nucleon_fsi_vertices.len();
    if n_vert > NUCLEON_FSI_VERT_MAX {
        return Err(Error::CapacityExceeded {
            array: "nucleon FSI vertex",
            needed: n_vert,
            capacity: NUCLEON_FSI_VERT_MAX,
        });
    }
    out.n_vert = n_vert as i32;
    for vert in &event.nucleon_fsi_vertices {
        out.flag.push(vert.flag);
        out.x.push(vert.pos[0]);
        out.y.push(vert.pos[1]);
        out.z.push(vert.pos[2]);
        out.px.push(vert.p4[0]);
        out.py.push(vert.p4[1]);
        out.pz.push(vert.p4[2]);
        out.e.push(vert.p4[3]);
        out.first_step.push(vert.first_step);
    }

    let n_step = event.nucleon_fsi_steps.len();
    if n_step > NUCLEON_FSI_STEP_MAX {
        return Err(Error::CapacityExceeded {
            array: "nucleon FSI step",
            needed: n_step,
            capacity: NUCLEON_FSI_STEP_MAX,
        });
    }
    out.n_step = n_step as i32;
    for step in &event.nucleon_fsi_steps {
        out.ecms2.push(step.ecms2);
        out.prob.push(step.prob);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nrt_neut::{
        NeutParticle, NeutVertex, NucleonFsiStep, NucleonFsiVertex, PionFsiParticle, PionFsiVertex,
    };
    use nrt_record::Histogram;

    fn particle(pid: i32, status: i32, is_alive: bool, e: f64) -> NeutParticle {
        NeutParticle { pid, status, is_alive, p4: [0.0, 0.0, e / 2.0, e] }
    }

    fn event(mode: i32, event_no: i32) -> NeutEvent {
        NeutEvent {
            mode,
            event_no,
            totcrs: 1.25,
            crsx: 0.1,
            crsy: 0.2,
            crsz: 0.3,
            crsphi: 0.4,
            ibound: 1,
            target_z: 6,
            target_a: 12,
            particles: vec![
                particle(14, -1, true, 1000.0),
                particle(2112, -1, true, 939.0),
                particle(13, 0, true, 500.0),
            ],
            vertices: vec![NeutVertex { pos: [1.0, 2.0, 3.0, 4.0] }],
            fsi_vertices: vec![],
            fsi_particles: vec![],
            nucleon_fsi_vertices: vec![],
            nucleon_fsi_steps: vec![],
        }
    }

    fn bare_context(file_id: u32, entries: u64) -> FileContext {
        FileContext {
            file_id,
            name: format!("file{file_id}.json"),
            entries_in_file: entries,
            flux: None,
            event_rate: None,
        }
    }

    fn weighted_context(file_id: u32, entries: u64, flux: f64, rate: f64) -> FileContext {
        FileContext {
            flux: Some(Histogram { bin_content: vec![flux], ..Default::default() }),
            event_rate: Some(Histogram { bin_content: vec![rate], ..Default::default() }),
            ..bare_context(file_id, entries)
        }
    }

    #[test]
    fn fills_scalar_metadata() {
        let mut asm = Assembler::new(ConvertConfig::new());
        let mut rec = RooTrackerRecord::full();
        assert!(asm.assemble(&event(27, 5), &bare_context(0, 10), &mut rec).unwrap());

        assert_eq!(rec.evt_code, "27");
        assert_eq!(rec.evt_num, 5);
        let full = rec.full.as_ref().unwrap();
        assert_relative_eq!(full.evt_xsec, 1.25);
        assert_eq!(full.evt_vtx, [1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(full.ne_crsphi, 0.4);
        assert_relative_eq!(full.n_entries_in_file, 10.0);
    }

    #[test]
    fn mode_filter_skips_before_any_record_work() {
        let mut asm = Assembler::new(ConvertConfig::new().ignore_modes(&[1, 2, 27]));
        let mut rec = RooTrackerRecord::full();
        rec.evt_code = "sentinel".into();

        assert!(!asm.assemble(&event(27, 0), &bare_context(0, 1), &mut rec).unwrap());
        assert_eq!(asm.ignored(), 1);
        // Not even reset: no per-event state changed.
        assert_eq!(rec.evt_code, "sentinel");

        assert!(asm.assemble(&event(3, 1), &bare_context(0, 1), &mut rec).unwrap());
        assert_eq!(asm.ignored(), 1);
    }

    #[test]
    fn weights_recomputed_only_at_file_boundaries() {
        let mut asm = Assembler::new(ConvertConfig::new());
        let mut rec = RooTrackerRecord::full();

        // File 0: rate integral 6, flux integral 2, 3 entries.
        let ctx0 = weighted_context(0, 3, 2.0, 6.0);
        asm.assemble(&event(1, 0), &ctx0, &mut rec).unwrap();
        let full = rec.full.as_ref().unwrap();
        assert_relative_eq!(full.evt_hist_wght, 2.0);
        assert_relative_eq!(full.evt_wght, 1.0);

        // Same file: cached values reused.
        asm.assemble(&event(1, 1), &ctx0, &mut rec).unwrap();
        assert_relative_eq!(rec.full.as_ref().unwrap().evt_wght, 1.0);

        // File 1 has its own entry count.
        let ctx1 = weighted_context(1, 6, 2.0, 6.0);
        asm.assemble(&event(1, 2), &ctx1, &mut rec).unwrap();
        let full = rec.full.as_ref().unwrap();
        assert_relative_eq!(full.evt_hist_wght, 1.0);
        assert_relative_eq!(full.evt_wght, 0.5);
        assert_relative_eq!(full.n_entries_in_file, 6.0);
    }

    #[test]
    fn missing_histograms_zero_both_weights() {
        let mut asm = Assembler::new(ConvertConfig::new());
        let mut rec = RooTrackerRecord::full();

        asm.assemble(&event(1, 0), &weighted_context(0, 3, 2.0, 6.0), &mut rec).unwrap();
        assert_relative_eq!(rec.full.as_ref().unwrap().evt_wght, 1.0);

        let mut ctx = weighted_context(1, 3, 2.0, 6.0);
        ctx.flux = None;
        asm.assemble(&event(1, 1), &ctx, &mut rec).unwrap();
        let full = rec.full.as_ref().unwrap();
        assert_relative_eq!(full.evt_wght, 0.0);
        assert_relative_eq!(full.evt_hist_wght, 0.0);
    }

    #[test]
    fn vertex_count_other_than_one_falls_back_to_zero() {
        let mut asm = Assembler::new(ConvertConfig::new());
        let mut rec = RooTrackerRecord::full();

        let mut ev = event(1, 0);
        ev.vertices.clear();
        asm.assemble(&ev, &bare_context(0, 1), &mut rec).unwrap();
        assert_eq!(rec.full.as_ref().unwrap().evt_vtx, [0.0; 4]);

        let mut ev = event(1, 1);
        ev.vertices.push(NeutVertex { pos: [9.0, 9.0, 9.0, 9.0] });
        asm.assemble(&ev, &bare_context(0, 1), &mut rec).unwrap();
        assert_eq!(rec.full.as_ref().unwrap().evt_vtx, [0.0; 4]);
    }

    #[test]
    fn vcwork_is_a_verbatim_copy_of_the_native_stack() {
        let mut asm = Assembler::new(ConvertConfig::new().gev());
        let mut rec = RooTrackerRecord::full();
        let mut ev = event(1, 0);
        ev.particles.push(particle(211, 5, false, 100.0));

        asm.assemble(&ev, &bare_context(0, 1), &mut rec).unwrap();
        let vc = &rec.full.as_ref().unwrap().vcwork;
        assert_eq!(vc.n, 4);
        assert_eq!(vc.pdg, vec![14, 2112, 13, 211]);
        // Native statuses, not canonical ones.
        assert_eq!(vc.flag, vec![-1, -1, 0, 5]);
        assert_eq!(vc.alive, vec![1, 1, 1, 0]);
        assert_relative_eq!(vc.p3[0][2], 0.5);
    }

    #[test]
    fn fsi_blocks_are_copied_through() {
        let mut asm = Assembler::new(ConvertConfig::new());
        let mut rec = RooTrackerRecord::full();
        let mut ev = event(1, 0);
        ev.fsi_vertices.push(PionFsiVertex { pos: [0.5, 0.6, 0.7], vert_id: 8 });
        ev.fsi_particles.push(PionFsiParticle {
            dir: [0.0, 0.0, 1.0],
            mom_lab: 250.0,
            mom_nuc: 240.0,
            pid: 211,
            vert_start: 0,
            vert_end: 1,
        });
        ev.nucleon_fsi_vertices.push(NucleonFsiVertex {
            flag: 103,
            pos: [1.0, 2.0, 3.0],
            p4: [10.0, 20.0, 30.0, 940.0],
            first_step: 0,
        });
        ev.nucleon_fsi_steps.push(NucleonFsiStep { ecms2: -1.8e6, prob: 0.25 });

        asm.assemble(&ev, &bare_context(0, 1), &mut rec).unwrap();
        let full = rec.full.as_ref().unwrap();
        assert_eq!(full.pion_fsi.n_vert, 1);
        assert_eq!(full.pion_fsi.flag_vert, vec![8]);
        assert_relative_eq!(full.pion_fsi.abs_p_lab[0], 250.0);
        assert_eq!(full.nucleon_fsi.n_vert, 1);
        assert_eq!(full.nucleon_fsi.flag, vec![103]);
        // Each momentum component lands in its own branch.
        assert_relative_eq!(full.nucleon_fsi.px[0], 10.0);
        assert_relative_eq!(full.nucleon_fsi.py[0], 20.0);
        assert_relative_eq!(full.nucleon_fsi.pz[0], 30.0);
        assert_relative_eq!(full.nucleon_fsi.e[0], 940.0);
        assert_eq!(full.nucleon_fsi.n_step, 1);
        assert_relative_eq!(full.nucleon_fsi.prob[0], 0.25);
    }

    #[test]
    fn lite_record_skips_the_full_block_entirely() {
        let mut asm = Assembler::new(ConvertConfig::new().lite());
        let mut rec = RooTrackerRecord::lite();
        assert!(asm.assemble(&event(1, 0), &bare_context(0, 1), &mut rec).unwrap());
        assert_eq!(rec.std_hep_n, 4);
        assert!(rec.full.is_none());
    }

    #[test]
    fn save_is_bound_controls_the_scalar() {
        let mut asm = Assembler::new(ConvertConfig::new().save_is_bound());
        let mut rec = RooTrackerRecord::full();
        asm.assemble(&event(1, 0), &bare_context(0, 1), &mut rec).unwrap();
        assert_eq!(rec.is_bound, Some(1));

        let mut asm = Assembler::new(ConvertConfig::new());
        asm.assemble(&event(1, 1), &bare_context(0, 1), &mut rec).unwrap();
        assert_eq!(rec.is_bound, None);
    }
}
