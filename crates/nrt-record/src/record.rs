//! The RooTracker event record.
//!
//! One record is allocated per run, filled per event, handed to the
//! persistence sink, and `reset()` back to the zero state before the next
//! event. The StdHep arrays are written contiguously from slot 0; `StdHepN`
//! always equals the number of slots actually populated.

use serde::{Deserialize, Serialize};

use crate::fsi::{NucleonFsiBlock, PionFsiBlock, VcWorkBlock};

/// The canonical flat event record.
///
/// The lite schema carries only the fields below; the full schema adds
/// [`FullRecord`], flattened so every branch name stays top-level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RooTrackerRecord {
    /// Generator-specific event code: the interaction mode as a decimal string.
    #[serde(rename = "EvtCode")]
    pub evt_code: String,
    /// Event number.
    #[serde(rename = "EvtNum")]
    pub evt_num: i32,
    /// Number of populated StdHep slots.
    #[serde(rename = "StdHepN")]
    pub std_hep_n: i32,
    /// PDG codes per slot.
    #[serde(rename = "StdHepPdg")]
    pub std_hep_pdg: Vec<i32>,
    /// Canonical status codes per slot.
    #[serde(rename = "StdHepStatus")]
    pub std_hep_status: Vec<i32>,
    /// Four-momenta (px, py, pz, E) per slot.
    #[serde(rename = "StdHepP4")]
    pub std_hep_p4: Vec<[f64; 4]>,
    /// Whether the interaction was on a bound nucleus. Present only when
    /// the run asks for it.
    #[serde(rename = "IsBound", skip_serializing_if = "Option::is_none", default)]
    pub is_bound: Option<i32>,
    /// Native PDG of the struck nucleon. Present only under NuWro-style
    /// output, where the combined slot 1 hides it.
    #[serde(rename = "StruckNucleonPDG", skip_serializing_if = "Option::is_none", default)]
    pub struck_nucleon_pdg: Option<i32>,
    /// Full-schema extension; absent in lite mode.
    #[serde(flatten, skip_serializing_if = "Option::is_none", default)]
    pub full: Option<FullRecord>,
}

/// Fields present only in the full (non-lite) schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullRecord {
    /// Total cross section for the event (1E-38 cm2).
    #[serde(rename = "EvtXSec")]
    pub evt_xsec: f64,
    /// Differential cross section; not filled by NEUT.
    #[serde(rename = "EvtDXSec")]
    pub evt_dxsec: f64,
    /// Per-file event weight.
    #[serde(rename = "EvtWght")]
    pub evt_wght: f64,
    /// Per-file histogram-based weight.
    #[serde(rename = "EvtHistWght")]
    pub evt_hist_wght: f64,
    /// Entry count of the input file the event came from.
    #[serde(rename = "NEntriesInFile")]
    pub n_entries_in_file: f64,
    /// Event probability; not filled by NEUT.
    #[serde(rename = "EvtProb")]
    pub evt_prob: f64,
    /// Interaction vertex (x, y, z, t) in detector coordinates.
    #[serde(rename = "EvtVtx")]
    pub evt_vtx: [f64; 4],
    /// Particle positions in the hit-nucleus frame; not filled by NEUT,
    /// kept at zero per slot for schema compatibility.
    #[serde(rename = "StdHepX4")]
    pub std_hep_x4: Vec<[f64; 4]>,
    /// Particle polarizations; not filled by NEUT.
    #[serde(rename = "StdHepPolz")]
    pub std_hep_polz: Vec<[f64; 3]>,
    /// Coherent-scattering cross-section term.
    #[serde(rename = "NEcrsx")]
    pub ne_crsx: f64,
    /// Coherent-scattering cross-section term.
    #[serde(rename = "NEcrsy")]
    pub ne_crsy: f64,
    /// Coherent-scattering cross-section term.
    #[serde(rename = "NEcrsz")]
    pub ne_crsz: f64,
    /// Coherent-scattering cross-section term.
    #[serde(rename = "NEcrsphi")]
    pub ne_crsphi: f64,
    /// Native VCWork particle stack, copied verbatim.
    #[serde(flatten)]
    pub vcwork: VcWorkBlock,
    /// Pion FSI history, copied verbatim.
    #[serde(flatten)]
    pub pion_fsi: PionFsiBlock,
    /// Nucleon FSI history, copied verbatim.
    #[serde(flatten)]
    pub nucleon_fsi: NucleonFsiBlock,
    /// Always "NEUT".
    #[serde(rename = "GeneratorName")]
    pub generator_name: String,
}

/// The generator name stamped on every full record.
pub const GENERATOR_NAME: &str = "NEUT";

impl Default for FullRecord {
    fn default() -> Self {
        FullRecord {
            evt_xsec: 0.0,
            evt_dxsec: 0.0,
            evt_wght: 0.0,
            evt_hist_wght: 0.0,
            n_entries_in_file: 0.0,
            evt_prob: 0.0,
            evt_vtx: [0.0; 4],
            std_hep_x4: Vec::new(),
            std_hep_polz: Vec::new(),
            ne_crsx: 0.0,
            ne_crsy: 0.0,
            ne_crsz: 0.0,
            ne_crsphi: 0.0,
            vcwork: VcWorkBlock::default(),
            pion_fsi: PionFsiBlock::default(),
            nucleon_fsi: NucleonFsiBlock::default(),
            generator_name: GENERATOR_NAME.into(),
        }
    }
}

impl FullRecord {
    fn reset(&mut self) {
        self.evt_xsec = 0.0;
        self.evt_dxsec = 0.0;
        self.evt_wght = 0.0;
        self.evt_hist_wght = 0.0;
        self.n_entries_in_file = 0.0;
        self.evt_prob = 0.0;
        self.evt_vtx = [0.0; 4];
        self.std_hep_x4.clear();
        self.std_hep_polz.clear();
        self.ne_crsx = 0.0;
        self.ne_crsy = 0.0;
        self.ne_crsz = 0.0;
        self.ne_crsphi = 0.0;
        self.vcwork.reset();
        self.pion_fsi.reset();
        self.nucleon_fsi.reset();
        self.generator_name.clear();
        self.generator_name.push_str(GENERATOR_NAME);
    }
}

impl RooTrackerRecord {
    /// A record carrying the full schema.
    pub fn full() -> Self {
        RooTrackerRecord { full: Some(FullRecord::default()), ..Default::default() }
    }

    /// A record carrying only the lite schema.
    pub fn lite() -> Self {
        RooTrackerRecord::default()
    }

    /// Restore the canonical empty state. The schema shape (full vs lite)
    /// is preserved.
    pub fn reset(&mut self) {
        self.evt_code.clear();
        self.evt_num = 0;
        self.std_hep_n = 0;
        self.std_hep_pdg.clear();
        self.std_hep_status.clear();
        self.std_hep_p4.clear();
        self.is_bound = None;
        self.struck_nucleon_pdg = None;
        if let Some(full) = self.full.as_mut() {
            full.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_zero_state() {
        let mut rec = RooTrackerRecord::full();
        rec.evt_code = "27".into();
        rec.evt_num = 42;
        rec.std_hep_n = 1;
        rec.std_hep_pdg.push(14);
        rec.std_hep_status.push(1);
        rec.std_hep_p4.push([1.0, 2.0, 3.0, 4.0]);
        rec.is_bound = Some(1);
        rec.struck_nucleon_pdg = Some(2112);
        {
            let full = rec.full.as_mut().unwrap();
            full.evt_xsec = 1.5;
            full.evt_vtx = [1.0, 1.0, 1.0, 1.0];
            full.vcwork.n = 3;
            full.vcwork.pdg.push(13);
        }

        rec.reset();

        assert_eq!(rec, RooTrackerRecord::full());
        assert_eq!(rec.std_hep_n, 0);
        assert!(rec.std_hep_pdg.is_empty());
        assert_eq!(rec.full.as_ref().unwrap().generator_name, "NEUT");
    }

    #[test]
    fn lite_record_has_no_full_block() {
        let rec = RooTrackerRecord::lite();
        assert!(rec.full.is_none());
    }

    #[test]
    fn serialized_field_names_are_stable() {
        let rec = RooTrackerRecord::full();
        let json = serde_json::to_value(&rec).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "EvtCode",
            "EvtNum",
            "StdHepN",
            "StdHepPdg",
            "StdHepStatus",
            "StdHepP4",
            "EvtXSec",
            "EvtWght",
            "EvtHistWght",
            "NEntriesInFile",
            "EvtVtx",
            "NEcrsx",
            "NEnvc",
            "NEnvert",
            "NFnvert",
            "GeneratorName",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        // Optional scalars stay out of the schema until asked for.
        assert!(!obj.contains_key("IsBound"));
        assert!(!obj.contains_key("StruckNucleonPDG"));
    }

    #[test]
    fn lite_schema_omits_full_fields() {
        let json = serde_json::to_value(RooTrackerRecord::lite()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("EvtCode"));
        assert!(!obj.contains_key("EvtXSec"));
        assert!(!obj.contains_key("NEnvc"));
    }
}
