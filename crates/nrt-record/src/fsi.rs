//! NEUT-native VCWork and final-state-interaction history blocks.
//!
//! These are copied verbatim from the input event; the converter applies no
//! policy to them beyond the unit scale factor on momenta. Capacities mirror
//! the NEUT FSI history headers.

use serde::{Deserialize, Serialize};

/// Maximum VCWork particle slots.
pub const VCWORK_MAX: usize = 100;
/// Maximum pion FSI vertices.
pub const PION_FSI_VERT_MAX: usize = 100;
/// Maximum pion FSI intermediate particles.
pub const PION_FSI_PART_MAX: usize = 300;
/// Maximum nucleon FSI vertices.
pub const NUCLEON_FSI_VERT_MAX: usize = 200;
/// Maximum nucleon FSI steps.
pub const NUCLEON_FSI_STEP_MAX: usize = 2000;

/// Verbatim copy of the NEUT VCWork particle stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VcWorkBlock {
    /// Number of particles.
    #[serde(rename = "NEnvc")]
    pub n: i32,
    /// PDG particle codes.
    #[serde(rename = "NEipvc")]
    pub pdg: Vec<i32>,
    /// 3-momenta (MeV/c, or GeV/c when scaled).
    #[serde(rename = "NEpvc")]
    pub p3: Vec<[f64; 3]>,
    /// Parent indices (Fortran convention, starting at 1).
    #[serde(rename = "NEiorgvc")]
    pub parent: Vec<i32>,
    /// Native NEUT final-state flags.
    #[serde(rename = "NEiflgvc")]
    pub flag: Vec<i32>,
    /// Escaped-nucleus flag (1) or not (0).
    #[serde(rename = "NEicrnvc")]
    pub alive: Vec<i32>,
}

impl VcWorkBlock {
    /// Clear to the empty state.
    pub fn reset(&mut self) {
        self.n = 0;
        self.pdg.clear();
        self.p3.clear();
        self.parent.clear();
        self.flag.clear();
        self.alive.clear();
    }
}

/// Verbatim copy of the NEUT pion FSI interaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PionFsiBlock {
    /// Number of vertices (including production and exit points).
    #[serde(rename = "NEnvert")]
    pub n_vert: i32,
    /// Vertex positions within the nucleus (fm).
    #[serde(rename = "NEposvert")]
    pub pos_vert: Vec<[f64; 3]>,
    /// Interaction type at each vertex.
    #[serde(rename = "NEiflgvert")]
    pub flag_vert: Vec<i32>,
    /// Number of intermediate particles (including initial and final).
    #[serde(rename = "NEnvcvert")]
    pub n_part: i32,
    /// Particle directions.
    #[serde(rename = "NEdirvert")]
    pub dir: Vec<[f64; 3]>,
    /// Absolute momentum in the lab frame.
    #[serde(rename = "NEabspvert")]
    pub abs_p_lab: Vec<f64>,
    /// Absolute momentum in the nucleon rest frame.
    #[serde(rename = "NEabstpvert")]
    pub abs_p_nuc: Vec<f64>,
    /// PDG particle codes.
    #[serde(rename = "NEipvert")]
    pub pdg: Vec<i32>,
    /// Index of initial vertex.
    #[serde(rename = "NEiverti")]
    pub vert_start: Vec<i32>,
    /// Index of final vertex.
    #[serde(rename = "NEivertf")]
    pub vert_end: Vec<i32>,
}

impl PionFsiBlock {
    /// Clear to the empty state.
    pub fn reset(&mut self) {
        self.n_vert = 0;
        self.pos_vert.clear();
        self.flag_vert.clear();
        self.n_part = 0;
        self.dir.clear();
        self.abs_p_lab.clear();
        self.abs_p_nuc.clear();
        self.pdg.clear();
        self.vert_start.clear();
        self.vert_end.clear();
    }
}

/// Verbatim copy of the NEUT nucleon FSI interaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NucleonFsiBlock {
    /// Number of track start/end/scatter points.
    #[serde(rename = "NFnvert")]
    pub n_vert: i32,
    /// 4-digit "BNTP" interaction flags.
    #[serde(rename = "NFiflag")]
    pub flag: Vec<i32>,
    /// Vertex x positions inside the nucleus.
    #[serde(rename = "NFx")]
    pub x: Vec<f64>,
    /// Vertex y positions inside the nucleus.
    #[serde(rename = "NFy")]
    pub y: Vec<f64>,
    /// Vertex z positions inside the nucleus.
    #[serde(rename = "NFz")]
    pub z: Vec<f64>,
    /// x momentum of the nucleon leaving each vertex.
    #[serde(rename = "NFpx")]
    pub px: Vec<f64>,
    /// y momentum of the nucleon leaving each vertex.
    #[serde(rename = "NFpy")]
    pub py: Vec<f64>,
    /// z momentum of the nucleon leaving each vertex.
    #[serde(rename = "NFpz")]
    pub pz: Vec<f64>,
    /// Energy of the nucleon leaving each vertex.
    #[serde(rename = "NFe")]
    pub e: Vec<f64>,
    /// First step index of each track.
    #[serde(rename = "NFfirststep")]
    pub first_step: Vec<i32>,
    /// Number of steps.
    #[serde(rename = "NFnstep")]
    pub n_step: i32,
    /// CMS energy squared before each step; sign encodes the target charge.
    #[serde(rename = "NFecms2")]
    pub ecms2: Vec<f64>,
    /// Interaction probability at each step.
    #[serde(rename = "NFProb")]
    pub prob: Vec<f64>,
}

impl NucleonFsiBlock {
    /// Clear to the empty state.
    pub fn reset(&mut self) {
        self.n_vert = 0;
        self.flag.clear();
        self.x.clear();
        self.y.clear();
        self.z.clear();
        self.px.clear();
        self.py.clear();
        self.pz.clear();
        self.e.clear();
        self.first_step.clear();
        self.n_step = 0;
        self.ecms2.clear();
        self.prob.clear();
    }
}
