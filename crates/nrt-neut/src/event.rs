//! NEUT-native event types, mirroring the generator's output classes.

use nrt_core::FourVector;
use serde::{Deserialize, Serialize};

/// One particle in the NEUT event stack.
///
/// Position in the list is significant: index 0 is the incoming neutrino,
/// index 1 the struck nucleon (pre-FSI), indices ≥ 2 the outgoing and
/// intermediate particles in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutParticle {
    /// PDG code.
    pub pid: i32,
    /// NEUT-native status code (-1 initial, 0 good, 2 escaped, others rare).
    pub status: i32,
    /// NEUT's independent alive flag; disambiguates good and bad readings
    /// of the same status value.
    pub is_alive: bool,
    /// Four-momentum (px, py, pz, E) in MeV.
    pub p4: FourVector,
}

/// One interaction vertex; NEUT emits exactly one per event in healthy data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutVertex {
    /// Position (x, y, z, t) in detector coordinates.
    pub pos: FourVector,
}

/// One vertex of the pion FSI history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PionFsiVertex {
    /// Position within the nucleus (fm).
    pub pos: [f64; 3],
    /// Interaction type.
    pub vert_id: i32,
}

/// One intermediate particle of the pion FSI history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PionFsiParticle {
    /// Direction of travel.
    pub dir: [f64; 3],
    /// Absolute momentum in the lab frame (MeV/c).
    pub mom_lab: f64,
    /// Absolute momentum in the nucleon rest frame (MeV/c).
    pub mom_nuc: f64,
    /// PDG code.
    pub pid: i32,
    /// Index of the initial vertex.
    pub vert_start: i32,
    /// Index of the final vertex.
    pub vert_end: i32,
}

/// One vertex of the nucleon FSI history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NucleonFsiVertex {
    /// 4-digit "BNTP" interaction flag.
    pub flag: i32,
    /// Position within the nucleus.
    pub pos: [f64; 3],
    /// Four-momentum of the nucleon leaving the vertex.
    pub p4: FourVector,
    /// First step index of this track.
    pub first_step: i32,
}

/// One step of the nucleon FSI history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NucleonFsiStep {
    /// CMS energy squared before the step; sign encodes the target charge.
    pub ecms2: f64,
    /// Interaction probability.
    pub prob: f64,
}

/// One NEUT event as read from the input chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutEvent {
    /// Interaction mode.
    pub mode: i32,
    /// Event number.
    pub event_no: i32,
    /// Total cross section (1E-38 cm2).
    #[serde(default)]
    pub totcrs: f64,
    /// Coherent-scattering cross-section term.
    #[serde(default)]
    pub crsx: f64,
    /// Coherent-scattering cross-section term.
    #[serde(default)]
    pub crsy: f64,
    /// Coherent-scattering cross-section term.
    #[serde(default)]
    pub crsz: f64,
    /// Coherent-scattering cross-section term.
    #[serde(default)]
    pub crsphi: f64,
    /// Bound (1) or unbound (0) target nucleon.
    #[serde(default)]
    pub ibound: i32,
    /// Target atomic number.
    pub target_z: i32,
    /// Target mass number.
    pub target_a: i32,
    /// The particle stack; indices 0 and 1 carry fixed meanings.
    pub particles: Vec<NeutParticle>,
    /// Interaction vertices; expected to hold exactly one entry.
    #[serde(default)]
    pub vertices: Vec<NeutVertex>,
    /// Pion FSI vertices.
    #[serde(default)]
    pub fsi_vertices: Vec<PionFsiVertex>,
    /// Pion FSI intermediate particles.
    #[serde(default)]
    pub fsi_particles: Vec<PionFsiParticle>,
    /// Nucleon FSI vertices.
    #[serde(default)]
    pub nucleon_fsi_vertices: Vec<NucleonFsiVertex>,
    /// Nucleon FSI steps.
    #[serde(default)]
    pub nucleon_fsi_steps: Vec<NucleonFsiStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_event_parses_with_defaults() {
        let json = r#"{
            "mode": 1,
            "event_no": 7,
            "target_z": 6,
            "target_a": 12,
            "particles": [
                {"pid": 14, "status": -1, "is_alive": true, "p4": [0.0, 0.0, 1000.0, 1000.0]},
                {"pid": 2112, "status": -1, "is_alive": true, "p4": [0.0, 0.0, 0.0, 939.6]}
            ]
        }"#;
        let ev: NeutEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev.mode, 1);
        assert_eq!(ev.particles.len(), 2);
        assert_eq!(ev.totcrs, 0.0);
        assert!(ev.vertices.is_empty());
        assert!(ev.nucleon_fsi_steps.is_empty());
    }
}
