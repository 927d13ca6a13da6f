//! Run configuration for the converter.
//!
//! One immutable value constructed at startup and passed explicitly into the
//! transformer and assembler; there is no ambient state.

/// How slot 1 of the StdHep array represents the target and struck nucleon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetConvention {
    /// Two entries: a synthetic nuclear-target entry (PDG of the nucleus,
    /// energy slot holding the mass number as a documented placeholder)
    /// followed by the struck nucleon itself. The neutgeom convention.
    #[default]
    Neutgeom,
    /// One combined entry carrying the nuclear-target PDG with the struck
    /// nucleon's four-momentum; the nucleon's own PDG moves to the
    /// `StruckNucleonPDG` scalar. Emulates the NuWro flavor of RooTracker.
    NuWro,
}

/// Output energy unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyUnit {
    /// NEUT-native MeV.
    #[default]
    Mev,
    /// GeV; every momentum component written is scaled by 1/1000.
    Gev,
}

impl EnergyUnit {
    /// Multiplicative factor applied identically to all four components.
    pub fn scale_factor(self) -> f64 {
        match self {
            EnergyUnit::Mev => 1.0,
            EnergyUnit::Gev => 1.0e-3,
        }
    }
}

/// Immutable per-run configuration.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Slot-1 representation, decided once per run.
    pub target_convention: TargetConvention,
    /// Output energy unit.
    pub energy_unit: EnergyUnit,
    /// Drop particles whose canonical status is not good instead of writing
    /// them with a bad status code.
    pub skip_non_final_state: bool,
    /// Lite schema: suppress the full-record extension. Never changes which
    /// particles are selected.
    pub lite: bool,
    /// Emit the `IsBound` scalar.
    pub save_is_bound: bool,
    /// Interaction modes to drop before any record work.
    pub ignore_modes: Vec<i32>,
    /// Prefix limit on events read; `None` reads the whole chain.
    pub max_events: Option<u64>,
}

impl ConvertConfig {
    /// Default configuration: neutgeom slot-1 convention, MeV, full schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emulate the NuWro RooTracker flavor.
    pub fn nuwro(mut self) -> Self {
        self.target_convention = TargetConvention::NuWro;
        self
    }

    /// Output in GeV rather than the native MeV.
    pub fn gev(mut self) -> Self {
        self.energy_unit = EnergyUnit::Gev;
        self
    }

    /// Do not save non-final-state particles.
    pub fn skip_non_fs(mut self) -> Self {
        self.skip_non_final_state = true;
        self
    }

    /// Output the lite schema.
    pub fn lite(mut self) -> Self {
        self.lite = true;
        self
    }

    /// Emit the `IsBound` scalar on every record.
    pub fn save_is_bound(mut self) -> Self {
        self.save_is_bound = true;
        self
    }

    /// Drop events with any of these interaction modes.
    pub fn ignore_modes(mut self, modes: &[i32]) -> Self {
        self.ignore_modes = modes.to_vec();
        self
    }

    /// Read at most `n` events.
    pub fn max_events(mut self, n: u64) -> Self {
        self.max_events = Some(n);
        self
    }
}
