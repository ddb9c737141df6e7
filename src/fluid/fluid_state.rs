use crate::base::{LawError, LawResult, Phase, PhaseArray};
use serde::{Deserialize, Serialize};

/// Specifies the fluid state consumed by the material laws
///
/// The state is supplied by the caller (e.g., a simulator at a grid cell).
pub trait FluidState: Send + Sync {
    /// Returns the saturation of a phase
    fn saturation(&self, phase: Phase) -> f64;

    /// Returns the pressure of a phase
    fn pressure(&self, phase: Phase) -> f64;

    /// Returns the density of a phase
    fn density(&self, phase: Phase) -> f64;

    /// Returns the dynamic viscosity of a phase
    fn viscosity(&self, phase: Phase) -> f64;

    /// Returns the historical maximum of the non-wetting saturation, if tracked
    ///
    /// This quantity is only required by the VE extension. It is expected to be
    /// non-decreasing in time, but this is not verified by the laws.
    fn max_saturation(&self) -> Option<f64> {
        None
    }
}

/// Holds a plain in-memory two-phase fluid state
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SimpleFluidState {
    /// Saturations (they should sum to one)
    pub saturations: PhaseArray,

    /// Pressures
    pub pressures: PhaseArray,

    /// Densities
    pub densities: PhaseArray,

    /// Dynamic viscosities
    pub viscosities: PhaseArray,

    /// Historical maximum of the non-wetting saturation (VE only)
    pub max_saturation: Option<f64>,
}

impl SimpleFluidState {
    /// Allocates a new instance with a fully wetting-saturated state
    ///
    /// Densities and viscosities are set to one and pressures to zero.
    pub fn new() -> Self {
        SimpleFluidState {
            saturations: PhaseArray::from_pair(1.0, 0.0),
            pressures: PhaseArray::new(),
            densities: PhaseArray::from_pair(1.0, 1.0),
            viscosities: PhaseArray::from_pair(1.0, 1.0),
            max_saturation: None,
        }
    }

    /// Sets the wetting saturation and the complementary non-wetting saturation
    pub fn set_wetting_saturation(&mut self, sw: f64) -> &mut Self {
        self.saturations = PhaseArray::from_pair(sw, 1.0 - sw);
        self
    }

    /// Sets the non-wetting saturation and the complementary wetting saturation
    pub fn set_non_wetting_saturation(&mut self, sn: f64) -> &mut Self {
        self.saturations = PhaseArray::from_pair(1.0 - sn, sn);
        self
    }

    /// Sets the phase pressures such that pc = pn - pw, with pw as given
    pub fn set_capillary_pressure(&mut self, pw: f64, pc: f64) -> &mut Self {
        self.pressures = PhaseArray::from_pair(pw, pw + pc);
        self
    }

    /// Sets the densities of the wetting and non-wetting phases
    pub fn set_densities(&mut self, rho_w: f64, rho_n: f64) -> &mut Self {
        self.densities = PhaseArray::from_pair(rho_w, rho_n);
        self
    }

    /// Sets the viscosities of the wetting and non-wetting phases
    pub fn set_viscosities(&mut self, mu_w: f64, mu_n: f64) -> &mut Self {
        self.viscosities = PhaseArray::from_pair(mu_w, mu_n);
        self
    }

    /// Sets the historical maximum of the non-wetting saturation
    pub fn set_max_saturation(&mut self, value: f64) -> &mut Self {
        self.max_saturation = Some(value);
        self
    }
}

impl Default for SimpleFluidState {
    fn default() -> Self {
        SimpleFluidState::new()
    }
}

impl FluidState for SimpleFluidState {
    fn saturation(&self, phase: Phase) -> f64 {
        self.saturations[phase]
    }
    fn pressure(&self, phase: Phase) -> f64 {
        self.pressures[phase]
    }
    fn density(&self, phase: Phase) -> f64 {
        self.densities[phase]
    }
    fn viscosity(&self, phase: Phase) -> f64 {
        self.viscosities[phase]
    }
    fn max_saturation(&self) -> Option<f64> {
        self.max_saturation
    }
}

/// Returns the capillary pressure pc = pn - pw of a fluid state
pub fn capillary_pressure_of(fs: &dyn FluidState) -> f64 {
    fs.pressure(Phase::NonWetting) - fs.pressure(Phase::Wetting)
}

/// Returns the historical maximum saturation or a domain error if it is not tracked
pub fn max_saturation_of(fs: &dyn FluidState) -> LawResult<f64> {
    fs.max_saturation().ok_or(LawError::Domain(
        "the fluid state does not track the historical maximum saturation",
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
