use super::{EffectiveLaw, RegularizedBrooksCorey, TwoPhaseLaw};
use crate::base::{LawError, LawResult, MaterialParams, Phase, PhaseArray};
use crate::fluid::{capillary_pressure_of, max_saturation_of, FluidState};
use std::sync::Arc;

/// Implements the vertical-equilibrium (VE) upscaled Brooks-Corey law
///
/// A column of height H is represented by a single coarse point. The state is the
/// height h of the free non-wetting phase below the caprock, computed from the coarse
/// non-wetting saturation S and its historical maximum Smax:
///
/// ```text
///            S (1 - Swr) - Smax Snr
/// h = H ───────────────────────────       hmax = H Smax / (1 - Swr)
///        (1 - Swr) (1 - Swr - Snr)
/// ```
///
/// The fine-scale capillary pressure is neglected (sharp interface); hence the
/// capillary pressure is the hydrostatic value `(ρw - ρn) g h`. The relative
/// permeabilities are:
///
/// ```text
/// krn = krn0 h / H
/// krw = (H - hmax) / H + μw krw0 (hmax - h) / H
/// ```
///
/// None of the results is clamped. The historical maximum Smax is trusted as given
/// (it is not checked to be non-decreasing or greater than S).
#[derive(Clone, Debug)]
pub struct BrooksCoreyVe {
    params: Arc<MaterialParams>,
    height: f64,
    gravity: f64,
    effective: RegularizedBrooksCorey,
}

impl BrooksCoreyVe {
    /// Allocates a new instance
    ///
    /// The parameters must contain the VE record.
    pub fn new(params: Arc<MaterialParams>) -> LawResult<Self> {
        let ve = match params.vertical_equilibrium() {
            Some(ve) => *ve,
            None => return Err(LawError::InvalidParameter("the VE law requires the VE parameters")),
        };
        let effective = RegularizedBrooksCorey::new(params.clone())?;
        log::debug!("VE Brooks-Corey: height={}, gravity={}", ve.height, ve.gravity);
        Ok(BrooksCoreyVe {
            params,
            height: ve.height,
            gravity: ve.gravity,
            effective,
        })
    }

    /// Returns the parameters
    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    /// Returns the column height H
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the gravity acceleration g
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the regularized law used by the inverse (saturation) mapping
    pub fn effective(&self) -> &RegularizedBrooksCorey {
        &self.effective
    }

    /// Calculates the interface height h from the non-wetting saturation and its historical maximum
    pub fn interface_height(&self, saturation: f64, max_saturation: f64) -> f64 {
        let swr = self.params.swr();
        let snr = self.params.snr();
        self.height * (saturation * (1.0 - swr) - max_saturation * snr) / ((1.0 - swr) * (1.0 - swr - snr))
    }

    /// Calculates the maximum interface height hmax reached by the non-wetting front
    pub fn max_interface_height(&self, max_saturation: f64) -> f64 {
        self.height * max_saturation / (1.0 - self.params.swr())
    }

    /// Calculates the non-wetting capillary pressure (ρw - ρn) g h
    pub fn capillary_pressure_nw(&self, rho_w: f64, rho_n: f64, h: f64) -> f64 {
        (rho_w - rho_n) * self.gravity * h
    }

    /// Calculates the wetting relative permeability
    ///
    /// # Input
    ///
    /// * `h` -- interface height
    /// * `h_max` -- maximum interface height
    /// * `mu_w` -- viscosity of the wetting phase
    pub fn krw(&self, h: f64, h_max: f64, mu_w: f64) -> f64 {
        let hh = self.height;
        (hh - h_max) / hh + mu_w * self.params.krw_end_point() * (h_max - h) / hh
    }

    /// Calculates the non-wetting relative permeability
    pub fn krn(&self, h: f64) -> f64 {
        self.params.krn_end_point() * h / self.height
    }
}

impl TwoPhaseLaw for BrooksCoreyVe {
    fn capillary_pressures(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        let s = fs.saturation(Phase::NonWetting);
        let s_max = max_saturation_of(fs)?;
        let h = self.interface_height(s, s_max);
        values[Phase::Wetting] = 0.0;
        values[Phase::NonWetting] =
            self.capillary_pressure_nw(fs.density(Phase::Wetting), fs.density(Phase::NonWetting), h);
        Ok(())
    }

    fn saturations(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        let sw = self.effective.saturation(capillary_pressure_of(fs))?;
        values[Phase::Wetting] = sw;
        values[Phase::NonWetting] = 1.0 - sw;
        Ok(())
    }

    fn relative_permeabilities(&self, values: &mut PhaseArray, fs: &dyn FluidState) -> LawResult<()> {
        let s = fs.saturation(Phase::NonWetting);
        let s_max = max_saturation_of(fs)?;
        let h = self.interface_height(s, s_max);
        let h_max = self.max_interface_height(s_max);
        values[Phase::Wetting] = self.krw(h, h_max, fs.viscosity(Phase::Wetting));
        values[Phase::NonWetting] = self.krn(h);
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
