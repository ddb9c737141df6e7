use super::EffectiveLaw;
use crate::base::{LawResult, MaterialParams};
use std::sync::Arc;

/// Converts absolute saturations to effective saturations before calling an effective law
///
/// ```text
/// Se = (Sw - Swr) / (1 - Swr - Snr)
/// ```
///
/// Absolute saturations outside `[Swr, 1 - Snr]` are clamped to the effective range
/// `[0, 1]` instead of being rejected. Relative permeabilities are scaled by the end
/// points `krw0` and `krn0`.
///
/// The derivatives with respect to Sw follow the chain rule; thus they vanish where
/// the saturation is clamped.
#[derive(Clone, Debug)]
pub struct EffToAbs<L: EffectiveLaw> {
    params: Arc<MaterialParams>,
    law: L,
}

impl<L: EffectiveLaw> EffToAbs<L> {
    /// Allocates a new instance wrapping an effective law
    pub fn new(params: Arc<MaterialParams>, law: L) -> Self {
        EffToAbs { params, law }
    }

    /// Returns the inner (effective) law
    pub fn law(&self) -> &L {
        &self.law
    }

    /// Returns the parameters
    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    /// Returns the mobile saturation range 1 - Swr - Snr
    fn mobile_range(&self) -> f64 {
        1.0 - self.params.swr() - self.params.snr()
    }

    /// Indicates whether Sw lies within [Swr, 1 - Snr]
    fn is_within_range(&self, sw: f64) -> bool {
        sw >= self.params.swr() && sw <= 1.0 - self.params.snr()
    }

    /// Converts the absolute wetting saturation to the effective saturation (clamped to [0, 1])
    pub fn sw_to_se(&self, sw: f64) -> f64 {
        let se = (sw - self.params.swr()) / self.mobile_range();
        if se < 0.0 || se > 1.0 {
            log::trace!("absolute saturation {} is outside the mobile range; clamping", sw);
            return f64::clamp(se, 0.0, 1.0);
        }
        se
    }

    /// Converts the effective saturation to the absolute wetting saturation
    pub fn se_to_sw(&self, se: f64) -> f64 {
        self.params.swr() + se * self.mobile_range()
    }

    /// Returns dSe/dSw = 1 / (1 - Swr - Snr) within the mobile range
    pub fn dse_dsw(&self) -> f64 {
        1.0 / self.mobile_range()
    }

    /// Returns dSe/dSw accounting for clamping
    fn dse_dsw_at(&self, sw: f64) -> f64 {
        if self.is_within_range(sw) {
            self.dse_dsw()
        } else {
            0.0
        }
    }

    /// Calculates the capillary pressure pc(Sw)
    pub fn capillary_pressure(&self, sw: f64) -> LawResult<f64> {
        self.law.capillary_pressure(self.sw_to_se(sw))
    }

    /// Calculates dpc/dSw
    pub fn dpc_dsw(&self, sw: f64) -> LawResult<f64> {
        Ok(self.law.dpc_dse(self.sw_to_se(sw))? * self.dse_dsw_at(sw))
    }

    /// Calculates the absolute wetting saturation Sw(pc)
    pub fn saturation(&self, pc: f64) -> LawResult<f64> {
        Ok(self.se_to_sw(self.law.saturation(pc)?))
    }

    /// Calculates dSw/dpc
    pub fn dsw_dpc(&self, pc: f64) -> LawResult<f64> {
        Ok(self.law.dse_dpc(pc)? * self.mobile_range())
    }

    /// Calculates the wetting relative permeability krw0 · krw(Se(Sw))
    pub fn krw(&self, sw: f64) -> LawResult<f64> {
        Ok(self.params.krw_end_point() * self.law.krw(self.sw_to_se(sw))?)
    }

    /// Calculates dkrw/dSw
    pub fn dkrw_dsw(&self, sw: f64) -> LawResult<f64> {
        let dkrw_dse = self.law.dkrw_dse(self.sw_to_se(sw))?;
        Ok(self.params.krw_end_point() * dkrw_dse * self.dse_dsw_at(sw))
    }

    /// Calculates the non-wetting relative permeability krn0 · krn(Se(Sw))
    pub fn krn(&self, sw: f64) -> LawResult<f64> {
        Ok(self.params.krn_end_point() * self.law.krn(self.sw_to_se(sw))?)
    }

    /// Calculates dkrn/dSw
    pub fn dkrn_dsw(&self, sw: f64) -> LawResult<f64> {
        let dkrn_dse = self.law.dkrn_dse(self.sw_to_se(sw))?;
        Ok(self.params.krn_end_point() * dkrn_dse * self.dse_dsw_at(sw))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
