use crate::base::LawResult;

/// Specifies two-phase laws written in terms of the effective wetting saturation Se
///
/// All functions are pure; implementations hold no mutable state.
pub trait EffectiveLaw: Send + Sync {
    /// Calculates the capillary pressure pc(Se) = pn - pw
    fn capillary_pressure(&self, se: f64) -> LawResult<f64>;

    /// Calculates the derivative dpc/dSe
    fn dpc_dse(&self, se: f64) -> LawResult<f64>;

    /// Calculates the effective saturation Se(pc) (inverse of the capillary pressure)
    fn saturation(&self, pc: f64) -> LawResult<f64>;

    /// Calculates the derivative dSe/dpc
    fn dse_dpc(&self, pc: f64) -> LawResult<f64>;

    /// Calculates the relative permeability of the wetting phase krw(Se)
    fn krw(&self, se: f64) -> LawResult<f64>;

    /// Calculates the derivative dkrw/dSe
    fn dkrw_dse(&self, se: f64) -> LawResult<f64>;

    /// Calculates the relative permeability of the non-wetting phase krn(Se)
    fn krn(&self, se: f64) -> LawResult<f64>;

    /// Calculates the derivative dkrn/dSe
    fn dkrn_dse(&self, se: f64) -> LawResult<f64>;
}
