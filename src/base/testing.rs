use super::{MaterialParams, ParamBrooksCorey, ParamVerticalEquilibrium, SampleParams};
use std::sync::Arc;

/// Returns the finalized parameters of the sample sand
pub(crate) fn sample_params_sand() -> Arc<MaterialParams> {
    sample_params_from(&SampleParams::param_sand(), None)
}

/// Returns finalized parameters given pₑ and λ (no residual saturations)
pub(crate) fn sample_params(entry_pressure: f64, lambda: f64) -> Arc<MaterialParams> {
    sample_params_from(&ParamBrooksCorey::new(entry_pressure, lambda), None)
}

/// Returns the finalized parameters of the sample sand with residual saturations
pub(crate) fn sample_params_residual() -> Arc<MaterialParams> {
    sample_params_from(&SampleParams::param_sand_residual(), None)
}

/// Returns finalized VE parameters
pub(crate) fn sample_params_ve(height: f64, swr: f64, snr: f64) -> Arc<MaterialParams> {
    let mut bc = SampleParams::param_sand();
    bc.swr = swr;
    bc.snr = snr;
    bc.krw_end_point = 0.8;
    bc.krn_end_point = 0.6;
    sample_params_from(&bc, Some(&ParamVerticalEquilibrium::new(height)))
}

/// Returns finalized parameters from records (panics on invalid input)
pub(crate) fn sample_params_from(
    brooks_corey: &ParamBrooksCorey,
    vertical_equilibrium: Option<&ParamVerticalEquilibrium>,
) -> Arc<MaterialParams> {
    Arc::new(MaterialParams::new(brooks_corey, &SampleParams::param_regularization(), vertical_equilibrium).unwrap())
}
