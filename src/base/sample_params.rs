use super::{ParamBrooksCorey, ParamRegularization, ParamVerticalEquilibrium};

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample Brooks-Corey parameters for a medium sand (SI units)
    pub fn param_sand() -> ParamBrooksCorey {
        ParamBrooksCorey {
            entry_pressure: 1000.0, // Pa
            lambda: 2.0,            // [-]
            swr: 0.0,
            snr: 0.0,
            krw_end_point: 1.0,
            krn_end_point: 1.0,
        }
    }

    /// Returns sample Brooks-Corey parameters with residual saturations and end points
    pub fn param_sand_residual() -> ParamBrooksCorey {
        ParamBrooksCorey {
            entry_pressure: 1000.0, // Pa
            lambda: 2.0,            // [-]
            swr: 0.2,
            snr: 0.1,
            krw_end_point: 0.9,
            krn_end_point: 0.7,
        }
    }

    /// Returns sample parameters for a saline aquifer used in CO₂ storage studies
    pub fn param_aquifer() -> ParamBrooksCorey {
        ParamBrooksCorey {
            entry_pressure: 5e3, // Pa
            lambda: 2.0,         // [-]
            swr: 0.2,
            snr: 0.1,
            krw_end_point: 1.0,
            krn_end_point: 0.6,
        }
    }

    /// Returns the default regularization thresholds
    pub fn param_regularization() -> ParamRegularization {
        ParamRegularization::default()
    }

    /// Returns sample VE parameters for a column of height 10 m
    pub fn param_column() -> ParamVerticalEquilibrium {
        ParamVerticalEquilibrium::new(10.0)
    }
}
