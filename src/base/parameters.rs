use super::{LawError, LawResult, DEFAULT_SE_HIGH, DEFAULT_SE_LOW, STANDARD_GRAVITY};
use serde::{Deserialize, Serialize};

/// Holds parameters for the Brooks-Corey capillary pressure and relative permeability laws
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamBrooksCorey {
    /// Entry pressure pₑ (> 0)
    pub entry_pressure: f64,

    /// Shape exponent λ (pore-size distribution index, > 0)
    pub lambda: f64,

    /// Residual saturation of the wetting phase Swr ∈ [0,1)
    #[serde(default)]
    pub swr: f64,

    /// Residual saturation of the non-wetting phase Snr ∈ [0,1)
    #[serde(default)]
    pub snr: f64,

    /// End-point relative permeability of the wetting phase krw0 ∈ (0,1]
    #[serde(default = "default_end_point")]
    pub krw_end_point: f64,

    /// End-point relative permeability of the non-wetting phase krn0 ∈ (0,1]
    #[serde(default = "default_end_point")]
    pub krn_end_point: f64,
}

/// Holds the effective saturation thresholds delimiting the regularized branches
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamRegularization {
    /// Threshold below which the laws are regularized
    pub se_low: f64,

    /// Threshold above which the laws are regularized
    pub se_high: f64,
}

/// Holds parameters for the vertical-equilibrium (VE) upscaling
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamVerticalEquilibrium {
    /// Height H of the vertically-resolved column (> 0)
    pub height: f64,

    /// Gravity acceleration g (> 0)
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

fn default_end_point() -> f64 {
    1.0
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

impl ParamBrooksCorey {
    /// Allocates a new instance with zero residual saturations and unit end points
    pub fn new(entry_pressure: f64, lambda: f64) -> Self {
        ParamBrooksCorey {
            entry_pressure,
            lambda,
            swr: 0.0,
            snr: 0.0,
            krw_end_point: 1.0,
            krn_end_point: 1.0,
        }
    }
}

impl Default for ParamRegularization {
    fn default() -> Self {
        ParamRegularization {
            se_low: DEFAULT_SE_LOW,
            se_high: DEFAULT_SE_HIGH,
        }
    }
}

impl ParamVerticalEquilibrium {
    /// Allocates a new instance with the standard gravity
    pub fn new(height: f64) -> Self {
        ParamVerticalEquilibrium {
            height,
            gravity: STANDARD_GRAVITY,
        }
    }
}

/// Holds a validated and immutable set of material parameters
///
/// An instance is obtained from [super::ParameterSet::finalize] (or [MaterialParams::new]) and
/// is shared read-only, via `Arc`, by all laws of a material region. Since every coefficient
/// has been checked on allocation, the getters never fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParams {
    brooks_corey: ParamBrooksCorey,
    regularization: ParamRegularization,
    vertical_equilibrium: Option<ParamVerticalEquilibrium>,
}

impl MaterialParams {
    /// Allocates a new instance after checking all coefficients
    pub fn new(
        brooks_corey: &ParamBrooksCorey,
        regularization: &ParamRegularization,
        vertical_equilibrium: Option<&ParamVerticalEquilibrium>,
    ) -> LawResult<Self> {
        check_brooks_corey(brooks_corey)?;
        check_regularization(regularization)?;
        if let Some(ve) = vertical_equilibrium {
            check_vertical_equilibrium(ve)?;
        }
        Ok(MaterialParams {
            brooks_corey: *brooks_corey,
            regularization: *regularization,
            vertical_equilibrium: vertical_equilibrium.copied(),
        })
    }

    /// Returns the entry pressure pₑ
    pub fn entry_pressure(&self) -> f64 {
        self.brooks_corey.entry_pressure
    }

    /// Returns the shape exponent λ
    pub fn lambda(&self) -> f64 {
        self.brooks_corey.lambda
    }

    /// Returns the residual saturation of the wetting phase
    pub fn swr(&self) -> f64 {
        self.brooks_corey.swr
    }

    /// Returns the residual saturation of the non-wetting phase
    pub fn snr(&self) -> f64 {
        self.brooks_corey.snr
    }

    /// Returns the end-point relative permeability of the wetting phase
    pub fn krw_end_point(&self) -> f64 {
        self.brooks_corey.krw_end_point
    }

    /// Returns the end-point relative permeability of the non-wetting phase
    pub fn krn_end_point(&self) -> f64 {
        self.brooks_corey.krn_end_point
    }

    /// Returns the lower regularization threshold
    pub fn se_low(&self) -> f64 {
        self.regularization.se_low
    }

    /// Returns the upper regularization threshold
    pub fn se_high(&self) -> f64 {
        self.regularization.se_high
    }

    /// Returns the VE parameters, if any
    pub fn vertical_equilibrium(&self) -> Option<&ParamVerticalEquilibrium> {
        self.vertical_equilibrium.as_ref()
    }

    /// Returns the Brooks-Corey record
    pub fn brooks_corey(&self) -> &ParamBrooksCorey {
        &self.brooks_corey
    }

    /// Returns the regularization record
    pub fn regularization(&self) -> &ParamRegularization {
        &self.regularization
    }
}

fn check_brooks_corey(p: &ParamBrooksCorey) -> LawResult<()> {
    if !p.entry_pressure.is_finite() || p.entry_pressure <= 0.0 {
        return Err(LawError::InvalidParameter(
            "entry_pressure parameter for the Brooks-Corey model is invalid",
        ));
    }
    if !p.lambda.is_finite() || p.lambda <= 0.0 {
        return Err(LawError::InvalidParameter(
            "lambda parameter for the Brooks-Corey model is invalid",
        ));
    }
    if !p.swr.is_finite() || p.swr < 0.0 || p.swr >= 1.0 {
        return Err(LawError::InvalidParameter("swr parameter for the Brooks-Corey model is invalid"));
    }
    if !p.snr.is_finite() || p.snr < 0.0 || p.snr >= 1.0 {
        return Err(LawError::InvalidParameter("snr parameter for the Brooks-Corey model is invalid"));
    }
    if p.swr + p.snr >= 1.0 {
        return Err(LawError::InvalidParameter("the sum of residual saturations must be smaller than 1.0"));
    }
    if !p.krw_end_point.is_finite() || p.krw_end_point <= 0.0 || p.krw_end_point > 1.0 {
        return Err(LawError::InvalidParameter(
            "krw_end_point parameter for the Brooks-Corey model is invalid",
        ));
    }
    if !p.krn_end_point.is_finite() || p.krn_end_point <= 0.0 || p.krn_end_point > 1.0 {
        return Err(LawError::InvalidParameter(
            "krn_end_point parameter for the Brooks-Corey model is invalid",
        ));
    }
    Ok(())
}

fn check_regularization(p: &ParamRegularization) -> LawResult<()> {
    if !p.se_low.is_finite() || p.se_low <= 0.0 || p.se_low >= 1.0 {
        return Err(LawError::InvalidParameter("se_low regularization threshold is invalid"));
    }
    if !p.se_high.is_finite() || p.se_high <= 0.0 || p.se_high >= 1.0 {
        return Err(LawError::InvalidParameter("se_high regularization threshold is invalid"));
    }
    if p.se_low >= p.se_high {
        return Err(LawError::InvalidParameter(
            "se_low regularization threshold must be smaller than se_high",
        ));
    }
    Ok(())
}

fn check_vertical_equilibrium(p: &ParamVerticalEquilibrium) -> LawResult<()> {
    if !p.height.is_finite() || p.height <= 0.0 {
        return Err(LawError::InvalidParameter("height parameter for the VE model must be > 0.0"));
    }
    if !p.gravity.is_finite() || p.gravity <= 0.0 {
        return Err(LawError::InvalidParameter("gravity parameter for the VE model must be > 0.0"));
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{MaterialParams, ParamBrooksCorey, ParamRegularization, ParamVerticalEquilibrium};
    use crate::base::LawError;

    #[test]
    fn param_brooks_corey_derive_works() {
        let p = ParamBrooksCorey::new(2.0, 1.5);
        let q = p.clone();
        let correct = "ParamBrooksCorey { entry_pressure: 2.0, lambda: 1.5, swr: 0.0, snr: 0.0, krw_end_point: 1.0, krn_end_point: 1.0 }";
        assert_eq!(format!("{:?}", q), correct);
    }

    #[test]
    fn param_regularization_and_ve_derive_works() {
        let p = ParamRegularization::default();
        let correct = "ParamRegularization { se_low: 0.01, se_high: 0.99 }";
        assert_eq!(format!("{:?}", p.clone()), correct);
        let p = ParamVerticalEquilibrium::new(10.0);
        let correct = "ParamVerticalEquilibrium { height: 10.0, gravity: 9.80665 }";
        assert_eq!(format!("{:?}", p.clone()), correct);
    }

    #[test]
    fn deserialize_uses_defaults() {
        let p: ParamBrooksCorey = serde_json::from_str(r#"{"entry_pressure":1000.0,"lambda":2.0}"#).unwrap();
        assert_eq!(p, ParamBrooksCorey::new(1000.0, 2.0));
        let p: ParamVerticalEquilibrium = serde_json::from_str(r#"{"height":5.0}"#).unwrap();
        assert_eq!(p, ParamVerticalEquilibrium::new(5.0));
    }

    #[test]
    fn new_captures_wrong_input() {
        let reg = ParamRegularization::default();
        let mut bc = ParamBrooksCorey::new(0.0, 2.0);
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter(
                "entry_pressure parameter for the Brooks-Corey model is invalid"
            ))
        );
        bc.entry_pressure = 1.0;
        bc.lambda = -1.0;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter("lambda parameter for the Brooks-Corey model is invalid"))
        );
        bc.lambda = f64::NAN;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter("lambda parameter for the Brooks-Corey model is invalid"))
        );
        bc.lambda = 2.0;
        bc.swr = 1.0;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter("swr parameter for the Brooks-Corey model is invalid"))
        );
        bc.swr = 0.6;
        bc.snr = -0.1;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter("snr parameter for the Brooks-Corey model is invalid"))
        );
        bc.snr = 0.4;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter(
                "the sum of residual saturations must be smaller than 1.0"
            ))
        );
        bc.snr = 0.1;
        bc.krw_end_point = 0.0;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter(
                "krw_end_point parameter for the Brooks-Corey model is invalid"
            ))
        );
        bc.krw_end_point = 0.8;
        bc.krn_end_point = 1.5;
        assert_eq!(
            MaterialParams::new(&bc, &reg, None).err(),
            Some(LawError::InvalidParameter(
                "krn_end_point parameter for the Brooks-Corey model is invalid"
            ))
        );
        bc.krn_end_point = 0.5;
        let bad_reg = ParamRegularization {
            se_low: 0.5,
            se_high: 0.5,
        };
        assert_eq!(
            MaterialParams::new(&bc, &bad_reg, None).err(),
            Some(LawError::InvalidParameter(
                "se_low regularization threshold must be smaller than se_high"
            ))
        );
        let bad_reg = ParamRegularization {
            se_low: 0.0,
            se_high: 0.9,
        };
        assert_eq!(
            MaterialParams::new(&bc, &bad_reg, None).err(),
            Some(LawError::InvalidParameter("se_low regularization threshold is invalid"))
        );
        let bad_reg = ParamRegularization {
            se_low: 0.1,
            se_high: 1.0,
        };
        assert_eq!(
            MaterialParams::new(&bc, &bad_reg, None).err(),
            Some(LawError::InvalidParameter("se_high regularization threshold is invalid"))
        );
        let ve = ParamVerticalEquilibrium::new(0.0);
        assert_eq!(
            MaterialParams::new(&bc, &reg, Some(&ve)).err(),
            Some(LawError::InvalidParameter("height parameter for the VE model must be > 0.0"))
        );
        let ve = ParamVerticalEquilibrium {
            height: 1.0,
            gravity: 0.0,
        };
        assert_eq!(
            MaterialParams::new(&bc, &reg, Some(&ve)).err(),
            Some(LawError::InvalidParameter("gravity parameter for the VE model must be > 0.0"))
        );
    }

    #[test]
    fn getters_work() {
        let mut bc = ParamBrooksCorey::new(1000.0, 2.0);
        bc.swr = 0.2;
        bc.snr = 0.1;
        bc.krw_end_point = 0.9;
        bc.krn_end_point = 0.7;
        let reg = ParamRegularization {
            se_low: 0.05,
            se_high: 0.95,
        };
        let ve = ParamVerticalEquilibrium::new(10.0);
        let p = MaterialParams::new(&bc, &reg, Some(&ve)).unwrap();
        assert_eq!(p.entry_pressure(), 1000.0);
        assert_eq!(p.lambda(), 2.0);
        assert_eq!(p.swr(), 0.2);
        assert_eq!(p.snr(), 0.1);
        assert_eq!(p.krw_end_point(), 0.9);
        assert_eq!(p.krn_end_point(), 0.7);
        assert_eq!(p.se_low(), 0.05);
        assert_eq!(p.se_high(), 0.95);
        assert_eq!(p.vertical_equilibrium().map(|v| v.height), Some(10.0));
        assert_eq!(p.brooks_corey(), &bc);
        assert_eq!(p.regularization(), &reg);
    }
}
