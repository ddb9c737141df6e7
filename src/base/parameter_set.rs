use super::{LawError, LawResult, MaterialParams, ParamBrooksCorey, ParamRegularization, ParamVerticalEquilibrium};
use super::{DEFAULT_SE_HIGH, DEFAULT_SE_LOW, STANDARD_GRAVITY};
use std::sync::Arc;

/// Holds the coefficients of a material region while they are being populated
///
/// The set is filled via the setters and then [ParameterSet::finalize] must be called once
/// before the first read. Finalize validates all coefficients and stores an immutable
/// [MaterialParams] snapshot, which is the object handed over to the material laws.
///
/// The checked readers of this struct return [LawError::NotFinalized] before finalize.
/// Calling a setter after finalize discards the snapshot; thus, the set must be finalized
/// again before being read. Laws that already hold the old snapshot are not affected.
///
/// # Example
///
/// ```
/// use pmlaw::base::ParameterSet;
/// let mut set = ParameterSet::new();
/// set.set_entry_pressure(1000.0).set_lambda(2.0).set_swr(0.1);
/// let params = set.finalize().unwrap();
/// assert_eq!(params.entry_pressure(), 1000.0);
/// ```
#[derive(Clone, Debug)]
pub struct ParameterSet {
    entry_pressure: f64,
    lambda: f64,
    swr: f64,
    snr: f64,
    krw_end_point: f64,
    krn_end_point: f64,
    se_low: f64,
    se_high: f64,
    ve_height: Option<f64>,
    gravity: f64,
    finalized: Option<Arc<MaterialParams>>,
}

impl ParameterSet {
    /// Allocates a new instance with default values
    ///
    /// The entry pressure and λ are initialized with zero (invalid) values and must be set.
    pub fn new() -> Self {
        ParameterSet {
            entry_pressure: 0.0,
            lambda: 0.0,
            swr: 0.0,
            snr: 0.0,
            krw_end_point: 1.0,
            krn_end_point: 1.0,
            se_low: DEFAULT_SE_LOW,
            se_high: DEFAULT_SE_HIGH,
            ve_height: None,
            gravity: STANDARD_GRAVITY,
            finalized: None,
        }
    }

    /// Allocates a new instance from parameter records
    pub fn from_records(
        brooks_corey: &ParamBrooksCorey,
        regularization: Option<&ParamRegularization>,
        vertical_equilibrium: Option<&ParamVerticalEquilibrium>,
    ) -> Self {
        let mut set = ParameterSet::new();
        set.entry_pressure = brooks_corey.entry_pressure;
        set.lambda = brooks_corey.lambda;
        set.swr = brooks_corey.swr;
        set.snr = brooks_corey.snr;
        set.krw_end_point = brooks_corey.krw_end_point;
        set.krn_end_point = brooks_corey.krn_end_point;
        if let Some(reg) = regularization {
            set.se_low = reg.se_low;
            set.se_high = reg.se_high;
        }
        if let Some(ve) = vertical_equilibrium {
            set.ve_height = Some(ve.height);
            set.gravity = ve.gravity;
        }
        set
    }

    /// Sets the entry pressure pₑ
    pub fn set_entry_pressure(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.entry_pressure = value;
        self
    }

    /// Sets the shape exponent λ
    pub fn set_lambda(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.lambda = value;
        self
    }

    /// Sets the residual saturation of the wetting phase
    pub fn set_swr(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.swr = value;
        self
    }

    /// Sets the residual saturation of the non-wetting phase
    pub fn set_snr(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.snr = value;
        self
    }

    /// Sets the end-point relative permeability of the wetting phase
    pub fn set_krw_end_point(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.krw_end_point = value;
        self
    }

    /// Sets the end-point relative permeability of the non-wetting phase
    pub fn set_krn_end_point(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.krn_end_point = value;
        self
    }

    /// Sets the effective saturation thresholds of the regularized branches
    pub fn set_regularization_thresholds(&mut self, se_low: f64, se_high: f64) -> &mut Self {
        self.invalidate();
        self.se_low = se_low;
        self.se_high = se_high;
        self
    }

    /// Sets the column height H and thus enables the VE extension
    pub fn set_ve_height(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.ve_height = Some(value);
        self
    }

    /// Sets the gravity acceleration used by the VE extension
    pub fn set_gravity(&mut self, value: f64) -> &mut Self {
        self.invalidate();
        self.gravity = value;
        self
    }

    /// Validates all coefficients and stores the immutable snapshot
    ///
    /// Calling finalize again without modifications returns the same snapshot.
    pub fn finalize(&mut self) -> LawResult<Arc<MaterialParams>> {
        if let Some(params) = &self.finalized {
            return Ok(params.clone());
        }
        let brooks_corey = ParamBrooksCorey {
            entry_pressure: self.entry_pressure,
            lambda: self.lambda,
            swr: self.swr,
            snr: self.snr,
            krw_end_point: self.krw_end_point,
            krn_end_point: self.krn_end_point,
        };
        let regularization = ParamRegularization {
            se_low: self.se_low,
            se_high: self.se_high,
        };
        let vertical_equilibrium = self.ve_height.map(|height| ParamVerticalEquilibrium {
            height,
            gravity: self.gravity,
        });
        let params = Arc::new(MaterialParams::new(
            &brooks_corey,
            &regularization,
            vertical_equilibrium.as_ref(),
        )?);
        log::debug!(
            "finalized parameter set: pe={}, lambda={}, swr={}, snr={}, ve={:?}",
            self.entry_pressure,
            self.lambda,
            self.swr,
            self.snr,
            self.ve_height
        );
        self.finalized = Some(params.clone());
        Ok(params)
    }

    /// Indicates whether the set has been finalized (and not modified afterwards)
    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Returns the finalized snapshot
    pub fn params(&self) -> LawResult<Arc<MaterialParams>> {
        match &self.finalized {
            Some(params) => Ok(params.clone()),
            None => Err(LawError::NotFinalized("finalize must be called before reading the parameters")),
        }
    }

    /// Returns the entry pressure pₑ
    pub fn entry_pressure(&self) -> LawResult<f64> {
        Ok(self.checked("entry_pressure")?.entry_pressure())
    }

    /// Returns the shape exponent λ
    pub fn lambda(&self) -> LawResult<f64> {
        Ok(self.checked("lambda")?.lambda())
    }

    /// Returns the residual saturation of the wetting phase
    pub fn swr(&self) -> LawResult<f64> {
        Ok(self.checked("swr")?.swr())
    }

    /// Returns the residual saturation of the non-wetting phase
    pub fn snr(&self) -> LawResult<f64> {
        Ok(self.checked("snr")?.snr())
    }

    /// Returns the end-point relative permeability of the wetting phase
    pub fn krw_end_point(&self) -> LawResult<f64> {
        Ok(self.checked("krw_end_point")?.krw_end_point())
    }

    /// Returns the end-point relative permeability of the non-wetting phase
    pub fn krn_end_point(&self) -> LawResult<f64> {
        Ok(self.checked("krn_end_point")?.krn_end_point())
    }

    /// Returns the column height H of the VE extension
    pub fn ve_height(&self) -> LawResult<f64> {
        match self.checked("ve_height")?.vertical_equilibrium() {
            Some(ve) => Ok(ve.height),
            None => Err(LawError::InvalidParameter("the VE height has not been set")),
        }
    }

    fn checked(&self, name: &'static str) -> LawResult<&MaterialParams> {
        match &self.finalized {
            Some(params) => Ok(params),
            None => Err(LawError::NotFinalized(name)),
        }
    }

    fn invalidate(&mut self) {
        if self.finalized.take().is_some() {
            log::warn!("parameter set modified after finalize; it must be finalized again");
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParameterSet;
    use crate::base::{LawError, ParamBrooksCorey, ParamRegularization, ParamVerticalEquilibrium};
    use std::sync::Arc;

    #[test]
    fn reading_before_finalize_fails() {
        let mut set = ParameterSet::new();
        set.set_entry_pressure(1000.0).set_lambda(2.0);
        assert_eq!(set.krn_end_point().err(), Some(LawError::NotFinalized("krn_end_point")));
        assert_eq!(set.krw_end_point().err(), Some(LawError::NotFinalized("krw_end_point")));
        assert_eq!(set.entry_pressure().err(), Some(LawError::NotFinalized("entry_pressure")));
        assert_eq!(set.lambda().err(), Some(LawError::NotFinalized("lambda")));
        assert_eq!(set.swr().err(), Some(LawError::NotFinalized("swr")));
        assert_eq!(set.snr().err(), Some(LawError::NotFinalized("snr")));
        assert_eq!(set.ve_height().err(), Some(LawError::NotFinalized("ve_height")));
        assert_eq!(
            set.params().err(),
            Some(LawError::NotFinalized("finalize must be called before reading the parameters"))
        );
        assert!(!set.is_finalized());
    }

    #[test]
    fn finalize_works() {
        let mut set = ParameterSet::new();
        set.set_entry_pressure(1000.0)
            .set_lambda(2.0)
            .set_swr(0.2)
            .set_snr(0.1)
            .set_krw_end_point(0.9)
            .set_krn_end_point(0.8)
            .set_regularization_thresholds(0.05, 0.95);
        let params = set.finalize().unwrap();
        assert!(set.is_finalized());
        assert_eq!(set.entry_pressure(), Ok(1000.0));
        assert_eq!(set.lambda(), Ok(2.0));
        assert_eq!(set.swr(), Ok(0.2));
        assert_eq!(set.snr(), Ok(0.1));
        assert_eq!(set.krw_end_point(), Ok(0.9));
        assert_eq!(set.krn_end_point(), Ok(0.8));
        assert_eq!(params.se_low(), 0.05);
        assert_eq!(params.se_high(), 0.95);
        assert_eq!(
            set.ve_height().err(),
            Some(LawError::InvalidParameter("the VE height has not been set"))
        );
        // same snapshot
        let again = set.finalize().unwrap();
        assert!(Arc::ptr_eq(&params, &again));
        assert!(Arc::ptr_eq(&params, &set.params().unwrap()));
    }

    #[test]
    fn finalize_captures_wrong_input() {
        let mut set = ParameterSet::new();
        set.set_entry_pressure(1000.0).set_lambda(2.0).set_ve_height(0.0);
        assert_eq!(
            set.finalize().err(),
            Some(LawError::InvalidParameter("height parameter for the VE model must be > 0.0"))
        );
        assert!(!set.is_finalized());
        set.set_ve_height(10.0).set_regularization_thresholds(0.9, 0.1);
        assert_eq!(
            set.finalize().err(),
            Some(LawError::InvalidParameter(
                "se_low regularization threshold must be smaller than se_high"
            ))
        );
        set.set_regularization_thresholds(0.01, 0.99).set_swr(0.5).set_snr(0.5);
        assert_eq!(
            set.finalize().err(),
            Some(LawError::InvalidParameter(
                "the sum of residual saturations must be smaller than 1.0"
            ))
        );
        let mut set = ParameterSet::new();
        assert_eq!(
            set.finalize().err(),
            Some(LawError::InvalidParameter(
                "entry_pressure parameter for the Brooks-Corey model is invalid"
            ))
        );
    }

    #[test]
    fn modification_after_finalize_requires_new_finalize() {
        let mut set = ParameterSet::new();
        set.set_entry_pressure(1000.0).set_lambda(2.0).set_ve_height(10.0);
        let old = set.finalize().unwrap();
        assert_eq!(set.ve_height(), Ok(10.0));
        set.set_ve_height(20.0);
        assert_eq!(set.ve_height().err(), Some(LawError::NotFinalized("ve_height")));
        let new = set.finalize().unwrap();
        assert_eq!(old.vertical_equilibrium().map(|v| v.height), Some(10.0));
        assert_eq!(new.vertical_equilibrium().map(|v| v.height), Some(20.0));
        assert_eq!(set.ve_height(), Ok(20.0));
    }

    #[test]
    fn from_records_works() {
        let mut bc = ParamBrooksCorey::new(500.0, 1.5);
        bc.swr = 0.1;
        let reg = ParamRegularization {
            se_low: 0.02,
            se_high: 0.98,
        };
        let ve = ParamVerticalEquilibrium {
            height: 4.0,
            gravity: 10.0,
        };
        let mut set = ParameterSet::from_records(&bc, Some(&reg), Some(&ve));
        let params = set.finalize().unwrap();
        assert_eq!(params.brooks_corey(), &bc);
        assert_eq!(params.regularization(), &reg);
        assert_eq!(params.vertical_equilibrium(), Some(&ve));
        let mut set = ParameterSet::from_records(&bc, None, None);
        let params = set.finalize().unwrap();
        assert_eq!(params.regularization(), &ParamRegularization::default());
        assert_eq!(params.vertical_equilibrium(), None);
    }
}
