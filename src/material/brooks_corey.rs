use super::EffectiveLaw;
use crate::base::{LawError, LawResult, MaterialParams};
use std::sync::Arc;

/// Implements the (raw) Brooks-Corey capillary pressure and relative permeability laws
///
/// With the entry pressure pₑ and the shape exponent λ:
///
/// ```text
/// pc(Se)  = pₑ Se^(-1/λ)
/// Se(pc)  = (pc/pₑ)^(-λ)
/// krw(Se) = Se^((2+3λ)/λ)
/// krn(Se) = (1-Se)² (1 - Se^((2+λ)/λ))
/// ```
///
/// The capillary pressure and its slope are unbounded as Se → 0; hence, evaluating
/// pc at Se ≤ 0 (or Se at pc ≤ 0) is a numerical singularity. See
/// [super::RegularizedBrooksCorey] for the bounded-slope version.
///
/// # Reference
///
/// * Brooks RH and Corey AT (1964) Hydraulic properties of porous media,
///   Hydrology Papers 3, Colorado State University.
#[derive(Clone, Debug)]
pub struct BrooksCorey {
    params: Arc<MaterialParams>,
}

impl BrooksCorey {
    /// Allocates a new instance
    pub fn new(params: Arc<MaterialParams>) -> Self {
        BrooksCorey { params }
    }

    /// Returns the parameters
    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    /// Returns the exponent of the wetting relative permeability (2+3λ)/λ
    fn krw_exponent(&self) -> f64 {
        let lambda = self.params.lambda();
        (2.0 + 3.0 * lambda) / lambda
    }

    /// Returns the exponent of the non-wetting relative permeability (2+λ)/λ
    fn krn_exponent(&self) -> f64 {
        let lambda = self.params.lambda();
        (2.0 + lambda) / lambda
    }
}

impl EffectiveLaw for BrooksCorey {
    fn capillary_pressure(&self, se: f64) -> LawResult<f64> {
        if se <= 0.0 {
            return Err(LawError::NumericalSingularity(
                "raw capillary pressure requires an effective saturation > 0",
            ));
        }
        Ok(self.params.entry_pressure() * f64::powf(se, -1.0 / self.params.lambda()))
    }

    fn dpc_dse(&self, se: f64) -> LawResult<f64> {
        if se <= 0.0 {
            return Err(LawError::NumericalSingularity(
                "raw capillary pressure requires an effective saturation > 0",
            ));
        }
        let lambda = self.params.lambda();
        Ok(-self.params.entry_pressure() / lambda * f64::powf(se, -1.0 / lambda - 1.0))
    }

    fn saturation(&self, pc: f64) -> LawResult<f64> {
        if pc <= 0.0 {
            return Err(LawError::NumericalSingularity(
                "raw saturation requires a capillary pressure > 0",
            ));
        }
        Ok(f64::powf(pc / self.params.entry_pressure(), -self.params.lambda()))
    }

    fn dse_dpc(&self, pc: f64) -> LawResult<f64> {
        if pc <= 0.0 {
            return Err(LawError::NumericalSingularity(
                "raw saturation requires a capillary pressure > 0",
            ));
        }
        let pe = self.params.entry_pressure();
        let lambda = self.params.lambda();
        Ok(-lambda / pe * f64::powf(pc / pe, -lambda - 1.0))
    }

    fn krw(&self, se: f64) -> LawResult<f64> {
        if se < 0.0 {
            return Err(LawError::Domain("raw relative permeability requires Se ≥ 0"));
        }
        Ok(f64::powf(se, self.krw_exponent()))
    }

    fn dkrw_dse(&self, se: f64) -> LawResult<f64> {
        if se < 0.0 {
            return Err(LawError::Domain("raw relative permeability requires Se ≥ 0"));
        }
        let k = self.krw_exponent();
        Ok(k * f64::powf(se, k - 1.0))
    }

    fn krn(&self, se: f64) -> LawResult<f64> {
        if se < 0.0 {
            return Err(LawError::Domain("raw relative permeability requires Se ≥ 0"));
        }
        let p = self.krn_exponent();
        let sn = 1.0 - se;
        Ok(sn * sn * (1.0 - f64::powf(se, p)))
    }

    fn dkrn_dse(&self, se: f64) -> LawResult<f64> {
        if se < 0.0 {
            return Err(LawError::Domain("raw relative permeability requires Se ≥ 0"));
        }
        let p = self.krn_exponent();
        let sn = 1.0 - se;
        Ok(-2.0 * sn * (1.0 - f64::powf(se, p)) - sn * sn * p * f64::powf(se, p - 1.0))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::BrooksCorey;
    use crate::base::{sample_params, sample_params_sand, LawError};
    use crate::material::EffectiveLaw;
    use crate::util::{generate_curve_data, is_monotone_sequence};
    use russell_lab::{approx_eq, deriv1_central5};

    #[test]
    fn end_point_values_work() {
        let law = BrooksCorey::new(sample_params_sand());
        let pe = law.params().entry_pressure();
        assert_eq!(law.capillary_pressure(1.0).unwrap(), pe);
        assert_eq!(law.saturation(pe).unwrap(), 1.0);
        assert_eq!(law.krw(1.0).unwrap(), 1.0);
        assert_eq!(law.krw(0.0).unwrap(), 0.0);
        assert_eq!(law.krn(1.0).unwrap(), 0.0);
        assert_eq!(law.krn(0.0).unwrap(), 1.0);
    }

    #[test]
    fn closed_forms_work() {
        // λ = 2 → pc = pₑ/√Se, krw = Se⁴, krn = (1-Se)²(1-Se²)
        let law = BrooksCorey::new(sample_params(1000.0, 2.0));
        approx_eq(law.capillary_pressure(0.25).unwrap(), 2000.0, 1e-12);
        approx_eq(law.saturation(2000.0).unwrap(), 0.25, 1e-15);
        approx_eq(law.krw(0.5).unwrap(), 0.0625, 1e-15);
        approx_eq(law.krn(0.5).unwrap(), 0.25 * 0.75, 1e-15);
    }

    #[test]
    fn singular_end_points_are_captured() {
        let law = BrooksCorey::new(sample_params_sand());
        assert_eq!(
            law.capillary_pressure(0.0).err(),
            Some(LawError::NumericalSingularity(
                "raw capillary pressure requires an effective saturation > 0"
            ))
        );
        assert_eq!(
            law.dpc_dse(-0.1).err(),
            Some(LawError::NumericalSingularity(
                "raw capillary pressure requires an effective saturation > 0"
            ))
        );
        assert_eq!(
            law.saturation(0.0).err(),
            Some(LawError::NumericalSingularity(
                "raw saturation requires a capillary pressure > 0"
            ))
        );
        assert_eq!(
            law.dse_dpc(-1.0).err(),
            Some(LawError::NumericalSingularity(
                "raw saturation requires a capillary pressure > 0"
            ))
        );
        let domain = Some(LawError::Domain("raw relative permeability requires Se ≥ 0"));
        assert_eq!(law.krw(-0.01).err(), domain);
        assert_eq!(law.dkrw_dse(-0.01).err(), domain);
        assert_eq!(law.krn(-0.01).err(), domain);
        assert_eq!(law.dkrn_dse(-0.01).err(), domain);
    }

    #[test]
    fn round_trip_works() {
        for lambda in [0.5, 2.0, 3.7] {
            let law = BrooksCorey::new(sample_params(500.0, lambda));
            for se in [0.05, 0.2, 0.5, 0.8, 0.95] {
                let pc = law.capillary_pressure(se).unwrap();
                approx_eq(law.saturation(pc).unwrap(), se, 1e-12);
            }
        }
    }

    #[test]
    fn monotonicity_works() {
        let law = BrooksCorey::new(sample_params_sand());
        let (_, pc) = generate_curve_data(0.01, 1.0, 101, |se| law.capillary_pressure(se)).unwrap();
        let (_, krw) = generate_curve_data(0.0, 1.0, 101, |se| law.krw(se)).unwrap();
        let (_, krn) = generate_curve_data(0.0, 1.0, 101, |se| law.krn(se)).unwrap();
        assert!(is_monotone_sequence(&pc, false));
        assert!(is_monotone_sequence(&krw, true));
        assert!(is_monotone_sequence(&krn, false));
    }

    #[test]
    fn derivatives_work() {
        let law = BrooksCorey::new(sample_params_sand());
        let mut args = 0;
        for se in [0.3, 0.6, 0.9] {
            let num = deriv1_central5(se, &mut args, |x, _| Ok(law.capillary_pressure(x).unwrap())).unwrap();
            approx_eq(law.dpc_dse(se).unwrap() / num, 1.0, 1e-7);
            let num = deriv1_central5(se, &mut args, |x, _| Ok(law.krw(x).unwrap())).unwrap();
            approx_eq(law.dkrw_dse(se).unwrap(), num, 1e-9);
            let num = deriv1_central5(se, &mut args, |x, _| Ok(law.krn(x).unwrap())).unwrap();
            approx_eq(law.dkrn_dse(se).unwrap(), num, 1e-9);
        }
        for pc in [1500.0, 3000.0, 10000.0] {
            let num = deriv1_central5(pc, &mut args, |x, _| Ok(law.saturation(x).unwrap())).unwrap();
            approx_eq(law.dse_dpc(pc).unwrap(), num, 1e-10);
        }
    }
}
