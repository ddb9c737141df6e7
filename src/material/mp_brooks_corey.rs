use crate::base::{LawError, LawResult};

/// Implements the Brooks-Corey law for N fluid phases
///
/// Each phase i has its own entry pressure pₑᵢ and shape exponent λᵢ:
///
/// ```text
/// pcᵢ = pₑᵢ Sᵢ^(-1/λᵢ)
/// krᵢ = Sᵢ^(2/λᵢ + 3)
/// ```
///
/// At most one phase may have a zero entry pressure; this is the reference phase, whose
/// capillary pressure is zero and whose saturation closes the sum of saturations in
/// the inverse mapping.
#[derive(Clone, Debug)]
pub struct MpBrooksCorey<const N: usize> {
    entry_pressures: [f64; N],
    lambdas: [f64; N],
    reference: Option<usize>,
}

impl<const N: usize> MpBrooksCorey<N> {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `entry_pressures` -- entry pressures (≥ 0); a zero value marks the reference phase
    /// * `lambdas` -- shape exponents (> 0)
    pub fn new(entry_pressures: [f64; N], lambdas: [f64; N]) -> LawResult<Self> {
        let mut reference = None;
        for i in 0..N {
            if !entry_pressures[i].is_finite() || entry_pressures[i] < 0.0 {
                return Err(LawError::InvalidParameter(
                    "entry_pressure parameter for the Brooks-Corey model is invalid",
                ));
            }
            if !lambdas[i].is_finite() || lambdas[i] <= 0.0 {
                return Err(LawError::InvalidParameter(
                    "lambda parameter for the Brooks-Corey model is invalid",
                ));
            }
            if entry_pressures[i] == 0.0 {
                if reference.is_some() {
                    return Err(LawError::InvalidParameter("at most one reference phase is allowed"));
                }
                reference = Some(i);
            }
        }
        Ok(MpBrooksCorey {
            entry_pressures,
            lambdas,
            reference,
        })
    }

    /// Returns the index of the reference phase, if any
    pub fn reference_phase(&self) -> Option<usize> {
        self.reference
    }

    /// Calculates the capillary pressures of all phases
    pub fn capillary_pressures(&self, pc: &mut [f64; N], saturations: &[f64; N]) -> LawResult<()> {
        for i in 0..N {
            let s = check_saturation(saturations[i])?;
            if Some(i) == self.reference {
                pc[i] = 0.0;
                continue;
            }
            if s == 0.0 {
                return Err(LawError::NumericalSingularity(
                    "raw capillary pressure requires a saturation > 0",
                ));
            }
            pc[i] = self.entry_pressures[i] * f64::powf(s, -1.0 / self.lambdas[i]);
        }
        Ok(())
    }

    /// Calculates the saturations from the capillary pressures
    ///
    /// The saturation of the reference phase is one minus the sum of the other saturations.
    pub fn saturations(&self, saturations: &mut [f64; N], pc: &[f64; N]) -> LawResult<()> {
        let mut sum = 0.0;
        for i in 0..N {
            if Some(i) == self.reference {
                continue;
            }
            if pc[i] <= 0.0 {
                return Err(LawError::NumericalSingularity(
                    "raw saturation requires a capillary pressure > 0",
                ));
            }
            saturations[i] = f64::powf(pc[i] / self.entry_pressures[i], -self.lambdas[i]);
            sum += saturations[i];
        }
        if let Some(r) = self.reference {
            saturations[r] = 1.0 - sum;
        }
        Ok(())
    }

    /// Calculates the relative permeabilities of all phases
    pub fn relative_permeabilities(&self, kr: &mut [f64; N], saturations: &[f64; N]) -> LawResult<()> {
        for i in 0..N {
            let s = check_saturation(saturations[i])?;
            kr[i] = f64::powf(s, 2.0 / self.lambdas[i] + 3.0);
        }
        Ok(())
    }
}

fn check_saturation(s: f64) -> LawResult<f64> {
    if s < 0.0 || s > 1.0 {
        return Err(LawError::Domain("saturation must be in [0, 1]"));
    }
    Ok(s)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
