use super::{BrooksCorey, EffectiveLaw};
use crate::base::{LawError, LawResult, MaterialParams};
use crate::util::CubicHermite;
use std::sync::Arc;

/// Implements the regularized Brooks-Corey laws with bounded slopes near the end points
///
/// The raw laws are followed within `[se_low, se_high]`. Outside this band, the raw
/// curves are replaced by C¹-continuous substitutes that preserve monotonicity:
///
/// | Quantity | Se < 0 | [0, se_low)        | [se_low, se_high] | (se_high, 1]       | Se > 1       |
/// |----------|--------|--------------------|-------------------|--------------------|--------------|
/// | pc       | line   | tangent at se_low  | raw               | Hermite to (1, pₑ) | tangent at 1 |
/// | krw      | 0      | raw                | raw               | Hermite to (1, 1)  | 1            |
/// | krn      | 1      | Hermite from (0,1) | raw               | raw                | 0            |
///
/// The Hermite segments match the raw value and slope at the splice point. The pc segment
/// also matches the raw value and slope at Se = 1, whereas the krw and krn segments reach
/// their end values with zero slope.
///
/// The inverse Se(pc) uses the branch corresponding to the pc sub-range, thus
/// `saturation(capillary_pressure(se)) == se` holds everywhere.
#[derive(Clone, Debug)]
pub struct RegularizedBrooksCorey {
    raw: BrooksCorey,
    se_low: f64,
    se_high: f64,
    pc_low: f64,       // pc at se_low
    pc_low_slope: f64, // dpc/dSe at se_low
    pc_high: f64,      // pc at se_high
    pc_one: f64,       // pc at Se = 1 (equal to pₑ)
    pc_one_slope: f64, // dpc/dSe at Se = 1
    pc_spline: CubicHermite,
    krw_spline: CubicHermite,
    krn_spline: CubicHermite,
}

impl RegularizedBrooksCorey {
    /// Allocates a new instance
    ///
    /// Returns an error if the thresholds are such that a regularized branch is not monotone.
    pub fn new(params: Arc<MaterialParams>) -> LawResult<Self> {
        let se_low = params.se_low();
        let se_high = params.se_high();
        if se_low >= se_high {
            return Err(LawError::InvalidParameter(
                "se_low regularization threshold must be smaller than se_high",
            ));
        }
        let raw = BrooksCorey::new(params);

        // capillary pressure
        let pc_low = raw.capillary_pressure(se_low)?;
        let pc_low_slope = raw.dpc_dse(se_low)?;
        if !pc_low.is_finite() || !pc_low_slope.is_finite() {
            return Err(LawError::InvalidParameter(
                "se_low threshold yields a non-finite capillary pressure",
            ));
        }
        let pc_high = raw.capillary_pressure(se_high)?;
        let pc_one = raw.capillary_pressure(1.0)?;
        let pc_one_slope = raw.dpc_dse(1.0)?;
        let pc_spline = CubicHermite::new(se_high, 1.0, pc_high, pc_one, raw.dpc_dse(se_high)?, pc_one_slope)?;
        if !pc_spline.is_monotone() {
            return Err(LawError::InvalidParameter(
                "se_high threshold yields a non-monotone capillary pressure",
            ));
        }

        // relative permeabilities
        let krw_spline = CubicHermite::new(se_high, 1.0, raw.krw(se_high)?, 1.0, raw.dkrw_dse(se_high)?, 0.0)?;
        if !krw_spline.is_monotone() {
            return Err(LawError::InvalidParameter(
                "se_high threshold yields a non-monotone wetting relative permeability",
            ));
        }
        let krn_spline = CubicHermite::new(0.0, se_low, 1.0, raw.krn(se_low)?, 0.0, raw.dkrn_dse(se_low)?)?;
        if !krn_spline.is_monotone() {
            return Err(LawError::InvalidParameter(
                "se_low threshold yields a non-monotone non-wetting relative permeability",
            ));
        }
        log::debug!(
            "regularized Brooks-Corey: se_low={}, se_high={}, pc_low={}, pc_high={}",
            se_low,
            se_high,
            pc_low,
            pc_high
        );
        Ok(RegularizedBrooksCorey {
            raw,
            se_low,
            se_high,
            pc_low,
            pc_low_slope,
            pc_high,
            pc_one,
            pc_one_slope,
            pc_spline,
            krw_spline,
            krn_spline,
        })
    }

    /// Returns the raw law
    pub fn raw(&self) -> &BrooksCorey {
        &self.raw
    }

    /// Returns the parameters
    pub fn params(&self) -> &MaterialParams {
        self.raw.params()
    }

    /// Returns the regularization thresholds (se_low, se_high)
    pub fn thresholds(&self) -> (f64, f64) {
        (self.se_low, self.se_high)
    }

    /// Returns the capillary pressures at the thresholds (pc(se_low), pc(se_high))
    pub fn threshold_pressures(&self) -> (f64, f64) {
        (self.pc_low, self.pc_high)
    }
}

impl EffectiveLaw for RegularizedBrooksCorey {
    fn capillary_pressure(&self, se: f64) -> LawResult<f64> {
        if se < self.se_low {
            Ok(self.pc_low + self.pc_low_slope * (se - self.se_low))
        } else if se > 1.0 {
            Ok(self.pc_one + self.pc_one_slope * (se - 1.0))
        } else if se > self.se_high {
            Ok(self.pc_spline.eval(se))
        } else {
            self.raw.capillary_pressure(se)
        }
    }

    fn dpc_dse(&self, se: f64) -> LawResult<f64> {
        if se < self.se_low {
            Ok(self.pc_low_slope)
        } else if se > 1.0 {
            Ok(self.pc_one_slope)
        } else if se > self.se_high {
            Ok(self.pc_spline.deriv(se))
        } else {
            self.raw.dpc_dse(se)
        }
    }

    fn saturation(&self, pc: f64) -> LawResult<f64> {
        if pc > self.pc_low {
            Ok(self.se_low + (pc - self.pc_low) / self.pc_low_slope)
        } else if pc < self.pc_one {
            Ok(1.0 + (pc - self.pc_one) / self.pc_one_slope)
        } else if pc < self.pc_high {
            self.pc_spline.inverse(pc)
        } else {
            self.raw.saturation(pc)
        }
    }

    fn dse_dpc(&self, pc: f64) -> LawResult<f64> {
        if pc > self.pc_low {
            Ok(1.0 / self.pc_low_slope)
        } else if pc < self.pc_one {
            Ok(1.0 / self.pc_one_slope)
        } else if pc < self.pc_high {
            let se = self.pc_spline.inverse(pc)?;
            Ok(1.0 / self.pc_spline.deriv(se))
        } else {
            self.raw.dse_dpc(pc)
        }
    }

    fn krw(&self, se: f64) -> LawResult<f64> {
        if se <= 0.0 {
            Ok(0.0)
        } else if se >= 1.0 {
            Ok(1.0)
        } else if se > self.se_high {
            Ok(self.krw_spline.eval(se))
        } else {
            self.raw.krw(se)
        }
    }

    fn dkrw_dse(&self, se: f64) -> LawResult<f64> {
        if se <= 0.0 || se >= 1.0 {
            Ok(0.0)
        } else if se > self.se_high {
            Ok(self.krw_spline.deriv(se))
        } else {
            self.raw.dkrw_dse(se)
        }
    }

    fn krn(&self, se: f64) -> LawResult<f64> {
        if se <= 0.0 {
            Ok(1.0)
        } else if se >= 1.0 {
            Ok(0.0)
        } else if se < self.se_low {
            Ok(self.krn_spline.eval(se))
        } else {
            self.raw.krn(se)
        }
    }

    fn dkrn_dse(&self, se: f64) -> LawResult<f64> {
        if se <= 0.0 || se >= 1.0 {
            Ok(0.0)
        } else if se < self.se_low {
            Ok(self.krn_spline.deriv(se))
        } else {
            self.raw.dkrn_dse(se)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
