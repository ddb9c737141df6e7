use crate::base::{LawError, LawResult};
use russell_lab::RootFinder;

/// Implements a cubic Hermite segment matching values and slopes at both ends
///
/// The segment is defined on `[x0, x1]` by the end values `(y0, y1)` and
/// the end slopes `(m0, m1)`. With `t = (x - x0) / h` and `h = x1 - x0`:
///
/// ```text
/// p(x) = h00(t) y0 + h10(t) h m0 + h01(t) y1 + h11(t) h m1
///
/// h00 = 2t³ - 3t² + 1    h10 = t³ - 2t² + t
/// h01 = -2t³ + 3t²       h11 = t³ - t²
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicHermite {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    m0: f64,
    m1: f64,
}

impl CubicHermite {
    /// Allocates a new instance
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64, m0: f64, m1: f64) -> LawResult<Self> {
        if !(x1 > x0) {
            return Err(LawError::InvalidParameter("Hermite segment requires x1 > x0"));
        }
        if !(y0.is_finite() && y1.is_finite() && m0.is_finite() && m1.is_finite()) {
            return Err(LawError::InvalidParameter("Hermite segment requires finite end data"));
        }
        Ok(CubicHermite { x0, x1, y0, y1, m0, m1 })
    }

    /// Calculates the interpolated value
    ///
    /// The cubic is evaluated as is outside `[x0, x1]`; callers restrict the argument.
    pub fn eval(&self, x: f64) -> f64 {
        let h = self.x1 - self.x0;
        let t = (x - self.x0) / h;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * self.y0 + h10 * h * self.m0 + h01 * self.y1 + h11 * h * self.m1
    }

    /// Calculates the first derivative dp/dx
    pub fn deriv(&self, x: f64) -> f64 {
        let h = self.x1 - self.x0;
        let t = (x - self.x0) / h;
        let t2 = t * t;
        let d00 = 6.0 * t2 - 6.0 * t;
        let d10 = 3.0 * t2 - 4.0 * t + 1.0;
        let d01 = -6.0 * t2 + 6.0 * t;
        let d11 = 3.0 * t2 - 2.0 * t;
        (d00 * self.y0 + d01 * self.y1) / h + d10 * self.m0 + d11 * self.m1
    }

    /// Indicates whether the segment is monotone on `[x0, x1]`
    ///
    /// Uses the necessary and sufficient conditions of Fritsch and Carlson (1980)
    /// with `α = m0/Δ` and `β = m1/Δ`, where `Δ` is the secant slope.
    pub fn is_monotone(&self) -> bool {
        const TOL: f64 = 1e-12;
        let delta = (self.y1 - self.y0) / (self.x1 - self.x0);
        if delta == 0.0 {
            return self.m0 == 0.0 && self.m1 == 0.0;
        }
        let alpha = self.m0 / delta;
        let beta = self.m1 / delta;
        if alpha < 0.0 || beta < 0.0 {
            return false;
        }
        let s = alpha + beta - 2.0;
        if s <= TOL || 2.0 * alpha + beta - 3.0 <= TOL || alpha + 2.0 * beta - 3.0 <= TOL {
            return true;
        }
        let c = 2.0 * alpha + beta - 3.0;
        alpha - c * c / (3.0 * s) >= 0.0
    }

    /// Finds x such that p(x) = y using Brent's method (the segment must be monotone)
    ///
    /// Returns a domain error if y lies outside the range of the end values.
    pub fn inverse(&self, y: f64) -> LawResult<f64> {
        let (y_min, y_max) = if self.y0 <= self.y1 {
            (self.y0, self.y1)
        } else {
            (self.y1, self.y0)
        };
        if !(y >= y_min && y <= y_max) {
            return Err(LawError::Domain("value is outside the range of the Hermite segment"));
        }
        // Brent's method requires f(x0) × f(x1) < 0
        let (f0, f1) = (self.y0 - y, self.y1 - y);
        if f0 * f1 >= -f64::EPSILON {
            return Ok(if f64::abs(f0) <= f64::abs(f1) { self.x0 } else { self.x1 });
        }
        let args = &mut 0;
        let solver = RootFinder::new();
        let (x, _) = solver
            .brent(self.x0, self.x1, args, |x, _| Ok(self.eval(x) - y))
            .map_err(LawError::NumericalSingularity)?;
        Ok(x)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
