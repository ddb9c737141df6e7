use crate::base::{LawError, LawResult};
use plotpy::linspace;

/// Generates (x, f(x)) pairs to plot or check a curve
///
/// # Input
///
/// * `x_start` -- first abscissa
/// * `x_stop` -- last abscissa
/// * `npoint` -- number of points (≥ 2)
/// * `f` -- function to be sampled
pub fn generate_curve_data<F>(x_start: f64, x_stop: f64, npoint: usize, mut f: F) -> LawResult<(Vec<f64>, Vec<f64>)>
where
    F: FnMut(f64) -> LawResult<f64>,
{
    if npoint < 2 {
        return Err(LawError::InvalidParameter("npoint must be ≥ 2"));
    }
    let xx = linspace(x_start, x_stop, npoint);
    let mut yy = Vec::with_capacity(npoint);
    for x in &xx {
        yy.push(f(*x)?);
    }
    Ok((xx, yy))
}

/// Indicates whether the sequence is non-decreasing (or non-increasing if `increasing` is false)
pub fn is_monotone_sequence(values: &[f64], increasing: bool) -> bool {
    values.windows(2).all(|w| if increasing { w[1] >= w[0] } else { w[1] <= w[0] })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{generate_curve_data, is_monotone_sequence};
    use crate::base::LawError;

    #[test]
    fn generate_curve_data_works() {
        let (xx, yy) = generate_curve_data(0.0, 2.0, 3, |x| Ok(x * x)).unwrap();
        assert_eq!(xx, vec![0.0, 1.0, 2.0]);
        assert_eq!(yy, vec![0.0, 1.0, 4.0]);
        assert_eq!(
            generate_curve_data(0.0, 1.0, 1, |x| Ok(x)).err(),
            Some(LawError::InvalidParameter("npoint must be ≥ 2"))
        );
        assert_eq!(
            generate_curve_data(0.0, 1.0, 3, |_| Err(LawError::Domain("stop"))).err(),
            Some(LawError::Domain("stop"))
        );
    }

    #[test]
    fn is_monotone_sequence_works() {
        assert!(is_monotone_sequence(&[1.0, 1.0, 2.0], true));
        assert!(!is_monotone_sequence(&[1.0, 0.5, 2.0], true));
        assert!(is_monotone_sequence(&[3.0, 2.0, 2.0], false));
        assert!(!is_monotone_sequence(&[3.0, 4.0], false));
        assert!(is_monotone_sequence(&[], true));
    }
}
