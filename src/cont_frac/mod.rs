//! Thiele continued fractions interpolating complex samples
//!
//! A set of samples `u_j = f(z_j)` is represented by the fraction
//! `a_0 / (1 + a_1 (z - z_0) / (1 + a_2 (z - z_1) / (1 + ..)))`, which is the Padé
//! approximant through all the samples. There are two halves to it:
//! 1. [Tableau] computes the coefficients `a_j` from the inverse differences of the samples.
//!    The differences are taken in extended precision, because every row divides
//!    by a difference of nearly equal numbers and double precision loses digits
//!    geometrically with the number of samples.
//! 2. [evaluate] computes the value of the fraction with a renormalized forward
//!    recurrence (see [Block]), in double precision.
//!
//! # References:
//! - H. J. Vidberg, J. W. Serene, J. Low Temp. Phys. 29, 179 (1977)
//! - <https://mathworld.wolfram.com/ThielesInterpolationFormula.html>
//!

mod block;
mod thiele;

pub use block::Block;
pub use thiele::Tableau;

use crate::error::{PadeError, Result};
use num_complex::Complex64;
use tracing::warn;

/// Evaluate the fraction with coefficients `coeffs` and nodes `points` at `z`.
///
/// Only the first `coeffs.len()` coefficients are visited, and trailing zero
/// coefficients can be left out by the caller without changing the value.
/// A denominator that vanishes exactly at step `i` is reported as
/// [PadeError::EvaluationSingularity] rather than turned into NaN, and so is
/// a non-finite `z` as [PadeError::InvalidInput].
pub fn evaluate(points: &[Complex64], coeffs: &[Complex64], z: Complex64) -> Result<Complex64> {
    if !z.is_finite() {
        return Err(PadeError::InvalidInput(format!("non-finite evaluation point {}", z)));
    }
    let (a0, rest) = coeffs
        .split_first()
        .ok_or_else(|| PadeError::InvalidInput("empty continued fraction".to_string()))?;

    let mut block = Block::new(*a0);
    for (step, (zi, a)) in points.iter().zip(rest).enumerate() {
        if block.checked_gmove((z - zi) * a).is_none() {
            warn!(step, re = z.re, im = z.im, "vanishing denominator in continued fraction");
            return Err(PadeError::EvaluationSingularity { step });
        }
    }
    Ok(block.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn real(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|v| Complex64::new(*v, 0.)).collect()
    }

    #[test]
    fn evaluate_test() {
        // (11x - 6) / (6 - x) through (1, 1), (2, 4), (3, 9)
        let points = real(&[1., 2., 3.]);
        let coeffs = real(&[1., -0.75, 11. / 16.]);
        for (x, y) in [(1., 1.), (2., 4.), (3., 9.), (2.5, 43. / 7.), (4., 19.)].iter() {
            let v = evaluate(&points, &coeffs, Complex64::new(*x, 0.)).unwrap();
            assert_relative_eq!(v.re, *y, max_relative = 1e-14);
            assert_eq!(v.im, 0.);
        }

        // constant fraction
        let c = Complex64::new(2., -1.);
        assert_eq!(evaluate(&points[..1], &[c], Complex64::new(7., 7.)).unwrap(), c);
        assert!(evaluate(&points, &[], c).is_err());
    }

    #[test]
    fn non_finite_test() {
        let points = real(&[0., 1.]);
        let coeffs = real(&[1., 1.]);
        assert!(matches!(
            evaluate(&points, &coeffs, Complex64::new(f64::NAN, 0.)),
            Err(PadeError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate(&points, &coeffs, Complex64::new(0., f64::INFINITY)),
            Err(PadeError::InvalidInput(_))
        ));
    }

    #[test]
    fn singularity_test() {
        // 1 / (1 + (z - 0)): the pole at z = -1 is hit exactly
        let points = real(&[0., 1.]);
        let coeffs = real(&[1., 1.]);
        assert_eq!(
            evaluate(&points, &coeffs, Complex64::new(-1., 0.)),
            Err(PadeError::EvaluationSingularity { step: 0 })
        );
        assert_relative_eq!(evaluate(&points, &coeffs, Complex64::new(1., 0.)).unwrap().re, 0.5);
    }
}
