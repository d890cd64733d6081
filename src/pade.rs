//! Padé approximants through complex samples, for analytic continuation

use crate::big::{lift, DEFAULT_PRECISION};
use crate::cont_frac::{evaluate, Tableau};
use crate::error::{PadeError, Result};
use num_complex::Complex64;
use std::fmt;
use tracing::debug;

/// Squared magnitude of a diagonal tableau entry below which the continued fraction is cut
pub const DEFAULT_TRUNCATION_THRESHOLD: f64 = 1e-20;

/// Settings for building a [PadeApproximant].
///
/// # Example
///
/// ```
/// use num_pade::PadeConfig;
///
/// let config = PadeConfig::default().with_precision_bits(512);
/// assert_eq!(config.precision_bits, 512);
/// assert_eq!(config.truncation_threshold, 1e-20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadeConfig {
    /// Mantissa bits of the arithmetic used for the coefficient tableau
    pub precision_bits: u32,

    /// The fraction is truncated at the first diagonal tableau entry whose
    /// squared magnitude is below this value
    pub truncation_threshold: f64,
}

impl Default for PadeConfig {
    fn default() -> Self {
        PadeConfig {
            precision_bits: DEFAULT_PRECISION,
            truncation_threshold: DEFAULT_TRUNCATION_THRESHOLD,
        }
    }
}

impl PadeConfig {
    #[inline]
    pub fn with_precision_bits(self, precision_bits: u32) -> Self {
        PadeConfig { precision_bits, ..self }
    }

    #[inline]
    pub fn with_truncation_threshold(self, truncation_threshold: f64) -> Self {
        PadeConfig { truncation_threshold, ..self }
    }

    fn validate(&self) -> Result<()> {
        if self.precision_bits == 0 {
            return Err(PadeError::InvalidInput("precision must be at least one bit".to_string()));
        }
        if !(self.truncation_threshold.is_finite() && self.truncation_threshold >= 0.) {
            return Err(PadeError::InvalidInput(format!(
                "truncation threshold {} is not a finite non-negative number",
                self.truncation_threshold
            )));
        }
        Ok(())
    }
}

/// A rational function, written as a Thiele continued fraction, that passes
/// through every sample it was built from.
///
/// The coefficients are computed once, in extended precision, and the approximant
/// is immutable afterwards, so it can be shared and evaluated from any thread.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use num_pade::PadeApproximant;
///
/// let z: Vec<_> = (1..=5).map(|x| Complex64::new(x as f64, 0.)).collect();
/// let u: Vec<_> = z.iter().map(|z| z * z).collect();
/// let pade = PadeApproximant::new(&z, &u).unwrap();
///
/// let v = pade.eval(Complex64::new(2.5, 0.)).unwrap();
/// assert!((v - 6.25).norm() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PadeApproximant {
    points: Vec<Complex64>,
    coeffs: Vec<Complex64>,
    depth: usize,
}

impl PadeApproximant {
    /// Build the approximant with the default [PadeConfig]
    #[inline]
    pub fn new(points: &[Complex64], values: &[Complex64]) -> Result<Self> {
        Self::with_config(points, values, &PadeConfig::default())
    }

    /// Build the approximant through `(points[j], values[j])`.
    ///
    /// The points must be finite and pairwise distinct, and there must be as many
    /// values as points, at least one. Zero divisors in the tableau other than
    /// the truncation of the fraction fail with [PadeError::SingularTableau].
    pub fn with_config(points: &[Complex64], values: &[Complex64], config: &PadeConfig) -> Result<Self> {
        config.validate()?;
        validate_samples(points, values)?;

        debug!(n = points.len(), precision = config.precision_bits, "building pade approximant");
        let threshold = lift(config.truncation_threshold, config.precision_bits)
            .ok_or_else(|| PadeError::InvalidInput("non-finite truncation threshold".to_string()))?;
        let mut tableau = Tableau::new(points, values, config.precision_bits)?;
        tableau.reduce(&threshold)?;
        debug!(depth = tableau.depth(), "pade approximant built");

        Ok(PadeApproximant {
            points: points.to_vec(),
            coeffs: tableau.coefficients(),
            depth: tableau.depth(),
        })
    }

    #[inline]
    pub fn points(&self) -> &[Complex64] {
        &self.points
    }

    #[inline]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Number of leading coefficients that were computed before the fraction
    /// was truncated, the remaining ones are zero
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.depth < self.coeffs.len()
    }

    /// The value of the approximant at `z`, which must be finite
    pub fn eval(&self, z: Complex64) -> Result<Complex64> {
        evaluate(&self.points, &self.coeffs[..self.depth], z)
    }
}

fn validate_samples(points: &[Complex64], values: &[Complex64]) -> Result<()> {
    if points.len() != values.len() {
        return Err(PadeError::InvalidInput(format!(
            "{} points but {} values",
            points.len(),
            values.len()
        )));
    }
    if points.is_empty() {
        return Err(PadeError::InvalidInput("at least one sample is required".to_string()));
    }
    if let Some(k) = points.iter().chain(values).position(|z| !z.is_finite()) {
        return Err(PadeError::InvalidInput(format!(
            "non-finite {} at index {}",
            if k < points.len() { "point" } else { "value" },
            k % points.len()
        )));
    }
    for (i, zi) in points.iter().enumerate() {
        if let Some(j) = points[i + 1..].iter().position(|zj| zj == zi) {
            return Err(PadeError::InvalidInput(format!(
                "points {} and {} coincide at {}",
                i,
                i + 1 + j,
                zi
            )));
        }
    }
    Ok(())
}

impl fmt::Display for PadeApproximant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.coeffs.iter();
        if let Some(a0) = iter.next() {
            write!(f, "[{}", a0)?;
            if let Some(a1) = iter.next() {
                write!(f, "; {}", a1)?;
                for a in iter {
                    write!(f, ", {}", a)?;
                }
            }
        } else {
            write!(f, "[")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn real(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|v| Complex64::new(*v, 0.)).collect()
    }

    #[test]
    fn creation_test() {
        let pade = PadeApproximant::new(&real(&[1., 2., 3.]), &real(&[1., 4., 9.])).unwrap();
        assert_eq!(pade.len(), 3);
        assert!(!pade.is_empty());
        assert_eq!(pade.depth(), 3);
        assert!(!pade.is_truncated());
        assert_eq!(pade.points(), &real(&[1., 2., 3.])[..]);
        assert_eq!(pade.coeffs()[1], Complex64::new(-0.75, 0.));
        assert_relative_eq!(pade.coeffs()[2].re, 11. / 16., max_relative = 1e-15);

        let pade = PadeApproximant::new(&real(&[1., 2., 3., 4.]), &real(&[5.; 4])).unwrap();
        assert_eq!(pade.coeffs(), &real(&[5., 0., 0., 0.])[..]);
        assert_eq!(pade.depth(), 2);
        assert!(pade.is_truncated());
    }

    #[test]
    fn validation_test() {
        let invalid = |points: &[f64], values: &[f64]| {
            matches!(
                PadeApproximant::new(&real(points), &real(values)),
                Err(PadeError::InvalidInput(_))
            )
        };
        assert!(invalid(&[], &[]));
        assert!(invalid(&[1., 2.], &[1.]));
        assert!(invalid(&[1., 2., 1.], &[1., 2., 3.]));
        assert!(invalid(&[1., f64::INFINITY], &[1., 2.]));
        assert!(invalid(&[1., 2.], &[f64::NAN, 2.]));

        let z = real(&[1., 2.]);
        for config in [
            PadeConfig::default().with_precision_bits(0),
            PadeConfig::default().with_truncation_threshold(-1.),
            PadeConfig::default().with_truncation_threshold(f64::NAN),
        ]
        .iter()
        {
            assert!(matches!(
                PadeApproximant::with_config(&z, &z, config),
                Err(PadeError::InvalidInput(_))
            ));
        }

        // a zero sample after the first one cannot be inverted
        assert_eq!(
            PadeApproximant::new(&real(&[0., 1., 2.]), &real(&[1., 0., 3.])),
            Err(PadeError::SingularTableau { row: 1, column: 1 })
        );
    }

    #[test]
    fn threshold_test() {
        // with no truncation the zero diagonal of constant data becomes a zero divisor
        let z = real(&[1., 2., 3.]);
        let u = real(&[5.; 3]);
        let config = PadeConfig::default().with_truncation_threshold(0.);
        assert_eq!(
            PadeApproximant::with_config(&z, &u, &config),
            Err(PadeError::SingularTableau { row: 2, column: 2 })
        );

        // a huge threshold leaves only the constant term
        let config = PadeConfig::default().with_truncation_threshold(1e10);
        let pade = PadeApproximant::with_config(&z, &real(&[1., 4., 9.]), &config).unwrap();
        assert_eq!(pade.depth(), 1);
        assert_eq!(pade.eval(Complex64::new(3., 0.)).unwrap(), Complex64::new(1., 0.));
    }

    #[test]
    fn eval_test() {
        let u = vec![Complex64::new(1., -1.), Complex64::new(0.5, 2.)];
        let pade = PadeApproximant::new(&real(&[0., 1.]), &u).unwrap();
        for (z, u) in pade.points().iter().zip(&u) {
            assert!((pade.eval(*z).unwrap() - u).norm() < 1e-14);
        }

        for z in [
            Complex64::new(f64::NAN, 0.),
            Complex64::new(0., f64::INFINITY),
            Complex64::new(f64::NEG_INFINITY, 1.),
        ]
        .iter()
        {
            assert!(matches!(pade.eval(*z), Err(PadeError::InvalidInput(_))));
        }
    }

    #[test]
    fn fmt_test() {
        let pade = PadeApproximant::new(&real(&[1.]), &real(&[1.])).unwrap();
        assert_eq!(format!("{}", pade), "[1+0i]");
        let pade = PadeApproximant::new(&real(&[1., 2.]), &real(&[1., 4.])).unwrap();
        assert_eq!(format!("{}", pade), "[1+0i; -0.75+0i]");
    }
}
