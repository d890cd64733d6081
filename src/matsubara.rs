//! Matsubara frequency grids, the usual starting point of an analytic continuation.
//!
//! Green's functions of a system at inverse temperature `beta` are known on
//! the imaginary axis at the Matsubara frequencies. A [PadeApproximant](crate::PadeApproximant)
//! built on the first few of them is then evaluated slightly above the real axis.

use crate::error::{PadeError, Result};
use core::f64::consts::PI;
use num_complex::Complex64;

/// Quantum statistics selecting the Matsubara grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    /// Odd frequencies `(2n + 1) pi / beta`
    Fermion,
    /// Even frequencies `2n pi / beta`
    Boson,
}

/// The first `n` non-negative Matsubara frequencies `i w_k`, in increasing order
pub fn matsubara_frequencies(statistic: Statistic, beta: f64, n: usize) -> Result<Vec<Complex64>> {
    if !(beta.is_finite() && beta > 0.) {
        return Err(PadeError::InvalidInput(format!(
            "inverse temperature {} is not a positive number",
            beta
        )));
    }

    let offset = match statistic {
        Statistic::Fermion => 1.,
        Statistic::Boson => 0.,
    };
    Ok((0..n)
        .map(|k| Complex64::new(0., (2. * k as f64 + offset) * PI / beta))
        .collect())
}

/// The point `omega + i eta` just above the real axis, where a retarded
/// function continued from the Matsubara axis is evaluated
#[inline]
pub fn real_axis_point(omega: f64, eta: f64) -> Complex64 {
    Complex64::new(omega, eta)
}
