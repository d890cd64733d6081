//! Inverse differences of complex samples, computed in extended precision

use crate::big::{BigComplex, BigFloat};
use crate::error::{PadeError, Result};
use num_complex::Complex64;
use num_traits::Zero;
use tracing::{debug, warn};

/// The inverse difference tableau of a set of samples `(z_j, u_j)`.
///
/// Row zero holds the samples, and row `p` holds
/// `g_p(z_j) = (g_(p-1)(z_(p-1)) / g_(p-1)(z_j) - 1) / (z_j - z_(p-1))` for `j >= p`.
/// Entry `j` of row `p` only depends on entries `p-1` and `j` of row `p-1`, so the
/// rows are computed in place and after the last row the storage holds
/// the diagonal `g_j(z_j)`, which are the continued fraction coefficients.
#[derive(Debug, Clone)]
pub struct Tableau {
    nodes: Vec<BigComplex>,
    entries: Vec<BigComplex>,
    precision: u32,
    depth: usize, // rows computed so far
}

impl Tableau {
    /// Lift the samples to `precision` bits as row zero of the tableau
    pub fn new(points: &[Complex64], values: &[Complex64], precision: u32) -> Result<Self> {
        if points.len() != values.len() {
            return Err(PadeError::InvalidInput(format!(
                "{} points but {} values",
                points.len(),
                values.len()
            )));
        }

        let lift = |(k, z): (usize, &Complex64)| {
            BigComplex::from_complex(*z, precision)
                .ok_or_else(|| PadeError::InvalidInput(format!("non-finite sample at index {}", k)))
        };
        let nodes = points.iter().enumerate().map(lift).collect::<Result<Vec<_>>>()?;
        let entries = values.iter().enumerate().map(lift).collect::<Result<Vec<_>>>()?;
        let depth = if entries.is_empty() { 0 } else { 1 };
        Ok(Tableau { nodes, entries, precision, depth })
    }

    /// The number of rows whose diagonal entry is part of the continued fraction
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Compute the remaining rows.
    ///
    /// The recursion stops as soon as a diagonal entry has a squared magnitude below
    /// `threshold`: the samples are then reproduced by a shorter fraction, and the
    /// coefficients from that row on are zero. An exact zero divisor anywhere
    /// else is an error.
    pub fn reduce(&mut self, threshold: &BigFloat) -> Result<()> {
        let n = self.entries.len();
        let one = BigComplex::one(self.precision);

        for p in self.depth.max(1)..n {
            let (head, tail) = self.entries.split_at_mut(p);
            let pivot = &head[p - 1];

            let norm = pivot.norm_sqr();
            if &norm < threshold {
                debug!(row = p, norm_sqr = norm.to_f64().value(), "continued fraction truncated");
                return Ok(());
            }

            let z0 = &self.nodes[p - 1];
            for (offset, entry) in tail.iter_mut().enumerate() {
                let column = p + offset;
                let singular = || {
                    warn!(row = p, column, "zero divisor in inverse difference tableau");
                    PadeError::SingularTableau { row: p, column }
                };

                let x = pivot.checked_div(entry).ok_or_else(singular)?.sub(&one);
                let y = self.nodes[column].sub(z0);
                *entry = x.checked_div(&y).ok_or_else(singular)?;
            }
            self.depth = p + 1;
        }
        Ok(())
    }

    /// Round the coefficients to double precision, rows that were never computed
    /// contribute zero
    pub fn coefficients(&self) -> Vec<Complex64> {
        self.entries
            .iter()
            .enumerate()
            .map(|(j, g)| if j < self.depth { g.to_complex() } else { Complex64::zero() })
            .collect()
    }
}
