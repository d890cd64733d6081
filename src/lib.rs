//! `num-pade` builds Padé approximants through complex samples and evaluates
//! them anywhere in the complex plane, typically to continue a function known
//! on a contour (such as the Matsubara axis) onto the real axis.
//!
//! The approximant is a Thiele continued fraction. Its coefficients come from an
//! inverse difference tableau computed with [big] extended precision numbers,
//! and the fraction is evaluated with a renormalized forward recurrence.

pub mod big;
mod cont_frac;
mod error;
pub mod matsubara;
mod pade;

pub use cont_frac::{evaluate, Block, Tableau};
pub use error::{PadeError, Result};
pub use pade::{PadeApproximant, PadeConfig, DEFAULT_TRUNCATION_THRESHOLD};
