//! Error type shared by construction and evaluation of approximants

use thiserror::Error;

/// Failures of building or evaluating a Padé approximant.
///
/// All of them are fatal to the operation that raised them, the caller decides
/// whether to retry with perturbed points or a different precision.
///
/// # Examples
/// ```
/// use num_pade::PadeError;
///
/// let err = PadeError::SingularTableau { row: 1, column: 3 };
/// assert_eq!(format!("{}", err), "singular tableau: zero divisor at row 1, column 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PadeError {
    /// Malformed samples or configuration, detected before any arithmetic
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An exact zero divisor in the inverse difference tableau
    #[error("singular tableau: zero divisor at row {row}, column {column}")]
    SingularTableau { row: usize, column: usize },

    /// The renormalizing denominator of the continued fraction vanished
    #[error("evaluation singularity: vanishing denominator at step {step}")]
    EvaluationSingularity { step: usize },
}

pub type Result<T> = std::result::Result<T, PadeError>;
