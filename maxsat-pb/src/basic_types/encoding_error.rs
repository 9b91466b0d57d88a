use thiserror::Error;

use super::ConstraintId;
#[cfg(doc)]
use crate::options::SoftCardinalityPolicy;
#[cfg(doc)]
use crate::Problem;

/// Errors which are reported while compiling the input constraints into a [`Problem`].
///
/// The input is validated eagerly: a [`Problem`] is never constructed from constraints which
/// would produce a malformed pseudo-Boolean inequality.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Explicit coefficients were provided, but not one for every literal.
    #[error(
        "constraint {constraint} has {num_literals} literals but {num_coefficients} coefficients"
    )]
    CoefficientCountMismatch {
        constraint: ConstraintId,
        num_literals: usize,
        num_coefficients: usize,
    },
    /// A soft constraint without explicit coefficients has a threshold greater than 1, and the
    /// [`SoftCardinalityPolicy::Reject`] policy is active.
    #[error(
        "soft constraint {constraint} has implicit unit coefficients and threshold {at_least}, which the blocking literal cannot relax"
    )]
    UnsupportedSoftCardinality {
        constraint: ConstraintId,
        at_least: i64,
    },
    /// A soft constraint with explicit coefficients has a negative coefficient, so its blocking
    /// literal cannot relax it, and the [`SoftCardinalityPolicy::Reject`] policy is active.
    #[error(
        "soft constraint {constraint} has negative coefficients, which the blocking literal cannot relax"
    )]
    UnsupportedSoftNegativeCoefficients { constraint: ConstraintId },
    /// The sum of the soft constraint weights does not fit in an `i64`, the type in which costs
    /// are reported.
    #[error("the total weight of the soft constraints overflows at constraint {constraint}")]
    CostCapacityOverflow { constraint: ConstraintId },
}
