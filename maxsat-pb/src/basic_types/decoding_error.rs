use thiserror::Error;

use super::ConstraintId;
use super::Variable;

/// Errors which indicate that the encoder, the decoder and the solver disagree about the compiled
/// problem.
///
/// None of these can be caused by the input constraints; they signal a broken internal invariant
/// (or a solver which does not honour its contract) and must not be recovered from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    /// A registered variable follows neither the domain nor the blocking naming convention.
    #[error("an unknown variable entered the model: {variable} is named '{name}'")]
    UnknownVariableName { variable: Variable, name: String },
    /// A variable carries the blocking prefix but no constraint id.
    #[error("blocking variable {variable} has a malformed name '{name}'")]
    MalformedBlockingName { variable: Variable, name: String },
    /// A blocking variable refers to a constraint which is not a soft constraint of the problem.
    #[error("blocking variable {variable} refers to constraint {constraint}, which is not soft")]
    UnexpectedBlockingVariable {
        variable: Variable,
        constraint: ConstraintId,
    },
    /// The solver returned an assignment which does not cover exactly the registered variables.
    #[error("the assignment covers {actual} variables, but {expected} are registered")]
    AssignmentLengthMismatch { expected: usize, actual: usize },
    /// The assignment returned by the solver violates a compiled constraint.
    #[error("the assignment violates compiled constraint {constraint}")]
    UnsatisfiedConstraint { constraint: ConstraintId },
    /// The cost reported by the solver is not the cost of the assignment it returned.
    #[error("the solver reported cost {reported}, but the assignment has cost {recomputed}")]
    InconsistentCost { reported: u64, recomputed: u64 },
}
