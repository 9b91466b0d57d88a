//! The boundary to the engine which searches for an optimal assignment.
//!
//! A [`PseudoBooleanSolver`] receives a [`PseudoBooleanInstance`] (the compiled constraints and
//! the objective) and reports either that the hard constraints cannot be satisfied, or an
//! assignment of minimum cost. How it gets there, and whether it honours a time budget, is up to
//! the implementation.
mod exhaustive;

pub use exhaustive::*;

use crate::basic_types::Assignment;
use crate::encoding::Objective;
use crate::encoding::PseudoBooleanConstraint;

/// A view of a compiled problem, as handed to a [`PseudoBooleanSolver`].
#[derive(Clone, Copy, Debug)]
pub struct PseudoBooleanInstance<'a> {
    num_variables: usize,
    constraints: &'a [PseudoBooleanConstraint],
    objective: &'a Objective,
}

impl<'a> PseudoBooleanInstance<'a> {
    pub fn new(
        num_variables: usize,
        constraints: &'a [PseudoBooleanConstraint],
        objective: &'a Objective,
    ) -> PseudoBooleanInstance<'a> {
        PseudoBooleanInstance {
            num_variables,
            constraints,
            objective,
        }
    }

    /// The variables of the instance are the indices `1..=num_variables`.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn constraints(&self) -> &'a [PseudoBooleanConstraint] {
        self.constraints
    }

    /// The objective to minimise.
    pub fn objective(&self) -> &'a Objective {
        self.objective
    }

    /// Whether `assignment` satisfies every constraint of the instance.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied_by(assignment))
    }
}

/// The terminal result of [`PseudoBooleanSolver::minimise`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverOutput {
    /// No assignment satisfies all constraints.
    Infeasible,
    /// An assignment to every variable of the instance which satisfies all constraints and
    /// minimises the objective, together with its cost.
    Optimal { assignment: Assignment, cost: u64 },
}

/// An engine which minimises the objective of a [`PseudoBooleanInstance`].
pub trait PseudoBooleanSolver {
    type Error: std::error::Error + 'static;

    /// Finds an optimal assignment for `instance`. `verbose` is the verbosity requested by the
    /// user of the [`Problem`](crate::Problem); what it means is up to the solver.
    fn minimise(
        &mut self,
        instance: PseudoBooleanInstance<'_>,
        verbose: bool,
    ) -> Result<SolverOutput, Self::Error>;
}
