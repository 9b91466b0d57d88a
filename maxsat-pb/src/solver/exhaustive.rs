use std::time::Instant;

use log::debug;
use log::info;
use thiserror::Error;

use super::PseudoBooleanInstance;
use super::PseudoBooleanSolver;
use super::SolverOutput;
use crate::basic_types::Assignment;

/// A [`PseudoBooleanSolver`] which tries every assignment.
///
/// The assignments are enumerated as binary numbers in which variable `i` is bit `i - 1`, and the
/// first satisfying assignment of minimum cost in that order is returned. This makes the result
/// fully deterministic, which is what it is meant for: checking small instances and testing the
/// encoding. The number of variables is bounded by [`ExhaustiveSolver::max_variables`].
#[derive(Clone, Copy, Debug)]
pub struct ExhaustiveSolver {
    max_variables: usize,
}

impl ExhaustiveSolver {
    /// Instances with more variables than this are refused by default.
    pub const DEFAULT_MAX_VARIABLES: usize = 20;
    /// The enumeration counts in a `u64`.
    const HARD_MAX_VARIABLES: usize = 63;

    /// Creates a solver which refuses instances with more than `max_variables` variables. The
    /// limit is capped at 63.
    pub fn with_max_variables(max_variables: usize) -> ExhaustiveSolver {
        ExhaustiveSolver {
            max_variables: max_variables.min(Self::HARD_MAX_VARIABLES),
        }
    }

    pub fn max_variables(&self) -> usize {
        self.max_variables
    }
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        ExhaustiveSolver::with_max_variables(Self::DEFAULT_MAX_VARIABLES)
    }
}

/// Errors of the [`ExhaustiveSolver`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExhaustiveSolverError {
    #[error("the instance has {num_variables} variables, but at most {max_variables} are enumerated")]
    TooManyVariables {
        num_variables: usize,
        max_variables: usize,
    },
}

impl PseudoBooleanSolver for ExhaustiveSolver {
    type Error = ExhaustiveSolverError;

    fn minimise(
        &mut self,
        instance: PseudoBooleanInstance<'_>,
        verbose: bool,
    ) -> Result<SolverOutput, Self::Error> {
        let num_variables = instance.num_variables();
        if num_variables > self.max_variables {
            return Err(ExhaustiveSolverError::TooManyVariables {
                num_variables,
                max_variables: self.max_variables,
            });
        }

        let process_time = Instant::now();
        let mut best: Option<(Assignment, u64)> = None;

        for code in 0..(1_u64 << num_variables) {
            let assignment = (0..num_variables)
                .map(|bit| (code >> bit) & 1 == 1)
                .collect::<Assignment>();

            if !instance.is_satisfied_by(&assignment) {
                continue;
            }

            let cost = instance.objective().evaluate(&assignment);
            if best
                .as_ref()
                .is_some_and(|&(_, best_cost)| best_cost <= cost)
            {
                continue;
            }

            if verbose {
                info!(
                    "Current objective is {} after {} seconds ({} ms)",
                    cost,
                    process_time.elapsed().as_secs(),
                    process_time.elapsed().as_millis(),
                );
            } else {
                debug!("Current objective is {cost}");
            }

            best = Some((assignment, cost));
            if cost == 0 {
                break;
            }
        }

        Ok(match best {
            Some((assignment, cost)) => SolverOutput::Optimal { assignment, cost },
            None => SolverOutput::Infeasible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Literal;
    use crate::encoding::Objective;
    use crate::encoding::PseudoBooleanConstraint;

    fn clause(codes: &[i32]) -> PseudoBooleanConstraint {
        PseudoBooleanConstraint::new(
            codes
                .iter()
                .map(|&code| Literal::from_dimacs(code).unwrap())
                .collect(),
            None,
            1,
        )
    }

    #[test]
    fn too_many_variables_are_refused() {
        let objective = Objective::default();
        let instance = PseudoBooleanInstance::new(4, &[], &objective);

        let result = ExhaustiveSolver::with_max_variables(3).minimise(instance, false);

        assert_eq!(
            result,
            Err(ExhaustiveSolverError::TooManyVariables {
                num_variables: 4,
                max_variables: 3,
            })
        );
    }

    #[test]
    fn contradicting_unit_clauses_are_infeasible() {
        let objective = Objective::default();
        let constraints = [clause(&[1]), clause(&[-1])];
        let instance = PseudoBooleanInstance::new(1, &constraints, &objective);

        let result = ExhaustiveSolver::default().minimise(instance, false);

        assert_eq!(result, Ok(SolverOutput::Infeasible));
    }

    #[test]
    fn first_satisfying_assignment_is_returned_without_objective() {
        let objective = Objective::default();
        let constraints = [clause(&[1, 2]), clause(&[-1])];
        let instance = PseudoBooleanInstance::new(2, &constraints, &objective);

        let result = ExhaustiveSolver::default().minimise(instance, true);

        assert_eq!(
            result,
            Ok(SolverOutput::Optimal {
                assignment: Assignment::from_values([false, true]),
                cost: 0,
            })
        );
    }

    #[test]
    fn empty_instance_has_the_empty_assignment() {
        let objective = Objective::default();
        let instance = PseudoBooleanInstance::new(0, &[], &objective);

        let result = ExhaustiveSolver::default().minimise(instance, false);

        assert_eq!(
            result,
            Ok(SolverOutput::Optimal {
                assignment: Assignment::default(),
                cost: 0,
            })
        );
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(ExhaustiveSolver::with_max_variables(100).max_variables(), 63);
    }
}
