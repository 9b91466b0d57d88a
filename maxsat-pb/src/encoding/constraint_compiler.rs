use log::trace;
use log::warn;

use super::naming;
use super::BlockingVariable;
use super::Objective;
use super::PseudoBooleanConstraint;
use super::VariableRegistry;
use crate::api::Constraint;
use crate::basic_types::ConstraintId;
use crate::basic_types::EncodingError;
use crate::basic_types::Literal;
use crate::basic_types::Variable;
use crate::options::SoftCardinalityPolicy;

/// The output of compiling a sequence of constraints.
#[derive(Debug)]
pub(crate) struct CompiledProblem {
    pub(crate) registry: VariableRegistry,
    pub(crate) constraints: Vec<PseudoBooleanConstraint>,
    pub(crate) objective: Objective,
}

/// Compiles input [`Constraint`]s into [`PseudoBooleanConstraint`]s, one at a time and in input
/// order.
#[derive(Debug)]
pub(crate) struct ConstraintCompiler {
    soft_cardinality: SoftCardinalityPolicy,
    registry: VariableRegistry,
    constraints: Vec<PseudoBooleanConstraint>,
    objective: Objective,
}

impl ConstraintCompiler {
    pub(crate) fn new(soft_cardinality: SoftCardinalityPolicy) -> ConstraintCompiler {
        ConstraintCompiler {
            soft_cardinality,
            registry: VariableRegistry::default(),
            constraints: Vec::new(),
            objective: Objective::default(),
        }
    }

    /// Compiles the constraint with the given id. Ids have to be handed in ascending order, as
    /// the blocking variables are allocated in the order the soft constraints are compiled.
    pub(crate) fn compile(
        &mut self,
        id: ConstraintId,
        constraint: &Constraint,
    ) -> Result<(), EncodingError> {
        if let Some(coefficients) = &constraint.coefficients {
            if coefficients.len() != constraint.literals.len() {
                return Err(EncodingError::CoefficientCountMismatch {
                    constraint: id,
                    num_literals: constraint.literals.len(),
                    num_coefficients: coefficients.len(),
                });
            }
        }

        let soft_weight = constraint.weight.soft_weight();
        if soft_weight.is_some()
            && !blocking_literal_relaxes(constraint.coefficients.as_deref(), constraint.at_least)
        {
            match self.soft_cardinality {
                SoftCardinalityPolicy::Relax => warn!(
                    "Soft constraint {id} ({constraint}) is not fully relaxed by its blocking literal"
                ),
                SoftCardinalityPolicy::Reject => {
                    return Err(match constraint.coefficients {
                        Some(_) => EncodingError::UnsupportedSoftNegativeCoefficients {
                            constraint: id,
                        },
                        None => EncodingError::UnsupportedSoftCardinality {
                            constraint: id,
                            at_least: constraint.at_least,
                        },
                    })
                }
            }
        }

        let mut literals = constraint
            .literals
            .iter()
            .map(|literal| {
                let variable = self
                    .registry
                    .register(&naming::domain_variable_name(literal.name()));
                Literal::new(variable, !literal.is_negated())
            })
            .collect::<Vec<_>>();
        let mut coefficients = constraint.coefficients.clone();

        if let Some(weight) = soft_weight {
            let variable = self
                .registry
                .register(&naming::blocking_variable_name(id));
            self.objective.add_blocking_variable(BlockingVariable {
                variable,
                constraint: id,
                weight,
            })?;

            attach_blocking_literal(
                &mut literals,
                &mut coefficients,
                variable,
                constraint.at_least,
            );
        }

        let compiled = PseudoBooleanConstraint::new(literals, coefficients, constraint.at_least);
        trace!("Compiled constraint {id} ({constraint}) into {compiled:?}");
        self.constraints.push(compiled);

        Ok(())
    }

    pub(crate) fn finish(self) -> CompiledProblem {
        CompiledProblem {
            registry: self.registry,
            constraints: self.constraints,
            objective: self.objective,
        }
    }
}

/// Appends the blocking literal of a soft constraint to its left-hand side.
///
/// With explicit coefficients the blocking literal is given the threshold as coefficient, which
/// satisfies the constraint by itself unless other coefficients are negative. Without
/// coefficients the blocking literal counts for 1, which only satisfies the constraint by itself
/// when the threshold is at most 1 (see [`blocking_literal_relaxes`]).
fn attach_blocking_literal(
    literals: &mut Vec<Literal>,
    coefficients: &mut Option<Vec<i64>>,
    blocking_variable: Variable,
    at_least: i64,
) {
    literals.push(Literal::positive(blocking_variable));

    if let Some(coefficients) = coefficients {
        coefficients.push(at_least);
    }
}

/// Whether [`attach_blocking_literal`] produces a constraint which is satisfied as soon as the
/// blocking literal is true, whatever the values of the other literals.
fn blocking_literal_relaxes(coefficients: Option<&[i64]>, at_least: i64) -> bool {
    match coefficients {
        // The smallest left-hand side with the blocking literal true is `at_least` plus the sum
        // of the negative coefficients.
        Some(coefficients) => coefficients.iter().all(|&coefficient| coefficient >= 0),
        None => at_least <= 1,
    }
}
