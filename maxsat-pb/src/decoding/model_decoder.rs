use log::debug;

use super::Model;
use crate::api::MaxSatResult;
use crate::basic_types::Assignment;
use crate::basic_types::ConstraintId;
use crate::basic_types::DecodingError;
use crate::encoding::naming;
use crate::encoding::naming::VariableRole;
use crate::encoding::Objective;
use crate::encoding::PseudoBooleanConstraint;
use crate::encoding::VariableRegistry;
use crate::maxsat_assert_moderate;
use crate::solver::SolverOutput;

/// Translates the output of a solver back into the terms of the input problem.
#[derive(Clone, Copy, Debug)]
pub struct ModelDecoder<'a> {
    registry: &'a VariableRegistry,
    constraints: &'a [PseudoBooleanConstraint],
    objective: &'a Objective,
}

impl<'a> ModelDecoder<'a> {
    pub fn new(
        registry: &'a VariableRegistry,
        constraints: &'a [PseudoBooleanConstraint],
        objective: &'a Objective,
    ) -> ModelDecoder<'a> {
        ModelDecoder {
            registry,
            constraints,
            objective,
        }
    }

    /// Decodes `output`.
    ///
    /// An optimal assignment is walked in registry order: domain variables end up in the
    /// [`Model`], and every blocking variable which is true adds its constraint to the broken
    /// constraints. Since blocking variables are registered while compiling the constraints in
    /// input order, the broken constraints are sorted by ascending id.
    ///
    /// Any output which the encoding could not have produced is reported as a [`DecodingError`].
    pub fn decode(&self, output: SolverOutput) -> Result<MaxSatResult, DecodingError> {
        let (assignment, cost) = match output {
            SolverOutput::Infeasible => return Ok(MaxSatResult::Infeasible),
            SolverOutput::Optimal { assignment, cost } => (assignment, cost),
        };

        self.check_assignment(&assignment, cost)?;

        let mut model = Model::default();
        let mut broken = Vec::new();

        for ((variable, name), (_, value)) in self.registry.iter().zip(assignment.iter()) {
            match naming::classify(name) {
                VariableRole::Domain(domain_name) => model.insert(domain_name.to_owned(), value),
                VariableRole::Blocking(constraint) => {
                    let is_blocking_variable_of_constraint = self
                        .objective
                        .blocking_variable(variable)
                        .is_some_and(|blocking| blocking.constraint == constraint);
                    if !is_blocking_variable_of_constraint {
                        return Err(DecodingError::UnexpectedBlockingVariable {
                            variable,
                            constraint,
                        });
                    }

                    if value {
                        broken.push(constraint);
                    }
                }
                VariableRole::MalformedBlocking => {
                    return Err(DecodingError::MalformedBlockingName {
                        variable,
                        name: name.to_owned(),
                    })
                }
                VariableRole::Unknown => {
                    return Err(DecodingError::UnknownVariableName {
                        variable,
                        name: name.to_owned(),
                    })
                }
            }
        }

        maxsat_assert_moderate!(
            broken.windows(2).all(|pair| pair[0] < pair[1]),
            "broken constraints are reported by ascending id"
        );
        debug!(
            "Decoded a model of {} variables with cost {} and {} broken constraints",
            model.len(),
            cost,
            broken.len()
        );

        Ok(MaxSatResult::Optimal {
            model,
            cost,
            broken,
        })
    }

    /// Checks that the assignment is one the solver may return for the compiled problem.
    fn check_assignment(&self, assignment: &Assignment, cost: u64) -> Result<(), DecodingError> {
        if assignment.num_variables() != self.registry.num_variables() {
            return Err(DecodingError::AssignmentLengthMismatch {
                expected: self.registry.num_variables(),
                actual: assignment.num_variables(),
            });
        }

        if let Some(position) = self
            .constraints
            .iter()
            .position(|constraint| !constraint.is_satisfied_by(assignment))
        {
            return Err(DecodingError::UnsatisfiedConstraint {
                constraint: ConstraintId::new(position),
            });
        }

        let recomputed = self.objective.evaluate(assignment);
        if recomputed != cost {
            return Err(DecodingError::InconsistentCost {
                reported: cost,
                recomputed,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Literal;
    use crate::basic_types::Variable;
    use crate::encoding::BlockingVariable;

    struct Fixture {
        registry: VariableRegistry,
        constraints: Vec<PseudoBooleanConstraint>,
        objective: Objective,
    }

    impl Fixture {
        /// `VAR_a` (1), `VAR_b` (2) and `BLOCK_1` (3) with weight 5, without constraints.
        fn new() -> Fixture {
            let mut registry = VariableRegistry::default();
            let _ = registry.register("VAR_a");
            let _ = registry.register("VAR_b");
            let blocking = registry.register("BLOCK_1");

            let mut objective = Objective::default();
            objective
                .add_blocking_variable(BlockingVariable {
                    variable: blocking,
                    constraint: ConstraintId::new(1),
                    weight: 5,
                })
                .unwrap();

            Fixture {
                registry,
                constraints: Vec::new(),
                objective,
            }
        }

        fn decode(&self, output: SolverOutput) -> Result<MaxSatResult, DecodingError> {
            ModelDecoder::new(&self.registry, &self.constraints, &self.objective).decode(output)
        }
    }

    fn optimal(values: &[bool], cost: u64) -> SolverOutput {
        SolverOutput::Optimal {
            assignment: Assignment::from_values(values.iter().copied()),
            cost,
        }
    }

    #[test]
    fn infeasible_output_has_no_model() {
        let result = Fixture::new().decode(SolverOutput::Infeasible).unwrap();

        assert_eq!(result.into_parts(), (None, -1, Vec::new()));
    }

    #[test]
    fn domain_variables_are_stripped_of_their_prefix() {
        let result = Fixture::new()
            .decode(optimal(&[true, false, false], 0))
            .unwrap();

        let model = result.model().unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.get("a"), Some(true));
        assert_eq!(model.get("b"), Some(false));
        assert_eq!(model.get("BLOCK_1"), None);
        assert!(result.broken_constraints().is_empty());
    }

    #[test]
    fn true_blocking_variables_are_broken_constraints() {
        let result = Fixture::new()
            .decode(optimal(&[false, false, true], 5))
            .unwrap();

        assert_eq!(result.cost(), 5);
        assert_eq!(result.broken_constraints(), &[ConstraintId::new(1)]);
    }

    #[test]
    fn unknown_names_are_an_internal_error() {
        let mut fixture = Fixture::new();
        let intruder = fixture.registry.register("intruder");

        let result = fixture.decode(optimal(&[false, false, false, true], 0));

        assert_eq!(
            result,
            Err(DecodingError::UnknownVariableName {
                variable: intruder,
                name: "intruder".to_owned(),
            })
        );
    }

    #[test]
    fn malformed_blocking_names_are_an_internal_error() {
        let mut fixture = Fixture::new();
        let _ = fixture.registry.register("BLOCK_one");

        let result = fixture.decode(optimal(&[false, false, false, false], 0));

        assert!(matches!(
            result,
            Err(DecodingError::MalformedBlockingName { .. })
        ));
    }

    #[test]
    fn blocking_names_without_objective_term_are_an_internal_error() {
        let mut fixture = Fixture::new();
        let stray = fixture.registry.register("BLOCK_7");

        let result = fixture.decode(optimal(&[false, false, false, false], 0));

        assert_eq!(
            result,
            Err(DecodingError::UnexpectedBlockingVariable {
                variable: stray,
                constraint: ConstraintId::new(7),
            })
        );
    }

    #[test]
    fn assignment_has_to_cover_the_registry() {
        let result = Fixture::new().decode(optimal(&[true, true], 0));

        assert_eq!(
            result,
            Err(DecodingError::AssignmentLengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn reported_cost_has_to_match_the_assignment() {
        let result = Fixture::new().decode(optimal(&[false, false, true], 0));

        assert_eq!(
            result,
            Err(DecodingError::InconsistentCost {
                reported: 0,
                recomputed: 5,
            })
        );
    }

    #[test]
    fn assignment_has_to_satisfy_the_constraints() {
        let mut fixture = Fixture::new();
        fixture.constraints.push(PseudoBooleanConstraint::new(
            vec![Literal::positive(Variable::new(1).unwrap())],
            None,
            1,
        ));

        let result = fixture.decode(optimal(&[false, true, false], 0));

        assert_eq!(
            result,
            Err(DecodingError::UnsatisfiedConstraint {
                constraint: ConstraintId::new(0),
            })
        );
    }
}
