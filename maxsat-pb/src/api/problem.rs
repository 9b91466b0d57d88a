use std::io::Write;

use log::debug;
use log::info;

use super::Constraint;
use super::MaxSatResult;
use super::SolveError;
use crate::basic_types::ConstraintId;
use crate::basic_types::EncodingError;
use crate::basic_types::Variable;
use crate::decoding::ModelDecoder;
use crate::encoding::naming;
use crate::encoding::ConstraintCompiler;
use crate::encoding::Objective;
use crate::encoding::PseudoBooleanConstraint;
use crate::encoding::VariableRegistry;
use crate::maxsat_assert_eq_simple;
use crate::opb::OpbFormat;
use crate::options::ProblemOptions;
use crate::solver::PseudoBooleanInstance;
use crate::solver::PseudoBooleanSolver;

/// A weighted partial MaxSAT problem, compiled into a pseudo-Boolean optimisation problem.
///
/// The problem owns its variables, its compiled constraints and its objective. Apart from the
/// verbosity it cannot be changed after construction, and it can be solved any number of times
/// by any [`PseudoBooleanSolver`].
#[derive(Debug)]
pub struct Problem {
    registry: VariableRegistry,
    constraints: Vec<PseudoBooleanConstraint>,
    objective: Objective,
    verbose: bool,
}

impl Problem {
    /// Compiles `constraints` with the default [`ProblemOptions`]. The id of a constraint is its
    /// position in `constraints`.
    pub fn new(constraints: impl IntoIterator<Item = Constraint>) -> Result<Problem, EncodingError> {
        Problem::with_options(constraints, ProblemOptions::default())
    }

    pub fn with_options(
        constraints: impl IntoIterator<Item = Constraint>,
        options: ProblemOptions,
    ) -> Result<Problem, EncodingError> {
        let mut compiler = ConstraintCompiler::new(options.soft_cardinality);
        for (position, constraint) in constraints.into_iter().enumerate() {
            compiler.compile(ConstraintId::new(position), &constraint)?;
        }
        let compiled = compiler.finish();

        maxsat_assert_eq_simple!(
            compiled.objective.max_cost(),
            compiled
                .objective
                .blocking_variables()
                .iter()
                .map(|blocking| blocking.weight)
                .sum::<u64>()
        );
        debug!(
            "Compiled {} constraints ({} soft) over {} variables with maximum cost {}",
            compiled.constraints.len(),
            compiled.objective.len(),
            compiled.registry.num_variables(),
            compiled.objective.max_cost(),
        );

        Ok(Problem {
            registry: compiled.registry,
            constraints: compiled.constraints,
            objective: compiled.objective,
            verbose: options.verbose,
        })
    }

    /// Makes the solver verbose, or not.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// The compiled constraints; the constraint at position `i` is the compiled form of the input
    /// constraint with id `i`.
    pub fn constraints(&self) -> &[PseudoBooleanConstraint] {
        &self.constraints
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// The total weight of the soft constraints.
    pub fn max_cost(&self) -> u64 {
        self.objective.max_cost()
    }

    /// The variable of the domain variable `name`, or [`None`] if no constraint mentions it.
    pub fn domain_variable(&self, name: &str) -> Option<Variable> {
        self.registry.lookup(&naming::domain_variable_name(name))
    }

    /// The blocking variable of `constraint`, or [`None`] if the constraint is hard.
    pub fn blocking_variable(&self, constraint: ConstraintId) -> Option<Variable> {
        self.objective
            .blocking_variable_for(constraint)
            .map(|blocking| blocking.variable)
    }

    /// The view of the problem which is handed to a [`PseudoBooleanSolver`].
    pub fn instance(&self) -> PseudoBooleanInstance<'_> {
        PseudoBooleanInstance::new(
            self.registry.num_variables(),
            &self.constraints,
            &self.objective,
        )
    }

    pub fn decoder(&self) -> ModelDecoder<'_> {
        ModelDecoder::new(&self.registry, &self.constraints, &self.objective)
    }

    /// Writes the compiled problem to `writer` in the OPB format.
    pub fn write_opb(&self, writer: impl Write) -> std::io::Result<()> {
        self.opb().write(writer)
    }

    /// The compiled problem in the OPB format.
    pub fn to_opb_string(&self) -> String {
        self.opb().to_string()
    }

    fn opb(&self) -> OpbFormat<'_> {
        OpbFormat::new(self.instance(), &self.registry)
    }

    /// Finds an optimal model with `solver`, together with its cost and the ids of the soft
    /// constraints it breaks.
    ///
    /// An infeasible problem is not an error; see [`MaxSatResult::Infeasible`].
    pub fn solve<S: PseudoBooleanSolver>(
        &self,
        solver: &mut S,
    ) -> Result<MaxSatResult, SolveError<S::Error>> {
        let output = solver
            .minimise(self.instance(), self.verbose)
            .map_err(SolveError::Solver)?;

        let result = self.decoder().decode(output)?;

        match &result {
            MaxSatResult::Optimal { cost, broken, .. } => info!(
                "Optimum found with cost {cost} out of {}; {} soft constraints are broken",
                self.max_cost(),
                broken.len()
            ),
            MaxSatResult::Infeasible => info!("The hard constraints are unsatisfiable"),
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::not;
    use crate::api::var;
    use crate::options::SoftCardinalityPolicy;
    use crate::solver::ExhaustiveSolver;

    #[test]
    fn ids_are_input_positions() {
        let problem = Problem::new([
            Constraint::weighted_clause([var("a")], 2),
            Constraint::hard_clause([var("b")]),
            Constraint::weighted_clause([var("c")], 3),
        ])
        .unwrap();

        assert!(problem.blocking_variable(ConstraintId::new(0)).is_some());
        assert!(problem.blocking_variable(ConstraintId::new(1)).is_none());
        assert!(problem.blocking_variable(ConstraintId::new(2)).is_some());
        assert_eq!(problem.num_constraints(), 3);
        assert_eq!(problem.max_cost(), 5);
    }

    #[test]
    fn domain_variables_are_looked_up_by_their_own_name() {
        let problem = Problem::new([Constraint::hard_clause([var("a"), not("b")])]).unwrap();

        assert_eq!(problem.domain_variable("b"), Variable::new(2));
        assert_eq!(problem.domain_variable("c"), None);
    }

    #[test]
    fn verbosity_is_a_toggle() {
        let mut problem = Problem::with_options(
            [Constraint::hard_clause([var("a")])],
            ProblemOptions {
                verbose: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(problem.is_verbose());

        problem.set_verbose(false);
        assert!(!problem.is_verbose());
    }

    #[test]
    fn options_reach_the_compiler() {
        let result = Problem::with_options(
            [Constraint::soft_cardinality([var("a"), var("b")], 2, 1)],
            ProblemOptions {
                soft_cardinality: SoftCardinalityPolicy::Reject,
                ..Default::default()
            },
        );

        assert!(matches!(
            result,
            Err(EncodingError::UnsupportedSoftCardinality { .. })
        ));
    }

    #[test]
    fn solving_twice_gives_independent_models() {
        let problem = Problem::new([Constraint::hard_clause([var("a")])]).unwrap();
        let mut solver = ExhaustiveSolver::default();

        let first = problem.solve(&mut solver).unwrap();
        let second = problem.solve(&mut solver).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.model().unwrap().get("a"), Some(true));
    }
}
