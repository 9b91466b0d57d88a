#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::convert::Infallible;

use helpers::init_logging;
use maxsat_pb::not;
use maxsat_pb::options::ProblemOptions;
use maxsat_pb::solver::PseudoBooleanInstance;
use maxsat_pb::solver::PseudoBooleanSolver;
use maxsat_pb::solver::SolverOutput;
use maxsat_pb::var;
use maxsat_pb::Assignment;
use maxsat_pb::Constraint;
use maxsat_pb::ConstraintId;
use maxsat_pb::DecodingError;
use maxsat_pb::Problem;
use maxsat_pb::SolveError;

/// A solver which returns a fixed output, and remembers what it was asked.
#[derive(Debug)]
struct ScriptedSolver {
    output: SolverOutput,
    requested_verbosity: Option<bool>,
    num_variables: Option<usize>,
}

impl ScriptedSolver {
    fn returning(output: SolverOutput) -> ScriptedSolver {
        ScriptedSolver {
            output,
            requested_verbosity: None,
            num_variables: None,
        }
    }
}

impl PseudoBooleanSolver for ScriptedSolver {
    type Error = Infallible;

    fn minimise(
        &mut self,
        instance: PseudoBooleanInstance<'_>,
        verbose: bool,
    ) -> Result<SolverOutput, Self::Error> {
        self.requested_verbosity = Some(verbose);
        self.num_variables = Some(instance.num_variables());
        Ok(self.output.clone())
    }
}

/// A solver which runs out of time.
#[derive(Debug, Clone, Copy)]
struct TimeoutSolver;

impl PseudoBooleanSolver for TimeoutSolver {
    type Error = std::io::Error;

    fn minimise(
        &mut self,
        _: PseudoBooleanInstance<'_>,
        _: bool,
    ) -> Result<SolverOutput, Self::Error> {
        Err(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "time budget exhausted",
        ))
    }
}

/// `VAR_a` (1), `VAR_b` (2) and `BLOCK_1` (3) with weight 5.
fn problem() -> Problem {
    Problem::new([
        Constraint::hard_clause([var("a"), var("b")]),
        Constraint::weighted_clause([not("a")], 5),
    ])
    .unwrap()
}

fn optimal(values: &[bool], cost: u64) -> SolverOutput {
    SolverOutput::Optimal {
        assignment: Assignment::from_values(values.iter().copied()),
        cost,
    }
}

#[test]
fn verbosity_is_forwarded_to_the_solver() {
    init_logging();
    let mut problem = Problem::with_options(
        [Constraint::hard_clause([var("a")])],
        ProblemOptions {
            verbose: true,
            ..Default::default()
        },
    )
    .unwrap();
    let mut solver = ScriptedSolver::returning(optimal(&[true], 0));

    let _ = problem.solve(&mut solver).unwrap();
    assert_eq!(solver.requested_verbosity, Some(true));

    problem.set_verbose(false);
    let _ = problem.solve(&mut solver).unwrap();
    assert_eq!(solver.requested_verbosity, Some(false));
}

#[test]
fn solver_sees_every_registered_variable() {
    init_logging();
    let mut solver = ScriptedSolver::returning(SolverOutput::Infeasible);

    let result = problem().solve(&mut solver).unwrap();

    assert!(result.is_infeasible());
    assert_eq!(solver.num_variables, Some(3));
}

#[test]
fn broken_constraints_follow_the_blocking_variables() {
    init_logging();
    let mut solver = ScriptedSolver::returning(optimal(&[true, false, true], 5));

    let result = problem().solve(&mut solver).unwrap();

    assert_eq!(result.cost(), 5);
    assert_eq!(result.broken_constraints(), &[ConstraintId::new(1)]);
    assert_eq!(result.model().unwrap().get("a"), Some(true));
}

#[test]
fn solver_errors_are_passed_on() {
    init_logging();

    let error = problem().solve(&mut TimeoutSolver).unwrap_err();

    match error {
        SolveError::Solver(error) => assert_eq!(error.kind(), std::io::ErrorKind::TimedOut),
        SolveError::Decoding(error) => panic!("unexpected decoding error {error}"),
    }
}

#[test]
fn short_assignments_are_an_internal_error() {
    init_logging();
    let mut solver = ScriptedSolver::returning(optimal(&[true, false], 0));

    let error = problem().solve(&mut solver).unwrap_err();

    assert!(matches!(
        error,
        SolveError::Decoding(DecodingError::AssignmentLengthMismatch {
            expected: 3,
            actual: 2,
        })
    ));
}

#[test]
fn wrong_costs_are_an_internal_error() {
    init_logging();
    let mut solver = ScriptedSolver::returning(optimal(&[true, false, true], 1));

    let error = problem().solve(&mut solver).unwrap_err();

    assert!(matches!(
        error,
        SolveError::Decoding(DecodingError::InconsistentCost {
            reported: 1,
            recomputed: 5,
        })
    ));
}

#[test]
fn assignments_violating_hard_constraints_are_an_internal_error() {
    init_logging();
    let mut solver = ScriptedSolver::returning(optimal(&[false, false, false], 0));

    let error = problem().solve(&mut solver).unwrap_err();

    assert!(matches!(
        error,
        SolveError::Decoding(DecodingError::UnsatisfiedConstraint { constraint })
            if constraint == ConstraintId::new(0)
    ));
}
