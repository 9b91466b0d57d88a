//! # maxsat-pb
//! Solves weighted partial MaxSAT problems by compiling them into pseudo-Boolean optimisation
//! problems, and translating the optimal assignment back into named variables and broken
//! constraints.
//!
//! A problem consists of *hard* constraints, which have to hold, and *soft* constraints, which
//! may be broken at the cost of their weight. Every constraint is a linear inequality over
//! literals of named boolean variables; without explicit coefficients it is a clause or a
//! cardinality constraint.
//!
//! Each soft constraint receives a fresh *blocking* variable which is added to its left-hand
//! side, so that setting the blocking variable to true switches the constraint off. The objective
//! is the total weight of the blocking variables which are true. Finding an optimal assignment is
//! left to an implementation of [`solver::PseudoBooleanSolver`]; the crate ships the
//! [`solver::ExhaustiveSolver`] for small problems.
//!
//! # Using maxsat-pb
//! ```rust
//! # use maxsat_pb::not;
//! # use maxsat_pb::var;
//! # use maxsat_pb::Constraint;
//! # use maxsat_pb::ConstraintId;
//! # use maxsat_pb::MaxSatResult;
//! # use maxsat_pb::Problem;
//! # use maxsat_pb::solver::ExhaustiveSolver;
//! // `a` or `b` has to hold, and both `a` and `b` would rather be false.
//! let problem = Problem::new([
//!     Constraint::hard_clause([var("a"), var("b")]),
//!     Constraint::weighted_clause([not("a")], 5),
//!     Constraint::weighted_clause([not("b")], 2),
//! ])
//! .expect("the constraints are well-formed");
//!
//! let result = problem
//!     .solve(&mut ExhaustiveSolver::default())
//!     .expect("the problem is small enough to enumerate");
//!
//! // Breaking the cheaper soft constraint is optimal.
//! let (model, cost, broken) = result.into_parts();
//! let model = model.expect("the hard constraint can be satisfied");
//! assert_eq!(model.get("a"), Some(false));
//! assert_eq!(model.get("b"), Some(true));
//! assert_eq!(cost, 2);
//! assert_eq!(broken, vec![ConstraintId::new(2)]);
//! ```
//!
//! When the hard constraints contradict each other there is no model:
//! ```rust
//! # use maxsat_pb::not;
//! # use maxsat_pb::var;
//! # use maxsat_pb::Constraint;
//! # use maxsat_pb::Problem;
//! # use maxsat_pb::solver::ExhaustiveSolver;
//! let problem = Problem::new([
//!     Constraint::hard_clause([var("x")]),
//!     Constraint::hard_clause([not("x")]),
//! ])
//! .unwrap();
//!
//! let result = problem.solve(&mut ExhaustiveSolver::default()).unwrap();
//! assert!(result.is_infeasible());
//! assert_eq!(result.cost(), -1);
//! ```
//!
//! The compiled problem can be inspected in the OPB format with [`Problem::to_opb_string`].

#[doc(hidden)]
pub mod asserts;

mod api;
mod basic_types;

pub mod containers;
pub mod decoding;
pub mod encoding;
pub mod opb;
pub mod options;
pub mod solver;

pub use api::*;
pub use basic_types::*;
pub use decoding::Model;
