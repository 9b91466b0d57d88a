//! Compilation of MaxSAT constraints into a pseudo-Boolean optimisation problem.
//!
//! The [`VariableRegistry`] names every variable, the constraint compiler turns each input
//! constraint into a [`PseudoBooleanConstraint`] (adding a blocking literal to the soft ones),
//! and the [`Objective`] collects the weights of the blocking variables.
mod constraint_compiler;
mod cost_model;
pub mod naming;
mod pseudo_boolean_constraint;
mod variable_registry;

pub(crate) use constraint_compiler::*;
pub use cost_model::*;
pub use pseudo_boolean_constraint::*;
pub use variable_registry::*;
