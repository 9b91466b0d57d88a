//! Shared utilities for the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use maxsat_pb::Constraint;
use maxsat_pb::ConstraintId;
use maxsat_pb::Model;

/// Installs a logger which is captured by the test harness. Safe to call from every test.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Whether `constraint` holds under `model`, ignoring its weight.
///
/// # Panics
/// If the model does not assign a variable of the constraint.
pub(crate) fn holds(constraint: &Constraint, model: &Model) -> bool {
    let lhs: i64 = constraint
        .literals
        .iter()
        .enumerate()
        .filter(|(_, literal)| {
            let value = model
                .get(literal.name())
                .unwrap_or_else(|| panic!("'{}' is not assigned", literal.name()));
            value != literal.is_negated()
        })
        .map(|(index, _)| {
            constraint
                .coefficients
                .as_ref()
                .map_or(1, |coefficients| coefficients[index])
        })
        .sum();

    lhs >= constraint.at_least
}

/// The total weight of the constraints with the given ids.
pub(crate) fn weight_of(constraints: &[Constraint], ids: &[ConstraintId]) -> u64 {
    ids.iter()
        .filter_map(|id| constraints[id.position()].weight.soft_weight())
        .sum()
}

/// The minimum cost over all assignments to `names` which satisfy the hard constraints, or
/// [`None`] if there is no such assignment. Computed without the encoding, by trying every
/// assignment to the domain variables.
pub(crate) fn brute_force_optimum(constraints: &[Constraint], names: &[&str]) -> Option<u64> {
    assert!(names.len() < 16, "too many variables to enumerate");

    (0..1_u32 << names.len())
        .filter_map(|code| {
            let model = names
                .iter()
                .enumerate()
                .map(|(bit, name)| ((*name).to_owned(), (code >> bit) & 1 == 1))
                .collect::<Model>();

            let mut cost = 0;
            for constraint in constraints {
                if holds(constraint, &model) {
                    continue;
                }

                match constraint.weight.soft_weight() {
                    Some(weight) => cost += weight,
                    None => return None,
                }
            }
            Some(cost)
        })
        .min()
}
