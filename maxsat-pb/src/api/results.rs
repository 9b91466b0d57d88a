use thiserror::Error;

use crate::basic_types::ConstraintId;
use crate::basic_types::DecodingError;
use crate::decoding::Model;
#[cfg(doc)]
use crate::Problem;

/// The outcome of [`Problem::solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaxSatResult {
    /// An optimal model was found.
    Optimal {
        /// The values of the domain variables.
        model: Model,
        /// The total weight of the broken soft constraints.
        cost: u64,
        /// The soft constraints which are violated by the model, by ascending id.
        broken: Vec<ConstraintId>,
    },
    /// The hard constraints cannot be satisfied together.
    Infeasible,
}

impl MaxSatResult {
    /// The cost returned for infeasible problems by [`MaxSatResult::cost`].
    pub const INFEASIBLE_COST: i64 = -1;

    pub fn is_infeasible(&self) -> bool {
        matches!(self, MaxSatResult::Infeasible)
    }

    /// The optimal model, or [`None`] if the problem is infeasible.
    pub fn model(&self) -> Option<&Model> {
        match self {
            MaxSatResult::Optimal { model, .. } => Some(model),
            MaxSatResult::Infeasible => None,
        }
    }

    /// The cost of the optimal model, or [`MaxSatResult::INFEASIBLE_COST`] if the problem is
    /// infeasible.
    ///
    /// # Panics
    /// If the cost of a [`MaxSatResult::Optimal`] does not fit in an `i64`. Results returned by
    /// [`Problem::solve`] never do, since the total weight of a problem is bounded by `i64::MAX`.
    pub fn cost(&self) -> i64 {
        match self {
            MaxSatResult::Optimal { cost, .. } => {
                i64::try_from(*cost).expect("the cost capacity of a problem fits an i64")
            }
            MaxSatResult::Infeasible => Self::INFEASIBLE_COST,
        }
    }

    /// The ids of the broken soft constraints by ascending id; empty if the problem is infeasible.
    pub fn broken_constraints(&self) -> &[ConstraintId] {
        match self {
            MaxSatResult::Optimal { broken, .. } => broken,
            MaxSatResult::Infeasible => &[],
        }
    }

    /// Splits the result into the model (absent if infeasible), the cost (-1 if infeasible) and
    /// the broken constraints.
    ///
    /// # Panics
    /// Under the same condition as [`MaxSatResult::cost`].
    pub fn into_parts(self) -> (Option<Model>, i64, Vec<ConstraintId>) {
        let cost = self.cost();
        match self {
            MaxSatResult::Optimal { model, broken, .. } => (Some(model), cost, broken),
            MaxSatResult::Infeasible => (None, cost, Vec::new()),
        }
    }
}

/// Errors which can occur while solving a [`Problem`].
#[derive(Error, Debug)]
pub enum SolveError<E: std::error::Error + 'static> {
    /// The solver failed to produce a terminal result.
    #[error("the solver failed: {0}")]
    Solver(#[source] E),
    /// The solver output could not be decoded; this is a bug in the encoding or in the solver.
    #[error("internal invariant violated while decoding the solver output: {0}")]
    Decoding(#[from] DecodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_result_has_the_sentinel_cost() {
        assert_eq!(MaxSatResult::Infeasible.cost(), -1);
        assert!(MaxSatResult::Infeasible.broken_constraints().is_empty());
    }

    #[test]
    fn largest_representable_cost_is_reported() {
        let result = MaxSatResult::Optimal {
            model: Model::default(),
            cost: i64::MAX as u64,
            broken: vec![ConstraintId::new(0)],
        };

        assert_eq!(result.cost(), i64::MAX);
    }

    #[test]
    #[should_panic(expected = "fits an i64")]
    fn cost_beyond_i64_panics() {
        let result = MaxSatResult::Optimal {
            model: Model::default(),
            cost: u64::MAX,
            broken: Vec::new(),
        };

        let _ = result.cost();
    }
}
