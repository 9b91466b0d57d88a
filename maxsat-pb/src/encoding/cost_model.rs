use crate::basic_types::Assignment;
use crate::basic_types::ConstraintId;
use crate::basic_types::EncodingError;
use crate::basic_types::Literal;
use crate::basic_types::Variable;
use crate::containers::HashMap;

/// A literal together with the weight it adds to the objective when it is true.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightedLiteral {
    pub literal: Literal,
    pub weight: u64,
}

/// The synthetic variable which, when true, disables a soft constraint at the cost of its weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockingVariable {
    pub variable: Variable,
    pub constraint: ConstraintId,
    pub weight: u64,
}

/// The objective to minimise: the total weight of the blocking variables which are true.
///
/// Terms are kept in the order in which the soft constraints were compiled, i.e. by ascending
/// constraint id.
#[derive(Clone, Debug, Default)]
pub struct Objective {
    blocking_variables: Vec<BlockingVariable>,
    by_variable: HashMap<Variable, usize>,
    by_constraint: HashMap<ConstraintId, usize>,
    max_cost: u64,
}

impl Objective {
    /// Adds a blocking variable to the objective and its weight to the cost capacity.
    pub(crate) fn add_blocking_variable(
        &mut self,
        blocking_variable: BlockingVariable,
    ) -> Result<(), EncodingError> {
        // Costs are also reported as signed integers, so the capacity has to fit an i64.
        let max_cost = self
            .max_cost
            .checked_add(blocking_variable.weight)
            .filter(|&max_cost| i64::try_from(max_cost).is_ok())
            .ok_or(EncodingError::CostCapacityOverflow {
                constraint: blocking_variable.constraint,
            })?;

        let position = self.blocking_variables.len();
        self.blocking_variables.push(blocking_variable);
        let _ = self
            .by_variable
            .insert(blocking_variable.variable, position);
        let _ = self
            .by_constraint
            .insert(blocking_variable.constraint, position);
        self.max_cost = max_cost;

        Ok(())
    }

    /// The sum of the weights of all soft constraints; no assignment can cost more.
    pub fn max_cost(&self) -> u64 {
        self.max_cost
    }

    pub fn len(&self) -> usize {
        self.blocking_variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocking_variables.is_empty()
    }

    pub fn blocking_variables(&self) -> &[BlockingVariable] {
        &self.blocking_variables
    }

    /// The blocking variable information for `variable`, or [`None`] if it is not a blocking
    /// variable.
    pub fn blocking_variable(&self, variable: Variable) -> Option<&BlockingVariable> {
        self.by_variable
            .get(&variable)
            .map(|&position| &self.blocking_variables[position])
    }

    /// The blocking variable of the soft constraint `constraint`, or [`None`] if the constraint
    /// is hard.
    pub fn blocking_variable_for(&self, constraint: ConstraintId) -> Option<&BlockingVariable> {
        self.by_constraint
            .get(&constraint)
            .map(|&position| &self.blocking_variables[position])
    }

    pub fn terms(&self) -> impl Iterator<Item = WeightedLiteral> + '_ {
        self.blocking_variables
            .iter()
            .map(|blocking_variable| WeightedLiteral {
                literal: Literal::positive(blocking_variable.variable),
                weight: blocking_variable.weight,
            })
    }

    /// The literals of the objective; parallel to [`Objective::weights`].
    pub fn literals(&self) -> Vec<Literal> {
        self.terms().map(|term| term.literal).collect()
    }

    /// The weights of the objective; parallel to [`Objective::literals`].
    pub fn weights(&self) -> Vec<u64> {
        self.terms().map(|term| term.weight).collect()
    }

    /// The cost of `assignment`: the total weight of the blocking variables it sets to true.
    pub fn evaluate(&self, assignment: &Assignment) -> u64 {
        self.terms()
            .filter(|term| assignment.evaluate(term.literal) == Some(true))
            .map(|term| term.weight)
            .sum()
    }
}
