use super::Literal;
use super::Variable;
use crate::containers::KeyedVec;

/// A complete truth assignment over the variables of a compiled problem, as produced by a
/// [`PseudoBooleanSolver`](crate::solver::PseudoBooleanSolver).
///
/// The value at position `i` belongs to the variable with index `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: KeyedVec<Variable, bool>,
}

impl Assignment {
    pub fn from_values(values: impl IntoIterator<Item = bool>) -> Assignment {
        values.into_iter().collect()
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// The value of `variable`, or [`None`] if the assignment does not cover it.
    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.values.get(variable).copied()
    }

    /// Evaluates `literal` under this assignment.
    pub fn evaluate(&self, literal: Literal) -> Option<bool> {
        self.value(literal.variable())
            .map(|value| value == literal.is_positive())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values
            .iter_with_keys()
            .map(|(variable, &value)| (variable, value))
    }
}

impl FromIterator<bool> for Assignment {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut values = KeyedVec::default();
        for value in iter {
            let _ = values.push(value);
        }

        Assignment { values }
    }
}
