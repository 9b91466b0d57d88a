use crate::basic_types::Assignment;
use crate::basic_types::Literal;
use crate::maxsat_assert_simple;

/// A compiled constraint of the form `sum(coefficients[i] * literals[i]) >= at_least`.
///
/// When the coefficients are absent every literal has coefficient 1, and the constraint is a
/// clause or a cardinality constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PseudoBooleanConstraint {
    literals: Vec<Literal>,
    coefficients: Option<Vec<i64>>,
    at_least: i64,
}

impl PseudoBooleanConstraint {
    pub fn new(
        literals: Vec<Literal>,
        coefficients: Option<Vec<i64>>,
        at_least: i64,
    ) -> PseudoBooleanConstraint {
        if let Some(coefficients) = &coefficients {
            maxsat_assert_simple!(
                coefficients.len() == literals.len(),
                "every literal needs a coefficient"
            );
        }

        PseudoBooleanConstraint {
            literals,
            coefficients,
            at_least,
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn coefficients(&self) -> Option<&[i64]> {
        self.coefficients.as_deref()
    }

    pub fn at_least(&self) -> i64 {
        self.at_least
    }

    /// Whether every literal has the implicit coefficient 1.
    pub fn has_unit_coefficients(&self) -> bool {
        self.coefficients.is_none()
    }

    /// The `(literal, coefficient)` pairs of the left-hand side, with implicit coefficients made
    /// explicit.
    pub fn terms(&self) -> impl Iterator<Item = (Literal, i64)> + '_ {
        self.literals
            .iter()
            .enumerate()
            .map(|(index, &literal)| match &self.coefficients {
                Some(coefficients) => (literal, coefficients[index]),
                None => (literal, 1),
            })
    }

    /// The value of the left-hand side under `assignment`. Literals which the assignment does not
    /// cover count as false.
    ///
    /// The sum is taken in `i128`, so any number of `i64` coefficients can be added without
    /// overflowing.
    pub fn evaluate_lhs(&self, assignment: &Assignment) -> i128 {
        self.terms()
            .filter(|&(literal, _)| assignment.evaluate(literal) == Some(true))
            .map(|(_, coefficient)| i128::from(coefficient))
            .sum()
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.evaluate_lhs(assignment) >= i128::from(self.at_least)
    }
}
