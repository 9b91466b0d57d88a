use itertools::Itertools;

/// A reference to a named domain variable together with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedLiteral {
    name: String,
    negated: bool,
}

impl NamedLiteral {
    pub fn new(name: impl Into<String>, negated: bool) -> NamedLiteral {
        NamedLiteral {
            name: name.into(),
            negated,
        }
    }

    /// The literal which is true when the variable `name` is true.
    pub fn positive(name: impl Into<String>) -> NamedLiteral {
        NamedLiteral::new(name, false)
    }

    /// The literal which is true when the variable `name` is false.
    pub fn negative(name: impl Into<String>) -> NamedLiteral {
        NamedLiteral::new(name, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Shorthand for [`NamedLiteral::positive`].
pub fn var(name: impl Into<String>) -> NamedLiteral {
    NamedLiteral::positive(name)
}

/// Shorthand for [`NamedLiteral::negative`].
pub fn not(name: impl Into<String>) -> NamedLiteral {
    NamedLiteral::negative(name)
}

impl std::ops::Not for NamedLiteral {
    type Output = NamedLiteral;

    fn not(self) -> NamedLiteral {
        NamedLiteral {
            name: self.name,
            negated: !self.negated,
        }
    }
}

impl std::fmt::Display for NamedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "~{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Whether a [`Constraint`] must hold, or may be broken at a cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConstraintWeight {
    /// The constraint has to be satisfied by every model.
    #[default]
    Hard,
    /// The constraint may be violated; doing so adds the weight to the cost of the model.
    ///
    /// A weight of 0 makes the constraint hard.
    Soft(u64),
}

impl ConstraintWeight {
    /// Converts the convention where a weight of 0 denotes a hard constraint.
    pub fn from_raw(weight: u64) -> ConstraintWeight {
        if weight == 0 {
            ConstraintWeight::Hard
        } else {
            ConstraintWeight::Soft(weight)
        }
    }

    /// The weight paid for breaking the constraint, or [`None`] if it cannot be broken.
    pub fn soft_weight(self) -> Option<u64> {
        match self {
            ConstraintWeight::Soft(weight) if weight != 0 => Some(weight),
            _ => None,
        }
    }

    pub fn is_hard(self) -> bool {
        self.soft_weight().is_none()
    }
}

impl From<u64> for ConstraintWeight {
    fn from(weight: u64) -> Self {
        ConstraintWeight::from_raw(weight)
    }
}

/// A constraint over named literals: `sum(coefficients[i] * literals[i]) >= at_least`.
///
/// Without explicit coefficients every literal counts for 1, which makes the constraint a clause
/// (when `at_least == 1`) or a cardinality constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    pub literals: Vec<NamedLiteral>,
    /// When present, must have exactly one coefficient per literal.
    pub coefficients: Option<Vec<i64>>,
    pub at_least: i64,
    pub weight: ConstraintWeight,
}

impl Constraint {
    pub fn new(
        literals: impl IntoIterator<Item = NamedLiteral>,
        coefficients: Option<Vec<i64>>,
        at_least: i64,
        weight: ConstraintWeight,
    ) -> Constraint {
        Constraint {
            literals: literals.into_iter().collect(),
            coefficients,
            at_least,
            weight,
        }
    }

    /// A clause which has to be satisfied.
    pub fn hard_clause(literals: impl IntoIterator<Item = NamedLiteral>) -> Constraint {
        Constraint::new(literals, None, 1, ConstraintWeight::Hard)
    }

    /// A clause which may be broken at a cost of 1.
    pub fn soft_clause(literals: impl IntoIterator<Item = NamedLiteral>) -> Constraint {
        Constraint::weighted_clause(literals, 1)
    }

    /// A clause which may be broken at a cost of `weight`.
    pub fn weighted_clause(
        literals: impl IntoIterator<Item = NamedLiteral>,
        weight: u64,
    ) -> Constraint {
        Constraint::new(literals, None, 1, ConstraintWeight::from_raw(weight))
    }

    /// At least `at_least` of the literals have to be true.
    pub fn hard_cardinality(
        literals: impl IntoIterator<Item = NamedLiteral>,
        at_least: i64,
    ) -> Constraint {
        Constraint::new(literals, None, at_least, ConstraintWeight::Hard)
    }

    /// At least `at_least` of the literals should be true; breaking it costs `weight`.
    ///
    /// See [`SoftCardinalityPolicy`](crate::options::SoftCardinalityPolicy) for how a threshold
    /// other than 1 is handled.
    pub fn soft_cardinality(
        literals: impl IntoIterator<Item = NamedLiteral>,
        at_least: i64,
        weight: u64,
    ) -> Constraint {
        Constraint::new(literals, None, at_least, ConstraintWeight::from_raw(weight))
    }

    /// A pseudo-Boolean constraint which has to be satisfied.
    pub fn hard_pseudo_boolean(
        literals: impl IntoIterator<Item = NamedLiteral>,
        coefficients: Vec<i64>,
        at_least: i64,
    ) -> Constraint {
        Constraint::new(literals, Some(coefficients), at_least, ConstraintWeight::Hard)
    }

    /// A pseudo-Boolean constraint which may be broken at a cost of `weight`.
    pub fn soft_pseudo_boolean(
        literals: impl IntoIterator<Item = NamedLiteral>,
        coefficients: Vec<i64>,
        at_least: i64,
        weight: u64,
    ) -> Constraint {
        Constraint::new(
            literals,
            Some(coefficients),
            at_least,
            ConstraintWeight::from_raw(weight),
        )
    }

    pub fn is_hard(&self) -> bool {
        self.weight.is_hard()
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lhs = match &self.coefficients {
            Some(coefficients) => self
                .literals
                .iter()
                .zip(coefficients)
                .map(|(literal, coefficient)| format!("{coefficient} {literal}"))
                .join(" + "),
            None => self.literals.iter().join(" + "),
        };

        match self.weight.soft_weight() {
            Some(weight) => write!(f, "[{weight}] {lhs} >= {}", self.at_least),
            None => write!(f, "{lhs} >= {}", self.at_least),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_weight_is_hard() {
        assert!(ConstraintWeight::from_raw(0).is_hard());
        assert!(ConstraintWeight::Soft(0).is_hard());
        assert_eq!(ConstraintWeight::Soft(0).soft_weight(), None);
        assert_eq!(ConstraintWeight::from(3).soft_weight(), Some(3));
    }

    #[test]
    fn soft_clause_costs_one() {
        let constraint = Constraint::soft_clause([var("a")]);

        assert_eq!(constraint.weight, ConstraintWeight::Soft(1));
        assert_eq!(constraint.at_least, 1);
        assert!(constraint.coefficients.is_none());
    }

    #[test]
    fn negating_a_literal_keeps_the_name() {
        let literal = !var("a");

        assert_eq!(literal, not("a"));
        assert_eq!(literal.name(), "a");
        assert!(literal.is_negated());
    }

    #[test]
    fn display_shows_weight_and_coefficients() {
        let clause = Constraint::weighted_clause([var("a"), not("b")], 5);
        assert_eq!(clause.to_string(), "[5] a + ~b >= 1");

        let linear = Constraint::hard_pseudo_boolean([var("a"), var("b")], vec![2, 3], 4);
        assert_eq!(linear.to_string(), "2 a + 3 b >= 4");
    }
}
