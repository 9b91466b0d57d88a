use std::num::NonZeroI32;

use super::Variable;
use crate::maxsat_assert_simple;

/// A [`Variable`] with a polarity (i.e. it is either the positive [`Variable`] or its negation).
///
/// The literal is stored in the DIMACS convention: a non-zero signed integer whose magnitude is
/// the index of the variable, and whose sign is the polarity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    code: NonZeroI32,
}

impl Literal {
    pub fn new(variable: Variable, is_positive: bool) -> Literal {
        maxsat_assert_simple!(
            variable.id() <= i32::MAX as u32,
            "variable {variable} cannot be encoded as a signed literal"
        );

        let magnitude = variable.id() as i32;
        let code = if is_positive { magnitude } else { -magnitude };

        Literal {
            code: NonZeroI32::new(code).expect("variable indices are non-zero"),
        }
    }

    pub fn positive(variable: Variable) -> Literal {
        Literal::new(variable, true)
    }

    pub fn negative(variable: Variable) -> Literal {
        Literal::new(variable, false)
    }

    /// Creates a literal from its signed DIMACS code, or [`None`] if the code is zero.
    pub fn from_dimacs(code: i32) -> Option<Literal> {
        // The magnitude of i32::MIN is not a valid variable index.
        if code == i32::MIN {
            return None;
        }

        NonZeroI32::new(code).map(|code| Literal { code })
    }

    pub fn to_dimacs(self) -> i32 {
        self.code.get()
    }

    pub fn is_positive(self) -> bool {
        self.code.get() > 0
    }

    pub fn is_negative(self) -> bool {
        !self.is_positive()
    }

    pub fn variable(self) -> Variable {
        Variable::new(self.code.get().unsigned_abs()).expect("the code of a literal is non-zero")
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal::new(self.variable(), !self.is_positive())
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "~{}", self.variable())
        } else {
            write!(f, "{}", self.variable())
        }
    }
}
