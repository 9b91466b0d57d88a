/// Identifies an input constraint by its position in the sequence given to
/// [`Problem::new`](crate::Problem::new).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(usize);

impl ConstraintId {
    pub fn new(position: usize) -> ConstraintId {
        ConstraintId(position)
    }

    pub fn position(self) -> usize {
        self.0
    }
}

impl From<usize> for ConstraintId {
    fn from(position: usize) -> Self {
        ConstraintId(position)
    }
}

impl std::fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
