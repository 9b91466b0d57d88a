use std::num::NonZeroU32;

use crate::containers::StorageKey;

/// A boolean variable of the compiled pseudo-Boolean problem.
///
/// Variables are identified by a dense, strictly positive index which is handed out by the
/// [`VariableRegistry`](crate::encoding::VariableRegistry) in order of first reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    index: NonZeroU32,
}

impl Variable {
    /// Creates the variable with the given 1-based index, or [`None`] if the index is zero.
    pub fn new(index: u32) -> Option<Variable> {
        NonZeroU32::new(index).map(|index| Variable { index })
    }

    /// The 1-based index of the variable.
    pub fn id(self) -> u32 {
        self.index.get()
    }
}

impl StorageKey for Variable {
    fn index(&self) -> usize {
        self.index.get() as usize - 1
    }

    fn create_from_index(index: usize) -> Self {
        let index = u32::try_from(index + 1).expect("variable index does not fit in 32 bits");
        Variable {
            index: NonZeroU32::new(index).expect("index + 1 is never zero"),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.index)
    }
}
