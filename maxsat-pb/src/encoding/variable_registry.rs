use crate::basic_types::Variable;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::maxsat_assert_eq_simple;

/// Assigns dense and stable [`Variable`]s to names.
///
/// Variables are allocated in order of first reference, starting at index 1. The decoder relies on
/// this order to walk the assignment returned by the solver.
#[derive(Clone, Debug, Default)]
pub struct VariableRegistry {
    names: KeyedVec<Variable, String>,
    variables: HashMap<String, Variable>,
}

impl VariableRegistry {
    /// Returns the variable for `name`, allocating the next index if the name was not seen
    /// before.
    pub fn register(&mut self, name: &str) -> Variable {
        if let Some(&variable) = self.variables.get(name) {
            return variable;
        }

        let variable = self.names.push(name.to_owned());
        let _ = self.variables.insert(name.to_owned(), variable);

        maxsat_assert_eq_simple!(variable.id() as usize, self.names.len());

        variable
    }

    /// Returns the variable of `name` without allocating one.
    pub fn lookup(&self, name: &str) -> Option<Variable> {
        self.variables.get(name).copied()
    }

    /// The name `variable` was registered under, or [`None`] if it was not handed out by this
    /// registry.
    pub fn name_of(&self, variable: Variable) -> Option<&str> {
        self.names.get(variable).map(String::as_str)
    }

    pub fn num_variables(&self) -> usize {
        self.names.len()
    }

    /// Iterates over the registered variables in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &str)> + '_ {
        self.names
            .iter_with_keys()
            .map(|(variable, name)| (variable, name.as_str()))
    }
}
