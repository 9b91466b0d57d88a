use crate::containers::HashMap;

/// An assignment of truth values to the named domain variables of a problem.
///
/// A model is a snapshot: it owns its data and does not change when the problem it came from is
/// modified or solved again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    values: HashMap<String, bool>,
}

impl Model {
    /// The value of the variable `name`, or [`None`] if it does not occur in the problem.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.values
            .iter()
            .map(|(name, &value)| (name.as_str(), value))
    }

    /// The names of the variables which are true, sorted.
    pub fn true_variables(&self) -> Vec<&str> {
        let mut names = self
            .iter()
            .filter_map(|(name, value)| value.then_some(name))
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub(crate) fn insert(&mut self, name: String, value: bool) {
        let _ = self.values.insert(name, value);
    }
}

impl FromIterator<(String, bool)> for Model {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Model {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<&str> for Model {
    type Output = bool;

    fn index(&self, name: &str) -> &Self::Output {
        &self.values[name]
    }
}
