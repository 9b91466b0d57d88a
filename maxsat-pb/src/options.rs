//! Options which configure how a [`Problem`](crate::Problem) is compiled and solved.

/// Options for constructing a [`Problem`](crate::Problem).
///
/// Construct with struct update syntax from the defaults:
/// ```
/// # use maxsat_pb::options::ProblemOptions;
/// # use maxsat_pb::options::SoftCardinalityPolicy;
/// let options = ProblemOptions {
///     soft_cardinality: SoftCardinalityPolicy::Reject,
///     ..Default::default()
/// };
/// assert!(!options.verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemOptions {
    /// Forwarded unchanged to the solver on every call to [`Problem::solve`](crate::Problem::solve).
    pub verbose: bool,
    /// What to do with soft constraints which the blocking literal cannot relax.
    pub soft_cardinality: SoftCardinalityPolicy,
}

/// Determines how soft constraints which their blocking literal cannot fully relax are compiled.
///
/// Without explicit coefficients the blocking literal is appended with an implicit coefficient of
/// 1, so for a threshold greater than 1 setting it to true does not by itself satisfy the
/// constraint. With explicit coefficients the blocking literal gets the threshold as coefficient,
/// which negative coefficients on the other literals can cancel out. Such a constraint is then
/// only partially relaxed by its blocking literal, and the reported broken constraints may not
/// reflect the intended model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SoftCardinalityPolicy {
    /// Compile the constraint with the blocking literal anyway and log a warning.
    #[default]
    Relax,
    /// Refuse to construct the problem.
    Reject,
}

impl std::fmt::Display for SoftCardinalityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoftCardinalityPolicy::Relax => write!(f, "relax"),
            SoftCardinalityPolicy::Reject => write!(f, "reject"),
        }
    }
}
