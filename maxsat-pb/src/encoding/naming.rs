//! The naming convention shared by the encoder and the decoder.
//!
//! Every registered variable is either a domain variable, registered as `VAR_<name>`, or the
//! blocking variable of a soft constraint, registered as `BLOCK_<constraint id>`. The prefixes
//! keep the two spaces disjoint, whatever names the user picks.

use crate::basic_types::ConstraintId;

pub const DOMAIN_PREFIX: &str = "VAR_";
pub const BLOCKING_PREFIX: &str = "BLOCK_";

pub fn domain_variable_name(name: &str) -> String {
    format!("{DOMAIN_PREFIX}{name}")
}

pub fn blocking_variable_name(constraint: ConstraintId) -> String {
    format!("{BLOCKING_PREFIX}{constraint}")
}

/// The role of a registered variable, recovered from its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableRole<'a> {
    /// A variable of the input problem, with the name the user gave it.
    Domain(&'a str),
    /// The blocking variable of the given constraint.
    Blocking(ConstraintId),
    /// The name has the blocking prefix, but the rest is not a constraint id.
    MalformedBlocking,
    /// The name follows neither convention.
    Unknown,
}

pub fn classify(registered_name: &str) -> VariableRole<'_> {
    if let Some(id) = registered_name.strip_prefix(BLOCKING_PREFIX) {
        return match id.parse::<usize>() {
            Ok(position) => VariableRole::Blocking(ConstraintId::new(position)),
            Err(_) => VariableRole::MalformedBlocking,
        };
    }

    match registered_name.strip_prefix(DOMAIN_PREFIX) {
        Some(name) => VariableRole::Domain(name),
        None => VariableRole::Unknown,
    }
}
