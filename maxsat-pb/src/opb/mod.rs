//! Rendering of a compiled problem in the OPB format of the pseudo-Boolean competitions.
//!
//! ```text
//! * #variable= 3 #constraint= 2
//! * x1 VAR_a
//! * x2 VAR_b
//! * x3 BLOCK_1
//! min: +5 x3 ;
//! +1 x1 +1 x2 >= 1 ;
//! +1 ~x1 +1 x3 >= 1 ;
//! ```
//!
//! Implicit unit coefficients are written out, negated literals are written as `~x<i>`, and the
//! name under which every variable was registered is given in a comment.
use std::fmt::Display;
use std::io::BufWriter;
use std::io::Write;

use itertools::Itertools;

use crate::encoding::Objective;
use crate::encoding::PseudoBooleanConstraint;
use crate::encoding::VariableRegistry;
use crate::solver::PseudoBooleanInstance;

/// [`Display`]s a compiled problem in the OPB format.
#[derive(Clone, Copy, Debug)]
pub struct OpbFormat<'a> {
    instance: PseudoBooleanInstance<'a>,
    registry: &'a VariableRegistry,
}

impl<'a> OpbFormat<'a> {
    pub fn new(
        instance: PseudoBooleanInstance<'a>,
        registry: &'a VariableRegistry,
    ) -> OpbFormat<'a> {
        OpbFormat { instance, registry }
    }

    /// Writes the problem to `writer`.
    ///
    /// This function wraps an IO operation, which is why it can fail with an IO error.
    pub fn write(&self, writer: impl Write) -> std::io::Result<()> {
        let mut writer = BufWriter::new(writer);
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl Display for OpbFormat<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "* #variable= {} #constraint= {}",
            self.instance.num_variables(),
            self.instance.constraints().len()
        )?;

        for (variable, name) in self.registry.iter() {
            writeln!(f, "* {variable} {name}")?;
        }

        write_objective(f, self.instance.objective())?;

        for constraint in self.instance.constraints() {
            write_constraint(f, constraint)?;
        }

        Ok(())
    }
}

fn write_objective(f: &mut std::fmt::Formatter<'_>, objective: &Objective) -> std::fmt::Result {
    if objective.is_empty() {
        return Ok(());
    }

    let terms = objective
        .terms()
        .map(|term| format!("+{} {}", term.weight, term.literal))
        .join(" ");
    writeln!(f, "min: {terms} ;")
}

fn write_constraint(
    f: &mut std::fmt::Formatter<'_>,
    constraint: &PseudoBooleanConstraint,
) -> std::fmt::Result {
    let terms = constraint
        .terms()
        .map(|(literal, coefficient)| format!("{coefficient:+} {literal}"))
        .join(" ");

    if terms.is_empty() {
        writeln!(f, ">= {} ;", constraint.at_least())
    } else {
        writeln!(f, "{terms} >= {} ;", constraint.at_least())
    }
}
