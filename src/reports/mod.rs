/*!
Reports from a context.

- [Report] is the terminal outcome of a solve with respect to the query statement.
  An unknown query is a first-class outcome, not an error: the two rules simply never reached
  the statement.
- [Deduction] records a single derivation, and is passed to the
  [deduction callback](crate::context::Context::set_callback_deduction) as it happens.
  Each record carries the statements involved and the derived value, so a receiver may
  assemble a complete audit log of a solve.
*/

use crate::structures::statement::Statement;

/// The outcome of a solve, with respect to the query statement.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Report {
    /// The query statement has the given probability.
    Value(f64),

    /// The query statement was never deduced --- not enough information.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Unknown => write!(f, "not enough information"),
        }
    }
}

/// A single derivation made during a solve.
#[derive(Clone, Debug, PartialEq)]
pub enum Deduction {
    /// The complement of a known single-literal statement was valued at one minus the known
    /// value.
    Complement {
        /// The known singleton.
        known: Statement,

        /// The singleton derived from it.
        derived: Statement,

        /// The derived value.
        value: f64,
    },

    /// A parent and all but one member of a partition group were known, and the missing
    /// member was valued at the parent minus the sum of its siblings.
    Difference {
        /// The known parent.
        parent: Statement,

        /// The members of the group, the derived statement included.
        members: Vec<Statement>,

        /// The statement derived.
        derived: Statement,

        /// The derived value.
        value: f64,
    },

    /// Every member of a partition group was known, and the unknown parent was valued at
    /// their sum.
    Union {
        /// The parent derived.
        parent: Statement,

        /// The members of the group.
        members: Vec<Statement>,

        /// The derived value.
        value: f64,
    },
}

impl Deduction {
    /// The statement the deduction valued.
    pub fn derived(&self) -> &Statement {
        match self {
            Self::Complement { derived, .. } => derived,
            Self::Difference { derived, .. } => derived,
            Self::Union { parent, .. } => parent,
        }
    }

    /// The value the deduction derived.
    pub fn value(&self) -> f64 {
        match self {
            Self::Complement { value, .. } => *value,
            Self::Difference { value, .. } => *value,
            Self::Union { value, .. } => *value,
        }
    }

    /// The external representation of the deduction, given the external names of variables.
    pub fn as_string(&self, names: &[String]) -> String {
        match self {
            Self::Complement {
                known,
                derived,
                value,
            } => {
                format!(
                    "Solved by complement: {} = {value} (from {})",
                    derived.as_string(names),
                    known.as_string(names),
                )
            }

            Self::Difference {
                parent,
                derived,
                value,
                ..
            } => {
                format!(
                    "Solved by difference: {} = {value} (from {})",
                    derived.as_string(names),
                    parent.as_string(names),
                )
            }

            Self::Union {
                parent,
                members,
                value,
            } => {
                format!(
                    "Solved by union: {} = {value} (sum of {} members)",
                    parent.as_string(names),
                    members.len(),
                )
            }
        }
    }
}
