//! Databases for holding information relevant to a solve.
//!
//! - [The variable database](crate::db::variable)
//!   + The external names of variables, and the map from names to internal indices.
//! - [The universe database](crate::db::universe)
//!   + The arena of every valid statement over the variables of a context, together with the
//!     refinement relation between statements and the partition groups the relation induces.
//!     Built once, read-only thereafter.
//! - [The known-value database](crate::db::known)
//!   + The values associated with universe statements, supplied or derived.
//!     The single mutable structure of a solve: entries are added and never overwritten.

pub mod known;
pub mod universe;
pub mod variable;

/// The index of a statement in the universe arena.
///
/// Statements are compared, grouped, and valued through indices, so the cost of identifying a
/// statement by content is paid once, when the universe is built.
pub type StatementIndex = u32;
