//! Structures, such as variables, literals, and statements.
//!
//! As a rough guide:
//! - A [variable](crate::structures::variable) is a thing to which a (boolean) value may be
//!   assigned, represented internally as an index.
//! - A [literal](crate::structures::literal) is a variable paired with a polarity --- the
//!   variable, asserted or negated.
//! - A [statement](crate::structures::statement) is a duplicate-free collection of literals,
//!   interpreted as the conjunction of those literals, and so as a joint-probability event.

pub mod literal;
pub mod statement;
pub mod variable;
