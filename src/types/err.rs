//! Error types used in the library.
//!
//! - Most of these are screened at the boundary of a context, before a solve.
//! - A statement failing the validity check is an error, while a query which is never deduced
//!   is not --- the latter is the [Unknown](crate::reports::Report::Unknown) report.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
    VariableDB(VariableDBError),

    /// An operation was requested in a state which does not support it.
    InvalidState,
}

/// Noted errors when recording a problem to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Some attempt was made to record an empty statement.
    EmptyStatement,

    /// A statement asserting a variable together with its negation.
    ContradictoryStatement,

    /// A statement over a variable which is not part of the context.
    AbsentVariable,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the header of a problem.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// A name was read which no variable of the context carries.
    UnknownVariable(String),

    /// A known-statement line without a value.
    MissingValue,

    /// The problem ended before a query statement was read.
    MissingQuery,

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in the variable database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariableDBError {
    /// The configured variable ceiling (or the hard cap on variables) would be exceeded.
    VariablesExhausted,

    /// A variable with the requested name already exists.
    DuplicateName,
}

impl From<VariableDBError> for ErrorKind {
    fn from(e: VariableDBError) -> Self {
        ErrorKind::VariableDB(e)
    }
}
