/*!
Tools for building a problem in a context.

# Basic methods

The library has three basic methods for building a problem:
- [fresh_variable](crate::context::Context::fresh_variable), to obtain a fresh variable.
- [add_known](crate::context::Context::add_known), to record a statement with a known
  probability.
- [set_query](crate::context::Context::set_query), to record the statement to solve for.

A problem may be added to a context by interweaving these methods, with
[statement_from_string](crate::context::Context::statement_from_string) as a convenience for
writing statements over named variables.
Alternatively, [read_problem](crate::context::Context::read_problem) reads the whole of a
problem from its textual representation.

Statements are screened as they are recorded: a contradictory statement --- one asserting a
variable together with its negation --- or a statement over a variable outside the language
of the context is rejected with an error rather than entering the known-value table.
A statement over an absent variable has no universe index, so screening here is what keeps
supplied knowledge from silently vanishing on a solve.

# Duplicate knowledge

The same statement supplied twice is recorded once, with the first value kept and later
values ignored --- [KnownOk::Duplicate] notes the case to the caller.

# Example

```rust
# use marten_prob::builder::KnownOk;
# use marten_prob::context::Context;
# use marten_prob::config::Config;
let mut ctx = Context::from_config(Config::default());

ctx.fresh_variable("rain").unwrap();
ctx.fresh_variable("wind").unwrap();

let rain = ctx.statement_from_string("rain").unwrap();
let both = ctx.statement_from_string("rain & wind").unwrap();

assert_eq!(ctx.add_known(rain.clone(), 0.2), Ok(KnownOk::Recorded));
assert_eq!(ctx.add_known(rain, 0.9), Ok(KnownOk::Duplicate));

assert!(ctx.set_query(both).is_ok());
```
*/

mod problem;
pub use problem::ProblemInfo;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{literal::Literal, statement::Statement, variable::Variable},
    types::err::{self, ErrorKind},
};

/// Ok results when recording a known statement to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KnownOk {
    /// The statement and value were recorded.
    Recorded,

    /// The statement was already recorded, and the supplied value was ignored (the first
    /// value wins).
    Duplicate,
}

impl Context {
    /// A fresh variable named `name` --- on Ok the variable is part of the language of the
    /// context.
    pub fn fresh_variable(&mut self, name: &str) -> Result<Variable, ErrorKind> {
        if self.state == ContextState::Solving {
            return Err(ErrorKind::InvalidState);
        }
        let variable = self.variable_db.fresh_variable(name)?;
        Ok(variable)
    }

    /// Records `statement` as known to hold with probability `value`.
    ///
    /// The statement is screened here: an empty or contradictory statement, or one over a
    /// variable the context does not hold, never enters the known-value table.
    /// Values are not required to lie in [0, 1] --- an out-of-range value propagates, and may
    /// surface a nonsensical result.
    pub fn add_known(&mut self, statement: Statement, value: f64) -> Result<KnownOk, ErrorKind> {
        if self.state == ContextState::Solving {
            return Err(ErrorKind::InvalidState);
        }
        screen_statement(&statement, self.variable_db.count())?;

        if self.knowns.iter().any(|(known, _)| *known == statement) {
            log::warn!(target: targets::PARSER, "Duplicate statement ignored: {statement}");
            return Ok(KnownOk::Duplicate);
        }

        self.knowns.push((statement, value));
        Ok(KnownOk::Recorded)
    }

    /// Records `statement` as the statement to solve for.
    ///
    /// Replaces any previously set query.
    pub fn set_query(&mut self, statement: Statement) -> Result<(), ErrorKind> {
        if self.state == ContextState::Solving {
            return Err(ErrorKind::InvalidState);
        }
        screen_statement(&statement, self.variable_db.count())?;

        self.query = Some(statement);
        Ok(())
    }

    /// The statement written in `string`, over the named variables of the context.
    ///
    /// A statement is written as literals joined by `&`, with `!` negating the variable it
    /// prefixes: `A & !B`.
    /// The `&`s are optional --- `A !B` reads the same.
    pub fn statement_from_string(&self, string: &str) -> Result<Statement, ErrorKind> {
        let mut literals = Vec::default();
        for token in string.split_whitespace() {
            match token {
                "&" => continue,
                _ => literals.push(self.literal_from_string(token)?),
            }
        }
        if literals.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Empty));
        }
        Ok(Statement::from_literals(literals))
    }

    /// The literal written in `token` --- a variable name, optionally prefixed by `!`.
    pub fn literal_from_string(&self, token: &str) -> Result<Literal, ErrorKind> {
        let (name, polarity) = match token.strip_prefix('!') {
            Some(name) => (name, false),
            None => (token, true),
        };
        if name.is_empty() {
            return Err(ErrorKind::from(err::ParseError::Negation));
        }
        match self.variable_db.variable_of(name) {
            Some(variable) => Ok(Literal::new(variable, polarity)),
            None => Err(ErrorKind::from(err::ParseError::UnknownVariable(
                name.to_owned(),
            ))),
        }
    }
}

/// Rejects statements which must not enter the known-value table.
///
/// Screened statements are valid and over the variables of the context, so each has an index
/// in the universe built over those variables.
fn screen_statement(statement: &Statement, variable_count: usize) -> Result<(), ErrorKind> {
    if statement.rank() == 0 {
        return Err(ErrorKind::from(err::BuildError::EmptyStatement));
    }
    if !statement.is_valid() {
        return Err(ErrorKind::from(err::BuildError::ContradictoryStatement));
    }
    if statement
        .literals()
        .any(|literal| literal.variable() as usize >= variable_count)
    {
        return Err(ErrorKind::from(err::BuildError::AbsentVariable));
    }
    Ok(())
}
