/*!
The context --- to which problems are added and within which solves take place, etc.

A context owns the configuration, the databases, and the state of a solve.
Variables and known statements are recorded through the [builder](crate::builder) methods,
the universe is built (once) when [solve](crate::procedures) is called, and the outcome is
read through [report](Context::report) or [value_of](Context::value_of).

# Example
```rust
# use marten_prob::context::Context;
# use marten_prob::config::Config;
# use marten_prob::reports::Report;
let mut ctx = Context::from_config(Config::default());

ctx.fresh_variable("A").unwrap();

let a = ctx.statement_from_string("A").unwrap();
let not_a = ctx.statement_from_string("!A").unwrap();

ctx.add_known(a, 0.7).unwrap();
ctx.set_query(not_a.clone()).unwrap();

assert!(ctx.solve().is_ok());
match ctx.report() {
    Report::Value(v) => assert!((v - 0.3).abs() < 1e-12),
    Report::Unknown => panic!("derivable by complement"),
}
assert_eq!(ctx.value_of(&not_a), ctx.report().into());
```
*/

pub mod callbacks;
pub use callbacks::CallbackDeduction;
mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{known::KnownDB, universe::UniverseDB, variable::VariableDB},
    reports::Report,
    structures::statement::Statement,
};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The known-value table is closed under the deduction rules.
    Fixed,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Fixed => write!(f, "Fixed"),
        }
    }
}

/// A context, built from a configuration.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The variable database.
    /// See [db::variable](crate::db::variable) for details.
    pub variable_db: VariableDB,

    /// The universe database, built on the first solve.
    /// See [db::universe](crate::db::universe) for details.
    pub universe_db: UniverseDB,

    /// The known-value database.
    /// See [db::known](crate::db::known) for details.
    pub known_db: KnownDB,

    /// The status of the context.
    pub state: ContextState,

    /// The (statement, value) pairs supplied as input, seeded into the known-value database
    /// on a solve.
    pub(crate) knowns: Vec<(Statement, f64)>,

    /// The query statement, if one has been set.
    pub(crate) query: Option<Statement>,

    /// A callback receiving each deduction as it is made.
    pub(crate) callback_deduction: Option<Box<CallbackDeduction>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            variable_db: VariableDB::new(&config),
            universe_db: UniverseDB::default(),
            known_db: KnownDB::default(),

            config,

            counters: Counters::default(),
            state: ContextState::Input,

            knowns: Vec::default(),
            query: None,

            callback_deduction: None,
        }
    }

    /// A report on the query statement, with respect to the current known-value table.
    ///
    /// [Report::Unknown] until a solve has reached a fixed point with a query set and valued.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Fixed => match &self.query {
                Some(query) => match self.value_of(query) {
                    Some(value) => Report::Value(value),
                    None => Report::Unknown,
                },
                None => Report::Unknown,
            },
            _ => Report::Unknown,
        }
    }

    /// The value of `statement`, if the statement belongs to the universe and a value is
    /// known.
    pub fn value_of(&self, statement: &Statement) -> Option<f64> {
        let index = self.universe_db.index_of(statement)?;
        self.known_db.value_of(index)
    }

    /// The query statement, if one has been set.
    pub fn query(&self) -> Option<&Statement> {
        self.query.as_ref()
    }

    /// An iterator over every universe statement together with its value, if known.
    ///
    /// Empty before the first solve, as the universe is built on demand.
    pub fn known_values(&self) -> impl Iterator<Item = (&Statement, Option<f64>)> {
        self.universe_db
            .indices()
            .map(|index| index as crate::db::StatementIndex)
            .map(|index| {
                (
                    self.universe_db.statement(index),
                    self.known_db.value_of(index),
                )
            })
    }
}

impl From<Report> for Option<f64> {
    fn from(report: Report) -> Self {
        match report {
            Report::Value(value) => Some(value),
            Report::Unknown => None,
        }
    }
}
