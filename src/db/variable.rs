/*!
A database of variable names.

Variables are internal u32 indices, and the database holds the external name of each, along
with the reverse map used when reading statements from strings.

The database enforces the two bounds on the number of variables in a context:
- the configured [variable ceiling](crate::config::Config::variable_ceiling), as the universe
  over n variables holds 3^n − 1 statements, and
- the hard cap [VARIABLE_MAX], beyond which the universe size overflows a usize.
*/

use std::collections::HashMap;

use crate::{
    config::Config,
    structures::variable::{Variable, VARIABLE_MAX},
    types::err::{self},
};

/// The variable database.
pub struct VariableDB {
    /// External names, indexed by variable.
    names: Vec<String>,

    /// The map from an external name to the internal variable.
    internal_map: HashMap<String, Variable>,

    /// The maximum number of variables the database accepts, from the configuration.
    ceiling: u32,
}

impl VariableDB {
    /// A new [VariableDB] with the ceiling taken from `config`.
    pub fn new(config: &Config) -> Self {
        VariableDB {
            names: Vec::default(),
            internal_map: HashMap::default(),
            ceiling: std::cmp::min(config.variable_ceiling, VARIABLE_MAX + 1),
        }
    }

    /// A count of variables in the database.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// A fresh variable named `name` --- on Ok the variable is part of the language of the
    /// context.
    pub fn fresh_variable(&mut self, name: &str) -> Result<Variable, err::VariableDBError> {
        if self.internal_map.contains_key(name) {
            return Err(err::VariableDBError::DuplicateName);
        }
        if self.names.len() >= self.ceiling as usize {
            return Err(err::VariableDBError::VariablesExhausted);
        }
        let variable = self.names.len() as Variable;
        self.names.push(name.to_owned());
        self.internal_map.insert(name.to_owned(), variable);
        Ok(variable)
    }

    /// The internal variable named `name`, if any.
    pub fn variable_of(&self, name: &str) -> Option<Variable> {
        self.internal_map.get(name).copied()
    }

    /// The external name of `variable`.
    pub fn name_of(&self, variable: Variable) -> &str {
        &self.names[variable as usize]
    }

    /// The external names, indexed by variable.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
