/*!
(The internal representation of) a variable.

Broadly, variables are things with a name to which assigning a (boolean) value is of interest.
- 'Internal' variables are used internal to a context, and are a contiguous block of u32s:
  [0..*m*) for some *m*.
- 'External' variables are strings of non-whitespace characters which do not begin with `!`
  (an exclamation mark). \
  Examples: `p`, `rain`, `coin_one`.

This representation allows variables to be used as the indices of a structure, e.g.
`names[v]`, without taking too much space.
The external representation of a variable is stored in the
[variable database](crate::db::variable).

# Notes
- A context supports at most [VARIABLE_MAX] + 1 variables: statements record the variables
  they involve in u64 bitmasks, and the universe over n variables holds 3^n − 1 statements,
  a count which must fit a usize.
  The size arithmetic binds before the mask width, and in practice the configured
  [variable ceiling](crate::config::Config::variable_ceiling) is far lower than either.
*/

/// A variable, aka. an 'atom'.
pub type Variable = u32;

/// The maximum instance of a variable.
///
/// The span masks relating statements hold 64 variables, though the universe size 3^n − 1
/// must fit a usize, and 3^41 does not.
pub const VARIABLE_MAX: Variable = 39;
