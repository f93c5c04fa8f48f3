/*!
Configuration of a context.

All configuration for a context is fixed when the context is created, and covers the two
resource bounds a caller may wish to impose:

- [variable_ceiling](Config::variable_ceiling) rejects variables beyond a count the universe
  can reasonably be built for --- the universe over n variables holds 3^n − 1 statements, and
  the refinement relation is built by comparing every pair.
- [iteration_ceiling](Config::iteration_ceiling) caps the fixed-point loop as an external
  safety valve.
  The loop always terminates without one (the known count is monotone and bounded), and a
  solve cut short still reports whatever was derived.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of variables a context accepts.
    ///
    /// Hard-capped at [VARIABLE_MAX](crate::structures::variable::VARIABLE_MAX) + 1, the
    /// largest count for which the universe size fits a usize, though memory is exhausted
    /// long before the cap.
    pub variable_ceiling: u32,

    /// An optional cap on fixed-point iterations.
    ///
    /// The worst case is one derivation per pass, so a converging solve never takes more
    /// passes than the universe holds statements.
    pub iteration_ceiling: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variable_ceiling: 12,
            iteration_ceiling: None,
        }
    }
}
