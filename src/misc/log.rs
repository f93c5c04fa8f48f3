/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [universe construction](crate::db::universe)
    pub const UNIVERSE: &str = "universe";

    /// Logs related to the [complement and partition passes](crate::procedures)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [reading problems](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to the [fixed-point loop](crate::procedures)
    pub const SOLVE: &str = "solve";
}
