/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unit clause propagation](crate::procedures::propagation).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [pure literal elimination](crate::procedures::pure).
    pub const ELIMINATION: &str = "elimination";

    /// Logs related to the [search](crate::procedures::solve).
    pub const SEARCH: &str = "search";

    /// Logs related to [simplification](crate::structures::formula::Formula::assign) of a formula.
    pub const SIMPLIFICATION: &str = "simplification";

    /// Logs related to a valuation.
    pub const VALUATION: &str = "valuation";
}
