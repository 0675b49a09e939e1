/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tuning weights or configuration, and for fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [atomic similarity](crate::atomic) and the memo cache.
    pub const ATOMIC: &str = "atomic";

    /// Logs related to [literal scores](crate::procedures::literal)
    pub const LITERAL: &str = "literal";

    /// Logs related to [clause scores](crate::procedures::clause)
    pub const CLAUSE: &str = "clause";

    /// Logs related to the [correspondence](crate::procedures::correspondence) of clauses
    pub const CORRESPONDENCE: &str = "correspondence";

    /// Logs related to [formula scores](crate::procedures::formula)
    pub const FORMULA: &str = "formula";

    /// Logs related to [reading formulas](crate::builder)
    pub const BUILDER: &str = "builder";
}
